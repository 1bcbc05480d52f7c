//! Username availability checking.
//!
//! Each keystroke starts a new check. A check waits out the debounce delay,
//! then either rejects the candidate on format alone or asks the server
//! whether the name is taken. Checks are stamped with a generation number and
//! only the newest generation may publish its result, so a slow response for
//! an old value can never overwrite the state of a newer one.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use dioxus_logger::tracing::debug;

use crate::client::FlockApi;
use crate::error::ApiError;

pub const USERNAME_MIN_LEN: usize = 5;
pub const USERNAME_MAX_LEN: usize = 20;

pub const FORMAT_MESSAGE: &str = "Please enter a username between 5 and 20 characters";
pub const TAKEN_MESSAGE: &str = "Username Already Exists";
pub const REQUIRED_MESSAGE: &str = "Please Enter Username";

/// Usernames are lowercased as they are typed.
pub fn normalize_input(raw: &str) -> String {
    raw.to_lowercase()
}

/// `^[a-z0-9]{5,20}$`
pub fn is_well_formed(candidate: &str) -> bool {
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&candidate.len())
        && candidate
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum UsernameValidity {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

/// What the username field currently shows.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct UsernameStatus {
    pub validity: UsernameValidity,
    pub message: Option<String>,
    /// A check is waiting on the debounce timer or the server.
    pub checking: bool,
}

impl UsernameStatus {
    pub fn pending() -> Self {
        Self {
            checking: true,
            ..Self::default()
        }
    }

    pub fn valid() -> Self {
        Self {
            validity: UsernameValidity::Valid,
            ..Self::default()
        }
    }

    pub fn invalid(message: &str) -> Self {
        Self {
            validity: UsernameValidity::Invalid,
            message: Some(message.to_string()),
            checking: false,
        }
    }

    /// State after a check failed in transport: spinner off, validity unresolved.
    pub fn unresolved() -> Self {
        Self::default()
    }
}

/// Stamp identifying one check.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Generation(u64);

/// Hands out generations and remembers the newest.
#[derive(Clone, Debug, Default)]
pub struct Sequencer(Arc<AtomicU64>);

impl Sequencer {
    pub fn next(&self) -> Generation {
        Generation(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.0.load(Ordering::SeqCst) == generation.0
    }

    /// Makes every outstanding generation stale.
    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Async sleep, provided by whichever runtime hosts the UI.
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug)]
pub enum CheckOutcome {
    /// The check finished and is the newest; publish this status.
    Resolved(UsernameStatus),
    /// A newer check started meanwhile; drop this one.
    Superseded,
    /// The availability request failed.
    Failed(ApiError),
}

pub struct UsernameValidator<A, T> {
    api: A,
    timer: T,
    delay: Duration,
    sequencer: Sequencer,
}

impl<A: FlockApi, T: Timer> UsernameValidator<A, T> {
    pub fn new(api: A, timer: T, delay: Duration) -> Self {
        Self {
            api,
            timer,
            delay,
            sequencer: Sequencer::default(),
        }
    }

    /// Checks `candidate`, superseding any check already in progress.
    pub async fn check(&self, candidate: &str) -> CheckOutcome {
        let generation = self.sequencer.next();

        if candidate.is_empty() {
            return CheckOutcome::Resolved(UsernameStatus::default());
        }

        self.timer.sleep(self.delay).await;
        if !self.sequencer.is_current(generation) {
            return CheckOutcome::Superseded;
        }

        if !is_well_formed(candidate) {
            return CheckOutcome::Resolved(UsernameStatus::invalid(FORMAT_MESSAGE));
        }

        let result = self.api.username_exists(candidate).await;
        if !self.sequencer.is_current(generation) {
            debug!("discarding stale availability result for {}", candidate);
            return CheckOutcome::Superseded;
        }

        match result {
            Ok(true) => CheckOutcome::Resolved(UsernameStatus::invalid(TAKEN_MESSAGE)),
            Ok(false) => CheckOutcome::Resolved(UsernameStatus::valid()),
            Err(e) => CheckOutcome::Failed(e),
        }
    }

    /// Drops whatever check is in flight, e.g. when the screen goes away.
    pub fn cancel(&self) {
        self.sequencer.invalidate();
    }
}
