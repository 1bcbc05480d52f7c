//! The two-phase signup form and its submission.

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use thiserror::Error;

use crate::client::FlockApi;
use crate::dto::SignupRequest;
use crate::error::ApiError;
use crate::error::StorageError;
use crate::session::TokenStore;
use crate::username::UsernameStatus;
use crate::username::UsernameValidity;
use crate::username::REQUIRED_MESSAGE;

pub const SUCCESS_MESSAGE: &str = "Account created successfully!";
pub const INVALID_USERNAME_MESSAGE: &str = "Please Enter Valid Username";
pub const INVALID_EMAIL_MESSAGE: &str = "Please Enter a Valid Email";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum SignupPhase {
    /// Only the username field is shown.
    #[default]
    ChooseUsername,
    /// Full name, email and password, unlocked by a valid username.
    Details,
}

/// What the Continue button does.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContinueAction {
    ShowDetails,
    Submit,
    RejectUsername,
}

pub fn on_continue(phase: SignupPhase, validity: UsernameValidity) -> ContinueAction {
    match (validity, phase) {
        (UsernameValidity::Valid, SignupPhase::ChooseUsername) => ContinueAction::ShowDetails,
        (UsernameValidity::Valid, SignupPhase::Details) => ContinueAction::Submit,
        _ => ContinueAction::RejectUsername,
    }
}

/// Applies a Continue press to the username field.
///
/// A rejected press marks the field invalid with the required message; the
/// caller still owns the error toast.
pub fn press_continue(phase: SignupPhase, status: &mut UsernameStatus) -> ContinueAction {
    let action = on_continue(phase, status.validity);
    if action == ContinueAction::RejectUsername {
        *status = UsernameStatus::invalid(REQUIRED_MESSAGE);
    }
    action
}

/// Loose `local@domain.tld` shape, roughly what a browser's `type="email"`
/// field accepts.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SignupDraft {
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub password: String,
}

impl SignupDraft {
    /// Labels of the required detail fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Full Name", self.fullname.trim()),
            ("Email", self.email.trim()),
            ("Password", self.password.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    fn to_request(&self) -> SignupRequest {
        SignupRequest {
            fullname: self.fullname.trim().to_string(),
            username: self.username.clone(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SignupError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("email address is malformed")]
    InvalidEmail,

    #[error("email is already registered")]
    EmailTaken,

    #[error("signup response carried no token")]
    MissingToken,

    #[error("a signup is already in progress")]
    Busy,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SignupError {
    /// Text for the error toast.
    pub fn user_message(&self) -> String {
        match self {
            SignupError::MissingFields(fields) => format!("Please fill in: {}", fields.join(", ")),
            SignupError::InvalidEmail => INVALID_EMAIL_MESSAGE.to_string(),
            SignupError::EmailTaken => "Email already exists, try Login instead".to_string(),
            SignupError::Busy => "Signup is already in progress".to_string(),
            SignupError::MissingToken | SignupError::Api(_) | SignupError::Storage(_) => {
                "Signup failed. Please try again.".to_string()
            }
        }
    }
}

/// Submits signup drafts, one at a time.
pub struct SignupWorkflow<A, S> {
    api: A,
    store: S,
    busy: Arc<AtomicBool>,
}

/// Clears the busy flag however the submission ends.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<A: FlockApi, S: TokenStore> SignupWorkflow<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Creates the account and stores the issued token.
    ///
    /// The email is checked first; a registered email never reaches the
    /// signup endpoint. On success the stored token is returned.
    pub async fn submit(&self, draft: &SignupDraft) -> Result<String, SignupError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(SignupError::Busy);
        }
        let _guard = BusyGuard(&self.busy);

        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(SignupError::MissingFields(missing));
        }

        let request = draft.to_request();
        if !is_plausible_email(&request.email) {
            return Err(SignupError::InvalidEmail);
        }
        if self.api.email_exists(&request.email).await? {
            warn!("signup refused, email already registered");
            return Err(SignupError::EmailTaken);
        }

        let token = self
            .api
            .signup(&request)
            .await?
            .ok_or(SignupError::MissingToken)?;

        self.store.save(&token)?;
        info!("account created for {}", request.username);
        Ok(token)
    }
}
