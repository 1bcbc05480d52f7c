//! Test doubles for the API seam.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use crate::client::FlockApi;
use crate::dto::SignupRequest;
use crate::dto::Wishlist;
use crate::error::ApiError;
use crate::username::Timer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    UsernameExists(String),
    EmailExists(String),
    Signup(SignupRequest),
    RemoveProduct {
        list_id: String,
        product_id: String,
        bearer: Option<String>,
    },
    Wishlist(String),
}

#[derive(Default)]
struct FakeState {
    calls: Vec<Call>,
    taken_usernames: HashSet<String>,
    taken_emails: HashSet<String>,
    issued_token: Option<String>,
    wishlist: Wishlist,
    latency: Duration,
    failing: bool,
}

/// Records every call and answers from canned data.
#[derive(Clone, Default)]
pub struct FakeApi(Arc<Mutex<FakeState>>);

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.state().issued_token = Some("issued.token.value".to_string());
        api
    }

    fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.0.lock().unwrap()
    }

    pub fn with_taken_username(self, username: &str) -> Self {
        self.state().taken_usernames.insert(username.to_string());
        self
    }

    pub fn with_taken_email(self, email: &str) -> Self {
        self.state().taken_emails.insert(email.to_string());
        self
    }

    pub fn with_issued_token(self, token: Option<&str>) -> Self {
        self.state().issued_token = token.map(str::to_string);
        self
    }

    pub fn with_wishlist(self, wishlist: Wishlist) -> Self {
        self.state().wishlist = wishlist;
        self
    }

    pub fn with_latency(self, latency: Duration) -> Self {
        self.state().latency = latency;
        self
    }

    /// Every call fails as if the server were unreachable.
    pub fn failing(self) -> Self {
        self.state().failing = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    /// Records the call, waits out the latency, then reports failure mode.
    async fn record(&self, call: Call) -> Result<(), ApiError> {
        let (latency, failing) = {
            let mut state = self.state();
            state.calls.push(call);
            (state.latency, state.failing)
        };
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        if failing {
            return Err(ApiError::Status {
                endpoint: "/fake".to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

impl FlockApi for FakeApi {
    async fn username_exists(&self, username: &str) -> Result<bool, ApiError> {
        self.record(Call::UsernameExists(username.to_string())).await?;
        Ok(self.state().taken_usernames.contains(username))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, ApiError> {
        self.record(Call::EmailExists(email.to_string())).await?;
        Ok(self.state().taken_emails.contains(email))
    }

    async fn signup(&self, request: &SignupRequest) -> Result<Option<String>, ApiError> {
        self.record(Call::Signup(request.clone())).await?;
        Ok(self.state().issued_token.clone())
    }

    async fn remove_product(
        &self,
        list_id: &str,
        product_id: &str,
        bearer: Option<&str>,
    ) -> Result<(), ApiError> {
        self.record(Call::RemoveProduct {
            list_id: list_id.to_string(),
            product_id: product_id.to_string(),
            bearer: bearer.map(str::to_string),
        })
        .await
    }

    async fn wishlist(&self, list_id: &str) -> Result<Wishlist, ApiError> {
        self.record(Call::Wishlist(list_id.to_string())).await?;
        Ok(self.state().wishlist.clone())
    }
}

pub struct TokioTimer;

impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
