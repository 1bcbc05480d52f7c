//! Defines the mutable, reactive state for the application's UI.

use api::session::current_username;
use api::session::TokenStore;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Separate from the immutable `AppState`, which holds the API client and
/// token store.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Username decoded from the stored token. `None` when signed out or the
    /// token is unreadable. Display only; the server does the real checks.
    pub current_user: Signal<Option<String>>,
}

impl AppStateMut {
    /// Re-reads the token slot after it was written or cleared.
    pub fn refresh_user(&mut self, tokens: &impl TokenStore) {
        self.current_user.set(current_username(tokens));
    }
}
