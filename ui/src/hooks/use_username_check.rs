use std::rc::Rc;

use api::username::CheckOutcome;
use api::username::UsernameStatus;
use api::username::UsernameValidator;
use api::HttpApi;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::compat::CompatTimer;
use crate::hooks::use_toaster::use_toaster;

const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error occurred";

/// Re-validates `username` every time it changes.
///
/// Returns the status signal so the screen can also force a state, e.g.
/// when Continue is pressed before the name is valid.
pub fn use_username_check(username: Signal<String>) -> Signal<UsernameStatus> {
    let app_state = use_context::<AppState>();
    let mut toaster = use_toaster();
    let mut status = use_signal(UsernameStatus::default);

    let validator: Rc<UsernameValidator<HttpApi, CompatTimer>> = use_hook(|| {
        Rc::new(UsernameValidator::new(
            app_state.api.clone(),
            CompatTimer,
            app_state.config.username_check_delay(),
        ))
    });

    let effect_validator = validator.clone();
    use_effect(move || {
        let candidate = username();
        let validator = effect_validator.clone();

        status.set(if candidate.is_empty() {
            UsernameStatus::default()
        } else {
            UsernameStatus::pending()
        });

        spawn(async move {
            match validator.check(&candidate).await {
                CheckOutcome::Resolved(resolved) => status.set(resolved),
                CheckOutcome::Superseded => {}
                CheckOutcome::Failed(e) => {
                    dioxus_logger::tracing::warn!("username check for {} failed: {}", candidate, e);
                    toaster.error(UNEXPECTED_ERROR_MESSAGE);
                    status.set(UsernameStatus::unresolved());
                }
            }
        });
    });

    use_drop(move || validator.cancel());

    status
}
