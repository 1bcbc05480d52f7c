//=============================================================================
// File: src/screens/signup.rs
//=============================================================================
use std::rc::Rc;

use api::signup::press_continue;
use api::signup::ContinueAction;
use api::signup::SignupDraft;
use api::signup::SignupPhase;
use api::signup::SignupWorkflow;
use api::signup::INVALID_USERNAME_MESSAGE;
use api::signup::SUCCESS_MESSAGE;
use api::username::normalize_input;
use api::username::UsernameStatus;
use api::username::UsernameValidity;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::components::pico::Spinner;
use crate::hooks::use_toaster::use_toaster;
use crate::hooks::use_username_check::use_username_check;
use crate::Screen;

#[component]
fn UsernameIndicator(status: UsernameStatus) -> Element {
    if status.checking {
        return rsx! { Spinner {} };
    }
    match status.validity {
        UsernameValidity::Valid => rsx! { span { style: "color: var(--pico-ins-color);", "✔" } },
        UsernameValidity::Invalid => rsx! { span { style: "color: var(--pico-del-color);", "✖" } },
        UsernameValidity::Unknown => rsx! {},
    }
}

#[component]
fn TermsNotice() -> Element {
    rsx! {
        small {
            style: "display: block; color: var(--pico-muted-color);",
            "By continuing, you agree to the "
            a { href: "#", "terms of service" }
            " and "
            a { href: "#", "privacy policy." }
        }
    }
}

#[component]
pub fn SignupScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut toaster = use_toaster();

    let mut phase = use_signal(SignupPhase::default);
    let mut username = use_signal(String::new);
    let mut fullname = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);

    let mut username_status = use_username_check(username);

    let workflow = use_hook(|| {
        Rc::new(SignupWorkflow::new(
            app_state.api.clone(),
            app_state.tokens.clone(),
        ))
    });

    let submit = use_callback(move |()| {
        if is_submitting() {
            return;
        }
        let draft = SignupDraft {
            username: username(),
            fullname: fullname(),
            email: email(),
            password: password(),
        };
        let workflow = workflow.clone();
        let tokens = app_state.tokens.clone();
        is_submitting.set(true);

        spawn(async move {
            let result = workflow.submit(&draft).await;
            is_submitting.set(false);
            match result {
                Ok(_) => {
                    toaster.success(SUCCESS_MESSAGE);
                    app_state_mut.refresh_user(&tokens);
                    active_screen.set(Screen::Home);
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("signup failed: {}", e);
                    toaster.error(e.user_message());
                }
            }
        });
    });

    let status = username_status();
    let username_invalid = match status.validity {
        UsernameValidity::Unknown => None,
        UsernameValidity::Valid => Some(false),
        UsernameValidity::Invalid => Some(true),
    };
    let button_label = if phase().is_choose_username() { "Continue" } else { "Sign Up" };

    rsx! {
        Card {
            if phase().is_choose_username() {
                div {
                    h2 { style: "margin-bottom: 0.25rem;", "Create your account" }
                    p { style: "color: var(--pico-muted-color);", "Choose a username for your page." }
                    div {
                        role: "group",
                        span {
                            style: "align-self: center; padding: 0 0.5rem; white-space: nowrap;",
                            "flockshop.in/"
                        }
                        Input {
                            name: "username",
                            placeholder: "username",
                            value: "{username}",
                            invalid: username_invalid,
                            on_input: move |evt: FormEvent| username.set(normalize_input(&evt.value())),
                        }
                        span {
                            style: "align-self: center; padding: 0 0.75rem; min-width: 2.5rem;",
                            UsernameIndicator { status: status.clone() }
                        }
                    }
                    if let Some(message) = &status.message {
                        small { style: "color: var(--pico-del-color);", "{message}" }
                    }
                }
            } else {
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit.call(());
                    },
                    h2 { "Welcome to FlockShop!" }
                    p { style: "color: var(--pico-muted-color);", "flockshop.in/{username}" }
                    Input {
                        name: "fullname",
                        placeholder: "Full Name*",
                        value: "{fullname}",
                        required: true,
                        on_input: move |evt: FormEvent| fullname.set(evt.value()),
                    }
                    Input {
                        name: "email",
                        input_type: "email",
                        placeholder: "Email*",
                        value: "{email}",
                        required: true,
                        on_input: move |evt: FormEvent| email.set(evt.value()),
                    }
                    Input {
                        name: "password",
                        input_type: "password",
                        placeholder: "Password*",
                        value: "{password}",
                        required: true,
                        on_input: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
            }

            footer {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 1rem;",
                TermsNotice {}
                Button {
                    busy: is_submitting(),
                    on_click: move |_| {
                        let current_phase = phase();
                        let action = username_status.with_mut(|s| press_continue(current_phase, s));
                        match action {
                            ContinueAction::ShowDetails => phase.set(SignupPhase::Details),
                            ContinueAction::Submit => submit.call(()),
                            ContinueAction::RejectUsername => toaster.error(INVALID_USERNAME_MESSAGE),
                        }
                    },
                    "{button_label}"
                }
            }
        }
    }
}
