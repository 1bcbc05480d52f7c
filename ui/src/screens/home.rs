// File: src/screens/home.rs
use api::session::TokenStore;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::hooks::use_toaster::use_toaster;
use crate::Screen;

#[component]
pub fn HomeScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut toaster = use_toaster();
    let mut list_id = use_signal(String::new);

    let current_user = app_state_mut.current_user.read().clone();

    let mut open_list = move || {
        let id = list_id.read().trim().to_string();
        if id.is_empty() {
            toaster.error("Please Enter a Wishlist Id");
            return;
        }
        active_screen.set(Screen::Wishlist(id));
    };

    rsx! {
        Card {
            match current_user {
                Some(name) => rsx! {
                    h2 { "Hi, {name}!" }
                    p { "Your page lives at flockshop.in/{name}" }
                },
                None => rsx! {
                    h2 { "Welcome to FlockShop" }
                    p { "Browse a shared wishlist or create an account to start your own." }
                },
            }

            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    open_list();
                },
                label { "Open a wishlist" }
                div {
                    role: "group",
                    Input {
                        name: "list_id",
                        placeholder: "Wishlist id",
                        value: "{list_id}",
                        on_input: move |evt: FormEvent| list_id.set(evt.value()),
                    }
                    Button {
                        on_click: move |_| open_list(),
                        "Open"
                    }
                }
            }

            footer {
                if app_state_mut.current_user.read().is_some() {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| {
                            if let Err(e) = app_state.tokens.clear() {
                                toaster.error(format!("Could not sign out: {e}"));
                                return;
                            }
                            app_state_mut.refresh_user(&app_state.tokens);
                        },
                        "Sign Out"
                    }
                } else {
                    Button {
                        on_click: move |_| active_screen.set(Screen::Signup),
                        "Create an Account"
                    }
                }
            }
        }
    }
}
