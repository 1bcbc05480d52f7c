// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use api::session::current_username;
use api::ApiConfig;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use components::toast_stack::ToastStack;
use hooks::use_toaster::use_toaster_provider;
use screens::home::HomeScreen;
use screens::signup::SignupScreen;
use screens::wishlist::WishlistScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Debug)]
enum Screen {
    Signup,
    Home,
    /// A shared wishlist, by id.
    Wishlist(String),
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Signup => "Sign Up",
            Screen::Home => "Home",
            Screen::Wishlist(_) => "Wishlist",
        }
    }
}

/// Screens reachable from the navigation bar.
const NAV_SCREENS: [Screen; 2] = [Screen::Home, Screen::Signup];

/// The navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in NAV_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: if *active_screen.read() == screen { "active-tab" } else { "" },
                            "aria-current": if *active_screen.read() == screen { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen.clone());
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        border-bottom: 3px solid var(--pico-primary);
    }
    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- WISHLIST --- */
    .product-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
        gap: 1rem;
    }
    .product-card { margin: 0; }
    .product-image {
        height: 200px;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        border-radius: var(--pico-border-radius);
        background-color: var(--pico-muted-border-color);
    }
    .product-image img { max-height: 100%; object-fit: contain; }
    .no-image { color: var(--pico-muted-color); font-size: 0.9rem; }
    .reaction-menu {
        position: absolute;
        right: 0;
        top: 110%;
        display: flex;
        gap: 0.25rem;
        padding: 0.25rem;
        z-index: 10;
        border-radius: var(--pico-border-radius);
        background-color: var(--pico-card-background-color);
        box-shadow: var(--pico-card-box-shadow);
    }
    .reaction-menu button { padding: 0.25rem 0.5rem; margin: 0; }

    /* --- TOASTS --- */
    .toast-stack {
        position: fixed;
        bottom: 1rem;
        right: 1rem;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        z-index: 1000;
    }
    .toast {
        padding: 0.75rem 1rem;
        cursor: pointer;
        border-radius: var(--pico-border-radius);
        background-color: var(--pico-card-background-color);
        box-shadow: var(--pico-card-box-shadow);
    }
    .toast-success { border-left: 4px solid var(--pico-ins-color); }
    .toast-error { border-left: 4px solid var(--pico-del-color); }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let config = use_hook(|| ApiConfig::from_env().map_err(|e| e.to_string()));

    match config {
        Ok(config) => rsx! {
            LoadedApp { config }
        },
        Err(e) => {
            dioxus_logger::tracing::error!("invalid configuration: {}", e);
            rsx! {
                Container {
                    p { "An error occurred: {e}" }
                }
            }
        }
    }
}

/// This component holds the main app logic and only runs once the
/// configuration is valid.
#[component]
fn LoadedApp(config: ApiConfig) -> Element {
    // Provide the stable, non-reactive AppState.
    let app_state = use_context_provider(|| AppState::new(config.clone()));

    let current_user = use_signal(|| current_username(&app_state.tokens));
    use_context_provider(|| AppStateMut { current_user });
    use_toaster_provider();

    let active_screen = use_signal(|| {
        if current_user.peek().is_some() {
            Screen::Home
        } else {
            Screen::Signup
        }
    });
    use_context_provider(|| active_screen);

    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li {
                            h1 {
                                style: "margin: 0; font-size: 1.5rem;",
                                "FlockShop"
                            }
                        }
                    }
                    ul {
                        li {
                            Tabs {
                                active_screen,
                            }
                        }
                    }
                }
            }
            div {
                class: "content",
                match active_screen() {
                    Screen::Signup => rsx! {
                        SignupScreen {}
                    },
                    Screen::Home => rsx! {
                        HomeScreen {}
                    },
                    Screen::Wishlist(list_id) => rsx! {
                        WishlistScreen {
                            key: "{list_id}",
                            list_id,
                        }
                    },
                }
            }
        }
        ToastStack {}
    }
}
