//=============================================================================
// File: src/components/product_card.rs
//=============================================================================
use api::session::TokenStore;
use api::wishlist::can_remove;
use api::wishlist::remove_item;
use api::wishlist::RemovalDialog;
use api::wishlist::WishlistItem;
use api::wishlist::REMOVED_MESSAGE;
use api::wishlist::REMOVE_FAILED_MESSAGE;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Modal;
use crate::components::reaction_button::ReactionButton;
use crate::hooks::use_toaster::use_toaster;

/// One wishlist product with its reaction and remove controls.
///
/// With `on_removed` set, the parent drops the item from its own list after a
/// successful delete. Without it the whole page is reloaded.
#[component]
pub fn ProductCard(item: WishlistItem, on_removed: Option<EventHandler<WishlistItem>>) -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut toaster = use_toaster();
    let mut dialog = use_signal(RemovalDialog::default);

    let current_user = app_state_mut.current_user.read().clone();
    let allowed = can_remove(current_user.as_deref());
    let added_by = item
        .added_by_label(current_user.as_deref())
        .unwrap_or_default()
        .to_string();

    let target = item.clone();
    let on_confirm = move |_: MouseEvent| {
        if !dialog.write().confirm() {
            return;
        }
        let api = app_state.api.clone();
        let bearer = app_state.tokens.load();
        let item = target.clone();
        spawn(async move {
            let result = remove_item(&api, &item, bearer.as_deref()).await;
            dialog.write().finish();
            match result {
                Ok(()) => {
                    toaster.success(REMOVED_MESSAGE);
                    match on_removed {
                        Some(handler) => handler.call(item),
                        None => compat::reload_page(),
                    }
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("removing {} failed: {}", item.name, e);
                    toaster.error(REMOVE_FAILED_MESSAGE);
                }
            }
        });
    };

    let removing = dialog.read().state().is_removing();

    rsx! {
        article {
            class: "product-card",
            div {
                class: "product-image",
                if let Some(url) = &item.image_url {
                    img {
                        src: "{url}",
                        alt: "{item.name}",
                    }
                } else {
                    div {
                        class: "no-image",
                        "No Image Available"
                    }
                }
            }
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-top: 0.5rem;",
                strong {
                    style: "font-size: 1.4rem;",
                    "{item.name}"
                }
                ReactionButton {}
            }
            p {
                style: "color: var(--pico-muted-color);",
                "{item.price}"
            }
            Button {
                button_type: ButtonType::Contrast,
                disabled: !allowed,
                on_click: move |_| {
                    dialog.write().open(allowed);
                },
                "🗑 Remove from Wishlist"
            }
            small {
                style: "display: block; margin-top: 0.5rem;",
                "Added by "
                strong { "{added_by}" }
            }
        }

        Modal {
            open: dialog.read().is_open(),
            title: "Confirm Deletion",
            on_close: move |_| dialog.write().cancel(),
            p { "Are you sure you want to remove this from the wishlist?" }
            footer {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    disabled: removing,
                    on_click: move |_| dialog.write().cancel(),
                    "Cancel"
                }
                Button {
                    busy: removing,
                    on_click: on_confirm,
                    "Delete"
                }
            }
        }
    }
}
