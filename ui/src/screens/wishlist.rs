// File: src/screens/wishlist.rs
use api::wishlist::drop_removed;
use api::wishlist::load_wishlist;
use api::wishlist::WishlistItem;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Spinner;
use crate::components::product_card::ProductCard;

#[component]
pub fn WishlistScreen(list_id: String) -> Element {
    let app_state = use_context::<AppState>();

    let fetch_id = list_id.clone();
    let mut wishlist = use_resource(move || {
        let api = app_state.api.clone();
        let list_id = fetch_id.clone();
        async move { load_wishlist(&api, &list_id).await }
    });

    let mut items = use_signal(Vec::<WishlistItem>::new);
    let mut title = use_signal(|| None::<String>);

    // Rebuild the local list whenever a fetch completes.
    use_effect(move || {
        if let Some(Ok(view)) = &*wishlist.read() {
            items.set(view.items.clone());
            title.set(view.name.clone());
        }
    });

    let heading = title().unwrap_or_else(|| "Wishlist".to_string());

    let body = match &*wishlist.read() {
        None => rsx! {
            p { Spinner {} " Loading wishlist..." }
        },
        Some(Err(e)) => {
            dioxus_logger::tracing::warn!("loading wishlist {} failed: {}", list_id, e);
            rsx! {
                EmptyState {
                    title: "Could not load this wishlist",
                    description: Some(e.to_string()),
                    icon: Some("⚠".to_string()),
                    primary_action: rsx! {
                        Button {
                            on_click: move |_| wishlist.restart(),
                            "Retry"
                        }
                    },
                }
            }
        }
        Some(Ok(_)) if items.read().is_empty() => rsx! {
            EmptyState {
                title: "This wishlist is empty",
                description: Some("Products added by the flock show up here.".to_string()),
                icon: Some("🛍".to_string()),
            }
        },
        Some(Ok(_)) => rsx! {
            div {
                class: "product-grid",
                for (index, item) in items.read().iter().cloned().enumerate() {
                    ProductCard {
                        key: "{item.card_key(index)}",
                        item,
                        on_removed: move |removed: WishlistItem| {
                            drop_removed(&mut items.write(), &removed);
                        },
                    }
                }
            }
        },
    };

    rsx! {
        Card {
            h3 { "{heading}" }
            {body}
        }
    }
}
