//! Wishlist items as shown on a product card.

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;

use crate::client::FlockApi;
use crate::dto::Wishlist;
use crate::dto::WishlistProduct;
use crate::error::ApiError;

pub const REMOVED_MESSAGE: &str = "Product removed from wishlist!";
pub const REMOVE_FAILED_MESSAGE: &str = "Failed to remove product.";

/// One product on a wishlist, as handed to a card by its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WishlistItem {
    pub name: String,
    pub price: String,
    pub image_url: Option<String>,
    pub product_id: Option<String>,
    pub added_by: Option<String>,
    pub list_id: String,
}

impl WishlistItem {
    pub fn from_product(list_id: &str, product: &WishlistProduct) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            image_url: product.image_url.clone().filter(|u| !u.is_empty()),
            product_id: product.product_id.clone(),
            added_by: product.added_by.clone(),
            list_id: list_id.to_string(),
        }
    }

    /// Key for the card at `index` in a rendered list.
    ///
    /// Products with an id keep their key across removals. Products without
    /// one fall back to their position, so siblings never share a key.
    pub fn card_key(&self, index: usize) -> String {
        match self.product_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => format!("id-{id}"),
            None => format!("at-{index}"),
        }
    }

    /// Who to credit on the "Added by" line: "you" for the viewer's own items.
    pub fn added_by_label(&self, current_user: Option<&str>) -> Option<&str> {
        match (self.added_by.as_deref(), current_user) {
            (Some(added_by), Some(user)) if added_by == user => Some("you"),
            (added_by, _) => added_by,
        }
    }
}

/// A fetched wishlist, ready for the grid.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct WishlistView {
    pub name: Option<String>,
    pub items: Vec<WishlistItem>,
}

impl WishlistView {
    pub fn from_wishlist(list_id: &str, wishlist: &Wishlist) -> Self {
        Self {
            name: wishlist.name.clone(),
            items: wishlist
                .products
                .iter()
                .map(|p| WishlistItem::from_product(list_id, p))
                .collect(),
        }
    }
}

/// Fetches `list_id` and maps its products to items.
pub async fn load_wishlist<A: FlockApi>(api: &A, list_id: &str) -> Result<WishlistView, ApiError> {
    let wishlist = api.wishlist(list_id).await?;
    debug!("wishlist {} has {} products", list_id, wishlist.products.len());
    Ok(WishlistView::from_wishlist(list_id, &wishlist))
}

/// Drops `removed` from `items` after a successful delete.
///
/// Matches on product id only. An item without an id was never deleted, so
/// nothing is dropped for it.
pub fn drop_removed(items: &mut Vec<WishlistItem>, removed: &WishlistItem) {
    if let Some(id) = removed.product_id.as_deref() {
        items.retain(|i| i.product_id.as_deref() != Some(id));
    }
}

/// Removal is offered only to a recognisable user.
pub fn can_remove(current_user: Option<&str>) -> bool {
    current_user.is_some_and(|u| !u.is_empty())
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum RemovalState {
    #[default]
    Idle,
    Confirming,
    Removing,
}

/// The remove button and its confirmation prompt.
///
/// The delete request may only be issued once `confirm` has returned true.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RemovalDialog {
    state: RemovalState,
}

impl RemovalDialog {
    pub fn state(&self) -> RemovalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        !self.state.is_idle()
    }

    /// Opens the prompt. Returns false when removal is not allowed.
    pub fn open(&mut self, allowed: bool) -> bool {
        if allowed && self.state.is_idle() {
            self.state = RemovalState::Confirming;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        if self.state.is_confirming() {
            self.state = RemovalState::Idle;
        }
    }

    /// Returns true exactly when the caller should now send the delete.
    pub fn confirm(&mut self) -> bool {
        if self.state.is_confirming() {
            self.state = RemovalState::Removing;
            true
        } else {
            false
        }
    }

    /// Closes the prompt once the delete has settled, whatever the result.
    pub fn finish(&mut self) {
        self.state = RemovalState::Idle;
    }
}

/// Deletes `item` from its wishlist.
pub async fn remove_item<A: FlockApi>(
    api: &A,
    item: &WishlistItem,
    bearer: Option<&str>,
) -> Result<(), ApiError> {
    let product_id = item
        .product_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingProductId)?;
    api.remove_product(&item.list_id, product_id, bearer).await?;
    info!("removed {} from wishlist {}", product_id, item.list_id);
    Ok(())
}

/// Emoji a viewer can pin on a card. Cosmetic and never sent anywhere.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Reaction {
    Grin,
    HeartEyes,
    Cool,
    Sad,
    Party,
}

pub const ALL_REACTIONS: [Reaction; 5] = [
    Reaction::Grin,
    Reaction::HeartEyes,
    Reaction::Cool,
    Reaction::Sad,
    Reaction::Party,
];

impl Reaction {
    pub fn emoji(&self) -> &'static str {
        match self {
            Reaction::Grin => "😀",
            Reaction::HeartEyes => "😍",
            Reaction::Cool => "😎",
            Reaction::Sad => "😢",
            Reaction::Party => "🎉",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ReactionPicker {
    pub open: bool,
    pub chosen: Option<Reaction>,
}

impl ReactionPicker {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn choose(&mut self, reaction: Reaction) {
        self.chosen = Some(reaction);
        self.open = false;
    }
}
