//! Wire types for the FlockShop API.
//!
//! Every response body is wrapped as `{ "data": ... }`.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub data: T,
}

/// Body of the `check-username` and `check-email` responses.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Existence {
    pub exists: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub fullname: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupData {
    #[serde(default)]
    pub token: Option<String>,
}

/// A wishlist as returned by `GET /wishlist/{listId}`.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Wishlist {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub products: Vec<WishlistProduct>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WishlistProduct {
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, alias = "_id")]
    pub product_id: Option<String>,
    #[serde(default)]
    pub added_by: Option<String>,
}

/// Prices are displayed verbatim; the server sends either a string or a number.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Price {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Text(s) => f.write_str(s),
            Price::Number(n) => write!(f, "{n}"),
        }
    }
}
