//! Client-side core of FlockShop: everything the screens need that is not
//! rendering. Configuration, the HTTP client, the session token, the username
//! check, the signup workflow and wishlist item logic.

pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod session;
pub mod signup;
pub mod username;
pub mod wishlist;

#[cfg(test)]
mod testing;

pub use client::FlockApi;
pub use client::HttpApi;
pub use config::ApiConfig;
pub use error::ApiError;
