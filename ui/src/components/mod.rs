//! Shared building blocks for the screens: Pico wrappers, the product card
//! and the toast overlay.
pub mod empty_state;
pub mod pico;
pub mod product_card;
pub mod reaction_button;
pub mod toast_stack;
