pub mod use_toaster;
pub mod use_username_check;
