// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

use std::time::Duration;

/// The debounce timer handed to the username validator.
pub struct CompatTimer;

impl api::username::Timer for CompatTimer {
    async fn sleep(&self, duration: Duration) {
        sleep(duration).await;
    }
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    use api::config::ApiConfig;
    use api::error::StorageError;
    use api::session::TokenStore;
    use api::session::TOKEN_STORAGE_KEY;
    use dioxus_logger::tracing::warn;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// The token slot in the browser's `localStorage`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserTokenStore;

    pub type PlatformTokenStore = BrowserTokenStore;

    pub fn token_store(_config: &ApiConfig) -> PlatformTokenStore {
        BrowserTokenStore
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    impl TokenStore for BrowserTokenStore {
        fn load(&self) -> Option<String> {
            local_storage()?
                .get_item(TOKEN_STORAGE_KEY)
                .ok()?
                .filter(|t| !t.is_empty())
        }

        fn save(&self, token: &str) -> Result<(), StorageError> {
            local_storage()
                .ok_or(StorageError::Unavailable)?
                .set_item(TOKEN_STORAGE_KEY, token)
                .map_err(|e| StorageError::Write(format!("{:?}", e)))
        }

        fn clear(&self) -> Result<(), StorageError> {
            local_storage()
                .ok_or(StorageError::Unavailable)?
                .remove_item(TOKEN_STORAGE_KEY)
                .map_err(|e| StorageError::Write(format!("{:?}", e)))
        }
    }

    pub fn reload_page() {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().reload() {
                    warn!("page reload failed: {:?}", e);
                }
            }
            None => warn!("page reload requested without a window"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    use api::config::ApiConfig;
    use api::session::FileTokenStore;
    use dioxus_logger::tracing::info;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub type PlatformTokenStore = FileTokenStore;

    pub fn token_store(config: &ApiConfig) -> PlatformTokenStore {
        FileTokenStore::new(config.token_file())
    }

    /// Native views have no page to reload; they re-render from state.
    pub fn reload_page() {
        info!("page reload requested, ignored on native");
    }
}
