use api::ApiConfig;
use api::HttpApi;
use std::ops::Deref;
use std::sync::Arc;

use crate::compat;
use crate::compat::PlatformTokenStore;

#[derive(Debug)]
pub struct AppStateData {
    pub config: ApiConfig,
    pub api: HttpApi,
    pub tokens: PlatformTokenStore,
}

#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self(Arc::new(AppStateData {
            api: HttpApi::new(&config),
            tokens: compat::token_store(&config),
            config,
        }))
    }
}
