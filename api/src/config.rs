//! Client configuration, read from the environment.

use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::ApiError;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_USERNAME_CHECK_DELAY_MS: u64 = 500;
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_TOKEN_FILE: &str = ".flockshop_token";

/// Settings shared by every screen that talks to the FlockShop API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    username_check_delay: Duration,
    #[cfg(not(target_arch = "wasm32"))]
    token_file: std::path::PathBuf,
}

impl ApiConfig {
    /// Builds a config for the given base URL with default timings.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            username_check_delay: Duration::from_millis(DEFAULT_USERNAME_CHECK_DELAY_MS),
            #[cfg(not(target_arch = "wasm32"))]
            token_file: DEFAULT_TOKEN_FILE.into(),
        })
    }

    /// Creates an ApiConfig from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `FLOCKSHOP_API_URL`: base URL of the API server. In wasm builds this
    ///   is read at compile time since the browser has no process environment.
    /// - `FLOCKSHOP_USERNAME_CHECK_DELAY_MS`: debounce before a username is
    ///   checked.
    /// - `FLOCKSHOP_TOKEN_FILE`: (native only) where the session token is kept.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = read_var("FLOCKSHOP_API_URL", option_env!("FLOCKSHOP_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let delay_ms = read_var(
            "FLOCKSHOP_USERNAME_CHECK_DELAY_MS",
            option_env!("FLOCKSHOP_USERNAME_CHECK_DELAY_MS"),
        )
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_USERNAME_CHECK_DELAY_MS);

        let config = Self::new(&base_url)?.with_username_check_delay(Duration::from_millis(delay_ms));

        #[cfg(not(target_arch = "wasm32"))]
        let config = match env::var("FLOCKSHOP_TOKEN_FILE") {
            Ok(path) if !path.is_empty() => config.with_token_file(path),
            _ => config,
        };

        Ok(config)
    }

    pub fn with_username_check_delay(mut self, delay: Duration) -> Self {
        self.username_check_delay = delay;
        self
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_token_file(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.token_file = path.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn username_check_delay(&self) -> Duration {
        self.username_check_delay
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn token_file(&self) -> &std::path::Path {
        &self.token_file
    }
}

fn read_var(name: &str, compiled_in: Option<&'static str>) -> Option<String> {
    env::var(name)
        .ok()
        .or_else(|| compiled_in.map(str::to_string))
        .filter(|s| !s.trim().is_empty())
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim()).map_err(|e| ApiError::InvalidBaseUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_base_url_with_path() {
        let config = ApiConfig::new("https://api.flockshop.in/v1").unwrap();
        assert_eq!(config.base_url().path(), "/v1");
        assert_eq!(config.username_check_delay(), Duration::from_millis(500));
    }

    #[test]
    fn rejects_non_base_url() {
        assert!(matches!(
            ApiConfig::new("mailto:someone@example.com"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(ApiConfig::new("not a url").is_err());
    }

    #[test]
    fn delay_can_be_overridden() {
        let config = ApiConfig::new(DEFAULT_API_URL)
            .unwrap()
            .with_username_check_delay(Duration::from_millis(50));
        assert_eq!(config.username_check_delay(), Duration::from_millis(50));
    }
}
