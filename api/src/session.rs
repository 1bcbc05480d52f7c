//! The session token kept on the client after signup.
//!
//! The token is a JWT issued by the server. The client only peeks at its
//! payload to learn the username for display; the signature is never checked
//! here, so nothing decoded from it may be trusted for authorization. Requests
//! that need authority carry the raw token and let the server decide.

use std::sync::Arc;
use std::sync::Mutex;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use dioxus_logger::tracing::warn;
use serde::Deserialize;

use crate::error::StorageError;
use crate::error::TokenError;

/// Storage key under which the token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// A single persistent slot holding the session token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Claims the client cares about. Everything else in the payload is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Claims {
    #[serde(default)]
    pub username: Option<String>,
}

/// Decodes the payload segment of a JWT without verifying it.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut parts = token.trim().split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => return Err(TokenError::Malformed),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))
}

/// The username claimed by the stored token, if there is a readable one.
pub fn current_username(store: &impl TokenStore) -> Option<String> {
    let token = store.load()?;
    match decode_claims(&token) {
        Ok(claims) => claims.username.filter(|u| !u.is_empty()),
        Err(e) => {
            warn!("ignoring unreadable session token: {}", e);
            None
        }
    }
}

/// Process-local token slot, used in tests and when no persistent storage exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore(Arc<Mutex<Option<String>>>);

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self(Arc::new(Mutex::new(Some(token.to_string()))))
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.0.lock().ok()?.clone()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        let mut slot = self.0.lock().map_err(|_| StorageError::Unavailable)?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut slot = self.0.lock().map_err(|_| StorageError::Unavailable)?;
        *slot = None;
        Ok(())
    }
}

/// Token slot backed by a file, for native builds.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileTokenStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let token = std::fs::read_to_string(&self.path).ok()?;
        let token = token.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| StorageError::Write(e.to_string()))?;
        }
        std::fs::write(&self.path, token).map_err(|e| StorageError::Write(e.to_string()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write(e.to_string())),
        }
    }
}

#[cfg(test)]
pub(crate) fn fake_jwt(payload: &str) -> String {
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_username_claim() {
        let token = fake_jwt(r#"{"username":"alice01","iat":1700000000}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.username.as_deref(), Some("alice01"));
    }

    #[test]
    fn tolerates_padded_payload() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"username":"bob12"}"#);
        let token = format!("x.{payload}.y");
        assert_eq!(decode_claims(&token).unwrap().username.as_deref(), Some("bob12"));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(decode_claims("abc"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a..c"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed));
        assert!(matches!(decode_claims("a.!!!.c"), Err(TokenError::Encoding(_))));

        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("hello"));
        assert!(matches!(decode_claims(&not_json), Err(TokenError::Payload(_))));
    }

    #[test]
    fn current_username_needs_a_readable_token() {
        assert_eq!(current_username(&MemoryTokenStore::new()), None);
        assert_eq!(current_username(&MemoryTokenStore::with_token("garbage")), None);

        let no_claim = MemoryTokenStore::with_token(&fake_jwt(r#"{"sub":"1"}"#));
        assert_eq!(current_username(&no_claim), None);

        let store = MemoryTokenStore::with_token(&fake_jwt(r#"{"username":"carol99"}"#));
        assert_eq!(current_username(&store).as_deref(), Some("carol99"));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        store.save("t1").unwrap();
        assert_eq!(store.load().as_deref(), Some("t1"));
        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn file_store_persists_and_clears() {
        let path = std::env::temp_dir().join(format!("flockshop-token-{}", std::process::id()));
        let store = FileTokenStore::new(&path);
        assert_eq!(store.load(), None);

        store.save("abc.def.ghi").unwrap();
        assert_eq!(FileTokenStore::new(&path).load().as_deref(), Some("abc.def.ghi"));

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        store.clear().unwrap();
    }
}
