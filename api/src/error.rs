use thiserror::Error;

/// Failures talking to the FlockShop API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base url: {0}")]
    InvalidBaseUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("product has no id and cannot be removed")]
    MissingProductId,
}

/// Failures decoding the stored session token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is not a three part JWT")]
    Malformed,

    #[error("token payload is not base64url: {0}")]
    Encoding(String),

    #[error("token payload is not valid JSON: {0}")]
    Payload(String),
}

/// Failures reading or writing the token slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("token storage is unavailable")]
    Unavailable,

    #[error("could not write token: {0}")]
    Write(String),
}
