//! Bearer token extraction
//!
//! Reads `Authorization: Bearer <token>` from request headers.

use axum::http::{HeaderMap, header};

/// Error when extracting a bearer token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("Missing required header: Authorization")]
    MissingHeader,
    #[error("Authorization header is not a bearer token")]
    NotBearer,
}

/// Extract the bearer token from request headers
///
/// The scheme name is matched case-insensitively; the token itself is
/// returned trimmed and must be non-empty.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::MissingHeader)?
        .to_str()
        .map_err(|_| BearerError::NotBearer)?;

    let (scheme, token) = value.split_once(' ').ok_or(BearerError::NotBearer)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::NotBearer);
    }

    match token.trim() {
        "" => Err(BearerError::NotBearer),
        token => Ok(token),
    }
}
