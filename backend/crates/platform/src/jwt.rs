//! HS256 signed tokens
//!
//! Compact JWS tokens (`header.payload.signature`, each segment base64url)
//! signed with HMAC-SHA256 under a shared secret of at least 256 bits. Only
//! `HS256` is accepted; the `alg` header is never trusted to select another
//! algorithm.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use hmac::Mac;

use crate::crypto::{HmacSha256, from_base64url, hmac_sha256, to_base64url};

const ALGORITHM: &str = "HS256";

/// Shortest accepted HS256 secret, in bytes
pub const MIN_SECRET_LEN: usize = 32;

/// Claims carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the caller's email
    pub sub: String,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenHeader {
    alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    typ: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token is malformed")]
    Malformed,
    #[error("Unsupported token algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("Token signature is invalid")]
    InvalidSignature,
    #[error("Token has expired")]
    Expired,
    #[error("Signing secret is {0} bytes, at least {MIN_SECRET_LEN} required")]
    WeakSecret(usize),
    #[error("Token could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Verify an HS256 token and return its claims
///
/// Checks run in order: structure, algorithm, signature, expiry. The
/// payload is only parsed after the signature has been verified.
///
/// ## Arguments
/// * `token` - compact token string
/// * `secret` - shared signing secret
/// * `now` - current time, seconds since the Unix epoch
pub fn verify_hs256(token: &str, secret: &[u8], now: i64) -> Result<TokenClaims, TokenError> {
    let mut mac = signer(secret)?;

    let mut segments = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };

    let signing_input = &token[..header.len() + 1 + payload.len()];
    let header: TokenHeader = decode_segment(header)?;
    if header.alg != ALGORITHM {
        return Err(TokenError::UnsupportedAlgorithm(header.alg));
    }

    let signature = from_base64url(signature).map_err(|_| TokenError::Malformed)?;
    mac.update(signing_input.as_bytes());
    mac.verify_slice(&signature).map_err(|_| TokenError::InvalidSignature)?;

    let claims: TokenClaims = decode_segment(payload)?;
    if claims.exp <= now {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

/// Sign claims into an HS256 token
pub fn issue_hs256(claims: &TokenClaims, secret: &[u8]) -> Result<String, TokenError> {
    require_secret_len(secret)?;
    let header = TokenHeader {
        alg: ALGORITHM.to_string(),
        typ: Some("JWT".to_string()),
    };
    let signing_input = format!(
        "{}.{}",
        to_base64url(&serde_json::to_vec(&header)?),
        to_base64url(&serde_json::to_vec(claims)?)
    );
    let signature = hmac_sha256(secret, signing_input.as_bytes())
        .map_err(|_| TokenError::WeakSecret(secret.len()))?;
    Ok(format!("{signing_input}.{}", to_base64url(&signature)))
}

fn require_secret_len(secret: &[u8]) -> Result<(), TokenError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(TokenError::WeakSecret(secret.len()));
    }
    Ok(())
}

fn signer(secret: &[u8]) -> Result<HmacSha256, TokenError> {
    require_secret_len(secret)?;
    HmacSha256::new_from_slice(secret).map_err(|_| TokenError::WeakSecret(secret.len()))
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let bytes = from_base64url(segment).map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)
}
