//! Application Configuration
//!
//! Configuration for the loan application layer and the user directory
//! client.

use std::fmt;
use std::time::Duration;

use crate::domain::value_objects::LoanSortKey;

/// Loan application configuration
#[derive(Clone)]
pub struct LoanConfig {
    /// HS256 secret shared with the token issuer (at least 32 bytes)
    pub token_secret: Vec<u8>,
    /// Role required to submit loan requests
    pub applicant_role: String,
    /// Role required to read the manual-review queue
    pub reviewer_role: String,
    pub default_page_size: u32,
    pub default_sort_by: LoanSortKey,
}

impl LoanConfig {
    /// Default roles and listing settings around the given secret
    pub fn with_token_secret(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
            applicant_role: "USER".to_string(),
            reviewer_role: "ASESOR".to_string(),
            default_page_size: 10,
            default_sort_by: LoanSortKey::Id,
        }
    }

    /// Create config with a random token secret (for development)
    pub fn development() -> Self {
        Self::with_token_secret(platform::crypto::random_key())
    }
}

impl fmt::Debug for LoanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoanConfig")
            .field("token_secret", &"<redacted>")
            .field("applicant_role", &self.applicant_role)
            .field("reviewer_role", &self.reviewer_role)
            .field("default_page_size", &self.default_page_size)
            .field("default_sort_by", &self.default_sort_by)
            .finish()
    }
}

/// User directory (authentication service) client configuration
#[derive(Clone)]
pub struct DirectoryConfig {
    pub base_url: String,
    pub api_key: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_key: String::new(),
            timeout: Duration::from_millis(5000),
        }
    }
}

impl fmt::Debug for DirectoryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
