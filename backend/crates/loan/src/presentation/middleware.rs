//! Authentication Middleware
//!
//! Verifies the bearer token, resolves the caller's roles through the user
//! directory and attaches an [`AuthenticatedUser`] to the request.

use crate::domain::repository::{LoanStore, UserDirectory};
use crate::presentation::handlers::LoanAppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use kernel::error::app_error::AppError;
use platform::bearer::extract_bearer_token;
use platform::jwt::verify_hs256;
use std::collections::BTreeSet;

/// Caller identity established by [`require_authentication`]
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
    pub roles: BTreeSet<String>,
}

impl AuthenticatedUser {
    /// 403 unless the caller holds `role`
    pub fn require_role(&self, role: &str) -> Result<(), AppError> {
        if self.roles.contains(role) {
            return Ok(());
        }
        tracing::warn!(email = %self.email, required = %role, "Missing role");
        Err(AppError::forbidden("Insufficient role for this operation"))
    }
}

/// Middleware that requires a valid access token
pub async fn require_authentication<S, D>(
    State(state): State<LoanAppState<S, D>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError>
where
    S: LoanStore + Send + Sync + 'static,
    D: UserDirectory + Send + Sync + 'static,
{
    let token = extract_bearer_token(req.headers()).map_err(|e| {
        tracing::debug!(error = %e, "No usable bearer token");
        AppError::unauthorized("Authentication required")
    })?;

    let claims = verify_hs256(token, &state.config.token_secret, Utc::now().timestamp())
        .map_err(|e| {
            tracing::warn!(error = %e, "Access token rejected");
            AppError::unauthorized("Invalid or expired token")
        })?;

    let profile = state
        .directory
        .find_by_email(&claims.sub)
        .await?
        .ok_or_else(|| {
            tracing::warn!(email = %claims.sub, "Token subject is not a known user");
            AppError::unauthorized("Unknown user")
        })?;

    req.extensions_mut().insert(AuthenticatedUser {
        email: claims.sub,
        roles: profile.roles,
    });

    Ok(next.run(req).await)
}
