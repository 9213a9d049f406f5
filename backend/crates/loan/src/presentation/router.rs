//! Loan Router

use crate::application::config::LoanConfig;
use crate::domain::repository::{LoanStore, UserDirectory};
use crate::infra::auth_service::HttpUserDirectory;
use crate::infra::postgres::PgLoanStore;
use crate::presentation::handlers::{self, LoanAppState};
use crate::presentation::middleware::require_authentication;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the loan router with the PostgreSQL store and HTTP user directory
pub fn loan_router(store: PgLoanStore, directory: HttpUserDirectory, config: LoanConfig) -> Router {
    loan_router_generic(store, directory, config)
}

/// Create a loan router for any store and directory implementation
///
/// Every route sits behind [`require_authentication`].
pub fn loan_router_generic<S, D>(store: S, directory: D, config: LoanConfig) -> Router
where
    S: LoanStore + Send + Sync + 'static,
    D: UserDirectory + Send + Sync + 'static,
{
    let state = LoanAppState::new(Arc::new(store), Arc::new(directory), Arc::new(config));

    Router::new()
        .route("/loans", post(handlers::submit_loan::<S, D>))
        .route(
            "/loans/manual-review",
            get(handlers::list_manual_review::<S, D>),
        )
        .route(
            "/loans/{id}/evaluation",
            get(handlers::evaluate_loan::<S, D>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_authentication::<S, D>,
        ))
        .with_state(state)
}
