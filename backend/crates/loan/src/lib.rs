//! Loan Request Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, evaluation engine, port traits
//! - `application/` - Use cases and the `LoanOrchestrator`
//! - `infra/` - PostgreSQL store, HTTP user directory, in-memory adapters
//! - `presentation/` - HTTP handlers, DTOs, authentication middleware
//!
//! ## Decision Model
//! - Evaluation thresholds are fixed constants, never runtime configuration
//! - Evaluation is read-only; the stored status is never changed by it
//! - A request can only be submitted by the user it belongs to

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{DirectoryConfig, LoanConfig};
pub use application::orchestrator::LoanOrchestrator;
pub use error::{LoanError, LoanResult, UpstreamError};
pub use infra::auth_service::HttpUserDirectory;
pub use infra::postgres::PgLoanStore;
pub use presentation::router::{loan_router, loan_router_generic};
