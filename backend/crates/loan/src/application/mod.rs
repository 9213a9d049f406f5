//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod evaluate_loan;
pub mod list_manual_review;
pub mod orchestrator;
pub mod submit_loan;
