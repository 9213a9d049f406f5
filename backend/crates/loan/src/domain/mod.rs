//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (LoanRequest, ApplicantProfile, EvaluationOutcome)
//! - Domain value objects (LoanStatus, Classification, LoanSortKey)
//! - Domain services (evaluation engine, submission limits)
//! - Repository traits (LoanStore, UserDirectory)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
