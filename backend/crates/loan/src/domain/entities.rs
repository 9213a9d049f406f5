//! Domain Entities
//!
//! Core business entities for the loan domain.

use chrono::{DateTime, Utc};
use kernel::id::LoanId;
use std::collections::BTreeSet;

use crate::domain::value_objects::{Classification, LoanStatus};

/// A loan request that has not been persisted yet
///
/// The store assigns the id and creation timestamp on save.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLoanRequest {
    pub user_email: String,
    pub loan_amount: f64,
    pub loan_term: i32,
    pub loan_type: Option<String>,
    pub interest_rate: Option<f64>,
    pub status: LoanStatus,
    pub base_salary: Option<f64>,
    pub total_monthly_debt: Option<f64>,
}

/// A stored loan request
#[derive(Debug, Clone, PartialEq)]
pub struct LoanRequest {
    pub id: LoanId,
    pub user_email: String,
    pub loan_amount: f64,
    pub loan_term: i32,
    pub loan_type: Option<String>,
    pub interest_rate: Option<f64>,
    pub status: LoanStatus,
    pub base_salary: Option<f64>,
    /// Snapshot only; no rule reads it
    pub total_monthly_debt: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl LoanRequest {
    /// Attach store-assigned identity to a new request
    pub fn from_new(new: NewLoanRequest, id: LoanId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_email: new.user_email,
            loan_amount: new.loan_amount,
            loan_term: new.loan_term,
            loan_type: new.loan_type,
            interest_rate: new.interest_rate,
            status: new.status,
            base_salary: new.base_salary,
            total_monthly_debt: new.total_monthly_debt,
            created_at,
        }
    }
}

/// Applicant facts resolved from the user directory
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantProfile {
    pub email: String,
    pub base_salary: Option<f64>,
    pub roles: BTreeSet<String>,
}

/// Result of evaluating one loan request; never stored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationOutcome {
    pub classification: Classification,
    pub loan_amount: f64,
    pub loan_term: i32,
}
