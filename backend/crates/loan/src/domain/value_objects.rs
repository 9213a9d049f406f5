//! Domain Value Objects
//!
//! Immutable value types for the loan domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LoanError;

/// Lifecycle status of a stored loan request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    PendingReview,
    ManualReview,
    Rejected,
    Approved,
    Denied,
}

impl LoanStatus {
    /// Statuses that make up the reviewer queue
    pub const MANUAL_REVIEW_QUEUE: [LoanStatus; 3] = [
        LoanStatus::PendingReview,
        LoanStatus::Rejected,
        LoanStatus::ManualReview,
    ];

    /// Storage code
    pub const fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::PendingReview => "PENDING_REVIEW",
            LoanStatus::ManualReview => "MANUAL_REVIEW",
            LoanStatus::Rejected => "REJECTED",
            LoanStatus::Approved => "APPROVED",
            LoanStatus::Denied => "DENIED",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PENDING_REVIEW" => Some(LoanStatus::PendingReview),
            "MANUAL_REVIEW" => Some(LoanStatus::ManualReview),
            "REJECTED" => Some(LoanStatus::Rejected),
            "APPROVED" => Some(LoanStatus::Approved),
            "DENIED" => Some(LoanStatus::Denied),
            _ => None,
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the evaluation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Approved,
    Rejected,
    ManualReview,
    Denied,
}

impl Classification {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Classification::Approved => "APPROVED",
            Classification::Rejected => "REJECTED",
            Classification::ManualReview => "MANUAL_REVIEW",
            Classification::Denied => "DENIED",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sortable columns of the manual-review listing
///
/// A closed set: the listing can only be ordered by one of these, so no
/// caller-supplied text ever reaches a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoanSortKey {
    #[default]
    Id,
    CreatedAt,
    LoanAmount,
    LoanTerm,
    UserEmail,
    RequestStatus,
}

impl LoanSortKey {
    /// Column name in the `loan_requests` table
    pub const fn column(&self) -> &'static str {
        match self {
            LoanSortKey::Id => "id",
            LoanSortKey::CreatedAt => "created_at",
            LoanSortKey::LoanAmount => "loan_amount",
            LoanSortKey::LoanTerm => "loan_term",
            LoanSortKey::UserEmail => "user_email",
            LoanSortKey::RequestStatus => "request_status",
        }
    }
}

impl FromStr for LoanSortKey {
    type Err = LoanError;

    /// Accepts both the JSON field spelling and the column spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(LoanSortKey::Id),
            "createdAt" | "created_at" => Ok(LoanSortKey::CreatedAt),
            "loanAmount" | "loan_amount" => Ok(LoanSortKey::LoanAmount),
            "loanTerm" | "loan_term" => Ok(LoanSortKey::LoanTerm),
            "userEmail" | "user_email" => Ok(LoanSortKey::UserEmail),
            "requestStatus" | "request_status" => Ok(LoanSortKey::RequestStatus),
            other => Err(LoanError::invalid(format!("Unsupported sort key: {other}"))),
        }
    }
}
