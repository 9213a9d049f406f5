//! Domain Services
//!
//! Pure business rules: the evaluation engine and submission limits.

use crate::domain::value_objects::Classification;
use crate::error::{LoanError, LoanResult};

/// Salary at or above which a request is approved outright
pub const AUTO_APPROVE_SALARY: f64 = 8_000_000.0;
/// Share of salary a request may take and still be approved
pub const AFFORDABLE_SALARY_RATIO: f64 = 0.4;
/// Amount divisor used for the insufficient-salary check
pub const REJECTION_DIVISOR: f64 = 12.0;
/// Salary at or above which a request goes to manual review
pub const MANUAL_REVIEW_SALARY: f64 = 4_000_000.0;

pub const MAX_LOAN_AMOUNT: f64 = 10_000_000.0;
pub const MAX_LOAN_TERM_MONTHS: i32 = 60;

/// Classify a request from its amount and the applicant's salary
///
/// Rules are checked in order and the first match wins. The term does not
/// take part in any rule. Zero or negative salaries are ordinary input.
pub fn evaluate(requested_amount: f64, _requested_term: i32, salary: f64) -> Classification {
    if salary >= AUTO_APPROVE_SALARY {
        Classification::Approved
    } else if requested_amount <= salary * AFFORDABLE_SALARY_RATIO {
        Classification::Approved
    } else if salary < requested_amount / REJECTION_DIVISOR {
        Classification::Rejected
    } else if salary >= MANUAL_REVIEW_SALARY {
        Classification::ManualReview
    } else {
        Classification::Denied
    }
}

/// Amount must lie in `(0, MAX_LOAN_AMOUNT]`
pub fn validate_amount(amount: f64) -> LoanResult<()> {
    if !amount.is_finite() || amount <= 0.0 || amount > MAX_LOAN_AMOUNT {
        return Err(LoanError::invalid(
            "Loan amount must be greater than 0 and not exceed 10,000,000",
        ));
    }
    Ok(())
}

/// Term must lie in `[1, MAX_LOAN_TERM_MONTHS]`
pub fn validate_term(term: i32) -> LoanResult<()> {
    if term <= 0 || term > MAX_LOAN_TERM_MONTHS {
        return Err(LoanError::invalid(
            "Loan term must be between 1 and 60 months",
        ));
    }
    Ok(())
}
