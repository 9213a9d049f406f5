//! Submit Loan Use Case

use crate::domain::entities::{LoanRequest, NewLoanRequest};
use crate::domain::repository::{LoanStore, UserDirectory};
use crate::domain::services::{validate_amount, validate_term};
use crate::domain::value_objects::LoanStatus;
use crate::error::{LoanError, LoanResult};
use std::sync::Arc;

/// Input DTO for submit loan
#[derive(Debug, Clone)]
pub struct SubmitLoanInput {
    pub user_email: String,
    pub loan_amount: f64,
    pub loan_term: i32,
    pub loan_type: Option<String>,
    pub interest_rate: Option<f64>,
    pub base_salary: Option<f64>,
    pub total_monthly_debt: Option<f64>,
}

/// Submit Loan Use Case
pub struct SubmitLoanUseCase<S, D>
where
    S: LoanStore,
    D: UserDirectory,
{
    loan_store: Arc<S>,
    user_directory: Arc<D>,
}

impl<S, D> SubmitLoanUseCase<S, D>
where
    S: LoanStore,
    D: UserDirectory,
{
    pub fn new(loan_store: Arc<S>, user_directory: Arc<D>) -> Self {
        Self {
            loan_store,
            user_directory,
        }
    }

    /// Validate and persist a loan request on behalf of `authenticated_email`
    ///
    /// Nothing reaches the directory or the store until the ownership and
    /// input checks have passed.
    pub async fn execute(
        &self,
        input: SubmitLoanInput,
        authenticated_email: &str,
    ) -> LoanResult<LoanRequest> {
        tracing::info!(
            applicant = %input.user_email,
            authenticated = %authenticated_email,
            "Loan submission received"
        );

        if authenticated_email.to_lowercase() != input.user_email.to_lowercase() {
            tracing::warn!(
                applicant = %input.user_email,
                authenticated = %authenticated_email,
                "Submission rejected: applicant is not the authenticated user"
            );
            return Err(LoanError::Unauthorized);
        }

        if input.user_email.trim().is_empty() {
            return Err(LoanError::invalid("Applicant email is required"));
        }
        validate_amount(input.loan_amount)?;
        validate_term(input.loan_term)?;

        if self
            .user_directory
            .find_by_email(&input.user_email)
            .await?
            .is_none()
        {
            return Err(LoanError::not_found(format!(
                "No user registered with email {}",
                input.user_email
            )));
        }

        let loan = NewLoanRequest {
            user_email: input.user_email,
            loan_amount: input.loan_amount,
            loan_term: input.loan_term,
            loan_type: input.loan_type,
            interest_rate: input.interest_rate,
            status: LoanStatus::PendingReview,
            base_salary: input.base_salary,
            total_monthly_debt: input.total_monthly_debt,
        };

        let saved = self.loan_store.save(&loan).await?;

        tracing::info!(
            loan_id = %saved.id,
            applicant = %saved.user_email,
            amount = saved.loan_amount,
            term = saved.loan_term,
            "Loan request stored"
        );

        Ok(saved)
    }
}
