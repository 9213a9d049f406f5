//! Evaluate Loan Use Case

use crate::domain::entities::EvaluationOutcome;
use crate::domain::repository::{LoanStore, UserDirectory};
use crate::domain::services::evaluate;
use crate::error::{LoanError, LoanResult};
use kernel::id::LoanId;
use std::sync::Arc;

/// Evaluate Loan Use Case
pub struct EvaluateLoanUseCase<S, D>
where
    S: LoanStore,
    D: UserDirectory,
{
    loan_store: Arc<S>,
    user_directory: Arc<D>,
}

impl<S, D> EvaluateLoanUseCase<S, D>
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

    /// Classify a stored request against its applicant's current salary
    ///
    /// Returns `Ok(None)` when the applicant is no longer known to the
    /// directory. The stored request is never modified.
    pub async fn execute(&self, loan_id: LoanId) -> LoanResult<Option<EvaluationOutcome>> {
        let loan = self
            .loan_store
            .find_by_id(loan_id)
            .await?
            .ok_or_else(|| LoanError::not_found(format!("Loan request {loan_id} does not exist")))?;

        let Some(applicant) = self.user_directory.find_by_email(&loan.user_email).await? else {
            tracing::warn!(
                loan_id = %loan_id,
                applicant = %loan.user_email,
                "Applicant not found in user directory"
            );
            return Ok(None);
        };

        let salary = applicant.base_salary.ok_or_else(|| {
            LoanError::invalid(format!(
                "Applicant {} has no base salary on record",
                applicant.email
            ))
        })?;

        let classification = evaluate(loan.loan_amount, loan.loan_term, salary);

        tracing::info!(
            loan_id = %loan_id,
            salary = salary,
            result = %classification,
            "Loan evaluated"
        );

        Ok(Some(EvaluationOutcome {
            classification,
            loan_amount: loan.loan_amount,
            loan_term: loan.loan_term,
        }))
    }
}
