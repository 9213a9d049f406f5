//! Loan Orchestrator
//!
//! Single entry point for the three loan operations. Collaborators are
//! passed in explicitly; each call builds the matching use case over them.

use crate::application::evaluate_loan::EvaluateLoanUseCase;
use crate::application::list_manual_review::ListManualReviewUseCase;
use crate::application::submit_loan::{SubmitLoanInput, SubmitLoanUseCase};
use crate::domain::entities::{EvaluationOutcome, LoanRequest};
use crate::domain::repository::{LoanStore, UserDirectory};
use crate::domain::value_objects::LoanSortKey;
use crate::error::LoanResult;
use kernel::id::LoanId;
use kernel::page::{Page, PageRequest};
use std::sync::Arc;

pub struct LoanOrchestrator<S, D>
where
    S: LoanStore,
    D: UserDirectory,
{
    loan_store: Arc<S>,
    user_directory: Arc<D>,
}

impl<S, D> LoanOrchestrator<S, D>
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

    pub async fn submit(
        &self,
        input: SubmitLoanInput,
        authenticated_email: &str,
    ) -> LoanResult<LoanRequest> {
        SubmitLoanUseCase::new(self.loan_store.clone(), self.user_directory.clone())
            .execute(input, authenticated_email)
            .await
    }

    pub async fn evaluate(&self, loan_id: LoanId) -> LoanResult<Option<EvaluationOutcome>> {
        EvaluateLoanUseCase::new(self.loan_store.clone(), self.user_directory.clone())
            .execute(loan_id)
            .await
    }

    pub async fn list_manual_review(
        &self,
        request: &PageRequest<LoanSortKey>,
    ) -> LoanResult<Page<LoanRequest>> {
        ListManualReviewUseCase::new(self.loan_store.clone())
            .execute(request)
            .await
    }
}
