//! Repository Traits
//!
//! Interfaces for persistence and the user directory. Implementations are in
//! the infrastructure layer.

use kernel::id::LoanId;
use kernel::page::PageRequest;

use crate::domain::entities::{ApplicantProfile, LoanRequest, NewLoanRequest};
use crate::domain::value_objects::{LoanSortKey, LoanStatus};
use crate::error::LoanResult;

/// Loan request store
#[trait_variant::make(LoanStore: Send)]
pub trait LocalLoanStore {
    /// Persist a new request; returns it with store-assigned id and timestamp
    async fn save(&self, loan: &NewLoanRequest) -> LoanResult<LoanRequest>;

    async fn find_by_id(&self, id: LoanId) -> LoanResult<Option<LoanRequest>>;

    /// All requests whose status is in `statuses`
    async fn find_by_status(&self, statuses: &[LoanStatus]) -> LoanResult<Vec<LoanRequest>>;

    /// One page of requests whose status is in `statuses`, ascending by the
    /// requested sort key
    async fn find_by_status_paginated(
        &self,
        statuses: &[LoanStatus],
        page: &PageRequest<LoanSortKey>,
    ) -> LoanResult<Vec<LoanRequest>>;

    async fn count_by_status(&self, statuses: &[LoanStatus]) -> LoanResult<u64>;
}

/// Applicant lookup by email
#[trait_variant::make(UserDirectory: Send)]
pub trait LocalUserDirectory {
    /// `Ok(None)` when the directory does not know the email
    async fn find_by_email(&self, email: &str) -> LoanResult<Option<ApplicantProfile>>;
}
