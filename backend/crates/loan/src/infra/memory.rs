//! In-Memory Implementations
//!
//! Process-local `LoanStore` and `UserDirectory` with the same semantics as
//! the PostgreSQL store and the HTTP directory. Used by tests and local runs
//! without external services.

use crate::domain::entities::{ApplicantProfile, LoanRequest, NewLoanRequest};
use crate::domain::repository::{LoanStore, UserDirectory};
use crate::domain::value_objects::{LoanSortKey, LoanStatus};
use crate::error::{LoanResult, UpstreamError};
use chrono::Utc;
use kernel::id::LoanId;
use kernel::page::PageRequest;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use tokio::sync::Mutex;

/// In-memory loan store
#[derive(Default)]
pub struct InMemoryLoanStore {
    loans: Mutex<Vec<LoanRequest>>,
}

impl InMemoryLoanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already-stored request as-is (for seeding)
    pub async fn insert(&self, loan: LoanRequest) {
        self.loans.lock().await.push(loan);
    }

    pub async fn len(&self) -> usize {
        self.loans.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.loans.lock().await.is_empty()
    }
}

impl LoanStore for InMemoryLoanStore {
    async fn save(&self, loan: &NewLoanRequest) -> LoanResult<LoanRequest> {
        let saved = LoanRequest::from_new(loan.clone(), LoanId::new(), Utc::now());
        self.loans.lock().await.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: LoanId) -> LoanResult<Option<LoanRequest>> {
        Ok(self
            .loans
            .lock()
            .await
            .iter()
            .find(|loan| loan.id == id)
            .cloned())
    }

    async fn find_by_status(&self, statuses: &[LoanStatus]) -> LoanResult<Vec<LoanRequest>> {
        let mut matching = self.matching(statuses).await;
        matching.sort_by(|a, b| compare(a, b, LoanSortKey::Id));
        Ok(matching)
    }

    async fn find_by_status_paginated(
        &self,
        statuses: &[LoanStatus],
        page: &PageRequest<LoanSortKey>,
    ) -> LoanResult<Vec<LoanRequest>> {
        let mut matching = self.matching(statuses).await;
        let sort_by = *page.sort_by();
        matching.sort_by(|a, b| compare(a, b, sort_by));

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        Ok(matching
            .into_iter()
            .skip(offset)
            .take(page.size() as usize)
            .collect())
    }

    async fn count_by_status(&self, statuses: &[LoanStatus]) -> LoanResult<u64> {
        Ok(self.matching(statuses).await.len() as u64)
    }
}

impl InMemoryLoanStore {
    async fn matching(&self, statuses: &[LoanStatus]) -> Vec<LoanRequest> {
        self.loans
            .lock()
            .await
            .iter()
            .filter(|loan| statuses.contains(&loan.status))
            .cloned()
            .collect()
    }
}

/// Ascending by `sort_by`, then by id (matches the SQL ordering)
fn compare(a: &LoanRequest, b: &LoanRequest, sort_by: LoanSortKey) -> Ordering {
    let primary = match sort_by {
        LoanSortKey::Id => Ordering::Equal,
        LoanSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        LoanSortKey::LoanAmount => a.loan_amount.total_cmp(&b.loan_amount),
        LoanSortKey::LoanTerm => a.loan_term.cmp(&b.loan_term),
        LoanSortKey::UserEmail => a.user_email.cmp(&b.user_email),
        LoanSortKey::RequestStatus => a.status.as_str().cmp(b.status.as_str()),
    };
    primary.then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
}

/// In-memory user directory
///
/// Emails match case-insensitively. Every lookup is counted, including
/// failed ones.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    profiles: Mutex<HashMap<String, ApplicantProfile>>,
    unavailable: bool,
    calls: AtomicUsize,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory whose every lookup fails as an upstream outage
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_profile(mut self, profile: ApplicantProfile) -> Self {
        self.profiles
            .get_mut()
            .insert(profile.email.to_lowercase(), profile);
        self
    }

    /// Number of `find_by_email` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(AtomicOrdering::SeqCst)
    }
}

impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> LoanResult<Option<ApplicantProfile>> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);

        if self.unavailable {
            return Err(UpstreamError::Status {
                service: "in-memory user directory",
                status: 503,
            }
            .into());
        }

        Ok(self
            .profiles
            .lock()
            .await
            .get(&email.to_lowercase())
            .cloned())
    }
}
