//! List Manual Review Use Case

use crate::domain::entities::LoanRequest;
use crate::domain::repository::LoanStore;
use crate::domain::value_objects::{LoanSortKey, LoanStatus};
use crate::error::LoanResult;
use kernel::page::{Page, PageRequest};
use std::sync::Arc;

/// List Manual Review Use Case
pub struct ListManualReviewUseCase<S>
where
    S: LoanStore,
{
    loan_store: Arc<S>,
}

impl<S> ListManualReviewUseCase<S>
where
    S: LoanStore,
{
    pub fn new(loan_store: Arc<S>) -> Self {
        Self { loan_store }
    }

    /// One page of the reviewer queue plus the queue's total size
    ///
    /// The page and the count are read independently, so a concurrent write
    /// can make them disagree.
    pub async fn execute(&self, request: &PageRequest<LoanSortKey>) -> LoanResult<Page<LoanRequest>> {
        let statuses = LoanStatus::MANUAL_REVIEW_QUEUE;

        tracing::info!(
            page = request.page(),
            size = request.size(),
            sort_by = request.sort_by().column(),
            "Listing manual review queue"
        );

        let (items, total) = tokio::try_join!(
            self.loan_store.find_by_status_paginated(&statuses, request),
            self.loan_store.count_by_status(&statuses),
        )?;

        tracing::info!(total = total, returned = items.len(), "Manual review queue listed");

        Ok(Page::new(items, total, request))
    }
}
