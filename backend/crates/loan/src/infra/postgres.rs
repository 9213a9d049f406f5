//! PostgreSQL Repository Implementation

use crate::domain::entities::{LoanRequest, NewLoanRequest};
use crate::domain::repository::LoanStore;
use crate::domain::value_objects::{LoanSortKey, LoanStatus};
use crate::error::{LoanError, LoanResult, UpstreamError};
use kernel::id::LoanId;
use kernel::page::PageRequest;
use sqlx::PgPool;
use uuid::Uuid;

const LOAN_COLUMNS: &str = r#"
    id,
    user_email,
    loan_amount,
    loan_term,
    loan_type,
    interest_rate,
    request_status,
    base_salary,
    total_monthly_debt,
    created_at
"#;

/// PostgreSQL-backed loan store
#[derive(Clone)]
pub struct PgLoanStore {
    pool: PgPool,
}

impl PgLoanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl LoanStore for PgLoanStore {
    async fn save(&self, loan: &NewLoanRequest) -> LoanResult<LoanRequest> {
        let sql = format!(
            r#"
            INSERT INTO loan_requests (
                user_email,
                loan_amount,
                loan_term,
                loan_type,
                interest_rate,
                request_status,
                base_salary,
                total_monthly_debt
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {LOAN_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, LoanRow>(&sql)
            .bind(&loan.user_email)
            .bind(loan.loan_amount)
            .bind(loan.loan_term)
            .bind(&loan.loan_type)
            .bind(loan.interest_rate)
            .bind(loan.status.as_str())
            .bind(loan.base_salary)
            .bind(loan.total_monthly_debt)
            .fetch_one(&self.pool)
            .await?;

        let saved = row.into_loan()?;
        tracing::debug!(loan_id = %saved.id, "Loan request inserted");
        Ok(saved)
    }

    async fn find_by_id(&self, id: LoanId) -> LoanResult<Option<LoanRequest>> {
        let sql = format!("SELECT {LOAN_COLUMNS} FROM loan_requests WHERE id = $1");

        sqlx::query_as::<_, LoanRow>(&sql)
            .bind(id.into_uuid())
            .fetch_optional(&self.pool)
            .await?
            .map(LoanRow::into_loan)
            .transpose()
    }

    async fn find_by_status(&self, statuses: &[LoanStatus]) -> LoanResult<Vec<LoanRequest>> {
        let sql = format!(
            "SELECT {LOAN_COLUMNS} FROM loan_requests WHERE request_status = ANY($1) ORDER BY id ASC"
        );

        sqlx::query_as::<_, LoanRow>(&sql)
            .bind(status_codes(statuses))
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(LoanRow::into_loan)
            .collect()
    }

    async fn find_by_status_paginated(
        &self,
        statuses: &[LoanStatus],
        page: &PageRequest<LoanSortKey>,
    ) -> LoanResult<Vec<LoanRequest>> {
        let offset = i64::try_from(page.offset())
            .map_err(|_| LoanError::invalid("Page index is out of range"))?;

        let sql = format!(
            "SELECT {LOAN_COLUMNS} FROM loan_requests WHERE request_status = ANY($1) {} LIMIT $2 OFFSET $3",
            order_by_clause(*page.sort_by())
        );

        sqlx::query_as::<_, LoanRow>(&sql)
            .bind(status_codes(statuses))
            .bind(i64::from(page.size()))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(LoanRow::into_loan)
            .collect()
    }

    async fn count_by_status(&self, statuses: &[LoanStatus]) -> LoanResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM loan_requests WHERE request_status = ANY($1)",
        )
        .bind(status_codes(statuses))
        .fetch_one(&self.pool)
        .await?;

        u64::try_from(count)
            .map_err(|_| UpstreamError::Corrupt(format!("negative row count {count}")).into())
    }
}

fn status_codes(statuses: &[LoanStatus]) -> Vec<&'static str> {
    statuses.iter().map(LoanStatus::as_str).collect()
}

/// Ascending by the requested column; id breaks ties so pages are stable
fn order_by_clause(sort_by: LoanSortKey) -> String {
    match sort_by {
        LoanSortKey::Id => "ORDER BY id ASC".to_string(),
        other => format!("ORDER BY {} ASC, id ASC", other.column()),
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct LoanRow {
    id: Uuid,
    user_email: String,
    loan_amount: f64,
    loan_term: i32,
    loan_type: Option<String>,
    interest_rate: Option<f64>,
    request_status: String,
    base_salary: Option<f64>,
    total_monthly_debt: Option<f64>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl LoanRow {
    fn into_loan(self) -> LoanResult<LoanRequest> {
        let status = LoanStatus::from_code(&self.request_status).ok_or_else(|| {
            UpstreamError::Corrupt(format!(
                "loan request {} has unknown status {}",
                self.id, self.request_status
            ))
        })?;

        Ok(LoanRequest {
            id: LoanId::from_uuid(self.id),
            user_email: self.user_email,
            loan_amount: self.loan_amount,
            loan_term: self.loan_term,
            loan_type: self.loan_type,
            interest_rate: self.interest_rate,
            status,
            base_salary: self.base_salary,
            total_monthly_debt: self.total_monthly_debt,
            created_at: self.created_at,
        })
    }
}
