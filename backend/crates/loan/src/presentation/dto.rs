//! API DTOs (Data Transfer Objects)

use crate::application::submit_loan::SubmitLoanInput;
use crate::domain::entities::{EvaluationOutcome, LoanRequest};
use crate::domain::value_objects::{Classification, LoanStatus};
use chrono::{DateTime, Utc};
use kernel::page::Page;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request for POST /api/v1/loans
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLoanRequest {
    pub user_email: String,
    pub loan_amount: f64,
    pub loan_term: i32,
    #[serde(default)]
    pub loan_type: Option<String>,
    #[serde(default)]
    pub interest_rate: Option<f64>,
    #[serde(default)]
    pub base_salary: Option<f64>,
    #[serde(default)]
    pub total_monthly_debt: Option<f64>,
}

impl From<SubmitLoanRequest> for SubmitLoanInput {
    fn from(req: SubmitLoanRequest) -> Self {
        Self {
            user_email: req.user_email,
            loan_amount: req.loan_amount,
            loan_term: req.loan_term,
            loan_type: req.loan_type,
            interest_rate: req.interest_rate,
            base_salary: req.base_salary,
            total_monthly_debt: req.total_monthly_debt,
        }
    }
}

/// A stored loan request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResponse {
    pub id: Uuid,
    pub user_email: String,
    pub loan_amount: f64,
    pub loan_term: i32,
    pub loan_type: Option<String>,
    pub interest_rate: Option<f64>,
    pub request_status: LoanStatus,
    pub base_salary: Option<f64>,
    pub total_monthly_debt: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<LoanRequest> for LoanResponse {
    fn from(loan: LoanRequest) -> Self {
        Self {
            id: loan.id.into_uuid(),
            user_email: loan.user_email,
            loan_amount: loan.loan_amount,
            loan_term: loan.loan_term,
            loan_type: loan.loan_type,
            interest_rate: loan.interest_rate,
            request_status: loan.status,
            base_salary: loan.base_salary,
            total_monthly_debt: loan.total_monthly_debt,
            created_at: loan.created_at,
        }
    }
}

/// Response for GET /api/v1/loans/{id}/evaluation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    pub evaluation_result: Classification,
    pub loan_amount: f64,
    pub loan_term: i32,
}

impl From<EvaluationOutcome> for EvaluationResponse {
    fn from(outcome: EvaluationOutcome) -> Self {
        Self {
            evaluation_result: outcome.classification,
            loan_amount: outcome.loan_amount,
            loan_term: outcome.loan_term,
        }
    }
}

/// Query for GET /api/v1/loans/manual-review
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualReviewQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    #[serde(alias = "sortby")]
    pub sort_by: Option<String>,
}

/// One page of results
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub current_page: u32,
    pub page_size: u32,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            content: page.items,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            current_page: page.page,
            page_size: page.size,
        }
    }
}
