//! HTTP Handlers

use crate::application::config::LoanConfig;
use crate::application::orchestrator::LoanOrchestrator;
use crate::domain::repository::{LoanStore, UserDirectory};
use crate::domain::value_objects::LoanSortKey;
use crate::presentation::dto::{
    EvaluationResponse, LoanResponse, ManualReviewQuery, PageResponse, SubmitLoanRequest,
};
use crate::presentation::middleware::AuthenticatedUser;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use kernel::error::app_error::{AppError, AppResult};
use kernel::id::LoanId;
use kernel::page::PageRequest;
use std::sync::Arc;

/// Shared state for loan handlers
pub struct LoanAppState<S, D>
where
    S: LoanStore,
    D: UserDirectory,
{
    pub orchestrator: Arc<LoanOrchestrator<S, D>>,
    pub directory: Arc<D>,
    pub config: Arc<LoanConfig>,
}

impl<S, D> LoanAppState<S, D>
where
    S: LoanStore,
    D: UserDirectory,
{
    pub fn new(store: Arc<S>, directory: Arc<D>, config: Arc<LoanConfig>) -> Self {
        Self {
            orchestrator: Arc::new(LoanOrchestrator::new(store, directory.clone())),
            directory,
            config,
        }
    }
}

impl<S, D> Clone for LoanAppState<S, D>
where
    S: LoanStore,
    D: UserDirectory,
{
    fn clone(&self) -> Self {
        Self {
            orchestrator: self.orchestrator.clone(),
            directory: self.directory.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /api/v1/loans
pub async fn submit_loan<S, D>(
    State(state): State<LoanAppState<S, D>>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<SubmitLoanRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<LoanResponse>)>
where
    S: LoanStore + Send + Sync + 'static,
    D: UserDirectory + Send + Sync + 'static,
{
    user.require_role(&state.config.applicant_role)?;
    let Json(req) = payload?;

    let saved = state.orchestrator.submit(req.into(), &user.email).await?;

    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// GET /api/v1/loans/{id}/evaluation
pub async fn evaluate_loan<S, D>(
    State(state): State<LoanAppState<S, D>>,
    Path(id): Path<String>,
) -> AppResult<Json<EvaluationResponse>>
where
    S: LoanStore + Send + Sync + 'static,
    D: UserDirectory + Send + Sync + 'static,
{
    let loan_id: LoanId = id.parse()?;

    let outcome = state
        .orchestrator
        .evaluate(loan_id)
        .await?
        .ok_or_else(|| AppError::not_found("Applicant for this loan request was not found"))?;

    Ok(Json(outcome.into()))
}

/// GET /api/v1/loans/manual-review
pub async fn list_manual_review<S, D>(
    State(state): State<LoanAppState<S, D>>,
    Extension(user): Extension<AuthenticatedUser>,
    query: Result<Query<ManualReviewQuery>, QueryRejection>,
) -> AppResult<Json<PageResponse<LoanResponse>>>
where
    S: LoanStore + Send + Sync + 'static,
    D: UserDirectory + Send + Sync + 'static,
{
    user.require_role(&state.config.reviewer_role)?;
    let Query(query) = query?;

    let sort_by = match query.sort_by.as_deref() {
        Some(key) => key.parse::<LoanSortKey>().map_err(|e| {
            AppError::from(e).with_action(
                "Sort by one of: id, createdAt, loanAmount, loanTerm, userEmail, requestStatus",
            )
        })?,
        None => state.config.default_sort_by,
    };
    let request = PageRequest::new(
        query.page.unwrap_or(0),
        query.size.unwrap_or(state.config.default_page_size),
        sort_by,
    )?;

    let page = state.orchestrator.list_manual_review(&request).await?;

    Ok(Json(page.map(LoanResponse::from).into()))
}
