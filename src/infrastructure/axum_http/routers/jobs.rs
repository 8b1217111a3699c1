use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::error;

use crate::{
    application::usecases::jobs::{JobError, JobUseCase},
    domain::{repositories::jobs::JobRepository, value_objects::jobs::CreateJobModel},
    infrastructure::{
        axum_http::{
            auth::AuthDriver,
            error_responses::{AppError, ErrorResponse},
        },
        postgres::{postgres_connection::PgPoolSquad, repositories::jobs::JobPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let job_repository = JobPostgres::new(Arc::clone(&db_pool));
    let job_usecase = JobUseCase::new(Arc::new(job_repository));

    Router::new()
        .route("/", post(create_job).get(list_jobs))
        .route("/earnings", get(earnings_summary))
        .route("/backfill-refs", post(backfill_job_refs))
        .with_state(Arc::new(job_usecase))
}

fn job_error_response(err: JobError) -> Response {
    let status = err.status_code();
    let message = match err {
        JobError::Internal(ref source) => {
            error!("jobs router: {:#}", source);
            "Internal server error".to_string()
        }
        ref other => other.to_string(),
    };

    (
        status,
        Json(ErrorResponse {
            code: status.as_u16(),
            message,
        }),
    )
        .into_response()
}

pub async fn create_job<T>(
    State(job_usecase): State<Arc<JobUseCase<T>>>,
    auth: AuthDriver,
    Json(create_job_model): Json<CreateJobModel>,
) -> impl IntoResponse
where
    T: JobRepository + Send + Sync + 'static,
{
    match job_usecase.create_job(auth.driver_id, create_job_model).await {
        Ok(job) => (StatusCode::CREATED, Json(job)).into_response(),
        Err(err) => job_error_response(err),
    }
}

pub async fn list_jobs<T>(
    State(job_usecase): State<Arc<JobUseCase<T>>>,
    auth: AuthDriver,
) -> impl IntoResponse
where
    T: JobRepository + Send + Sync + 'static,
{
    match job_usecase.list_jobs(auth.driver_id).await {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(err) => job_error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct EarningsQuery {
    pub from: String,
    pub to: String,
}

pub async fn earnings_summary<T>(
    State(job_usecase): State<Arc<JobUseCase<T>>>,
    auth: AuthDriver,
    Query(range): Query<EarningsQuery>,
) -> impl IntoResponse
where
    T: JobRepository + Send + Sync + 'static,
{
    match job_usecase
        .earnings_summary(auth.driver_id, &range.from, &range.to)
        .await
    {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(err) => job_error_response(err),
    }
}

/// One-time migration trigger; numbering legacy rows is an operator action.
pub async fn backfill_job_refs<T>(
    State(job_usecase): State<Arc<JobUseCase<T>>>,
    auth: AuthDriver,
) -> impl IntoResponse
where
    T: JobRepository + Send + Sync + 'static,
{
    if !auth.is_admin() {
        return AppError::Forbidden.into_response();
    }

    match job_usecase.backfill_job_refs().await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => job_error_response(err),
    }
}
