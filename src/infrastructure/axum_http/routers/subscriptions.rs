use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    application::usecases::plan_resolver::PlanResolver,
    domain::repositories::drivers::DriverRepository,
    infrastructure::{
        axum_http::{auth::AuthDriver, error_responses::AppError},
        postgres::{postgres_connection::PgPoolSquad, repositories::drivers::DriverPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let driver_repository = DriverPostgres::new(Arc::clone(&db_pool));
    let plan_resolver = PlanResolver::new(Arc::new(driver_repository));

    Router::new()
        .route("/limits", get(effective_limits))
        .with_state(Arc::new(plan_resolver))
}

pub async fn effective_limits<T>(
    State(plan_resolver): State<Arc<PlanResolver<T>>>,
    auth: AuthDriver,
) -> impl IntoResponse
where
    T: DriverRepository + Send + Sync + 'static,
{
    match plan_resolver.effective_limits_for_driver(auth.driver_id).await {
        Ok(limits) => (StatusCode::OK, Json(limits)).into_response(),
        Err(err) => AppError::Internal(err).into_response(),
    }
}
