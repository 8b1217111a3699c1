use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    domain::repositories::drivers::DriverRepository,
    infrastructure::{
        axum_http::{auth::AuthDriver, error_responses::AppError},
        postgres::{postgres_connection::PgPoolSquad, repositories::drivers::DriverPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let driver_repository = DriverPostgres::new(Arc::clone(&db_pool));

    Router::new()
        .route("/me", get(my_profile))
        .with_state(Arc::new(driver_repository))
}

pub async fn my_profile<T>(
    State(driver_repository): State<Arc<T>>,
    auth: AuthDriver,
) -> impl IntoResponse
where
    T: DriverRepository + Send + Sync + 'static,
{
    match driver_repository.find_by_id(auth.driver_id).await {
        Ok(driver) => (StatusCode::OK, Json(driver)).into_response(),
        Err(err) => AppError::Internal(err).into_response(),
    }
}
