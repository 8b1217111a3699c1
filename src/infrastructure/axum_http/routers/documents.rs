use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    application::usecases::documents::DocumentUseCase,
    domain::repositories::driver_documents::DriverDocumentRepository,
    infrastructure::{
        axum_http::{auth::AuthDriver, error_responses::AppError},
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::driver_documents::DriverDocumentPostgres,
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let document_repository = DriverDocumentPostgres::new(Arc::clone(&db_pool));
    let document_usecase = DocumentUseCase::new(Arc::new(document_repository));

    Router::new()
        .route("/", get(list_documents))
        .with_state(Arc::new(document_usecase))
}

pub async fn list_documents<T>(
    State(document_usecase): State<Arc<DocumentUseCase<T>>>,
    auth: AuthDriver,
) -> impl IntoResponse
where
    T: DriverDocumentRepository + Send + Sync + 'static,
{
    match document_usecase.list_with_status(auth.driver_id).await {
        Ok(documents) => (StatusCode::OK, Json(documents)).into_response(),
        Err(err) => AppError::Internal(err).into_response(),
    }
}
