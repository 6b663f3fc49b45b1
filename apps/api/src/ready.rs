use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::AppError;
use sea_orm::DatabaseConnection;
use serde_json::json;

/// Readiness endpoint handler.
///
/// Unlike `/health`, this pings the database; a failed ping returns 503 so
/// orchestrators stop routing traffic until the store is reachable again.
pub async fn ready_handler(State(db): State<DatabaseConnection>) -> Response {
    match database::postgres::check_connection(&db).await {
        Ok(()) => Json(json!({ "status": "ready" })).into_response(),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            AppError::ServiceUnavailable("Database unreachable".to_string()).into_response()
        }
    }
}

/// Router exposing `/ready` backed by the given connection.
pub fn ready_router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready_handler)).with_state(db)
}
