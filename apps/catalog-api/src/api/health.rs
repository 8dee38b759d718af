//! Readiness endpoint
//!
//! Liveness (`/health`) comes from `axum_helpers::health_router`; readiness
//! additionally pings the database.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use sea_orm::DatabaseConnection;
use serde_json::json;

async fn ready(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match database::postgres::check_health(&db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"status": "ready", "database": "connected"})),
        ),
        Err(e) => {
            tracing::error!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "not ready", "database": "disconnected"})),
            )
        }
    }
}

pub fn router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready)).with_state(db)
}
