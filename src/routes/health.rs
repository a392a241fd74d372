use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;

use crate::db;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    database: String,
    timestamp: i64,
}

// GET /health - Liveness plus a database round trip
pub async fn health_check(State(pool): State<SqlitePool>) -> (StatusCode, Json<HealthResponse>) {
    let database = match db::ping(&pool).await {
        Ok(()) => "ok",
        Err(err) => {
            tracing::warn!(error = %err, "Database ping failed");
            "unavailable"
        }
    };

    let response = HealthResponse {
        status: "ok".to_string(),
        database: database.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    (StatusCode::OK, Json(response))
}
