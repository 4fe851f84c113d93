/// Health check API route
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Stored record count; absent when the record store is unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<u64>,
}

/// GET /api/health
///
/// 200 with `"ok"` when the record store answers, 503 with `"degraded"` otherwise.
pub async fn health(State(app_state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");

    match app_state.submissions.count().await {
        Ok(records) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                records: Some(records),
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check could not reach record store: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    version,
                    records: None,
                }),
            )
        }
    }
}
