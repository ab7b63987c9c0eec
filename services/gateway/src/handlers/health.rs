use axum::Json;
use serde::Serialize;

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `GET /health`
///
/// Returns 200 whenever the process is up; no further semantics.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
