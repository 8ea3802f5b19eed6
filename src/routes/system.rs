//! System and health endpoints.

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;

use super::types::HealthResponse;

/// Check server health.
///
/// Returns server status, version, uptime, and the registered user count.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "System"
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_secs(),
        users: state.users().count(),
    })
}
