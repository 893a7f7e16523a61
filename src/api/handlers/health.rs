//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health with a storage probe.
///
/// # Endpoint
///
/// `GET /health` — public.
///
/// # Response Codes
///
/// - **200 OK**: storage reachable
/// - **503 Service Unavailable**: storage probe failed
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage_check = check_storage(&state).await;

    let healthy = storage_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            storage: storage_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes storage with a list query.
async fn check_storage(state: &AppState) -> CheckStatus {
    match state.genre_service.list_genres().await {
        Ok(genres) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Connected, {} genres", genres.len())),
        },
        Err(_) => CheckStatus {
            status: "error".to_string(),
            message: Some("Storage query failed".to_string()),
        },
    }
}
