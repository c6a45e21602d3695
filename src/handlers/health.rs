use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::warn;

use crate::router::RegistryState;

#[derive(Debug, Serialize)]
pub struct HealthBody {
    status: &'static str,
    database: &'static str,
}

/// GET /health -> 200 when the store answers, 503 otherwise.
pub async fn health(State(state): State<RegistryState>) -> (StatusCode, Json<HealthBody>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthBody {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            warn!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthBody {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}
