//! Health check handler.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

/// Overall service health
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthReport {
    /// `healthy` or `degraded`
    #[schema(example = "healthy")]
    pub status: String,
    pub database: StoreHealth,
}

/// Result of probing the document store
#[derive(Debug, Serialize, ToSchema)]
pub struct StoreHealth {
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    fn status_code(&self) -> StatusCode {
        if self.database.reachable {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Report whether the document store answers a ping
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Document store reachable", body = HealthReport),
        (status = 503, description = "Document store unreachable", body = HealthReport)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let database = match state.store.ping().await {
        Ok(()) => StoreHealth {
            reachable: true,
            error: None,
        },
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            StoreHealth {
                reachable: false,
                error: Some(e.to_string()),
            }
        }
    };

    let report = HealthReport {
        status: if database.reachable { "healthy" } else { "degraded" }.to_string(),
        database,
    };

    (report.status_code(), Json(report))
}
