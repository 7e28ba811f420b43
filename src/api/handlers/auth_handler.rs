//! Authentication handlers.

use axum::{response::Json, routing::post, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::validation::LoginRequest;
use crate::api::AppState;
use crate::errors::{AppError, AppResult};
use crate::types::MessageResponse;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login stub.
///
/// Only the request shape is checked; there is no credential store behind it.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 501, description = "Authentication is not implemented", body = MessageResponse)
    )
)]
pub async fn login(
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<MessageResponse>> {
    tracing::debug!(username = %payload.username, "Login attempted");
    Err(AppError::NotImplemented)
}
