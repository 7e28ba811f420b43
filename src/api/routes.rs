//! Application route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, health, user_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::errors::AppError;

/// Build the router: the user API under `/api`, health and docs at the root.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/auth", auth_routes())
        .nest("/api/users", user_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    "Welcome to the User API"
}

/// Unknown paths get the same `{"message"}` body as every other error
async fn not_found() -> AppError {
    AppError::NotFound
}
