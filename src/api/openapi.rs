//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::health_handler::{self, HealthReport, StoreHealth};
use crate::api::handlers::{auth_handler, user_handler};
use crate::api::validation::{LoginRequest, UserRequest};
use crate::domain::UserResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the User API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "0.1.0",
        description = "User management REST service backed by MongoDB",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Authentication endpoints
        auth_handler::login,
        health_handler::health,
    ),
    components(
        schemas(
            UserResponse,
            UserRequest,
            LoginRequest,
            MessageResponse,
            HealthReport,
            StoreHealth,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Authentication", description = "Login stub"),
        (name = "Health", description = "Document store connectivity")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_user_routes_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/users"));
        assert!(paths.contains_key("/api/users/{userId}"));
        assert!(paths.contains_key("/api/auth/login"));
        assert!(paths.contains_key("/health"));
    }
}
