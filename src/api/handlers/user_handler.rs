//! User handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::api::validation::{UserIdParams, UserRequest};
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::types::{ListParams, MessageResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:userId", get(get_user).put(update_user).delete(delete_user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 409, description = "Email already taken", body = MessageResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .create_user(payload.fullname, payload.email)
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// List users, newest first
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(ListParams),
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>),
        (status = 400, description = "Invalid skip or limit", body = MessageResponse)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users(params).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{userId}",
    tag = "Users",
    params(UserIdParams),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 400, description = "Malformed user ID", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<UserIdParams>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(params.id()?).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Update user details
#[utoipa::path(
    put,
    path = "/api/users/{userId}",
    tag = "Users",
    params(UserIdParams),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 409, description = "Email already taken", body = MessageResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<UserIdParams>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .update_user(params.id()?, payload.fullname, payload.email)
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete user, returning the removed record
#[utoipa::path(
    delete,
    path = "/api/users/{userId}",
    tag = "Users",
    params(UserIdParams),
    responses(
        (status = 200, description = "User deleted", body = UserResponse),
        (status = 400, description = "Malformed user ID", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<UserIdParams>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.delete_user(params.id()?).await?;
    Ok(Json(UserResponse::from(user)))
}
