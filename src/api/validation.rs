//! Request rule tables.
//!
//! One type per request shape; the extractors run these rules before any
//! handler executes:
//!
//! | Route                       | Body           | Path           |
//! |-----------------------------|----------------|----------------|
//! | `POST /api/users`           | `UserRequest`  |                |
//! | `PUT /api/users/:userId`    | `UserRequest`  | `UserIdParams` |
//! | `GET /api/users/:userId`    |                | `UserIdParams` |
//! | `DELETE /api/users/:userId` |                | `UserIdParams` |
//! | `POST /api/auth/login`      | `LoginRequest` |                |

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::config::EMAIL_PATTERN;
use crate::domain::UserId;
use crate::errors::AppResult;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).unwrap());

/// Body of create and update requests
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    /// Full name
    #[validate(length(min = 1, message = "fullname is required"))]
    #[schema(example = "Rafael Sanchez")]
    pub fullname: String,
    /// Email address
    #[validate(regex(path = *EMAIL_REGEX, message = "email must be a valid email address"))]
    #[schema(example = "user@example.com")]
    pub email: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "react")]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "express")]
    pub password: String,
}

/// `:userId` path parameter
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct UserIdParams {
    /// 24-digit hex user identifier
    #[serde(rename = "userId")]
    #[param(example = "56c787ccc67fc16ccc1a5e92")]
    #[validate(custom(function = "validate_object_id"))]
    pub user_id: String,
}

impl UserIdParams {
    /// Parse the validated parameter into an identifier
    pub fn id(&self) -> AppResult<UserId> {
        Ok(self.user_id.parse()?)
    }
}

fn validate_object_id(value: &str) -> Result<(), ValidationError> {
    if value.parse::<UserId>().is_ok() {
        return Ok(());
    }

    let mut err = ValidationError::new("object_id");
    err.message = Some("userId must be a 24-character hex string".into());
    Err(err)
}
