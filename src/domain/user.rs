//! User domain entity and related types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::oid::{self, ObjectId};
use serde::Serialize;
use utoipa::ToSchema;

/// Store-assigned user identifier, rendered as a 24-digit hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(ObjectId);

impl UserId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for UserId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for UserId {
    type Err = oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub fullname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user stamped with the current time.
    ///
    /// The stamp is truncated to milliseconds, the precision of a stored BSON date.
    pub fn new(fullname: String, email: String) -> Self {
        Self {
            id: UserId::new(),
            fullname,
            email,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}

/// Decide whether the user being saved may take an email.
///
/// `holder` is whoever currently has the email, `saving` is the id of the
/// record being written (`None` for a create). Re-saving the holder itself
/// is allowed.
pub fn email_available(holder: Option<&User>, saving: Option<UserId>) -> bool {
    match holder {
        None => true,
        Some(existing) => saving == Some(existing.id),
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[serde(rename = "_id")]
    #[schema(example = "56c787ccc67fc16ccc1a5e92")]
    pub id: String,
    /// Full name
    #[schema(example = "Rafael Sanchez")]
    pub fullname: String,
    /// Email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Account creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            fullname: user.fullname,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
