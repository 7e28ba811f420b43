//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Listing
// =============================================================================

/// Number of records skipped when `skip` is omitted
pub const DEFAULT_LIST_SKIP: u64 = 0;

/// Number of records returned when `limit` is omitted
pub const DEFAULT_LIST_LIMIT: u64 = 50;

/// Upper bound applied to `limit` to prevent excessive queries
pub const MAX_LIST_LIMIT: u64 = 100;

/// Largest `skip` the store accepts (it is sent as a signed 64-bit integer)
pub const MAX_LIST_SKIP: u64 = i64::MAX as u64;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Document Store (MongoDB)
// =============================================================================

/// Default MongoDB connection URL (for development)
pub const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";

/// Default database name
pub const DEFAULT_MONGODB_DATABASE: &str = "user_api";

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";

/// Name of the unique index on `email`
pub const EMAIL_UNIQUE_INDEX: &str = "email_unique";

/// Server error code for a duplicate key on a unique index
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// Connection timeout in seconds
pub const MONGODB_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Server selection timeout in seconds
pub const MONGODB_SERVER_SELECTION_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Validation
// =============================================================================

/// Accepted shape of an email address (`local@domain.tld`)
pub const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$";

// =============================================================================
// Messages
// =============================================================================

/// Message returned when the email is held by another user
pub const EMAIL_TAKEN_MESSAGE: &str = "The email address is already taken!";
