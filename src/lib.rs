//! User API - user management REST service backed by MongoDB
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity and identifier
//! - **services**: User use cases (uniqueness, not-found mapping)
//! - **infra**: Document store connection and repositories
//! - **api**: HTTP handlers, validation, and routes
//! - **types**: Shared types (list parameters, message bodies)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! user-api serve --port 3000
//!
//! # Check the document store connection
//! user-api ping
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserId};
pub use errors::{AppError, AppResult};
