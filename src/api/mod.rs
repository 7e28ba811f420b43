//! API layer - HTTP handlers and request validation
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - Validating extractors and request rule tables
//! - Route definitions

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod validation;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
