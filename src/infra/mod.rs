//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Document store connection
//! - Repositories

pub mod db;
pub mod repositories;

pub use db::{Database, HealthCheck};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
