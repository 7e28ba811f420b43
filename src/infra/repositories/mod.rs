//! Repository layer - User persistence in the document store
//!
//! `UserRepository` is the seam the service layer depends on;
//! `UserStore` is its MongoDB implementation.

pub(crate) mod entities;
mod user_repository;

pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
