//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::errors::AppResult;
use crate::infra::{Database, HealthCheck, UserStore};
use crate::services::{UserManager, UserService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Document store probe for `/health`
    pub store: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Wire the MongoDB-backed repository and service from an open connection.
    ///
    /// Ensures the collection indexes exist before any request is served.
    pub async fn from_database(database: Arc<Database>) -> AppResult<Self> {
        let users = Arc::new(UserStore::new(&database));
        users.ensure_indexes().await?;

        Ok(Self {
            user_service: Arc::new(UserManager::new(users)),
            store: database,
        })
    }

    /// Create new application state with manually injected services.
    pub fn new(user_service: Arc<dyn UserService>, store: Arc<dyn HealthCheck>) -> Self {
        Self {
            user_service,
            store,
        }
    }
}
