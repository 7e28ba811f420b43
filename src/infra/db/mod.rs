//! Document store connection and lifecycle.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::{bson::doc, options::ClientOptions, Client, Collection};

use crate::config::{Config, MONGODB_CONNECT_TIMEOUT_SECS, MONGODB_SERVER_SELECTION_TIMEOUT_SECS};
use crate::errors::AppResult;

/// Store connectivity probe used by the health endpoint.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> AppResult<()>;
}

/// Database wrapper for connection management.
///
/// Opened once at startup, handed to repositories explicitly,
/// and shut down after the server stops.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database: mongodb::Database,
}

impl Database {
    /// Connect to MongoDB and verify the server answers a ping.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.mongodb_url).await?;
        options.connect_timeout = Some(Duration::from_secs(MONGODB_CONNECT_TIMEOUT_SECS));
        options.server_selection_timeout =
            Some(Duration::from_secs(MONGODB_SERVER_SELECTION_TIMEOUT_SECS));
        options.app_name = config.mongodb_app_name.clone();

        let client = Client::with_options(options)?;
        let database = client.database(&config.mongodb_database);
        let db = Self { client, database };

        db.ping().await?;
        tracing::info!(database = %config.mongodb_database, "Connected to MongoDB");

        Ok(db)
    }

    /// Get a typed handle to a collection.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Close pooled connections and stop background monitoring.
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB connection closed");
    }
}

#[async_trait]
impl HealthCheck for Database {
    async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
