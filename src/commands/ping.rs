//! Ping command - Verifies the document store answers.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the ping command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    tracing::info!("MongoDB is reachable");
    db.shutdown().await;
    Ok(())
}
