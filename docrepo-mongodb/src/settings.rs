//! Deployment settings and client bootstrap

use docrepo_core::{RepositoryError, Result};
use mongodb::{bson::doc, Client, Database};
use serde::Deserialize;
use tracing::{debug, info};

/// Connection settings for a MongoDB deployment.
///
/// Deserializable from any serde-compatible configuration source; missing
/// fields fall back to a local default deployment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MongoSettings {
    /// Host the server listens on.
    pub host: String,
    /// Port the server listens on.
    pub port: u16,
    /// Database the repositories operate in.
    pub database: String,
}

impl Default for MongoSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            database: "docrepo".to_string(),
        }
    }
}

impl MongoSettings {
    /// Settings for a local default deployment with the given database.
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Self::default()
        }
    }

    /// The `mongodb://` connection string for these settings.
    pub fn connection_string(&self) -> String {
        format!("mongodb://{}:{}", self.host, self.port)
    }
}

/// Build a client from `settings` and return a handle to the configured
/// database.
///
/// Verifies the deployment is reachable with a `ping` before returning.
/// Lifecycle beyond this bootstrap (pooling, reconnects) is the driver's
/// concern.
///
/// # Errors
///
/// Returns [`RepositoryError::Storage`] when the client cannot be built or
/// the deployment does not answer the ping.
pub async fn connect(settings: &MongoSettings) -> Result<Database> {
    info!(
        host = %settings.host,
        port = settings.port,
        database = %settings.database,
        "Connecting to MongoDB"
    );

    let client = Client::with_uri_str(settings.connection_string())
        .await
        .map_err(RepositoryError::storage)?;
    let database = client.database(&settings.database);

    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(RepositoryError::storage)?;
    debug!(database = %settings.database, "MongoDB connection established");

    Ok(database)
}
