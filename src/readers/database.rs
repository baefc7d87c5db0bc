use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseSettings;
use crate::error::{ClimateError, Result};

/// Opens the read-only connection pool shared by every request.
pub struct Database;

impl Database {
    pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool> {
        if !settings.path.is_file() {
            return Err(ClimateError::DatabaseNotFound(settings.path.clone()));
        }

        let options = SqliteConnectOptions::new()
            .filename(&settings.path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        tracing::info!(
            path = %settings.path.display(),
            max_connections = settings.max_connections,
            "Opened climate database"
        );

        Ok(pool)
    }
}
