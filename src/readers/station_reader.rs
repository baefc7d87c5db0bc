use sqlx::SqlitePool;
use validator::Validate;

use crate::error::Result;
use crate::models::Station;

#[derive(Clone)]
pub struct StationReader {
    pool: SqlitePool,
}

impl StationReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read every station in table order
    pub async fn read_stations(&self) -> Result<Vec<Station>> {
        let stations = sqlx::query_as::<_, Station>(
            "SELECT id, station, name, latitude, longitude, elevation
             FROM station
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        // Served as stored; bad rows are only reported
        for station in &stations {
            if let Err(e) = station.validate() {
                tracing::warn!(station = %station.station, error = %e, "Station failed validation");
            }
        }

        tracing::debug!(count = stations.len(), "Read stations");
        Ok(stations)
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM station")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
