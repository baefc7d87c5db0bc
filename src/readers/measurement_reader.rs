use std::collections::BTreeMap;

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::error::{ClimateError, Result};
use crate::models::{DateRange, Measurement, TemperatureStats};

#[derive(Clone)]
pub struct MeasurementReader {
    pool: SqlitePool,
}

impl MeasurementReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Precipitation keyed by date. Stations reporting on the same date
    /// collapse into one entry: the row with the highest id wins.
    pub async fn precipitation(&self, window: &DateRange) -> Result<BTreeMap<NaiveDate, Option<f64>>> {
        let rows: Vec<(NaiveDate, Option<f64>)> = sqlx::query_as(
            "SELECT date, prcp
             FROM measurement
             WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)
             ORDER BY date, id",
        )
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(rows = rows.len(), window = %window, "Read precipitation");
        Ok(rows.into_iter().collect())
    }

    /// Full measurement rows for one station inside the window
    pub async fn observations(&self, station: &str, window: &DateRange) -> Result<Vec<Measurement>> {
        let rows = sqlx::query_as::<_, Measurement>(
            "SELECT id, station, date, prcp, tobs
             FROM measurement
             WHERE station = ?1 AND date >= ?2 AND (?3 IS NULL OR date <= ?3)
             ORDER BY date, id",
        )
        .bind(station)
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(station, rows = rows.len(), window = %window, "Read observations");
        Ok(rows)
    }

    /// Max, min and mean of `tobs` computed by SQLite over the range
    pub async fn temperature_stats(&self, range: &DateRange) -> Result<TemperatureStats> {
        let (max, min, avg): (Option<f64>, Option<f64>, Option<f64>) = sqlx::query_as(
            "SELECT MAX(tobs), MIN(tobs), AVG(tobs)
             FROM measurement
             WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_one(&self.pool)
        .await?;

        let stats = TemperatureStats::new(max, min, avg);
        if stats.is_empty() {
            tracing::debug!(range = %range, "No temperature observations in range");
        }
        Ok(stats)
    }

    /// Station with the most rows; ties go to the lowest station id
    pub async fn most_active_station(&self) -> Result<String> {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT station
             FROM measurement
             GROUP BY station
             ORDER BY COUNT(*) DESC, station
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(station,)| station)
            .ok_or_else(|| ClimateError::MissingData("no measurements recorded".to_string()))
    }

    /// Earliest and latest measurement date
    pub async fn date_extent(&self) -> Result<(NaiveDate, NaiveDate)> {
        let (first, last): (Option<NaiveDate>, Option<NaiveDate>) =
            sqlx::query_as("SELECT MIN(date), MAX(date) FROM measurement")
                .fetch_one(&self.pool)
                .await?;

        first
            .zip(last)
            .ok_or_else(|| ClimateError::MissingData("no measurements recorded".to_string()))
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM measurement")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
