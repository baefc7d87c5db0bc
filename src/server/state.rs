use std::time::Instant;

use sqlx::SqlitePool;

use crate::config::AnalysisSettings;
use crate::error::Result;
use crate::models::ObservationScope;
use crate::readers::{MeasurementReader, StationReader};
use crate::utils::trailing_year;

/// Shared application state.
pub struct AppState {
    pub stations: StationReader,
    pub measurements: MeasurementReader,
    /// Station and window behind the precipitation and tobs routes.
    pub scope: ObservationScope,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(pool: SqlitePool, scope: ObservationScope) -> Self {
        Self {
            stations: StationReader::new(pool.clone()),
            measurements: MeasurementReader::new(pool),
            scope,
            start_time: Instant::now(),
        }
    }

    /// Builds state, deriving the observation scope from the data when configured to.
    pub async fn build(pool: SqlitePool, analysis: &AnalysisSettings) -> Result<Self> {
        let measurements = MeasurementReader::new(pool.clone());
        let scope = resolve_scope(&measurements, analysis).await?;

        tracing::info!(
            station = %scope.station,
            window = %scope.window,
            derived = analysis.derive_from_data,
            "Observation scope resolved"
        );

        Ok(Self::new(pool, scope))
    }
}

pub async fn resolve_scope(
    measurements: &MeasurementReader,
    analysis: &AnalysisSettings,
) -> Result<ObservationScope> {
    if !analysis.derive_from_data {
        return Ok(ObservationScope::new(
            analysis.station.clone(),
            analysis.window()?,
        ));
    }

    let station = measurements.most_active_station().await?;
    let (_, last_date) = measurements.date_extent().await?;
    Ok(ObservationScope::new(station, trailing_year(last_date)?))
}
