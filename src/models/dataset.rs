use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::DateRange;

/// Station and date window served by the fixed precipitation and tobs routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservationScope {
    pub station: String,
    pub window: DateRange,
}

impl ObservationScope {
    pub fn new(station: impl Into<String>, window: DateRange) -> Self {
        Self {
            station: station.into(),
            window,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub station_count: i64,
    pub measurement_count: i64,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub most_active_station: String,
    pub scope: ObservationScope,
}

impl DatasetSummary {
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset Summary:")?;
        writeln!(f, "  Stations: {}", self.station_count)?;
        writeln!(f, "  Measurements: {}", self.measurement_count)?;
        writeln!(f, "  Date range: {} to {}", self.first_date, self.last_date)?;
        writeln!(f, "  Most active station: {}", self.most_active_station)?;
        write!(
            f,
            "  Observation scope: {} ({})",
            self.scope.station, self.scope.window
        )
    }
}
