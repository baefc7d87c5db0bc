use serde::{Deserialize, Serialize};

/// Aggregates over the `tobs` column. Every field is `None` when no row matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    pub max_temperature: Option<f64>,
    pub min_temperature: Option<f64>,
    pub avg_temperature: Option<f64>,
}

impl TemperatureStats {
    pub fn new(max: Option<f64>, min: Option<f64>, avg: Option<f64>) -> Self {
        Self {
            max_temperature: max,
            min_temperature: min,
            avg_temperature: avg,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max_temperature.is_none()
            && self.min_temperature.is_none()
            && self.avg_temperature.is_none()
    }
}

/// Response envelope for the temperature endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    pub temperature_statistics: TemperatureStats,
}

impl From<TemperatureStats> for TemperatureSummary {
    fn from(temperature_statistics: TemperatureStats) -> Self {
        Self {
            temperature_statistics,
        }
    }
}
