pub mod dataset;
pub mod measurement;
pub mod station;
pub mod temperature;

pub use dataset::{DatasetSummary, ObservationScope};
pub use measurement::{DateRange, Measurement};
pub use station::Station;
pub use temperature::{TemperatureStats, TemperatureSummary};
