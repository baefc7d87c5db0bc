pub mod database;
pub mod measurement_reader;
pub mod station_reader;

#[cfg(test)]
pub(crate) mod fixtures;

pub use database::Database;
pub use measurement_reader::MeasurementReader;
pub use station_reader::StationReader;
