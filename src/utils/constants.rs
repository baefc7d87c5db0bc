/// Date format accepted in route parameters and stored in the `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Response body for a route date that does not parse
pub const INVALID_DATE_MESSAGE: &str = "Invalid date format. Please use YYYY-MM-DD.";

/// Default observation scope: the most active station and the final year of the dataset
pub const DEFAULT_STATION: &str = "USC00519281";
pub const DEFAULT_WINDOW_START: &str = "2016-08-23";
pub const DEFAULT_WINDOW_END: &str = "2017-08-23";

/// Length of a derived observation window
pub const DERIVED_WINDOW_MONTHS: u32 = 12;

/// Database defaults
pub const DEFAULT_DATABASE_PATH: &str = "Resources/hawaii.sqlite";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;

/// Server defaults
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration sources
pub const DEFAULT_CONFIG_FILE: &str = "hawaii-climate.toml";
pub const ENV_PREFIX: &str = "HAWAII";

/// API routes
pub const ROUTE_PRECIPITATION: &str = "/api/v1.0/hawaii_precipitation";
pub const ROUTE_STATIONS: &str = "/api/v1.0/hawaii_stations";
pub const ROUTE_TOBS: &str = "/api/v1.0/hawaii_tobs";
pub const ROUTE_TEMP_FROM: &str = "/api/v1.0/hawaii_temp/:start";
pub const ROUTE_TEMP_BETWEEN: &str = "/api/v1.0/hawaii_temp/:start/:end";
