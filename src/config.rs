//! Application configuration.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. TOML file (`hawaii-climate.toml`, or the `--config` path)
//! 3. Environment variables (`HAWAII_<SECTION>__<KEY>`)
//! 4. Command-line overrides

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::Result;
use crate::models::DateRange;
use crate::utils::constants::*;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub server: ServerSettings,

    #[validate(nested)]
    pub database: DatabaseSettings,

    #[validate(nested)]
    pub analysis: AnalysisSettings,

    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerSettings {
    #[validate(length(min = 1))]
    pub host: String,

    #[validate(range(min = 1))]
    pub port: u16,

    pub cors: bool,
}

impl ServerSettings {
    /// `host:port`, resolved when the listener binds.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DatabaseSettings {
    pub path: PathBuf,

    #[validate(range(min = 1, max = 64))]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_window"))]
pub struct AnalysisSettings {
    #[validate(length(min = 1))]
    pub station: String,

    pub window_start: NaiveDate,

    pub window_end: NaiveDate,

    /// Derive the station and window from the data at startup instead.
    pub derive_from_data: bool,
}

impl AnalysisSettings {
    pub fn window(&self) -> Result<DateRange> {
        DateRange::between(self.window_start, self.window_end)
    }
}

fn validate_window(settings: &AnalysisSettings) -> std::result::Result<(), ValidationError> {
    if settings.window_start > settings.window_end {
        let mut error = ValidationError::new("window_order");
        error.message = Some("window_start must not be after window_end".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

/// Values supplied on the command line. `None` leaves the lower layers untouched.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub database: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub cors: Option<bool>,
    pub json_logs: Option<bool>,
}

impl AppConfig {
    /// Loads and validates configuration from every source.
    ///
    /// An explicit `config_file` must exist; the default file is optional.
    pub fn load(config_file: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = Self::defaults()?
            .add_source(file)
            .add_source(Self::environment());

        Self::apply(builder, overrides)
    }

    /// `HAWAII_<SECTION>__<KEY>` variables, e.g. `HAWAII_SERVER__PORT`
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.cors", true)?
            .set_default("database.path", DEFAULT_DATABASE_PATH)?
            .set_default("database.max_connections", i64::from(DEFAULT_MAX_CONNECTIONS))?
            .set_default("analysis.station", DEFAULT_STATION)?
            .set_default("analysis.window_start", DEFAULT_WINDOW_START)?
            .set_default("analysis.window_end", DEFAULT_WINDOW_END)?
            .set_default("analysis.derive_from_data", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?)
    }

    fn apply(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        overrides: &Overrides,
    ) -> Result<Self> {
        let config: AppConfig = builder
            .set_override_option(
                "database.path",
                overrides
                    .database
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned()),
            )?
            .set_override_option("server.host", overrides.host.clone())?
            .set_override_option("server.port", overrides.port.map(i64::from))?
            .set_override_option("server.cors", overrides.cors)?
            .set_override_option("logging.json", overrides.json_logs)?
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                cors: true,
            },
            database: DatabaseSettings {
                path: PathBuf::from(DEFAULT_DATABASE_PATH),
                max_connections: DEFAULT_MAX_CONNECTIONS,
            },
            analysis: AnalysisSettings {
                station: DEFAULT_STATION.to_string(),
                window_start: NaiveDate::from_ymd_opt(2016, 8, 23).unwrap_or_default(),
                window_end: NaiveDate::from_ymd_opt(2017, 8, 23).unwrap_or_default(),
                derive_from_data: false,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                json: false,
            },
        }
    }
}
