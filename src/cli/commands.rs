use anyhow::{Context, Result};

use crate::cli::args::{Cli, Commands};
use crate::config::AppConfig;
use crate::models::DatasetSummary;
use crate::readers::{Database, MeasurementReader, StationReader};
use crate::server::state::resolve_scope;
use crate::server::{AppState, Server};
use crate::utils::init_logging;

pub async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref(), &cli.overrides())
        .context("Failed to load configuration")?;

    init_logging(&config.logging, cli.verbose);

    let pool = Database::connect(&config.database)
        .await
        .context("Failed to open climate database")?;

    match cli.command {
        Commands::Serve { .. } => {
            let state = AppState::build(pool, &config.analysis).await?;
            Server::new(config.server, state).run().await?;
        }

        Commands::Info { .. } => {
            println!("Reading database: {}", config.database.path.display());

            let stations = StationReader::new(pool.clone());
            let measurements = MeasurementReader::new(pool);
            let (first_date, last_date) = measurements.date_extent().await?;

            let summary = DatasetSummary {
                station_count: stations.count().await?,
                measurement_count: measurements.count().await?,
                first_date,
                last_date,
                most_active_station: measurements.most_active_station().await?,
                scope: resolve_scope(&measurements, &config.analysis).await?,
            };

            println!("\n{}", summary.summary());
        }
    }

    Ok(())
}
