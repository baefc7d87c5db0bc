use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;

#[derive(Parser)]
#[command(name = "hawaii-climate")]
#[command(about = "Read-only JSON API over the Hawaii climate dataset")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Configuration file [default: hawaii-climate.toml]")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the climate API over HTTP
    Serve {
        #[arg(short, long, help = "SQLite database file")]
        database: Option<PathBuf>,

        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,

        #[arg(long, help = "Disable permissive CORS headers")]
        no_cors: bool,
    },

    /// Print a summary of the dataset
    Info {
        #[arg(short, long, help = "SQLite database file")]
        database: Option<PathBuf>,
    },
}

impl Cli {
    /// Command-line values that take precedence over file and environment configuration.
    pub fn overrides(&self) -> Overrides {
        let mut overrides = Overrides {
            json_logs: self.json_logs.then_some(true),
            ..Overrides::default()
        };

        match &self.command {
            Commands::Serve {
                database,
                host,
                port,
                no_cors,
            } => {
                overrides.database = database.clone();
                overrides.host = host.clone();
                overrides.port = *port;
                overrides.cors = no_cors.then_some(false);
            }
            Commands::Info { database } => {
                overrides.database = database.clone();
            }
        }

        overrides
    }
}
