//! Command implementations for the forecast dashboard CLI.
//!
//! Provides subcommands for listing cities, rendering a dashboard once,
//! running an interactive session and importing CSV exports into SQLite.

use clap::Subcommand;
use std::path::PathBuf;

pub mod commands;
pub mod config;
pub mod dataset;
pub mod render;
pub mod session;

use config::{DashboardConfig, DataArgs, OutputFormat};

#[derive(Subcommand)]
pub enum Command {
    /// List the cities in the dataset with their day counts
    Cities {
        #[command(flatten)]
        data: DataArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compute the dashboard once and print it
    Render {
        #[command(flatten)]
        data: DataArgs,

        /// City to select instead of the default
        #[arg(short, long)]
        city: Option<String>,

        /// Comma-separated temperature metrics (min_temp_c,max_temp_c,avg_temp_c); empty selects none
        #[arg(short, long)]
        metrics: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Read selection events from stdin and print the dashboard after each
    Session {
        #[command(flatten)]
        data: DataArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Import a forecast CSV export into a SQLite database
    Import {
        /// Input CSV (optionally .gz)
        #[arg(long)]
        csv: PathBuf,

        /// SQLite database to create or extend
        #[arg(long)]
        sqlite: PathBuf,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Cities { data, format } => {
            let config = DashboardConfig::from(data);
            print!("{}", commands::run_cities(&config, format)?);
            Ok(())
        }
        Command::Render {
            data,
            city,
            metrics,
            format,
        } => {
            let config = DashboardConfig::from(data);
            let output =
                commands::run_render(&config, city.as_deref(), metrics.as_deref(), format)?;
            println!("{}", output);
            Ok(())
        }
        Command::Session { data, format } => {
            let config = DashboardConfig::from(data);
            commands::run_session_stdio(&config, format).await
        }
        Command::Import { csv, sqlite } => {
            commands::run_import(&csv, &sqlite)?;
            Ok(())
        }
    }
}
