use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gardener_core::params::{BackfillParams, DateWindow};
use jiff::civil::Date;

/// Main command-line interface for the Gardener fixture-data tool
///
/// Gardener synthesizes mock tree-maintenance tickets for the campus
/// ticket application and merges them into the shared JSON data file that
/// application reads. Each subcommand is one complete run: load the file,
/// generate a batch from the built-in reference tables, merge, recompute
/// the stats summary, and write the file back atomically.
#[derive(Parser)]
#[command(version, about, name = "gardener")]
pub struct Args {
    /// Path to the tickets JSON data file. Defaults to
    /// $XDG_DATA_HOME/gardener/tickets.json
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Seed the random generator for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Gardener CLI
///
/// - `init`: create an empty data file for the runs to merge into
/// - `backfill`: append a batch of historical tickets (cumulative)
/// - `monsoon`: replace the monsoon-season sample batch with a fresh one
#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty tickets data file
    Init {
        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },
    /// Append a batch of historical tickets
    #[command(alias = "b")]
    Backfill(BackfillArgs),
    /// Replace the monsoon-season sample batch
    #[command(alias = "m")]
    Monsoon,
}

/// Arguments for the historical backfill batch
#[derive(clap::Args)]
pub struct BackfillArgs {
    /// Number of tickets to generate
    #[arg(long, default_value_t = 180)]
    pub count: u32,

    /// First day of the sampling window (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date, default_value = "2025-08-01")]
    pub from: Date,

    /// Last day of the sampling window, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date, default_value = "2025-10-31")]
    pub to: Date,
}

impl BackfillArgs {
    /// Convert CLI arguments into core backfill parameters.
    pub fn into_params(self, seed: Option<u64>) -> gardener_core::Result<BackfillParams> {
        Ok(BackfillParams {
            count: self.count,
            window: DateWindow::new(self.from, self.to)?,
            seed,
        })
    }
}

fn parse_date(s: &str) -> Result<Date, jiff::Error> {
    s.parse()
}
