//! Gardener CLI Application
//!
//! Command-line fixture-data tool for the campus tree-maintenance ticket
//! application: generates mock incident tickets and merges them into the
//! shared JSON data file.

mod args;
mod cli;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use gardener_core::{MonsoonParams, SeederBuilder};
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let Args { data_file, seed, command } = Args::parse();

    let seeder = SeederBuilder::new()
        .with_data_file(data_file)
        .build()
        .context("Failed to initialize seeder")?;

    info!("Gardener started");

    let cli = Cli::new(seeder);
    match command {
        Commands::Init { force } => cli.init(force),
        Commands::Backfill(backfill) => {
            let params = backfill.into_params(seed)?;
            cli.backfill(&params)
        }
        Commands::Monsoon => {
            let mut params = MonsoonParams::up_to(jiff::Zoned::now().date());
            params.seed = seed;
            cli.monsoon(&params)
        }
    }
}
