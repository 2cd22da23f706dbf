//! Command handlers bridging parsed arguments to the core seeder.

use anyhow::Result;
use gardener_core::{BackfillParams, MonsoonParams, Seeder};

/// Thin handler layer that owns the seeder and prints run reports.
pub struct Cli {
    seeder: Seeder,
}

impl Cli {
    pub fn new(seeder: Seeder) -> Self {
        Self { seeder }
    }

    /// Create an empty data file for the generation runs to merge into.
    pub fn init(&self, force: bool) -> Result<()> {
        self.seeder.init(force)?;
        println!(
            "Initialized empty data file at {}",
            self.seeder.data_path().display()
        );
        Ok(())
    }

    /// Append the historical backfill batch.
    pub fn backfill(&self, params: &BackfillParams) -> Result<()> {
        let report = self.seeder.run_backfill(params)?;
        println!("{report}");
        Ok(())
    }

    /// Replace the monsoon sample batch.
    pub fn monsoon(&self, params: &MonsoonParams) -> Result<()> {
        let report = self.seeder.run_monsoon(params)?;
        println!("{report}");
        Ok(())
    }
}
