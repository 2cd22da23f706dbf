//! Run handlers: one method per subcommand, each a full pipeline pass.

use log::info;

use super::Seeder;
use crate::display::RunReport;
use crate::error::{Result, SeederError};
use crate::generator::{Generator, MONSOON_MARKER};
use crate::models::Dataset;
use crate::params::{BackfillParams, MonsoonParams};

impl Seeder {
    /// Writes an empty, well-formed dataset to the data file.
    ///
    /// The consumer application ships with a seed file; this creates one
    /// where none exists yet so the generation runs have a document to
    /// merge into.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::AlreadyExists`] when the file is present and
    /// `force` is false, and [`SeederError::Io`] on write failure.
    pub fn init(&self, force: bool) -> Result<()> {
        if self.data_path().exists() && !force {
            return Err(SeederError::AlreadyExists {
                path: self.data_path().to_path_buf(),
            });
        }
        self.store().save(&Dataset::default())
    }

    /// Runs the historical backfill: generate one batch and append it.
    ///
    /// Every run grows the collection; nothing is removed first, so
    /// repeated runs accumulate.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::Io`] / [`SeederError::Format`] from the load
    /// or save stages and
    /// [`SeederError::InvalidInput`] from generation.
    pub fn run_backfill(&self, params: &BackfillParams) -> Result<RunReport> {
        let store = self.store();
        let mut dataset = store.load()?;

        let mut generator = Generator::new(params.seed);
        let batch = generator.backfill(dataset.next_fixture_id(), params)?;
        let generated = batch.len();

        dataset.append(batch);
        dataset.sort_by_date_desc();
        dataset.recompute_stats();
        store.save(&dataset)?;

        info!("Backfill run complete: {generated} tickets appended");
        Ok(RunReport {
            generated,
            replaced: 0,
            total: dataset.stats.total,
        })
    }

    /// Runs the monsoon generation: replace the prior monsoon batch, if
    /// any, with a freshly generated one.
    ///
    /// Tickets carrying the monsoon marker note are removed before the new
    /// batch is appended, so repeated runs replace their own output while
    /// leaving backfill data and consumer-created tickets alone.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::Io`] / [`SeederError::Format`] from the load
    /// or save stages and
    /// [`SeederError::InvalidInput`] from generation.
    pub fn run_monsoon(&self, params: &MonsoonParams) -> Result<RunReport> {
        let store = self.store();
        let mut dataset = store.load()?;

        let replaced = dataset.remove_marked(MONSOON_MARKER);
        if replaced > 0 {
            info!("Removed {replaced} tickets from the previous monsoon batch");
        }

        let mut generator = Generator::new(params.seed);
        let batch = generator.monsoon(dataset.next_fixture_id(), params)?;
        let generated = batch.len();

        dataset.append(batch);
        dataset.sort_by_date_desc();
        dataset.recompute_stats();
        store.save(&dataset)?;

        info!("Monsoon run complete: {generated} tickets appended");
        Ok(RunReport {
            generated,
            replaced,
            total: dataset.stats.total,
        })
    }
}
