//! Sampling helpers shared by the batch generators.

use jiff::Span;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::{tables, Generator};
use crate::error::{Result, SeederError};
use crate::params::DateWindow;

impl Generator {
    /// Uniform choice from a table. Tables are non-empty constants.
    pub(crate) fn pick<'a, T>(&mut self, table: &'a [T]) -> &'a T {
        &table[self.rng.random_range(0..table.len())]
    }

    /// Weighted choice over explicit `(value, weight)` entries.
    pub(crate) fn pick_weighted<T: Copy>(&mut self, table: &[(T, u32)]) -> Result<T> {
        let dist = WeightedIndex::new(table.iter().map(|(_, weight)| *weight))
            .map_err(|e| SeederError::invalid_input("weights", e.to_string()))?;
        Ok(table[dist.sample(&mut self.rng)].0)
    }

    /// A duplicate-free subset of the crew roster, sized uniformly within
    /// the inclusive range.
    pub(crate) fn pick_assignees(&mut self, min: usize, max: usize) -> Vec<String> {
        let count = self.rng.random_range(min..=max);
        tables::ASSIGNEES
            .choose_multiple(&mut self.rng, count)
            .map(|name| (*name).to_string())
            .collect()
    }

    /// A `YYYY-MM-DD HH:MM` timestamp with a uniform day inside the window
    /// and a uniform time within the crew's working hours (07:00–18:59).
    ///
    /// The format is fixed-width and zero-padded so lexicographic order on
    /// the produced strings is chronological order.
    pub(crate) fn sample_datetime(&mut self, window: &DateWindow) -> Result<String> {
        let total_days = window
            .start()
            .until(window.end())
            .map_err(|e| SeederError::invalid_input("window", e.to_string()))?
            .get_days();
        let offset = self.rng.random_range(0..=total_days);
        let day = window
            .start()
            .checked_add(Span::new().days(offset))
            .map_err(|e| SeederError::invalid_input("window", e.to_string()))?;

        let hour: u8 = self.rng.random_range(7..=18);
        let minute: u8 = self.rng.random_range(0..=59);
        Ok(format!("{} {:02}:{:02}", day.strftime("%Y-%m-%d"), hour, minute))
    }
}
