//! The persisted document: ticket collection plus stats summary.

use serde::{Deserialize, Serialize};

use super::{Stats, Ticket};

/// Identifier handed to the first generated ticket of an empty collection.
/// Decrementing from here keeps fixture ids clear of consumer-created ones,
/// which the application assigns well above this value.
pub const FIRST_FIXTURE_ID: i64 = 1000;

/// The complete document stored in the shared JSON data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Dataset {
    /// All tickets, ordered by `date` descending after every run
    pub tickets: Vec<Ticket>,

    /// Aggregate counters, rebuilt after every mutation
    pub stats: Stats,
}

impl Dataset {
    /// Next free identifier for a generation run: one below the lowest
    /// existing id, or [`FIRST_FIXTURE_ID`] when the collection is empty.
    ///
    /// Non-collision with existing data holds as long as existing ids are
    /// all at or above the fallback, which the consumer guarantees.
    pub fn next_fixture_id(&self) -> i64 {
        self.tickets
            .iter()
            .map(|ticket| ticket.id)
            .min()
            .map_or(FIRST_FIXTURE_ID, |lowest| lowest - 1)
    }

    /// Append a generated batch to the collection, unconditionally.
    pub fn append(&mut self, batch: Vec<Ticket>) {
        self.tickets.extend(batch);
    }

    /// Remove every ticket whose note equals the given batch marker.
    ///
    /// Returns the number of removed tickets. Used to replace a prior
    /// synthetic batch before appending its successor.
    pub fn remove_marked(&mut self, marker: &str) -> usize {
        let before = self.tickets.len();
        self.tickets.retain(|ticket| ticket.notes != marker);
        before - self.tickets.len()
    }

    /// Sort the collection by the `date` field, descending.
    ///
    /// The timestamp format is fixed-width and zero-padded, so this string
    /// sort is also a chronological sort.
    pub fn sort_by_date_desc(&mut self) {
        self.tickets.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Rebuild the stats counters from the current collection.
    pub fn recompute_stats(&mut self) {
        self.stats = Stats::tally(&self.tickets);
    }
}
