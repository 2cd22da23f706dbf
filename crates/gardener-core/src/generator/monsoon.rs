//! Monsoon-season batch generation.

use log::debug;
use rand::Rng;

use super::{tables, Generator};
use crate::error::Result;
use crate::models::{Ticket, TicketStatus};
use crate::params::MonsoonParams;

impl Generator {
    /// Generates the monsoon-season batch across the configured periods,
    /// each contributing a randomized number of tickets from its own date
    /// window.
    ///
    /// Historical periods produce only completed tickets; the current
    /// period draws statuses from the weighted table. Damage kinds come
    /// from the storm-season weighted table, and tickets whose work has not
    /// started carry the pending-work placeholder operation. Ids decrement
    /// from `start_id` across all periods.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::InvalidInput`](crate::SeederError::InvalidInput)
    /// when a weight table is empty or date arithmetic over a window fails.
    pub fn monsoon(&mut self, start_id: i64, params: &MonsoonParams) -> Result<Vec<Ticket>> {
        let mut tickets = Vec::new();
        let mut next_id = start_id;

        for period in &params.periods {
            let count = self
                .rng
                .random_range(period.min_count..=period.max_count);
            debug!(
                "Generating {count} monsoon tickets between {} and {}",
                period.window.start(),
                period.window.end()
            );

            for _ in 0..count {
                let zone = self.pick(tables::ZONES);
                let tree = *self.pick(tables::TREE_TYPES);
                let damage = self.pick_weighted(tables::MONSOON_DAMAGE_WEIGHTS)?;
                let status = if period.historical {
                    TicketStatus::Completed
                } else {
                    self.pick_weighted(tables::MONSOON_STATUS_WEIGHTS)?
                };
                let operation = if status == TicketStatus::Completed {
                    (*self.pick(tables::MONSOON_OPERATIONS)).to_string()
                } else {
                    tables::PENDING_OPERATION.to_string()
                };
                // Zone names on the main roads lack the "โซน" prefix the
                // title format expects.
                let zone_part = if zone.name.starts_with("โซน") {
                    zone.name.to_string()
                } else {
                    format!("โซน{}", zone.name)
                };

                tickets.push(Ticket {
                    id: next_id,
                    title: format!("{tree} {} {zone_part}", damage.display_name()),
                    description: String::new(),
                    category: *self.pick(tables::CATEGORIES),
                    status,
                    priority: *self.pick(tables::PRIORITIES),
                    zone: zone.code.to_string(),
                    zone_name: zone.name.to_string(),
                    tree_type: tree.to_string(),
                    damage_type: damage,
                    circumference: self.rng.random_range(30..=200),
                    quantity: self.rng.random_range(1..=4),
                    impact: (*self.pick(tables::IMPACTS)).to_string(),
                    operation,
                    date: self.sample_datetime(&period.window)?,
                    assignees: self.pick_assignees(1, 3),
                    images: vec![(*self.pick(tables::MONSOON_IMAGE_URLS)).to_string()],
                    notes: tables::MONSOON_MARKER.to_string(),
                });
                next_id -= 1;
            }
        }

        Ok(tickets)
    }
}
