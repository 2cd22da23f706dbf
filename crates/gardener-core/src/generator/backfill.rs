//! Historical backfill batch generation.

use log::debug;
use rand::Rng;

use super::{tables, Generator};
use crate::error::Result;
use crate::models::{DamageType, Ticket};
use crate::params::BackfillParams;

impl Generator {
    /// Generates the historical backfill batch: `params.count` tickets over
    /// one date window, every enumeration sampled uniformly.
    ///
    /// Ids decrement from `start_id`, one per ticket. Replanting work gets
    /// a zero circumference since the damaged trunk is already gone.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::InvalidInput`](crate::SeederError::InvalidInput)
    /// when date arithmetic over the window fails.
    pub fn backfill(&mut self, start_id: i64, params: &BackfillParams) -> Result<Vec<Ticket>> {
        debug!(
            "Generating {} backfill tickets from id {start_id} down",
            params.count
        );

        let mut tickets = Vec::with_capacity(params.count as usize);
        let mut next_id = start_id;

        for _ in 0..params.count {
            let zone = self.pick(tables::ZONES);
            let tree = *self.pick(tables::TREE_TYPES);
            let damage = *self.pick(tables::DAMAGE_TYPES);
            let circumference = if damage == DamageType::Replant {
                0
            } else {
                self.rng.random_range(10..=80)
            };

            tickets.push(Ticket {
                id: next_id,
                title: format!("{tree}{}", self.pick(tables::BACKFILL_TITLE_SUFFIXES)),
                description: format!(
                    "พบปัญหา{tree}บริเวณ{} ต้องการการตรวจสอบและแก้ไข (ประวัติย้อนหลัง)",
                    zone.name
                ),
                category: *self.pick(tables::CATEGORIES),
                status: *self.pick(tables::STATUSES),
                priority: *self.pick(tables::PRIORITIES),
                zone: zone.code.to_string(),
                zone_name: zone.name.to_string(),
                tree_type: tree.to_string(),
                damage_type: damage,
                circumference,
                quantity: self.rng.random_range(1..=5),
                impact: (*self.pick(tables::IMPACTS)).to_string(),
                operation: (*self.pick(tables::BACKFILL_OPERATIONS)).to_string(),
                date: self.sample_datetime(&params.window)?,
                assignees: self.pick_assignees(0, 2),
                images: vec![(*self.pick(tables::BACKFILL_IMAGE_URLS)).to_string()],
                notes: tables::BACKFILL_MARKER.to_string(),
            });
            next_id -= 1;
        }

        Ok(tickets)
    }
}
