//! Aggregate per-status counters kept alongside the ticket collection.

use serde::{Deserialize, Serialize};

use super::{Ticket, TicketStatus};

/// Summary counters over the full ticket collection.
///
/// There is no incremental update path: after any mutation the counters are
/// rebuilt with [`Stats::tally`], so they always equal the true counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Total number of tickets
    pub total: u64,
    /// Tickets with status `new`
    pub new: u64,
    /// Tickets with status `inProgress`
    pub in_progress: u64,
    /// Tickets with status `pending`
    pub pending: u64,
    /// Tickets with status `completed`
    pub completed: u64,
}

impl Stats {
    /// Recount all statuses with a single scan over the collection.
    pub fn tally(tickets: &[Ticket]) -> Self {
        let mut stats = Stats {
            total: tickets.len() as u64,
            ..Stats::default()
        };
        for ticket in tickets {
            match ticket.status {
                TicketStatus::New => stats.new += 1,
                TicketStatus::InProgress => stats.in_progress += 1,
                TicketStatus::Pending => stats.pending += 1,
                TicketStatus::Completed => stats.completed += 1,
            }
        }
        stats
    }
}

impl From<&[Ticket]> for Stats {
    fn from(tickets: &[Ticket]) -> Self {
        Stats::tally(tickets)
    }
}
