//! Data models for the shared ticket document.
//!
//! This module contains the domain types that mirror the JSON document the
//! consumer application reads: the [`Ticket`] record, the closed
//! vocabularies for its enumerated fields, the [`Stats`] summary, and the
//! [`Dataset`] container with the merge operations generation runs apply
//! (append, marker-based removal, date sort, stats recount).
//!
//! All types serialize with the exact key spelling of the consumer's file
//! (camelCase), and the enumerations reject out-of-vocabulary values on
//! load, so deserialization doubles as shape validation.

pub mod dataset;
pub mod stats;
pub mod status;
pub mod ticket;


// Re-export all public types at the models level
pub use dataset::{Dataset, FIRST_FIXTURE_ID};
pub use stats::Stats;
pub use status::{Category, DamageType, Priority, TicketStatus};
pub use ticket::Ticket;
