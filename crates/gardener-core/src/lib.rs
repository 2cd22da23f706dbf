//! Core library for the Gardener fixture-data tool.
//!
//! This crate provides the business logic for synthesizing mock
//! tree-maintenance tickets and merging them into the JSON document a
//! separate ticket-viewer application reads: data models matching the
//! consumer's document shape, a file-backed store with atomic writes, a
//! seedable batch generator driven by fixed reference tables, and the
//! [`Seeder`] orchestrator that runs the whole load → generate → merge →
//! write pipeline.
//!
//! # Quick Start
//!
//! ```rust
//! use gardener_core::{BackfillParams, SeederBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a seeder for an explicit data file
//! let seeder = SeederBuilder::new()
//!     .with_data_file(Some("data/tickets.json"))
//!     .build()?;
//!
//! // Append the historical batch, reproducibly
//! let report = seeder.run_backfill(&BackfillParams {
//!     seed: Some(7),
//!     ..BackfillParams::default()
//! })?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod seeder;
pub mod store;

// Re-export commonly used types
pub use display::RunReport;
pub use error::{Result, SeederError};
pub use generator::{Generator, BACKFILL_MARKER, MONSOON_MARKER};
pub use models::{Category, DamageType, Dataset, Priority, Stats, Ticket, TicketStatus};
pub use params::{BackfillParams, DateWindow, MonsoonParams, MonsoonPeriod};
pub use seeder::{Seeder, SeederBuilder};
pub use store::TicketStore;
