//! Ticket batch generation.
//!
//! The [`Generator`] synthesizes mock tickets from the fixed reference
//! tables in [`tables`], using a seedable RNG so runs can be reproduced.
//! Two batch shapes exist, one per subcommand:
//!
//! - [`Generator::backfill`]: a fixed-size historical batch over a single
//!   date window, all enumerations sampled uniformly.
//! - [`Generator::monsoon`]: several seasonal sub-periods with randomized
//!   batch sizes and weighted status/damage sampling.
//!
//! Identifier assignment is the caller's concern: both methods take the
//! first id to use (one below the collection's lowest, see
//! [`Dataset::next_fixture_id`](crate::models::Dataset::next_fixture_id))
//! and decrement from there, which keeps generated ids clear of everything
//! already in the file.

mod backfill;
mod monsoon;
mod sampler;
pub mod tables;

#[cfg(test)]
mod tests;

pub use tables::{BACKFILL_MARKER, MONSOON_MARKER};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seedable ticket generator.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Creates a generator, seeded for reproducible output when a seed is
    /// given and from OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}
