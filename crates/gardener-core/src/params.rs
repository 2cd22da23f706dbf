//! Parameter structures for generation runs.
//!
//! These are the knobs the original tool hard-coded: date windows, target
//! counts, and the monsoon period table. They live here free of CLI
//! framework derives; the CLI layer builds them from parsed arguments via
//! `into_params`-style conversions, and the defaults reproduce the original
//! tool's literal values.

use jiff::civil::{date, Date};

use crate::error::{Result, SeederError};

/// Inclusive calendar-day window for uniform date sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: Date,
    end: Date,
}

impl DateWindow {
    /// Creates a window spanning `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::InvalidInput`] when `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if start > end {
            return Err(SeederError::invalid_input(
                "window",
                format!("start date {start} is after end date {end}"),
            ));
        }
        Ok(Self { start, end })
    }

    /// First day of the window.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the window, inclusive.
    pub fn end(&self) -> Date {
        self.end
    }
}

/// Parameters for a backfill run: one window, one fixed target count.
#[derive(Debug, Clone)]
pub struct BackfillParams {
    /// Number of tickets to generate
    pub count: u32,
    /// Calendar window the ticket dates are sampled from
    pub window: DateWindow,
    /// Seed for reproducible output; OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for BackfillParams {
    /// The original backfill batch: 180 tickets over August through October
    /// 2025, roughly two per day.
    fn default() -> Self {
        Self {
            count: 180,
            window: DateWindow {
                start: date(2025, 8, 1),
                end: date(2025, 10, 31),
            },
            seed: None,
        }
    }
}

/// One monsoon sub-period with its own window and randomized target count.
#[derive(Debug, Clone)]
pub struct MonsoonPeriod {
    /// Calendar window the ticket dates are sampled from
    pub window: DateWindow,
    /// Smallest ticket count this period may produce
    pub min_count: u32,
    /// Largest ticket count this period may produce, inclusive
    pub max_count: u32,
    /// Historical periods force every ticket to `completed`; the current
    /// period draws statuses from the weighted table instead
    pub historical: bool,
}

impl MonsoonPeriod {
    /// Creates a period, validating the count range.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::InvalidInput`] when `min_count` exceeds
    /// `max_count`.
    pub fn new(window: DateWindow, min_count: u32, max_count: u32, historical: bool) -> Result<Self> {
        if min_count > max_count {
            return Err(SeederError::invalid_input(
                "count",
                format!("minimum count {min_count} exceeds maximum count {max_count}"),
            ));
        }
        Ok(Self {
            window,
            min_count,
            max_count,
            historical,
        })
    }
}

/// Parameters for a monsoon run: several disjoint seasonal periods.
#[derive(Debug, Clone)]
pub struct MonsoonParams {
    /// Sub-periods, each generating its own randomized batch size
    pub periods: Vec<MonsoonPeriod>,
    /// Seed for reproducible output; OS entropy when absent
    pub seed: Option<u64>,
}

impl MonsoonParams {
    /// The original monsoon period table: three historical May–October
    /// seasons plus the current season running up to `today`.
    ///
    /// When `today` falls before the current season's start the window
    /// collapses to that single start day, mirroring the original tool's
    /// negative-span clamp.
    pub fn up_to(today: Date) -> Self {
        let current_start = date(2026, 2, 1);
        let current_end = today.max(current_start);
        let seasonal = |year: i16| DateWindow {
            start: date(year, 5, 1),
            end: date(year, 10, 31),
        };

        Self {
            periods: vec![
                MonsoonPeriod {
                    window: seasonal(2023),
                    min_count: 3,
                    max_count: 7,
                    historical: true,
                },
                MonsoonPeriod {
                    window: seasonal(2024),
                    min_count: 8,
                    max_count: 14,
                    historical: true,
                },
                MonsoonPeriod {
                    window: seasonal(2025),
                    min_count: 4,
                    max_count: 9,
                    historical: true,
                },
                MonsoonPeriod {
                    window: DateWindow {
                        start: current_start,
                        end: current_end,
                    },
                    min_count: 2,
                    max_count: 5,
                    historical: false,
                },
            ],
            seed: None,
        }
    }
}
