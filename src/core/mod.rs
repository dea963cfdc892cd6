//! Core time primitives for mikor.
//!
//! This module provides the numeral table, quarter-hour rounding, and
//! time-of-day arithmetic that the resolver builds on.

mod clock;
mod interval;
mod numerals;

pub use clock::{add_minutes, round_to_quarter, CAN_BE_LATE};
pub use interval::Interval;
pub use numerals::lookup_hour;
