//! Turns a daily record into points.
//!
//! Everything here is a pure function of a record and a weight table: no I/O,
//! no shared state, safe to call for any number of days in any order.

pub mod day;
pub mod prayer;

pub use day::{DayBreakdown, DayModifier, breakdown_day, score_day};
pub use prayer::score_prayer;
