//! Descriptive statistics over a [`RecordSet`](crate::models::RecordSet).
//!
//! Each section is computed independently and only reads the record set.
//! Mode-based figures are `Option`s so an empty record set yields "no data"
//! rather than a panic.

pub mod duration;
pub mod frequency;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{humanize_seconds, DurationStats};
pub use frequency::{mode, value_counts, ValueCount};
pub use station::StationStats;
pub use time::TimeStats;
pub use user::{BirthYearStats, UserStats};
