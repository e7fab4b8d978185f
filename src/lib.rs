//! Bikeshare Library
//!
//! Descriptive statistics over historical bike-share trip data for Chicago,
//! New York City and Washington. A city's CSV dataset is loaded, optionally
//! narrowed to one month and/or weekday, and summarized: when people ride,
//! where they ride, for how long, and who they are.
//!
//! ## Architecture Overview
//!
//! - [`filters`] - Supported cities, months and weekdays, and [`FilterParams`]
//! - [`models`] - Trip records, the per-dataset [`Schema`] and [`RecordSet`]
//! - [`loader`] - Reads, validates and filters a city's dataset
//! - [`stats`] - Time, station, duration and user statistics
//! - [`pager`] - Five-at-a-time paging over raw records
//! - [`prompt`] - Validated interactive input
//! - [`display`] - Text rendering of every report section
//! - [`analyzer`] - Session driver tying the above together
//! - [`config`] - Configuration with file and environment support
//! - [`logging`] - Structured logging setup
//!
//! ## Example
//!
//! ```no_run
//! use bikeshare::filters::{City, DayFilter, MonthFilter, Month};
//! use bikeshare::loader::DatasetLoader;
//! use bikeshare::stats::DurationStats;
//!
//! # fn example() -> anyhow::Result<()> {
//! let loader = DatasetLoader::new("data");
//! let records = loader.load(City::Chicago, MonthFilter::Only(Month::March), DayFilter::All)?;
//! let durations = DurationStats::compute(&records);
//! println!("{} seconds in total", durations.total_duration);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod config;
pub mod display;
pub mod error;
pub mod filters;
pub mod loader;
pub mod logging;
pub mod models;
pub mod pager;
pub mod prompt;
pub mod stats;
pub mod timestamp_parser;

pub use analyzer::BikeshareAnalyzer;
pub use error::{ChoiceError, InputClosed, LoadError};
pub use filters::FilterParams;
pub use models::{RecordSet, Schema, TripRecord};
