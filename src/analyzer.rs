//! Analysis Engine
//!
//! [`BikeshareAnalyzer`] drives a session: it asks for filters, loads the
//! record set, runs the four statistics sections and offers raw-record
//! paging, then asks whether to go again.
//!
//! ## Rounds
//!
//! 1. **Filter selection**: city, filter mode, then month and/or day
//! 2. **Load**: [`DatasetLoader`] reads and filters the city's dataset
//! 3. **Statistics**: time, station, duration and user sections
//! 4. **Raw data**: five records per page while the user asks for more
//!
//! A failed load ends the round, not the session: the error is reported and
//! the restart prompt follows as usual.
//!
//! ## Usage Example
//!
//! ```no_run
//! use bikeshare::analyzer::BikeshareAnalyzer;
//! use bikeshare::display::ReportDisplayManager;
//! use bikeshare::loader::DatasetLoader;
//! use bikeshare::prompt::Prompter;
//! use std::io;
//!
//! # fn example() -> anyhow::Result<()> {
//! let prompter = Prompter::new(io::stdin().lock(), io::stdout());
//! let mut analyzer = BikeshareAnalyzer::new(
//!     DatasetLoader::new("data"),
//!     ReportDisplayManager::new(true),
//!     prompter,
//! );
//! analyzer.run_interactive()?;
//! # Ok(())
//! # }
//! ```

use crate::display::ReportDisplayManager;
use crate::filters::{City, DayFilter, FilterMode, FilterParams, Month, MonthFilter, Weekday};
use crate::loader::DatasetLoader;
use crate::models::RecordSet;
use crate::pager::{Page, RawRecordPager};
use crate::prompt::Prompter;
use crate::stats::{DurationStats, StationStats, TimeStats, UserStats};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::{info, warn};

const CITY_PROMPT: &str = "Would you like to see data for Chicago, New York City, or Washington? ";
const FILTER_PROMPT: &str =
    "Would you like to filter the data by month, day, both, or not at all? Type 'none' for no time filter: ";
const MONTH_PROMPT: &str = "Which month - January, February, March, April, May, or June? ";
const DAY_PROMPT: &str =
    "Which day - Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, or Sunday? ";
const RAW_PROMPT: &str = "Would you like to view 5 rows of individual trip data? Enter yes or no: ";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no: ";

pub struct BikeshareAnalyzer<R, W> {
    loader: DatasetLoader,
    display: ReportDisplayManager,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> BikeshareAnalyzer<R, W> {
    pub fn new(loader: DatasetLoader, display: ReportDisplayManager, prompter: Prompter<R, W>) -> Self {
        Self {
            loader,
            display,
            prompter,
        }
    }

    /// Hand back the prompter, e.g. to inspect what was written.
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Run rounds until the user declines to restart.
    pub fn run_interactive(&mut self) -> Result<()> {
        loop {
            let params = self.get_filters()?;
            let span = crate::logging::round_span(params.city);
            let _entered = span.enter();

            match self.load(&params) {
                Ok(records) => {
                    self.report(&params, &records)?;
                    self.browse_raw_data(&records)?;
                }
                Err(err) => {
                    warn!(error = %err, "Round aborted");
                    writeln!(
                        self.prompter.output(),
                        "{} {:#}",
                        "Error:".bright_red().bold(),
                        err
                    )?;
                }
            }

            if !self.prompter.confirm(RESTART_PROMPT)? {
                info!("Session finished");
                return Ok(());
            }
        }
    }

    /// Single round without prompts: load, report, done. Load failures are
    /// returned to the caller.
    pub fn run_once(&mut self, params: &FilterParams) -> Result<()> {
        let span = crate::logging::round_span(params.city);
        let _entered = span.enter();

        let records = self.load(params)?;
        self.report(params, &records)
    }

    /// Ask for city, filter mode, and the month and/or day that mode needs.
    pub fn get_filters(&mut self) -> Result<FilterParams> {
        let out = self.prompter.output();
        self.display.greeting(out)?;

        let city: City = self.prompter.choose(CITY_PROMPT)?;
        let mode: FilterMode = self.prompter.choose(FILTER_PROMPT)?;

        let mut params = FilterParams::new(city);
        if mode.wants_month() {
            let month: Month = self.prompter.choose(MONTH_PROMPT)?;
            params = params.with_month(MonthFilter::Only(month));
        }
        if mode.wants_day() {
            let day: Weekday = self.prompter.choose(DAY_PROMPT)?;
            params = params.with_day(DayFilter::Only(day));
        }

        self.display.rule(self.prompter.output())?;
        info!(filters = %params, "Filters selected");
        Ok(params)
    }

    fn load(&self, params: &FilterParams) -> Result<RecordSet> {
        self.loader
            .load_params(params)
            .with_context(|| format!("could not load trip data for {}", params.city))
    }

    /// Print every statistics section for `records`.
    pub fn report(&mut self, params: &FilterParams, records: &RecordSet) -> Result<()> {
        let out = self.prompter.output();
        self.display.selection(out, params, records)?;

        let started = Instant::now();
        let time = TimeStats::compute(records);
        self.display.time_stats(out, &time, started.elapsed())?;

        let started = Instant::now();
        let stations = StationStats::compute(records);
        self.display.station_stats(out, &stations, started.elapsed())?;

        let started = Instant::now();
        let durations = DurationStats::compute(records);
        self.display.duration_stats(out, &durations, started.elapsed())?;

        let started = Instant::now();
        let users = UserStats::compute(records);
        self.display.user_stats(out, &users, started.elapsed())?;

        Ok(())
    }

    /// Offer raw records five at a time until the user says no or the data
    /// runs out.
    pub fn browse_raw_data(&mut self, records: &RecordSet) -> Result<()> {
        let mut pager = RawRecordPager::new(records.records());
        if pager.is_exhausted() {
            writeln!(self.prompter.output(), "There are no trips to display.")?;
            return Ok(());
        }

        while self.prompter.confirm(RAW_PROMPT)? {
            let offset = pager.position();
            match pager.next_page() {
                Page::Rows(rows) => self.display.raw_rows(self.prompter.output(), rows, offset)?,
                Page::Exhausted => break,
            }
            if pager.is_exhausted() {
                self.display.end_of_data(self.prompter.output())?;
                break;
            }
        }
        Ok(())
    }
}
