//! Output Formatting
//!
//! Renders each statistics section as human-readable text. Every section
//! opens with a "Calculating ..." heading, prints its figures (or "not
//! applicable" when the record set is empty), optionally reports how long it
//! took, and closes with a rule.
//!
//! All rendering goes through a caller-supplied writer so the interactive
//! session, the one-shot CLI mode and the tests share the same code.

use crate::filters::FilterParams;
use crate::models::{RecordSet, TripRecord};
use crate::stats::{humanize_seconds, DurationStats, StationStats, TimeStats, UserStats, ValueCount};
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

const NOT_APPLICABLE: &str = "not applicable (no matching trips)";
const RULE_WIDTH: usize = 40;

pub struct ReportDisplayManager {
    show_timing: bool,
}

impl Default for ReportDisplayManager {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ReportDisplayManager {
    pub fn new(show_timing: bool) -> Self {
        Self { show_timing }
    }

    pub fn greeting(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            "Hello! Let's explore some US bikeshare data!".bright_white().bold()
        )
    }

    pub fn rule(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", "-".repeat(RULE_WIDTH).bright_cyan())
    }

    /// Summary of what was loaded, printed before the statistics.
    pub fn selection(
        &self,
        out: &mut impl Write,
        params: &FilterParams,
        records: &RecordSet,
    ) -> io::Result<()> {
        writeln!(
            out,
            "\n{} {} • month: {} • day: {} • {} trips",
            "📊".bright_yellow(),
            params.city.to_string().bright_white().bold(),
            params.month,
            params.day,
            records.len().to_string().bright_white().bold()
        )
    }

    pub fn time_stats(
        &self,
        out: &mut impl Write,
        stats: &TimeStats,
        elapsed: Duration,
    ) -> io::Result<()> {
        self.heading(out, "Calculating The Most Frequent Times of Travel...")?;

        let month = stats.most_common_month.as_ref().map(|vc| ValueCount {
            value: stats
                .most_common_month_name()
                .map(str::to_string)
                .unwrap_or_else(|| vc.value.to_string()),
            count: vc.count,
        });
        self.figure(out, "Most common month", month.as_ref())?;
        self.figure(out, "Most common day of week", stats.most_common_day.as_ref())?;
        self.figure(out, "Most common start hour", stats.most_common_hour.as_ref())?;

        self.footer(out, elapsed)
    }

    pub fn station_stats(
        &self,
        out: &mut impl Write,
        stats: &StationStats,
        elapsed: Duration,
    ) -> io::Result<()> {
        self.heading(out, "Calculating The Most Popular Stations and Trip...")?;

        self.figure(
            out,
            "Most commonly used start station",
            stats.most_common_start_station.as_ref(),
        )?;
        self.figure(
            out,
            "Most commonly used end station",
            stats.most_common_end_station.as_ref(),
        )?;
        self.figure(
            out,
            "Most frequent combination of start station and end station trip",
            stats.most_common_trip.as_ref(),
        )?;

        self.footer(out, elapsed)
    }

    pub fn duration_stats(
        &self,
        out: &mut impl Write,
        stats: &DurationStats,
        elapsed: Duration,
    ) -> io::Result<()> {
        self.heading(out, "Calculating Trip Duration...")?;

        writeln!(
            out,
            "Total travel time: {} seconds ({})",
            format_number(stats.total_duration).bright_green().bold(),
            humanize_seconds(stats.total_duration)
        )?;
        match stats.average_duration {
            Some(average) => writeln!(
                out,
                "Average travel time: {} seconds ({})",
                format_number(average).bright_green().bold(),
                humanize_seconds(average)
            )?,
            None => writeln!(out, "Average travel time: {}", NOT_APPLICABLE.dimmed())?,
        }

        self.footer(out, elapsed)
    }

    pub fn user_stats(
        &self,
        out: &mut impl Write,
        stats: &UserStats,
        elapsed: Duration,
    ) -> io::Result<()> {
        self.heading(out, "Calculating User Stats...")?;

        writeln!(out, "Counts of user types:")?;
        self.counts(out, &stats.user_type_counts)?;

        if let Some(genders) = &stats.gender_counts {
            writeln!(out, "\nCounts of gender:")?;
            self.counts(out, genders)?;
        }

        if let Some(years) = &stats.birth_year_stats {
            writeln!(out)?;
            writeln!(out, "Earliest year of birth: {}", years.earliest_year.to_string().bright_white().bold())?;
            writeln!(out, "Most recent year of birth: {}", years.most_recent_year.to_string().bright_white().bold())?;
            writeln!(out, "Most common year of birth: {}", years.most_common_year.to_string().bright_white().bold())?;
        }

        self.footer(out, elapsed)
    }

    /// One page of raw records, numbered from `offset + 1`.
    pub fn raw_rows(&self, out: &mut impl Write, rows: &[TripRecord], offset: usize) -> io::Result<()> {
        for (i, record) in rows.iter().enumerate() {
            writeln!(out, "{}", format_record(offset + i + 1, record))?;
        }
        Ok(())
    }

    pub fn end_of_data(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "You have reached the end of the data.")
    }

    fn heading(&self, out: &mut impl Write, title: &str) -> io::Result<()> {
        writeln!(out, "\n{}\n", title.bright_white().bold())
    }

    fn figure<T: Display>(
        &self,
        out: &mut impl Write,
        label: &str,
        value: Option<&ValueCount<T>>,
    ) -> io::Result<()> {
        match value {
            Some(vc) => writeln!(
                out,
                "{}: {} ({} trips)",
                label,
                vc.value.to_string().bright_cyan().bold(),
                vc.count
            ),
            None => writeln!(out, "{}: {}", label, NOT_APPLICABLE.dimmed()),
        }
    }

    fn counts(&self, out: &mut impl Write, counts: &[ValueCount<String>]) -> io::Result<()> {
        if counts.is_empty() {
            return writeln!(out, "   {}", "none".dimmed());
        }
        for vc in counts {
            writeln!(out, "{}: {}", vc.value.bright_cyan(), vc.count)?;
        }
        Ok(())
    }

    fn footer(&self, out: &mut impl Write, elapsed: Duration) -> io::Result<()> {
        if self.show_timing {
            writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
        }
        self.rule(out)
    }
}

/// Whole numbers print without a fractional part.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn format_record(index: usize, record: &TripRecord) -> String {
    let mut line = format!(
        "[{}] {} | {} -> {} | {}s | {}",
        index,
        record.start_time.format("%Y-%m-%d %H:%M:%S"),
        record.start_station,
        record.end_station,
        format_number(record.trip_duration),
        record.user_type
    );
    if let Some(gender) = &record.gender {
        line.push_str(&format!(" | {gender}"));
    }
    if let Some(year) = record.birth_year {
        line.push_str(&format!(" | born {year}"));
    }
    line.push_str(&format!(
        " | month={} day={} hour={}",
        record.month, record.day_of_week, record.hour
    ));
    line
}
