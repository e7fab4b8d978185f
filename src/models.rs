//! Core Data Models
//!
//! This module defines the data structures the analysis pipeline works on,
//! from raw CSV rows to the filtered record set the statistics read.
//!
//! ## Data Flow
//!
//! 1. **Raw Data**: [`RawTrip`] - one row as deserialized from a city's CSV file
//! 2. **Records**: [`TripRecord`] - a validated row with derived calendar fields
//! 3. **Record Set**: [`RecordSet`] - the ordered rows of one city plus its [`Schema`]
//!
//! ## Optional Columns
//!
//! Not every city publishes gender and birth-year data. Whether a column
//! exists at all is captured once, at load time, in [`Schema`]; per-row
//! nulls within an existing column are `None` on the record itself.

use crate::error::LoadError;
use crate::filters::{DayFilter, MonthFilter, Weekday};
use crate::timestamp_parser::TimestampParser;
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;

pub const START_TIME: &str = "Start Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    START_TIME,
    TRIP_DURATION,
    START_STATION,
    END_STATION,
    USER_TYPE,
];

#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: String,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    /// Seconds
    pub trip_duration: f64,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    pub month: u32,
    pub day_of_week: Weekday,
    pub hour: u32,
}

impl TripRecord {
    pub fn new(
        start_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        trip_duration: f64,
        user_type: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            start_station: start_station.into(),
            end_station: end_station.into(),
            trip_duration,
            user_type: user_type.into(),
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day_of_week: start_time.weekday().into(),
            hour: start_time.hour(),
        }
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_birth_year(mut self, birth_year: i32) -> Self {
        self.birth_year = Some(birth_year);
        self
    }

    /// Validate a raw row. `row` is the 1-based data row, for error messages.
    pub fn from_raw(raw: RawTrip, row: usize) -> Result<Self, LoadError> {
        let start_time =
            TimestampParser::parse(&raw.start_time).ok_or_else(|| LoadError::InvalidTimestamp {
                row,
                value: raw.start_time.clone(),
            })?;

        if !raw.trip_duration.is_finite() || raw.trip_duration < 0.0 {
            return Err(LoadError::InvalidDuration {
                row,
                value: raw.trip_duration,
            });
        }

        for (column, name) in [
            (START_STATION, &raw.start_station),
            (END_STATION, &raw.end_station),
        ] {
            if name.is_empty() {
                return Err(LoadError::EmptyStation { row, column });
            }
        }

        let mut record = Self::new(
            start_time,
            raw.start_station,
            raw.end_station,
            raw.trip_duration,
            raw.user_type,
        );
        record.gender = raw.gender.filter(|g| !g.is_empty());
        record.birth_year = raw
            .birth_year
            .filter(|year| year.is_finite())
            .map(|year| year as i32);
        Ok(record)
    }

    /// Composite start/end key, e.g. `Canal St to Clark St`.
    pub fn trip(&self) -> String {
        format!("{} to {}", self.start_station, self.end_station)
    }
}

/// Which optional columns a dataset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    /// Every optional column present.
    pub fn full() -> Self {
        Self {
            has_gender: true,
            has_birth_year: true,
        }
    }

    pub fn from_headers(headers: &csv::StringRecord) -> Self {
        Self {
            has_gender: headers.iter().any(|h| h == GENDER),
            has_birth_year: headers.iter().any(|h| h == BIRTH_YEAR),
        }
    }
}

/// Ordered trip records for one city. Statistics only ever read it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSet {
    schema: Schema,
    records: Vec<TripRecord>,
}

impl RecordSet {
    pub fn new(schema: Schema, records: Vec<TripRecord>) -> Self {
        Self { schema, records }
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching both filters, in their original order. `self` is
    /// left untouched.
    pub fn filter(&self, month: MonthFilter, day: DayFilter) -> RecordSet {
        RecordSet {
            schema: self.schema,
            records: self
                .records
                .iter()
                .filter(|r| Self::matches(r, month, day))
                .cloned()
                .collect(),
        }
    }

    /// Consuming form of [`RecordSet::filter`], avoids cloning retained rows.
    pub fn into_filtered(self, month: MonthFilter, day: DayFilter) -> RecordSet {
        RecordSet {
            schema: self.schema,
            records: self
                .records
                .into_iter()
                .filter(|r| Self::matches(r, month, day))
                .collect(),
        }
    }

    fn matches(record: &TripRecord, month: MonthFilter, day: DayFilter) -> bool {
        month.matches(record.month) && day.matches(record.day_of_week)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Month;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 15, 0)
            .unwrap()
    }

    fn raw(start_time: &str, duration: f64) -> RawTrip {
        RawTrip {
            start_time: start_time.to_string(),
            trip_duration: duration,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: "Subscriber".to_string(),
            gender: Some(String::new()),
            birth_year: Some(1989.0),
        }
    }

    #[test]
    fn test_derived_fields() {
        // 2017-01-01 was a Sunday
        let record = TripRecord::new(at(2017, 1, 1, 9), "A", "B", 60.0, "Customer");
        assert_eq!(record.month, 1);
        assert_eq!(record.day_of_week, Weekday::Sunday);
        assert_eq!(record.hour, 9);
    }

    #[test]
    fn test_trip_key() {
        let record = TripRecord::new(at(2017, 1, 1, 9), "Canal St", "Clark St", 60.0, "Customer");
        assert_eq!(record.trip(), "Canal St to Clark St");
    }

    #[test]
    fn test_from_raw_normalizes_optional_fields() {
        let record = TripRecord::from_raw(raw("2017-05-02 17:45:00", 300.0), 1).unwrap();
        assert_eq!(record.gender, None);
        assert_eq!(record.birth_year, Some(1989));
        assert_eq!(record.day_of_week, Weekday::Tuesday);
    }

    #[test]
    fn test_from_raw_rejects_bad_timestamp() {
        let err = TripRecord::from_raw(raw("yesterday", 300.0), 7).unwrap_err();
        match err {
            LoadError::InvalidTimestamp { row, value } => {
                assert_eq!(row, 7);
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_raw_rejects_negative_duration() {
        let err = TripRecord::from_raw(raw("2017-05-02 17:45:00", -1.0), 3).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDuration { row: 3, .. }));
    }

    #[test]
    fn test_from_raw_rejects_nan_duration() {
        let err = TripRecord::from_raw(raw("2017-05-02 17:45:00", f64::NAN), 2).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDuration { row: 2, .. }));
    }

    #[test]
    fn test_from_raw_rejects_empty_station() {
        let mut row = raw("2017-05-02 17:45:00", 300.0);
        row.end_station = String::new();
        let err = TripRecord::from_raw(row, 4).unwrap_err();
        assert!(matches!(
            err,
            LoadError::EmptyStation {
                row: 4,
                column: END_STATION
            }
        ));
    }

    #[test]
    fn test_from_raw_drops_non_finite_birth_year() {
        let mut row = raw("2017-05-02 17:45:00", 300.0);
        row.birth_year = Some(f64::NAN);
        let record = TripRecord::from_raw(row, 1).unwrap();
        assert_eq!(record.birth_year, None);
    }

    #[test]
    fn test_schema_from_headers() {
        let headers = csv::StringRecord::from(vec!["", "Start Time", "Gender"]);
        let schema = Schema::from_headers(&headers);
        assert!(schema.has_gender);
        assert!(!schema.has_birth_year);
    }

    #[test]
    fn test_filter_keeps_order_and_source() {
        let set = RecordSet::new(
            Schema::default(),
            vec![
                TripRecord::new(at(2017, 1, 2, 8), "A", "B", 1.0, "Customer"),
                TripRecord::new(at(2017, 2, 6, 8), "B", "C", 2.0, "Customer"),
                TripRecord::new(at(2017, 1, 9, 8), "C", "D", 3.0, "Customer"),
            ],
        );

        let january = set.filter(MonthFilter::Only(Month::January), DayFilter::All);
        assert_eq!(january.len(), 2);
        assert_eq!(january.records()[0].start_station, "A");
        assert_eq!(january.records()[1].start_station, "C");
        assert_eq!(set.len(), 3);

        let mondays = set.clone().into_filtered(MonthFilter::All, DayFilter::Only(Weekday::Monday));
        assert_eq!(mondays.len(), 3);
    }
}
