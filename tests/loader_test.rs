//! Loading and filtering against on-disk fixtures

mod common;

use bikeshare::error::LoadError;
use bikeshare::filters::{Choice, City, DayFilter, Month, MonthFilter, Weekday};
use bikeshare::loader::DatasetLoader;
use common::{data_dir, write_dataset};

fn every_month_filter() -> Vec<MonthFilter> {
    let mut filters = vec![MonthFilter::All];
    filters.extend(Month::variants().iter().copied().map(MonthFilter::Only));
    filters
}

fn every_day_filter() -> Vec<DayFilter> {
    let mut filters = vec![DayFilter::All];
    filters.extend(Weekday::variants().iter().copied().map(DayFilter::Only));
    filters
}

#[test]
fn test_every_filter_combination_matches_its_rows() {
    let dir = data_dir();
    let loader = DatasetLoader::new(dir.path());
    let all = loader.load_city(City::Chicago).unwrap();

    for month in every_month_filter() {
        for day in every_day_filter() {
            let filtered = loader.load(City::Chicago, month, day).unwrap();

            assert!(filtered
                .iter()
                .all(|r| month.matches(r.month) && day.matches(r.day_of_week)));

            // Nothing that satisfies the filters was dropped
            let expected = all
                .iter()
                .filter(|r| month.matches(r.month) && day.matches(r.day_of_week))
                .count();
            assert_eq!(filtered.len(), expected, "month={month} day={day}");
        }
    }
}

#[test]
fn test_all_filters_keep_everything_in_order() {
    let dir = data_dir();
    let loader = DatasetLoader::new(dir.path());
    let set = loader
        .load(City::Chicago, MonthFilter::All, DayFilter::All)
        .unwrap();

    assert_eq!(set.len(), 7);
    let durations: Vec<f64> = set.iter().map(|r| r.trip_duration).collect();
    assert_eq!(durations, vec![100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0]);
}

#[test]
fn test_filtering_is_idempotent() {
    let dir = data_dir();
    let loader = DatasetLoader::new(dir.path());
    let month = MonthFilter::Only(Month::January);
    let day = DayFilter::Only(Weekday::Monday);

    let once = loader.load(City::Chicago, month, day).unwrap();
    let twice = once.filter(month, day);
    assert_eq!(once, twice);
    assert_eq!(once.len(), 3);
}

#[test]
fn test_conjunctive_filters() {
    let dir = data_dir();
    let loader = DatasetLoader::new(dir.path());

    let saturday_in_feb = loader
        .load(
            City::Chicago,
            MonthFilter::Only(Month::February),
            DayFilter::Only(Weekday::Saturday),
        )
        .unwrap();
    assert_eq!(saturday_in_feb.len(), 2);

    let monday_in_feb = loader
        .load(
            City::Chicago,
            MonthFilter::Only(Month::February),
            DayFilter::Only(Weekday::Monday),
        )
        .unwrap();
    assert!(monday_in_feb.is_empty());
}

#[test]
fn test_schema_detected_per_city() {
    let dir = data_dir();
    let loader = DatasetLoader::new(dir.path());

    let chicago = loader.load_city(City::Chicago).unwrap().schema();
    assert!(chicago.has_gender && chicago.has_birth_year);

    let washington = loader.load_city(City::Washington).unwrap().schema();
    assert!(!washington.has_gender && !washington.has_birth_year);
}

#[test]
fn test_missing_dataset_is_an_error() {
    let dir = data_dir();
    let loader = DatasetLoader::new(dir.path());
    let err = loader.load_city(City::NewYorkCity).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
    assert!(err.to_string().contains("new_york_city.csv"));
}

#[test]
fn test_bad_timestamp_fails_load() {
    let dir = data_dir();
    write_dataset(
        dir.path(),
        "new_york_city.csv",
        "Start Time,Trip Duration,Start Station,End Station,User Type\n\
         2017-01-01 00:07:57,10,A,B,Subscriber\n\
         2017-02-30 10:00:00,10,A,B,Subscriber\n",
    )
    .unwrap();

    let loader = DatasetLoader::new(dir.path());
    let err = loader
        .load(City::NewYorkCity, MonthFilter::All, DayFilter::All)
        .unwrap_err();
    assert!(matches!(err, LoadError::InvalidTimestamp { row: 2, .. }));
}
