//! Filter selection: the supported cities, months and weekdays, and the
//! parameters one analysis round is loaded with.
//!
//! Every enumeration parses case-insensitively from trimmed input through
//! [`Choice`], which is also what the interactive prompt validates against.

use crate::error::ChoiceError;
use std::fmt;
use std::str::FromStr;

/// Full month names, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name for a 1-based calendar month, `None` outside 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// A closed set of named values the user picks from.
pub trait Choice: Sized + Copy + 'static {
    /// What is being chosen, used in error messages.
    const KIND: &'static str;

    fn variants() -> &'static [Self];

    /// Canonical lowercase spelling.
    fn name(&self) -> &'static str;

    fn names() -> Vec<&'static str> {
        Self::variants().iter().map(Self::name).collect()
    }

    fn parse_choice(input: &str) -> Result<Self, ChoiceError> {
        let wanted = input.trim().to_lowercase();
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.name() == wanted)
            .ok_or_else(|| ChoiceError {
                kind: Self::KIND,
                value: input.trim().to_string(),
                expected: Self::names(),
            })
    }
}

/// Capitalizes each space-separated word: `new york city` -> `New York City`.
pub fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

macro_rules! impl_choice_traits {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = ChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as Choice>::parse_choice(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&title_case(self.name()))
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Dataset file backing this city.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl Choice for City {
    const KIND: &'static str = "city";

    fn variants() -> &'static [Self] {
        &[City::Chicago, City::NewYorkCity, City::Washington]
    }

    fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }
}

impl_choice_traits!(City);

/// The months a dataset can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    /// 1-based calendar month.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }
}

impl Choice for Month {
    const KIND: &'static str = "month";

    fn variants() -> &'static [Self] {
        &[
            Month::January,
            Month::February,
            Month::March,
            Month::April,
            Month::May,
            Month::June,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }
}

impl_choice_traits!(Month);

/// Day of the week, ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl Choice for Weekday {
    const KIND: &'static str = "day";

    fn variants() -> &'static [Self] {
        &[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl_choice_traits!(Weekday);

/// Which time filters the user wants to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

impl FilterMode {
    pub fn wants_month(&self) -> bool {
        matches!(self, FilterMode::Month | FilterMode::Both)
    }

    pub fn wants_day(&self) -> bool {
        matches!(self, FilterMode::Day | FilterMode::Both)
    }
}

impl Choice for FilterMode {
    const KIND: &'static str = "filter";

    fn variants() -> &'static [Self] {
        &[
            FilterMode::Month,
            FilterMode::Day,
            FilterMode::Both,
            FilterMode::None,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            FilterMode::Month => "month",
            FilterMode::Day => "day",
            FilterMode::Both => "both",
            FilterMode::None => "none",
        }
    }
}

impl_choice_traits!(FilterMode);

/// Month restriction; `All` keeps every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(wanted) => wanted.number() == month,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        Month::parse_choice(s)
            .map(MonthFilter::Only)
            .map_err(|mut err| {
                err.expected.push("all");
                err
            })
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Only(month) => fmt::Display::fmt(month, f),
        }
    }
}

/// Weekday restriction; `All` keeps every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(wanted) => *wanted == day,
        }
    }
}

impl FromStr for DayFilter {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }
        Weekday::parse_choice(s)
            .map(DayFilter::Only)
            .map_err(|mut err| {
                err.expected.push("all");
                err
            })
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All"),
            DayFilter::Only(day) => fmt::Display::fmt(day, f),
        }
    }
}

/// Everything needed to load one round's record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParams {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterParams {
    /// Unfiltered parameters for `city`.
    pub fn new(city: City) -> Self {
        Self {
            city,
            month: MonthFilter::All,
            day: DayFilter::All,
        }
    }

    pub fn with_month(mut self, month: MonthFilter) -> Self {
        self.month = month;
        self
    }

    pub fn with_day(mut self, day: DayFilter) -> Self {
        self.day = day;
        self
    }
}

impl fmt::Display for FilterParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (month: {}, day: {})", self.city, self.month, self.day)
    }
}
