//! User type, gender and birth-year breakdowns.

use super::frequency::{mode, value_counts, ValueCount};
use crate::models::RecordSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest_year: i32,
    pub most_recent_year: i32,
    pub most_common_year: i32,
}

impl BirthYearStats {
    /// `None` when there are no years to look at.
    pub fn from_years(years: &[i32]) -> Option<Self> {
        Some(Self {
            earliest_year: *years.iter().min()?,
            most_recent_year: *years.iter().max()?,
            most_common_year: mode(years.iter().copied())?.value,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_type_counts: Vec<ValueCount<String>>,
    /// `None` when the dataset has no gender column
    pub gender_counts: Option<Vec<ValueCount<String>>>,
    /// `None` when the dataset has no birth-year column or every value is null
    pub birth_year_stats: Option<BirthYearStats>,
}

impl UserStats {
    pub fn compute(records: &RecordSet) -> Self {
        let schema = records.schema();
        let owned = |counts: Vec<ValueCount<&str>>| -> Vec<ValueCount<String>> {
            counts.into_iter().map(|vc| vc.map(str::to_owned)).collect()
        };

        let user_type_counts = owned(value_counts(
            records
                .iter()
                .map(|r| r.user_type.as_str())
                .filter(|t| !t.is_empty()),
        ));

        let gender_counts = schema
            .has_gender
            .then(|| owned(value_counts(records.iter().filter_map(|r| r.gender.as_deref()))));

        let birth_year_stats = if schema.has_birth_year {
            let years: Vec<i32> = records.iter().filter_map(|r| r.birth_year).collect();
            BirthYearStats::from_years(&years)
        } else {
            None
        };

        Self {
            user_type_counts,
            gender_counts,
            birth_year_stats,
        }
    }
}
