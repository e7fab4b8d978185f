//! Most frequent times of travel.

use super::frequency::{mode, ValueCount};
use crate::filters::{month_name, Weekday};
use crate::models::RecordSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// 1-based calendar month
    pub most_common_month: Option<ValueCount<u32>>,
    pub most_common_day: Option<ValueCount<Weekday>>,
    /// Hour of day, 0-23
    pub most_common_hour: Option<ValueCount<u32>>,
}

impl TimeStats {
    pub fn compute(records: &RecordSet) -> Self {
        Self {
            most_common_month: mode(records.iter().map(|r| r.month)),
            most_common_day: mode(records.iter().map(|r| r.day_of_week)),
            most_common_hour: mode(records.iter().map(|r| r.hour)),
        }
    }

    pub fn most_common_month_name(&self) -> Option<&'static str> {
        self.most_common_month
            .as_ref()
            .and_then(|month| month_name(month.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Schema, TripRecord};
    use chrono::NaiveDate;

    fn trip(month: u32, day: u32, hour: u32) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(2017, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        TripRecord::new(start, "A", "B", 60.0, "Subscriber")
    }

    #[test]
    fn test_time_modes() {
        // 2017-03-06 and 2017-03-13 are Mondays, 2017-01-07 a Saturday
        let set = RecordSet::new(
            Schema::default(),
            vec![trip(3, 6, 17), trip(3, 13, 17), trip(1, 7, 8), trip(1, 7, 17)],
        );
        let stats = TimeStats::compute(&set);

        // March and January tie at two trips; the earlier month wins
        assert_eq!(stats.most_common_month, Some(ValueCount { value: 1, count: 2 }));
        assert_eq!(stats.most_common_month_name(), Some("January"));
        assert_eq!(stats.most_common_day.unwrap().value, Weekday::Monday);
        assert_eq!(stats.most_common_hour, Some(ValueCount { value: 17, count: 3 }));
    }

    #[test]
    fn test_empty_set_has_no_modes() {
        let stats = TimeStats::compute(&RecordSet::default());
        assert_eq!(stats.most_common_month, None);
        assert_eq!(stats.most_common_month_name(), None);
        assert_eq!(stats.most_common_day, None);
        assert_eq!(stats.most_common_hour, None);
    }
}
