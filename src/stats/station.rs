//! Most popular stations and trip.

use super::frequency::{mode, ValueCount};
use crate::models::RecordSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub most_common_start_station: Option<ValueCount<String>>,
    pub most_common_end_station: Option<ValueCount<String>>,
    /// Keyed as `<start> to <end>`
    pub most_common_trip: Option<ValueCount<String>>,
}

impl StationStats {
    pub fn compute(records: &RecordSet) -> Self {
        let owned = |vc: ValueCount<&str>| vc.map(str::to_owned);

        Self {
            most_common_start_station: mode(records.iter().map(|r| r.start_station.as_str()))
                .map(owned),
            most_common_end_station: mode(records.iter().map(|r| r.end_station.as_str()))
                .map(owned),
            most_common_trip: mode(records.iter().map(|r| r.trip())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Schema, TripRecord};
    use chrono::NaiveDate;

    fn trip(start: &str, end: &str) -> TripRecord {
        let at = NaiveDate::from_ymd_opt(2017, 4, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        TripRecord::new(at, start, end, 60.0, "Customer")
    }

    #[test]
    fn test_station_modes() {
        let set = RecordSet::new(
            Schema::default(),
            vec![trip("A", "C"), trip("B", "C"), trip("B", "A"), trip("A", "C")],
        );
        let stats = StationStats::compute(&set);

        // A and B both start twice
        assert_eq!(stats.most_common_start_station.unwrap().value, "A");
        assert_eq!(
            stats.most_common_end_station,
            Some(ValueCount { value: "C".to_string(), count: 3 })
        );
        assert_eq!(
            stats.most_common_trip,
            Some(ValueCount { value: "A to C".to_string(), count: 2 })
        );
    }

    #[test]
    fn test_empty_set_has_no_stations() {
        let stats = StationStats::compute(&RecordSet::default());
        assert!(stats.most_common_start_station.is_none());
        assert!(stats.most_common_end_station.is_none());
        assert!(stats.most_common_trip.is_none());
    }
}
