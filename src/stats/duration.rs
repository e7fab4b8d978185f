//! Total and average trip duration.

use crate::models::RecordSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub trip_count: usize,
    /// Seconds
    pub total_duration: f64,
    /// Seconds; `None` for an empty record set
    pub average_duration: Option<f64>,
}

impl DurationStats {
    pub fn compute(records: &RecordSet) -> Self {
        let trip_count = records.len();
        let total_duration: f64 = records.iter().map(|r| r.trip_duration).sum();
        let average_duration = (trip_count > 0).then(|| total_duration / trip_count as f64);

        Self {
            trip_count,
            total_duration,
            average_duration,
        }
    }
}

/// Render seconds as `1d 2h 3m 4s`, dropping leading zero units.
pub fn humanize_seconds(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let (days, rem) = (total / 86_400, total % 86_400);
    let (hours, rem) = (rem / 3_600, rem % 3_600);
    let (minutes, secs) = (rem / 60, rem % 60);

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if days > 0 || hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if days > 0 || hours > 0 || minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{secs}s"));
    parts.join(" ")
}
