//! Frequency counting shared by every statistics section.
//!
//! Ties are broken by value: among equally frequent values the smallest
//! (by `Ord`) wins. Numbers therefore prefer the lowest value, weekdays the
//! one closest to Monday, and strings the lexicographically first.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: usize,
}

impl<T> ValueCount<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValueCount<U> {
        ValueCount {
            value: f(self.value),
            count: self.count,
        }
    }
}

fn count<T, I>(values: I) -> HashMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value, `None` when there are no values.
pub fn mode<T, I>(values: I) -> Option<ValueCount<T>>
where
    T: Eq + Hash + Ord,
    I: IntoIterator<Item = T>,
{
    count(values)
        .into_iter()
        .min_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then_with(|| a.cmp(b)))
        .map(|(value, count)| ValueCount { value, count })
}

/// Every distinct value with its count, most frequent first.
pub fn value_counts<T, I>(values: I) -> Vec<ValueCount<T>>
where
    T: Eq + Hash + Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<ValueCount<T>> = count(values)
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    counts
}
