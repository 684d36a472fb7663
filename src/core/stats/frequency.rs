//! Counting helpers shared by every report.
//!
//! Ties are always resolved towards the smallest value (`Ord`), so results
//! never depend on row order or hash iteration.

use serde::Serialize;
use std::collections::BTreeMap;

/// A value with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counted<T> {
    pub value: T,
    pub count: usize,
}

impl<T> Counted<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Counted<U> {
        Counted {
            value: f(self.value),
            count: self.count,
        }
    }
}

fn tally<K: Ord>(values: impl IntoIterator<Item = K>) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value; the smallest one wins a tie. `None` on no input.
pub fn mode<K: Ord>(values: impl IntoIterator<Item = K>) -> Option<Counted<K>> {
    let mut best: Option<Counted<K>> = None;
    // ascending key order: only a strictly higher count replaces the leader
    for (value, count) in tally(values) {
        if best.as_ref().is_none_or(|b| count > b.count) {
            best = Some(Counted { value, count });
        }
    }
    best
}

/// All distinct values, count descending, ties by value ascending.
pub fn frequency_table<K: Ord>(values: impl IntoIterator<Item = K>) -> Vec<Counted<K>> {
    let mut table: Vec<Counted<K>> = tally(values)
        .into_iter()
        .map(|(value, count)| Counted { value, count })
        .collect();
    // stable: equal counts keep the BTreeMap's ascending order
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// The `n` most frequent values, same ordering as [`frequency_table`].
pub fn top_n<K: Ord>(values: impl IntoIterator<Item = K>, n: usize) -> Vec<Counted<K>> {
    let mut table = frequency_table(values);
    table.truncate(n);
    table
}
