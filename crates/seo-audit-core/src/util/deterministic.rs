//! Deterministic ordering helpers.
//!
//! Identical payloads must always produce identical reports, so every
//! ordering the report exposes is decided here.

use std::collections::{BTreeMap, BTreeSet};

/// Sort by `score`, highest first.
///
/// The sort is stable: equal scores keep their input order. `total_cmp`
/// gives a total order even if a score were ever non-finite.
pub fn rank_descending<T>(items: &mut [T], score: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| score(b).total_cmp(&score(a)));
}

/// Project `sums` onto `labels`, filling gaps with `0`.
///
/// Keeps series that were accumulated separately index-aligned with a
/// shared, ascending label axis.
pub fn align(labels: &BTreeSet<String>, sums: &BTreeMap<String, f64>) -> Vec<f64> {
    labels
        .iter()
        .map(|label| sums.get(label).copied().unwrap_or(0.0))
        .collect()
}
