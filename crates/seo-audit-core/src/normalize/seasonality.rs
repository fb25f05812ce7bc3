//! Month-bucketed keyword volume.
//!
//! `forSeasonChart.{commerce,nonCommerce}` hold keyword series whose monthly
//! values come either as plain numbers or as `{frequency|count|value}`
//! objects, inconsistently per entry. Both shapes are read the same way.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::observe::{Event, Observer};
use crate::payload::access::{array_at, as_number};
use crate::report::model::Seasonality;
use crate::util::deterministic::align;

/// Keys tried, in order, when a month value is an object.
const FREQUENCY_KEYS: [&str; 3] = ["frequency", "count", "value"];

/// Keyword class in `forSeasonChart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Commercial,
    NonCommercial,
}

impl Class {
    pub const ALL: [Class; 2] = [Class::Commercial, Class::NonCommercial];

    pub fn key(self) -> &'static str {
        match self {
            Class::Commercial => "commerce",
            Class::NonCommercial => "nonCommerce",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Class::Commercial => "Коммерческий",
            Class::NonCommercial => "Некоммерческий",
        }
    }
}

/// Keyword series of one class.
pub fn series(raw: &Value, class: Class) -> &[Value] {
    array_at(raw, &["forSeasonChart", class.key()])
}

/// Frequency carried by a month value, or `None` if its shape is unexpected.
///
/// For objects the first non-zero of `frequency`, `count`, `value` wins; an
/// object whose known fields are all zero yields `0`.
pub fn frequency(value: &Value) -> Option<f64> {
    match value {
        Value::Number(_) => as_number(value),
        Value::Object(fields) => {
            let found: Vec<f64> = FREQUENCY_KEYS
                .iter()
                .filter_map(|k| fields.get(*k).and_then(as_number))
                .collect();
            found
                .iter()
                .copied()
                .find(|n| *n != 0.0)
                .or_else(|| found.first().copied())
        }
        _ => None,
    }
}

/// Frequency with malformed shapes coerced to `0`.
pub fn month_frequency(value: &Value) -> f64 {
    frequency(value).unwrap_or(0.0)
}

/// Month entries of one keyword series; empty when `data` is not an object.
pub fn months(entry: &Value) -> impl Iterator<Item = (&String, &Value)> {
    entry
        .get("data")
        .and_then(Value::as_object)
        .into_iter()
        .flatten()
}

/// Sum every keyword's volume per month, per class.
///
/// The label axis is the union of months across both classes, ascending.
/// A month seen in only one class still appears in both series as `0`.
pub fn seasonality(raw: &Value, observer: &dyn Observer) -> Seasonality {
    let mut labels = BTreeSet::new();
    let mut sums: [BTreeMap<String, f64>; 2] = Default::default();
    let mut malformed = 0usize;

    for (slot, class) in Class::ALL.into_iter().enumerate() {
        for entry in series(raw, class) {
            for (month, value) in months(entry) {
                labels.insert(month.clone());
                let freq = frequency(value).unwrap_or_else(|| {
                    malformed += 1;
                    0.0
                });
                *sums[slot].entry(month.clone()).or_insert(0.0) += freq;
            }
        }
    }

    if malformed > 0 {
        observer.observe(Event::MalformedValues {
            section: "seasonality",
            count: malformed,
        });
    }

    let [commercial, non_commercial] = &sums;
    Seasonality {
        commercial: align(&labels, commercial),
        non_commercial: align(&labels, non_commercial),
        labels: labels.into_iter().collect(),
    }
}
