//! Ranked semantic keyword table.
//!
//! Two backend schemas carry keyword data; [`KeywordSource`] picks exactly
//! one of them per run.
//!
//! - `forSeasonChart`: every commercial and non-commercial series becomes a
//!   row whose frequency is the sum of its months, ranked by that sum.
//! - `CommerceForecast`: keyword → region → `{ base }`. The base is summed
//!   over regions and split into fixed tiers (30%, 15%, 10%), ranked by the
//!   sum of the tiers.
//!
//! Ranking is stable, so keywords with equal scores keep their payload order.

use serde_json::Value;

use crate::config::KeywordSource;
use crate::normalize::seasonality::{self, Class};
use crate::payload::access::{as_text, number_at, object_at};
use crate::report::model::{KeywordRow, KeywordTotals, SemanticKeywords};
use crate::util::deterministic::rank_descending;

pub const TOP1_SHARE: f64 = 0.30;
pub const TOP2_SHARE: f64 = 0.15;
pub const TOP3_SHARE: f64 = 0.10;

const MISSING_KEYWORD: &str = "N/A";

pub fn semantic_keywords(raw: &Value, source: KeywordSource) -> SemanticKeywords {
    let mut rows = match source {
        KeywordSource::SeasonChart => {
            let mut rows = from_season_chart(raw);
            rank_descending(&mut rows, |r| r.frequency);
            rows
        }
        KeywordSource::CommerceForecast => {
            let mut rows = from_forecast(raw);
            rank_descending(&mut rows, |r| r.top1 + r.top2 + r.top3);
            rows
        }
    };

    for (idx, row) in rows.iter_mut().enumerate() {
        row.id = idx as u32 + 1;
    }

    SemanticKeywords {
        total: rows.len(),
        source,
        totals: totals(&rows),
        data: rows,
    }
}

fn keyword_name(entry: &Value) -> String {
    entry
        .get("keyword")
        .and_then(as_text)
        .or_else(|| entry.get("query").and_then(as_text))
        .unwrap_or_else(|| MISSING_KEYWORD.to_string())
}

fn from_season_chart(raw: &Value) -> Vec<KeywordRow> {
    Class::ALL
        .into_iter()
        .flat_map(|class| {
            seasonality::series(raw, class)
                .iter()
                .map(move |entry| season_row(entry, class))
        })
        .collect()
}

fn season_row(entry: &Value, class: Class) -> KeywordRow {
    let (frequency, max_month) = seasonality::months(entry)
        .map(|(_, value)| seasonality::month_frequency(value))
        .fold((0.0, 0.0_f64), |(sum, max), f| (sum + f, max.max(f)));

    KeywordRow {
        id: 0,
        keyword: keyword_name(entry),
        kind: class.label().to_string(),
        frequency,
        max_month,
        top1: 0.0,
        top2: 0.0,
        top3: 0.0,
    }
}

fn from_forecast(raw: &Value) -> Vec<KeywordRow> {
    object_at(raw, &["CommerceForecast"])
        .into_iter()
        .flatten()
        .map(|(keyword, regions)| {
            // `Sum` for f64 starts at -0.0; an empty region map must stay +0.0.
            let base = regions
                .as_object()
                .into_iter()
                .flatten()
                .map(|(_, region)| number_at(region, &["base"]))
                .fold(0.0, |acc, b| acc + b);

            KeywordRow {
                id: 0,
                keyword: keyword.clone(),
                kind: Class::Commercial.label().to_string(),
                frequency: base,
                max_month: 0.0,
                top1: TOP1_SHARE * base,
                top2: TOP2_SHARE * base,
                top3: TOP3_SHARE * base,
            }
        })
        .collect()
}

fn totals(rows: &[KeywordRow]) -> KeywordTotals {
    rows.iter().fold(KeywordTotals::default(), |acc, r| KeywordTotals {
        frequency: acc.frequency + r.frequency,
        max_month: acc.max_month + r.max_month,
        top1: acc.top1 + r.top1,
        top2: acc.top2 + r.top2,
        top3: acc.top3 + r.top3,
    })
}
