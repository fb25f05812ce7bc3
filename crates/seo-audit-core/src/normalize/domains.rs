//! Per-domain projections.
//!
//! The key order of `domainsDashboards` is the canonical domain order. Every
//! per-domain structure in the report (competitors, traffic, history series,
//! position bars) is produced from one [`DomainSet`] so they cannot drift.

use serde_json::{Map, Value};

use crate::context::RequestContext;
use crate::observe::{Event, Observer};
use crate::payload::access::{number_at, numbers_at, text_at, texts_at};
use crate::report::model::{
    BarSeries, Cell, CompetitorRow, LineSeries, Metric, PositionStats, RankDatasets,
    TopDomainsChart, TrafficRow,
};

pub const UNKNOWN_CMS: &str = "Unknown";
pub const UNDETERMINED_AGE: &str = "Не определен";

const PALETTE: [(u8, u8, u8); 5] = [
    (139, 92, 246),
    (251, 146, 60),
    (34, 197, 94),
    (239, 68, 68),
    (59, 130, 246),
];

/// Opaque series colour for the domain at `index`.
pub fn color(index: usize) -> String {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    format!("rgb({r}, {g}, {b})")
}

/// Fill colour (10% alpha) for the domain at `index`.
pub fn color_alpha(index: usize) -> String {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    format!("rgba({r}, {g}, {b}, 0.1)")
}

/// Hostname-ish label: scheme and one trailing slash removed.
pub fn display_name(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.strip_suffix('/').unwrap_or(rest).to_string()
}

/// One dashboard entry in canonical position.
#[derive(Debug)]
pub struct Domain<'a> {
    pub url: &'a str,
    pub name: String,
    pub dashboard: &'a Value,
}

impl Domain<'_> {
    fn number(&self, key: &str) -> f64 {
        number_at(self.dashboard, &[key])
    }

    fn cms(&self) -> String {
        text_at(self.dashboard, &["cms"], UNKNOWN_CMS)
    }
}

/// Canonically ordered domains plus the resolved primary.
#[derive(Debug)]
pub struct DomainSet<'a> {
    pub domains: Vec<Domain<'a>>,
    primary: usize,
}

impl<'a> DomainSet<'a> {
    /// Resolve order and primary domain; `None` when `dashboards` is empty.
    ///
    /// The primary is `ctx.primary_site` when it is a key, else the key with
    /// the same display name (form input often lacks the scheme), else the
    /// first key.
    pub fn resolve(
        dashboards: &'a Map<String, Value>,
        ctx: &RequestContext,
        observer: &dyn Observer,
    ) -> Option<Self> {
        let domains: Vec<Domain<'a>> = dashboards
            .iter()
            .map(|(url, dashboard)| Domain {
                url: url.as_str(),
                name: display_name(url),
                dashboard,
            })
            .collect();

        let wanted = display_name(ctx.primary_site.trim());
        let primary = domains
            .iter()
            .position(|d| d.url == ctx.primary_site)
            .or_else(|| domains.iter().position(|d| d.name == wanted));

        let primary = match primary {
            Some(idx) => idx,
            None => {
                let first = domains.first()?;
                observer.observe(Event::PrimaryFallback {
                    requested: ctx.primary_site.clone(),
                    chosen: first.url.to_string(),
                });
                0
            }
        };

        Some(Self { domains, primary })
    }

    pub fn primary(&self) -> &Domain<'a> {
        &self.domains[self.primary]
    }

    fn labels(&self) -> Vec<String> {
        self.domains.iter().map(|d| d.name.clone()).collect()
    }

    fn is_primary(&self, idx: usize) -> bool {
        idx == self.primary
    }
}

/// Headline cards for the primary domain.
pub fn metrics(set: &DomainSet<'_>) -> Vec<Metric> {
    let primary = set.primary();
    let metric = |label: &str, value: Cell, highlight: bool| Metric {
        label: label.to_string(),
        value,
        highlight,
    };

    vec![
        metric("CMS:", primary.cms().into(), false),
        metric("Запросы в ТОП-1:", primary.number("top1").into(), true),
        metric("Запросы в ТОП-10:", primary.number("top10").into(), false),
        metric("Страниц в индексе:", primary.number("pagesInIndex").into(), false),
        metric("Посещаемость в день:", primary.number("visits").into(), false),
    ]
}

pub fn competitors(set: &DomainSet<'_>) -> Vec<CompetitorRow> {
    set.domains
        .iter()
        .enumerate()
        .map(|(idx, d)| CompetitorRow {
            domain: d.name.clone(),
            age: text_at(d.dashboard, &["domainAge"], UNDETERMINED_AGE),
            source: "API".to_string(),
            info: if set.is_primary(idx) {
                "Основной домен".to_string()
            } else {
                "Конкурент".to_string()
            },
        })
        .collect()
}

pub fn traffic(set: &DomainSet<'_>) -> Vec<TrafficRow> {
    set.domains
        .iter()
        .map(|d| TrafficRow {
            site: d.name.clone(),
            cms: d.cms(),
            pages: d.number("pagesInIndex"),
            top5: d.number("top5"),
            top10: d.number("top10"),
            top50: d.number("top50"),
            traffic: d.number("visits"),
        })
        .collect()
}

/// Share of top-50 rankings that are also top-10, in whole percent.
///
/// The divisor is floored to 1; a domain with no top-50 rankings has no share.
pub fn top10_share(top10: f64, top50: f64) -> f64 {
    if top50 <= 0.0 {
        return 0.0;
    }
    (100.0 * top10 / top50.max(1.0)).round()
}

fn bars(set: &DomainSet<'_>, title: &str, value: impl Fn(&Domain<'_>) -> f64) -> BarSeries {
    BarSeries {
        title: title.to_string(),
        labels: set.labels(),
        data: set.domains.iter().map(value).collect(),
    }
}

pub fn position_stats(set: &DomainSet<'_>) -> PositionStats {
    PositionStats {
        top1: bars(set, "Запросы в ТОП 1", |d| d.number("top1")),
        top3: bars(set, "Запросы в ТОП 3", |d| d.number("top3")),
        top5: bars(set, "Запросы в ТОП 5", |d| d.number("top5")),
        percentage: bars(set, "Доля ТОП 10 среди ТОП 50, %", |d| {
            top10_share(d.number("top10"), d.number("top50"))
        }),
        pages: bars(set, "Страницы в индексе", |d| d.number("pagesInIndex")),
        traffic: bars(set, "Посещаемость в день", |d| d.number("visits")),
    }
}

pub fn top_domains_chart(set: &DomainSet<'_>) -> TopDomainsChart {
    let series = |tier: &str| -> Vec<LineSeries> {
        set.domains
            .iter()
            .enumerate()
            .map(|(idx, d)| LineSeries {
                label: d.name.clone(),
                data: numbers_at(d.dashboard, &["history", tier]),
                border_color: color(idx),
                background_color: color_alpha(idx),
            })
            .collect()
    };

    TopDomainsChart {
        labels: texts_at(set.primary().dashboard, &["history", "dates"]),
        datasets: RankDatasets {
            top1: series("top1"),
            top3: series("top3"),
            top5: series("top5"),
            top10: series("top10"),
            top50: series("top50"),
        },
    }
}
