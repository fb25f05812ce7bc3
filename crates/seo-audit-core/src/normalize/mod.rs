//! Raw backend payload → [`NormalizedReport`].
//!
//! A pure function of its inputs: no I/O, no shared state. The only hard
//! failure is a payload without domain dashboards; every other section
//! defaults to zero or empty.

pub mod diagnostics;
pub mod domains;
pub mod keywords;
pub mod pagespeed;
pub mod seasonality;
pub mod sections;

use serde_json::Value;

use crate::config::NormalizeConfig;
use crate::context::RequestContext;
use crate::error::NormalizeError;
use crate::observe::{Event, NoopObserver, Observer};
use crate::payload::access::object_at;
use crate::report::model::NormalizedReport;
use domains::DomainSet;

/// Normalize with the default configuration and no diagnostics.
pub fn normalize(raw: &Value, ctx: &RequestContext) -> Result<NormalizedReport, NormalizeError> {
    normalize_with(raw, ctx, &NormalizeConfig::default(), &NoopObserver)
}

/// Parse JSON text, then normalize it.
pub fn normalize_str(json: &str, ctx: &RequestContext) -> Result<NormalizedReport, NormalizeError> {
    let raw: Value = serde_json::from_str(json)?;
    normalize(&raw, ctx)
}

pub fn normalize_with(
    raw: &Value,
    ctx: &RequestContext,
    config: &NormalizeConfig,
    observer: &dyn Observer,
) -> Result<NormalizedReport, NormalizeError> {
    let domains = object_at(raw, &["domainsDashboards"])
        .and_then(|dashboards| DomainSet::resolve(dashboards, ctx, observer))
        .ok_or(NormalizeError::MissingDashboards)?;
    let built = |section: &'static str, rows: usize| {
        observer.observe(Event::SectionBuilt { section, rows });
    };

    let competitors = domains::competitors(&domains);
    let traffic = domains::traffic(&domains);
    built("domains", domains.domains.len());

    let seasonality = seasonality::seasonality(raw, observer);
    built("seasonality", seasonality.labels.len());

    let semantic_keywords = keywords::semantic_keywords(raw, config.keyword_source);
    built("semanticKeywords", semantic_keywords.total);

    let robots = diagnostics::robots_summary(raw);
    let robots_tables = diagnostics::robots_tables(raw, &robots);
    let robots_issues = diagnostics::robots_issues(raw, observer);
    let sitemap_tables = diagnostics::sitemap_tables(raw);
    built(
        "robotsIssues",
        robots_issues.critical.len() + robots_issues.warnings.len() + robots_issues.recommendations.len(),
    );

    let favicon = sections::favicon(raw);
    built("favicon", favicon.len());

    let ssl = sections::ssl(raw);

    Ok(NormalizedReport {
        domain_info: sections::domain_info(&domains, &ssl, raw),
        metrics: domains::metrics(&domains),
        competitors,
        traffic,
        top_domains_chart: domains::top_domains_chart(&domains),
        seasonality,
        semantic_core: sections::semantic_core(raw),
        favicon,
        page_speed: pagespeed::page_speed(raw),
        ssl,
        robots,
        robots_tables,
        robots_issues,
        sitemap_tables,
        visibility: sections::visibility(raw),
        position_stats: domains::position_stats(&domains),
        semantic_keywords,
    })
}
