use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;
use crate::config::KeywordSource;
use crate::context::RequestContext;

/// Normalized audit report.
///
/// Field names and nesting are the contract presentation code binds to.
/// Every field carries a concrete value; nothing is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedReport {
    pub domain_info: DomainInfo,
    pub metrics: Vec<Metric>,
    pub competitors: Vec<CompetitorRow>,
    pub traffic: Vec<TrafficRow>,
    pub top_domains_chart: TopDomainsChart,
    pub seasonality: Seasonality,
    pub semantic_core: SemanticCore,
    pub favicon: Vec<FaviconRow>,
    pub page_speed: Vec<PageSpeedRow>,
    pub ssl: SslInfo,
    pub robots: RobotsSummary,
    pub robots_tables: RobotsTables,
    pub robots_issues: RobotsIssues,
    pub sitemap_tables: SitemapTables,
    pub visibility: Visibility,
    pub position_stats: PositionStats,
    pub semantic_keywords: SemanticKeywords,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfo {
    /// Display name of the primary domain.
    pub site: String,
    /// Dashboard key of the primary domain.
    pub site_url: String,
    #[serde(rename = "hasSSL")]
    pub has_ssl: bool,
    pub has_robots: bool,
}

/// A table cell or metric value: either a count or a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: Cell,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorRow {
    pub domain: String,
    pub age: String,
    pub source: String,
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficRow {
    pub site: String,
    pub cms: String,
    pub pages: f64,
    pub top5: f64,
    pub top10: f64,
    pub top50: f64,
    pub traffic: f64,
}

/// One domain's line in a history chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
}

/// Per-threshold datasets, each holding one series per domain in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankDatasets {
    pub top1: Vec<LineSeries>,
    pub top3: Vec<LineSeries>,
    pub top5: Vec<LineSeries>,
    pub top10: Vec<LineSeries>,
    pub top50: Vec<LineSeries>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopDomainsChart {
    /// History dates of the primary domain, shared by every series.
    pub labels: Vec<String>,
    pub datasets: RankDatasets,
}

/// Month-bucketed search volume. The three arrays are index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seasonality {
    pub labels: Vec<String>,
    pub commercial: Vec<f64>,
    pub non_commercial: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticCore {
    pub total_requests: f64,
    pub unique_requests: f64,
    pub missed_requests: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaviconRow {
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSpeedRow {
    pub metric: String,
    pub mobile: String,
    pub desktop: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslInfo {
    pub owner: String,
    pub issuer: String,
    pub valid_from: String,
    pub valid_to: String,
    pub status: String,
    pub serial_number: String,
    pub thumbprint: String,
}

/// Flat robots.txt and sitemap summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsSummary {
    pub http_status: f64,
    pub found: bool,
    pub has_errors: bool,
    pub errors_list: Vec<String>,
    pub warnings_list: Vec<String>,
    pub suggestions_list: Vec<String>,
    pub content: String,
    pub sitemap_url: String,
    pub sitemap_exists: bool,
    pub sitemap_status: f64,
    pub total_sitemaps: f64,
    pub sitemap_urls: f64,
    pub checked_urls: f64,
    pub successful_urls: f64,
    pub duplicates: f64,
    pub inaccessible: f64,
    pub blocked: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table<R> {
    pub title: String,
    pub rows: Vec<R>,
}

impl<R> Table<R> {
    pub fn new(title: impl Into<String>, rows: Vec<R>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }
}

/// A labeled diagnostic. `status` is empty for purely informational rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticRow {
    pub label: String,
    pub value: Cell,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotsTables {
    pub general: Table<DiagnosticRow>,
    pub status: Table<DiagnosticRow>,
    pub seo: Table<DiagnosticRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// 1-based position within its list.
    pub id: u32,
    pub category: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RobotsIssues {
    pub critical: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub recommendations: Vec<Issue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCodeRow {
    pub http: String,
    pub count: f64,
    pub percent: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRow {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapTables {
    pub main: Table<DiagnosticRow>,
    pub status_codes: Table<StatusCodeRow>,
    pub recommendations: Table<RecommendationRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    pub commercial: f64,
    pub non_commercial: f64,
    pub total: f64,
}

/// Bar-chart series with one entry per domain in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionStats {
    pub top1: BarSeries,
    pub top3: BarSeries,
    pub top5: BarSeries,
    pub percentage: BarSeries,
    pub pages: BarSeries,
    pub traffic: BarSeries,
}

impl PositionStats {
    /// Every series, for invariants that hold across all of them.
    pub fn series(&self) -> [&BarSeries; 6] {
        [
            &self.top1,
            &self.top3,
            &self.top5,
            &self.percentage,
            &self.pages,
            &self.traffic,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRow {
    /// 1-based rank after sorting.
    pub id: u32,
    pub keyword: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub frequency: f64,
    pub max_month: f64,
    pub top1: f64,
    pub top2: f64,
    pub top3: f64,
}

/// Column-wise sums over every ranked keyword.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordTotals {
    pub frequency: f64,
    pub max_month: f64,
    pub top1: f64,
    pub top2: f64,
    pub top3: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticKeywords {
    pub total: usize,
    pub source: KeywordSource,
    pub data: Vec<KeywordRow>,
    pub totals: KeywordTotals,
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
    pub commit: Option<String>,
}

/// Backend response metadata bound to a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadInfo {
    pub path: Option<String>,
    pub size_bytes: u64,
    pub hash: PayloadHash,
}

/// Cryptographic payload fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadHash {
    pub algorithm: String,
    pub value: String,
}

/// A normalized report together with where it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEnvelope {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub payload: PayloadInfo,
    pub context: RequestContext,
    pub report: NormalizedReport,
}

impl AuditEnvelope {
    pub fn new(
        tool: ToolInfo,
        payload: PayloadInfo,
        context: RequestContext,
        report: NormalizedReport,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            payload,
            context,
            report,
        }
    }
}
