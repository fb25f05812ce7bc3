use serde::{Deserialize, Serialize};

/// Where the ranked keyword table comes from.
///
/// The backend has shipped two incompatible keyword schemas. Exactly one is
/// read per normalization; they are never merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeywordSource {
    /// `forSeasonChart` series, ranked by total monthly frequency.
    #[default]
    SeasonChart,
    /// `CommerceForecast` keyword → region → `{ base }`, ranked by derived tiers.
    CommerceForecast,
}

/// Normalization knobs.
#[derive(Debug, Clone, Default)]
pub struct NormalizeConfig {
    pub keyword_source: KeywordSource,
}

impl NormalizeConfig {
    pub fn with_keyword_source(keyword_source: KeywordSource) -> Self {
        Self { keyword_source }
    }
}
