use thiserror::Error;

/// Failures surfaced by the normalizer.
///
/// Malformed leaves never show up here; they are coerced to their defaults.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// `domainsDashboards` is absent, not an object, or empty.
    #[error("payload has no domain dashboards")]
    MissingDashboards,

    #[error("payload is not valid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
