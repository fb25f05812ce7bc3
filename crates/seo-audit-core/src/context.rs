use serde::{Deserialize, Serialize};

/// What the user submitted on the audit form.
///
/// Created once per audit and never mutated. `city` only shapes the
/// upstream request; normalization ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub primary_site: String,
    #[serde(default)]
    pub competitor_sites: Vec<String>,
    pub city: String,
}

impl RequestContext {
    pub fn new(primary_site: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            primary_site: primary_site.into(),
            competitor_sites: vec![],
            city: city.into(),
        }
    }

    /// Append competitors, dropping blank form fields.
    pub fn with_competitors<I, S>(mut self, competitors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.competitor_sites.extend(
            competitors
                .into_iter()
                .map(Into::into)
                .filter(|c| !c.trim().is_empty()),
        );
        self
    }
}
