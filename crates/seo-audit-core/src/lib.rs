pub mod config;
pub mod context;
pub mod error;
pub mod normalize;
pub mod observe;
pub mod payload;
pub mod report;
pub mod util;

use std::path::Path;

use anyhow::Result;

use crate::config::NormalizeConfig;
use crate::context::RequestContext;
use crate::observe::Observer;
use crate::report::model::{AuditEnvelope, ToolInfo};

pub use crate::error::NormalizeError;
pub use crate::normalize::{normalize, normalize_str, normalize_with};

pub const TOOL_NAME: &str = "seo-audit";

/// JSON schema version of the audit envelope.
/// Bump only when report field names or nesting change.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Load a saved backend response and normalize it.
///
/// A payload without dashboards surfaces as a [`NormalizeError`] inside the
/// returned `anyhow::Error`, so callers can tell it apart from I/O failures.
pub fn audit(
    path: &Path,
    ctx: RequestContext,
    config: &NormalizeConfig,
    tool: ToolInfo,
    observer: &dyn Observer,
) -> Result<AuditEnvelope> {
    let (raw, payload) = payload::read::read_payload(path)?.into_parts();
    let report = normalize_with(&raw, &ctx, config, observer)?;

    Ok(AuditEnvelope::new(tool, payload, ctx, report))
}
