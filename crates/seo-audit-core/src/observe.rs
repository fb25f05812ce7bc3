//! Diagnostic events emitted while normalizing.
//!
//! The normalizer stays pure: it never prints or logs on its own. Callers
//! inject an [`Observer`] to see what was defaulted or absorbed along the way.

/// Something worth knowing about a normalization run.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The requested primary site is not a dashboard key; another domain was used.
    PrimaryFallback { requested: String, chosen: String },

    /// A report section was assembled.
    SectionBuilt { section: &'static str, rows: usize },

    /// Leaves with an unexpected shape were coerced to zero.
    MalformedValues { section: &'static str, count: usize },

    /// Robots and sitemap reported no issues; the placeholder row was inserted.
    NoIssuesPlaceholder,
}

pub trait Observer {
    fn observe(&self, event: Event);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn observe(&self, _event: Event) {}
}

/// Forwards events to `tracing` with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn observe(&self, event: Event) {
        match event {
            Event::PrimaryFallback { requested, chosen } => {
                tracing::warn!(%requested, %chosen, "primary site not among dashboards");
            }
            Event::SectionBuilt { section, rows } => {
                tracing::debug!(section, rows, "section normalized");
            }
            Event::MalformedValues { section, count } => {
                tracing::warn!(section, count, "malformed values coerced to zero");
            }
            Event::NoIssuesPlaceholder => {
                tracing::debug!("no robots/sitemap issues, placeholder row inserted");
            }
        }
    }
}
