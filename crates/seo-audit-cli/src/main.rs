use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seo_audit_core::config::NormalizeConfig;
use seo_audit_core::context::RequestContext;
use seo_audit_core::observe::TracingObserver;
use seo_audit_core::report::{model::ToolInfo, render};
use seo_audit_core::{NormalizeError, audit};

mod args;

const DEFAULT_LOG_FILTER: &str = "seo_audit_core=warn";

fn main() -> Result<()> {
    let args = args::Args::parse();

    // Logs go to stderr so stdout stays a clean report. RUST_LOG replaces the default filter.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: args.commit.clone(),
    };

    let ctx = RequestContext::new(&args.site, &args.city).with_competitors(&args.competitors);
    let config = NormalizeConfig::with_keyword_source(args.keywords.into());

    let envelope = match audit(&args.payload_path, ctx, &config, tool, &TracingObserver) {
        Ok(envelope) => envelope,
        Err(err) => match err.downcast_ref::<NormalizeError>() {
            Some(NormalizeError::MissingDashboards) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
            _ => return Err(err),
        },
    };

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&envelope)?,
        args::OutputFormat::Text => render::render_text(&envelope),
    };

    match args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => print!("{output}"),
    }

    Ok(())
}
