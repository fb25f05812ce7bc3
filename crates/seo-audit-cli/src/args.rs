use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use seo_audit_core::config::KeywordSource;

#[derive(Debug, Parser)]
#[command(
    name = "seo-audit",
    version,
    about = "Normalize a saved SEO analysis response into a stable report"
)]
pub struct Args {
    /// Path to the backend response (.json)
    pub payload_path: PathBuf,

    /// Site the audit was requested for
    #[arg(long)]
    pub site: String,

    /// Competitor site, repeat for several
    #[arg(long = "competitor")]
    pub competitors: Vec<String>,

    /// City the audit was requested for
    #[arg(long, default_value = "Москва")]
    pub city: String,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Payload section the keyword table is built from
    #[arg(long, default_value = "season")]
    pub keywords: KeywordsArg,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Optional git commit hash for tool metadata
    #[arg(long)]
    pub commit: Option<String>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KeywordsArg {
    /// `forSeasonChart` series
    Season,
    /// `CommerceForecast` regional bases
    Forecast,
}

impl From<KeywordsArg> for KeywordSource {
    fn from(arg: KeywordsArg) -> Self {
        match arg {
            KeywordsArg::Season => KeywordSource::SeasonChart,
            KeywordsArg::Forecast => KeywordSource::CommerceForecast,
        }
    }
}
