use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Report output format
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable Markdown document with numbered sections
    #[default]
    #[value(name = "markdown", alias = "md")]
    Markdown,

    /// Pretty-printed JSON of the full analysis result
    #[value(name = "json")]
    Json,
}

impl ReportFormat {
    /// File written when no output path is configured.
    pub fn default_file_name(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "project-overview.md",
            ReportFormat::Json => "project-overview.json",
        }
    }
}
