//! Report assembly.
//!
//! An [`AnalysisResult`] is turned into discrete [`Section`] records first;
//! only the final step joins them into a document. JSON output skips the
//! section step and serializes the result directly.

mod json;
mod markdown;

pub use json::render_json;
pub use markdown::{render_markdown, sections};

use ngscope_graph::AnalysisResult;

use crate::cli::ReportFormat;
use crate::error::Result;

/// Title of the Markdown report.
pub const REPORT_TITLE: &str = "Angular Project Overview";

/// One numbered report section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: String,
}

/// Render `analysis` in the requested format.
pub fn render(analysis: &AnalysisResult, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Markdown => Ok(render_markdown(analysis)),
        ReportFormat::Json => Ok(render_json(analysis)?),
    }
}
