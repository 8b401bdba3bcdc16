//! `ngscope analyze`.

use std::path::Path;

use anyhow::Context;
use ngscope_graph::{AnalysisResult, Analyzer};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::cli::AnalyzeArgs;
use crate::config::{NgscopeConfig, OutputTarget};
use crate::error::{CliError, Result};
use crate::render;
use crate::ui;

/// Execute the analyze command.
///
/// The report is always written before `--fail-on-diagnostics` is applied,
/// so a failing run still leaves its report behind.
pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let config = NgscopeConfig::load(&args)?;
    tracing::debug!(
        root = %config.root.display(),
        format = ?config.format,
        max_file_size = %ui::format_size(config.max_file_size),
        "resolved configuration"
    );

    ui::info(&format!("Analyzing {}", config.root.display()));
    let analysis = Analyzer::with_config(config.analyzer_config())
        .analyze()
        .await?;
    let report = render::render(&analysis, config.format)?;

    match config.output_target() {
        OutputTarget::Stdout => write_stdout(&report).await?,
        OutputTarget::File(path) => {
            write_report(&path, &report).await?;
            ui::success(&format!("Wrote {}", path.display()));
        }
    }
    ui::print_summary(&analysis);

    report_diagnostics(&analysis, args.fail_on_diagnostics)
}

fn report_diagnostics(analysis: &AnalysisResult, fail_on_diagnostics: bool) -> Result<()> {
    let count = analysis.diagnostics.len();
    if count == 0 {
        return Ok(());
    }

    ui::warning(&format!(
        "{count} diagnostic(s) reported; see the Diagnostics section"
    ));
    if fail_on_diagnostics {
        return Err(CliError::DiagnosticsReported(count));
    }
    Ok(())
}

async fn write_stdout(report: &str) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(report.as_bytes())
        .await
        .context("Failed to write report to stdout")?;
    stdout.flush().await.context("Failed to flush stdout")?;
    Ok(())
}

async fn write_report(path: &Path, report: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }
    }
    fs::write(path, report.as_bytes())
        .await
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = report.len(), "report written");
    Ok(())
}
