//! Formatting helpers for the post-run summary.

use console::style;
use ngscope_graph::AnalysisResult;

/// Format file size in human-readable format.
///
/// ```
/// use ngscope_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(10 * 1024 * 1024), "10.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", bytes, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// One-line count of what the run found, without styling.
pub fn summary_line(analysis: &AnalysisResult) -> String {
    format!(
        "{} components, {} services, {} modules, {} pipes, {} routes in {} files",
        analysis.components.len(),
        analysis.services.len(),
        analysis.modules.len(),
        analysis.pipes.len(),
        analysis.routes.len(),
        analysis.stats.files_classified,
    )
}

/// Print the run summary and any skipped-file count to stderr.
pub fn print_summary(analysis: &AnalysisResult) {
    eprintln!("  {}", style(summary_line(analysis)).dim());

    let roots: Vec<&str> = analysis.root_components().collect();
    if !roots.is_empty() {
        eprintln!("  {} {}", style("roots:").dim(), style(roots.join(", ")).cyan());
    }

    if analysis.stats.files_skipped > 0 {
        eprintln!(
            "  {} {}",
            style(analysis.stats.files_skipped).yellow().bold(),
            style("file(s) skipped").yellow()
        );
    }
}
