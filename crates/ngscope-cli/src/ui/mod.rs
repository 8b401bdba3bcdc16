//! Terminal status output.
//!
//! Everything here writes to stderr so stdout stays reserved for a report
//! written with `-o -`.
//!
//! ```no_run
//! use ngscope_cli::ui;
//!
//! ui::init_colors();
//! ui::success("Wrote project-overview.md");
//! ui::warning("2 files were skipped");
//! ```

mod format;
mod messages;

pub use format::{format_size, print_summary, summary_line};
pub use messages::{info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Apply the color decision to `console` styling.
///
/// `owo-colors` output is gated separately by the `NO_COLOR` check in
/// [`messages`].
pub fn init_colors() {
    console::set_colors_enabled_stderr(should_use_color());
}
