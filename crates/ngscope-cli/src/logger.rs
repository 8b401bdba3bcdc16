//! Logging infrastructure for the ngscope CLI.
//!
//! Structured logging on top of the `tracing` ecosystem. Log lines always go
//! to stderr so a report written to stdout (`-o -`) stays clean.
//!
//! # Example
//!
//! ```rust,no_run
//! use ngscope_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting analysis");
//! debug!("Classifying file: {}", "app.component.ts");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "ngscope_graph=debug,ngscope_cli=debug,ngscope=debug";
const QUIET_FILTER: &str = "ngscope_graph=error,ngscope_cli=error,ngscope=error";
const DEFAULT_FILTER: &str = "ngscope_graph=info,ngscope_cli=info,ngscope=info";

/// Pick the filter for the given flags.
///
/// 1. `--verbose`: debug for ngscope crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` if set
/// 4. info for ngscope crates
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging occurs.
///
/// # Examples
///
/// ```rust,no_run
/// use ngscope_cli::logger::init_logger;
///
/// // Debug logging without colors
/// init_logger(true, false, true);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
