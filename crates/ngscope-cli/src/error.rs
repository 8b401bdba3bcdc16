//! Error handling for the ngscope CLI.
//!
//! - `CliError` is what every command returns.
//! - `ConfigError` covers loading and validating `ngscope.config.json`.
//! - Conversions from library errors are automatic via `#[from]`.
//!
//! # Example
//!
//! ```rust,no_run
//! use ngscope_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_config(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod miette;

pub use self::miette::cli_error_to_miette;

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (invalid file contents or values)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The analysis itself could not run
    #[error("Analysis failed: {0}")]
    Analysis(#[from] ngscope_graph::Error),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The report was written but the run produced diagnostics
    #[error("Analysis reported {0} diagnostic(s)")]
    DiagnosticsReported(usize),

    /// Errors carrying an `anyhow` context chain
    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config sources could not be merged into a valid configuration
    #[error("Invalid configuration: {0}\n\nHint: Check ngscope.config.json syntax and NGSCOPE_* environment variables")]
    Extract(String),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Extract(err.to_string())
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }
}
