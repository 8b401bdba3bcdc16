//! Miette report conversion for CLI errors.

use ::miette::{MietteDiagnostic, Report, Severity};

use crate::error::{CliError, ConfigError};

/// Convert a `CliError` into a miette `Report` for rendering in `main`.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Analysis(ngscope_graph::Error::RootUnreadable { path, source }) => {
            Report::new(
                MietteDiagnostic::new(format!(
                    "Cannot read project root '{}': {source}",
                    path.display()
                ))
                .with_code("ngscope::root")
                .with_help("Pass the directory that contains your package.json"),
            )
        }
        CliError::FileNotFound(path) => Report::new(
            MietteDiagnostic::new(format!("File not found: {}", path.display()))
                .with_code("ngscope::not_found")
                .with_help("Create the file or fix the --config path"),
        ),
        CliError::DiagnosticsReported(count) => Report::new(
            MietteDiagnostic::new(format!("Analysis reported {count} diagnostic(s)"))
                .with_code("ngscope::diagnostics")
                .with_severity(Severity::Error)
                .with_help("See the Diagnostics section of the report"),
        ),
        other => ::miette::miette!("{}", other),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::InvalidValue { field, value, hint } => Report::new(
            MietteDiagnostic::new(format!("Invalid value for '{field}': {value}"))
                .with_code("ngscope::config")
                .with_help(hint),
        ),
        other => ::miette::miette!("Configuration error: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_value_keeps_hint_as_help() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::InvalidValue {
            field: "extensions".to_string(),
            value: "[]".to_string(),
            hint: "List at least one extension".to_string(),
        }));
        assert!(report.to_string().contains("Invalid value for 'extensions'"));
        let help = report.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("List at least one extension"));
    }

    #[test]
    fn test_missing_file_has_help() {
        let report = cli_error_to_miette(CliError::FileNotFound(PathBuf::from("custom.json")));
        assert!(report.to_string().contains("custom.json"));
        let help = report.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("Create the file or fix the --config path"));
    }

    #[test]
    fn test_other_errors_fall_back_to_display() {
        let report = cli_error_to_miette(CliError::Other(anyhow::anyhow!("disk full")));
        assert!(report.to_string().contains("disk full"));
    }
}
