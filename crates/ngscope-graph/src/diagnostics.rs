//! Non-fatal diagnostics collected during an analysis run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Category of a skip or degrade decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// File could not be read; it was skipped.
    IoFailure,
    /// Syntax tree could not be built (or text was not UTF-8); skipped.
    ParseFailure,
    /// Annotation found but its argument was not an object literal; fields
    /// defaulted to empty.
    MalformedMetadata,
}

impl DiagnosticKind {
    pub fn label(self) -> &'static str {
        match self {
            DiagnosticKind::IoFailure => "io-failure",
            DiagnosticKind::ParseFailure => "parse-failure",
            DiagnosticKind::MalformedMetadata => "malformed-metadata",
        }
    }
}

/// A single diagnostic tied to the file it was raised for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub path: PathBuf,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io_failure(path: &Path, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::IoFailure, path, message)
    }

    pub fn parse_failure(path: &Path, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::ParseFailure, path, message)
    }

    pub fn malformed_metadata(path: &Path, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::MalformedMetadata, path, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.kind.label(),
            self.path.display(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_path() {
        let diagnostic = Diagnostic::parse_failure(Path::new("src/broken.ts"), "Unexpected token");
        let rendered = diagnostic.to_string();
        assert_eq!(rendered, "[parse-failure] src/broken.ts: Unexpected token");
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&DiagnosticKind::MalformedMetadata).unwrap();
        assert_eq!(json, "\"malformed-metadata\"");
    }
}
