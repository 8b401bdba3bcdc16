//! One analyzed source file.

use std::path::{Path, PathBuf};

use oxc_allocator::Allocator;

use crate::classifier::{FileFacts, classify_program};
use crate::diagnostics::Diagnostic;
use crate::parser::{ParseError, ParseOptions, parse};

/// Path and text of a source file. The syntax tree is built and dropped
/// inside [`SourceUnit::classify`]; it never outlives that call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub text: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Decode raw file contents. Invalid UTF-8 is reported as a parse failure.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Result<Self, Diagnostic> {
        let path = path.into();
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self { path, text }),
            Err(err) => Err(Diagnostic::parse_failure(
                &path,
                format!("source is not valid UTF-8: {err}"),
            )),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse and classify this file.
    pub fn classify(&self) -> Result<FileFacts, ParseError> {
        let allocator = Allocator::default();
        let options = ParseOptions::from_path(&self.path.to_string_lossy());
        let parsed = parse(&allocator, &self.text, options)?;
        Ok(classify_program(parsed.ast(), &self.text, &self.path))
    }
}
