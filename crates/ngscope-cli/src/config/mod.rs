//! Configuration system for ngscope with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and the config file.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
#[cfg(test)]
mod tests;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::ReportFormat;

pub use defaults::*;

/// ngscope configuration - loaded from ngscope.config.json, NGSCOPE_* and CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NgscopeConfig {
    /// Project root to analyze
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Report destination; `-` is stdout. Unset means the format's default file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Report format (markdown, json)
    #[serde(default)]
    pub format: ReportFormat,

    /// Source extensions to classify, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names to skip while walking
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Walk dot-files and dot-directories
    #[serde(default)]
    pub include_hidden: bool,

    /// Source files above this size in bytes are skipped
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Read package.json, tsconfig.json and environment files
    #[serde(default = "default_project_documents")]
    pub project_documents: bool,
}

/// Where the rendered report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl NgscopeConfig {
    pub fn output_target(&self) -> OutputTarget {
        match &self.output {
            Some(path) if path.as_os_str() == "-" => OutputTarget::Stdout,
            Some(path) => OutputTarget::File(path.clone()),
            None => OutputTarget::File(PathBuf::from(self.format.default_file_name())),
        }
    }

    /// Analyzer settings for this configuration.
    pub fn analyzer_config(&self) -> ngscope_graph::AnalyzerConfig {
        ngscope_graph::AnalyzerConfig {
            root: Some(self.root.clone()),
            discovery: ngscope_graph::DiscoveryOptions {
                extensions: self.extensions.clone(),
                ignore: self.ignore.clone(),
                include_hidden: self.include_hidden,
            },
            max_file_size: self.max_file_size,
            project_documents: self.project_documents,
            runtime: None,
        }
    }
}
