use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::{AnalyzeArgs, ReportFormat};
use crate::config::{CONFIG_FILE_NAME, ENV_PREFIX, NgscopeConfig, default_root};
use crate::error::{ConfigError, Result, ResultExt};

/// Environment keys (after the prefix) that feed the configuration.
const ENV_KEYS: &[&str] = &["root", "format", "output"];

/// Only the flags the user actually passed; unset fields do not override.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<ReportFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extensions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_documents: Option<bool>,
}

impl From<&AnalyzeArgs> for CliOverrides {
    fn from(args: &AnalyzeArgs) -> Self {
        Self {
            root: args.root.clone(),
            output: args.output.clone(),
            format: args.format,
            extensions: (!args.extensions.is_empty()).then(|| args.extensions.clone()),
            include_hidden: args.include_hidden.then_some(true),
            max_file_size: args.max_file_size,
            project_documents: args.no_project_documents.then_some(false),
        }
    }
}

impl NgscopeConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// `--ignore` directories are added to the merged ignore list rather than
    /// replacing it.
    pub fn load(args: &AnalyzeArgs) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        if let Some(path) = Self::config_file(args) {
            tracing::debug!(path = %path.display(), "loading config file");
            let contents = std::fs::read_to_string(&path).with_path(&path)?;
            figment = figment.merge(Json::string(&contents));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS));
        figment = figment.merge(Serialized::defaults(CliOverrides::from(args)));

        let mut config: Self = figment.extract().map_err(ConfigError::from)?;
        for dir in &args.ignore {
            if !config.ignore.contains(dir) {
                config.ignore.push(dir.clone());
            }
        }
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// The explicit `--config` path, else `<root>/ngscope.config.json` when
    /// present. A missing explicit path surfaces when it is read.
    fn config_file(args: &AnalyzeArgs) -> Option<PathBuf> {
        if let Some(path) = &args.config {
            return Some(path.clone());
        }

        let root = args
            .root
            .clone()
            .or_else(|| std::env::var_os(format!("{ENV_PREFIX}ROOT")).map(PathBuf::from))
            .unwrap_or_else(default_root);
        let default_path = root.join(CONFIG_FILE_NAME);
        default_path.is_file().then_some(default_path)
    }

    /// Strip leading dots from extensions (`.ts` and `ts` are the same).
    fn normalize(&mut self) {
        for ext in &mut self.extensions {
            let trimmed = ext.trim().trim_start_matches('.');
            if trimmed.len() != ext.len() {
                *ext = trimmed.to_string();
            }
        }
    }

    /// Get default configuration values.
    pub fn default_config() -> Self {
        use crate::config::defaults::*;

        Self {
            root: default_root(),
            output: None,
            format: ReportFormat::default(),
            extensions: default_extensions(),
            ignore: default_ignore(),
            include_hidden: false,
            max_file_size: default_max_file_size(),
            project_documents: default_project_documents(),
        }
    }
}

impl Default for NgscopeConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
