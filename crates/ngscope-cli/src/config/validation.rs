use crate::config::NgscopeConfig;
use crate::error::{ConfigError, Result};

impl NgscopeConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "extensions".to_string(),
                value: "[]".to_string(),
                hint: "List at least one source extension, e.g. [\"ts\"]".to_string(),
            }
            .into());
        }

        if let Some(ext) = self.extensions.iter().find(|ext| ext.is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "extensions".to_string(),
                value: format!("{ext:?}"),
                hint: "Extensions must not be empty".to_string(),
            }
            .into());
        }

        if self.max_file_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "maxFileSize".to_string(),
                value: "0".to_string(),
                hint: "Use a positive number of bytes".to_string(),
            }
            .into());
        }

        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "root".to_string(),
                value: "\"\"".to_string(),
                hint: "Point root at the project directory".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
