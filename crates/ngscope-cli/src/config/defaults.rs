use std::path::PathBuf;

use ngscope_graph::analyzer::DEFAULT_MAX_FILE_SIZE;
use ngscope_graph::discovery::{DEFAULT_EXTENSIONS, DEFAULT_IGNORED_DIRS};

/// Config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "ngscope.config.json";

/// Prefix of the environment variables read into the configuration.
pub const ENV_PREFIX: &str = "NGSCOPE_";

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

pub fn default_ignore() -> Vec<String> {
    DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect()
}

pub fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

pub fn default_project_documents() -> bool {
    true
}
