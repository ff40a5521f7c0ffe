mod parser;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ANNOTATOR, DEFAULT_LOG_LEVEL, DEFAULT_MAX_LENGTH};
use crate::output::OutputFormat;

pub use parser::{default_config_path, load_config};

/// Main configuration structure, loaded from YAML
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Linguistic annotator settings
    #[serde(default)]
    pub annotator: AnnotatorConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration for the linguistic annotator backend
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnnotatorConfig {
    /// Name of the backend to load
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Extra single-word names the annotator must treat as proper nouns
    #[serde(default)]
    pub known_names: Vec<String>,
    /// Longest text, in characters, the annotator accepts
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            known_names: Vec::new(),
            max_length: default_max_length(),
        }
    }
}

/// Output configuration
#[derive(Debug, Deserialize, Default, Clone, Serialize, PartialEq)]
pub struct OutputConfig {
    /// Format of the rendered task records
    #[serde(default)]
    pub format: OutputFormat,
    /// Optional file path; stdout when unset
    #[serde(default)]
    pub file: Option<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
pub struct LoggingConfig {
    /// Log filter directive ("warn", "taskscan=debug", ...)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Whether to also log to a daily rotating file
    #[serde(default)]
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: false,
        }
    }
}

fn default_backend() -> String {
    DEFAULT_ANNOTATOR.to_string()
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
