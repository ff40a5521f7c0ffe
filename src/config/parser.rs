use super::Config;
use crate::errors::Error;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

/// Loads and parses a configuration from a YAML file
///
/// # Arguments
///
/// * `file_path` - Path to the YAML configuration file
///
/// # Returns
///
/// * `Result<Config, Error>` - The parsed Config on success, or an error if loading/parsing fails
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The YAML content cannot be parsed into a Config
pub fn load_config(file_path: &Path) -> Result<Config, Error> {
    let yaml_str = fs::read_to_string(file_path).map_err(|source| Error::ConfigRead {
        path: file_path.display().to_string(),
        source,
    })?;
    // An empty file is a valid, all-defaults configuration
    let config: Config = if yaml_str.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(&yaml_str)?
    };
    info!("Loaded configuration from {}", file_path.display());
    Ok(config)
}

/// Returns `<config_dir>/taskscan/config.yaml` when that file exists
pub fn default_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("taskscan").join("config.yaml");
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
annotator:
  backend: rules
  known_names: [devops, qa]
  max_length: 5000
output:
  format: jsonl
  file: tasks.jsonl
logging:
  level: debug
  file: true
"#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.annotator.known_names, vec!["devops", "qa"]);
        assert_eq!(config.annotator.max_length, 5000);
        assert_eq!(config.output.format, OutputFormat::Jsonl);
        assert_eq!(config.output.file.as_deref(), Some("tasks.jsonl"));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.file);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let file = write_config("output:\n  format: yaml\n");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.annotator.backend, "rules");
        assert_eq!(config.annotator.max_length, 1_000_000);
        assert_eq!(config.output.format, OutputFormat::Yaml);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_file_is_default_config() {
        let file = write_config("");
        assert_eq!(load_config(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let file = write_config("output:\n  format: csv\n");
        assert!(matches!(load_config(file.path()), Err(Error::YamlError(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_config(Path::new("/nonexistent/taskscan.yaml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
