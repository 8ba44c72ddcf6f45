use std::fs;

use serde::Deserialize;

use crate::error::{LookupError, Result};

/// Optional TOML config file. Explicit flags and env vars win over file
/// values.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    pub timeout: Option<u64>,
    pub verbose: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| LookupError::Config(format!("cannot read {}: {}", path, e)))?;
        toml::from_str(&text)
            .map_err(|e| LookupError::Config(format!("invalid config {}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = \"https://example.test/json\"").unwrap();
        writeln!(file, "timeout = 2500").unwrap();

        let config = FileConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("https://example.test/json"));
        assert_eq!(config.timeout, Some(2500));
        assert_eq!(config.verbose, None);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = [not toml").unwrap();

        let err = FileConfig::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LookupError::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = FileConfig::load("/nonexistent/ip-report.toml").unwrap_err();
        assert!(matches!(err, LookupError::Config(_)));
    }
}
