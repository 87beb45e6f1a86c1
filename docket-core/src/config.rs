//! Global docket configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{DocketError, DocketResult};

static DEFAULT_API_BASE_URL: &str = "https://matheuscarneiro12.app.n8n.cloud/webhook";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Configuration at ~/.config/docket/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct DocketConfig {
    /// Base URL of the scheduling webhook API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for DocketConfig {
    fn default() -> Self {
        DocketConfig { api_base_url: default_api_base_url() }
    }
}

impl DocketConfig {
    pub fn config_path() -> DocketResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DocketError::Config("Could not determine config directory".into()))?
            .join("docket");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> DocketResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> DocketResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| DocketError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DocketError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DocketResult<()> {
        let contents = format!(
            "\
# docket configuration

# Where the firm's scheduling API lives:
# api_base_url = \"{}\"
",
            DEFAULT_API_BASE_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DocketError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DocketError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = DocketConfig::load_from(Path::new("/nonexistent/docket/config.toml")).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn default_template_parses_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        DocketConfig::create_default_config(&path).unwrap();
        let config = DocketConfig::load_from(&path).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn explicit_value_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base_url = \"http://localhost:5678/webhook\"\n").unwrap();

        let config = DocketConfig::load_from(&path).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:5678/webhook");
    }
}
