//! CLI configuration.
//!
//! The API endpoint is resolved in this order: `--api-url` flag (or the
//! `SEATCTL_API_URL` environment variable, handled by clap), the saved
//! `config.json`, then [`DEFAULT_API_URL`].

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("dev", "seatplan", "seatctl")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Saved CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// Load config from disk, or return default.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(CONFIG_FILE);

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::from_json(&contents).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Save config to disk, returning the path written.
    pub fn save(&self) -> Result<PathBuf> {
        let dir = config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = dir.join(CONFIG_FILE);
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(path)
    }

    /// Pick the API URL, preferring an explicit override.
    pub fn resolve_api_url(&self, flag: Option<&str>) -> String {
        flag.or(self.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_url_precedence() {
        let empty = Config::default();
        assert_eq!(empty.resolve_api_url(None), DEFAULT_API_URL);

        let saved = Config {
            api_url: Some("http://exams.local:9000/".to_string()),
        };
        assert_eq!(saved.resolve_api_url(None), "http://exams.local:9000");
        assert_eq!(
            saved.resolve_api_url(Some("http://127.0.0.1:8080")),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn test_config_json() {
        let config = Config::from_json(r#"{"api_url":"http://x:1"}"#).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://x:1"));

        let config = Config::from_json("{}").unwrap();
        assert!(config.api_url.is_none());
    }
}
