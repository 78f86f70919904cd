use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Required environment variables for the Vertex AI request context.
pub const PROJECT_ENV: &str = "GCP_PROJECT";
pub const LOCATION_ENV: &str = "GCP_LOCATION";

/// GCP project and location the token-counting calls run against.
/// Both must resolve to non-empty values before any call is issued.
#[derive(Debug, Clone)]
pub struct GcpContext {
    pub project: String,
    pub location: String,
}

impl GcpContext {
    pub fn new(project: impl Into<String>, location: impl Into<String>) -> anyhow::Result<Self> {
        let project = project.into();
        let location = location.into();

        if project.trim().is_empty() {
            anyhow::bail!("GCP project must not be empty");
        }
        if location.trim().is_empty() {
            anyhow::bail!("GCP location must not be empty");
        }

        Ok(Self { project, location })
    }

    /// Resolve the context from [`PROJECT_ENV`] and [`LOCATION_ENV`].
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(require_env(PROJECT_ENV)?, require_env(LOCATION_ENV)?)
    }
}

fn require_env(name: &str) -> anyhow::Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => anyhow::bail!(
            "{name} environment variable is missing; set it before running (e.g. in the workflow env block)"
        ),
    }
}

/// Simple configuration for tunecost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_model")]
    pub default_model: String,

    #[serde(default = "default_dataset")]
    pub default_dataset: String,

    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            default_dataset: default_dataset(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.0-flash-001".to_string()
}

fn default_dataset() -> String {
    "data/training.jsonl".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "tunecost", "tunecost") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.tunecost/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_model, "gemini-2.0-flash-001");
        assert_eq!(config.default_dataset, "data/training.jsonl");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.default_model, config.default_model);
        assert_eq!(parsed.request_timeout_secs, config.request_timeout_secs);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let parsed: Config = toml::from_str("default_model = \"gemini-2.5-pro\"").unwrap();
        assert_eq!(parsed.default_model, "gemini-2.5-pro");
        assert_eq!(parsed.default_dataset, "data/training.jsonl");
    }

    #[test]
    fn test_context_rejects_empty_values() {
        assert!(GcpContext::new("", "us-central1").is_err());
        assert!(GcpContext::new("my-project", "  ").is_err());
        assert!(GcpContext::new("my-project", "us-central1").is_ok());
    }
}
