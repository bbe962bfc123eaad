//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trustguard::EngineConfig;

use crate::output::OutputFormat;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "TGUARD_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Trust-score backend URL.
    pub backend_url: Option<String>,

    /// Review-analysis service URL.
    pub analysis_url: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Never contact the services.
    #[serde(default)]
    pub offline: bool,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Scoring engine settings.
    #[serde(default)]
    pub engine: EngineConfig,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("io", "trustguard", "tguard")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file, defaulting when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Set a single key from its string form.
    ///
    /// Leaves the configuration untouched when the key or value is rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "backend_url" => updated.backend_url = Some(value.to_string()),
            "analysis_url" => updated.analysis_url = Some(value.to_string()),
            "timeout_secs" | "timeout" => updated.timeout_secs = Some(value.parse()?),
            "offline" => updated.offline = value.parse()?,
            "output_format" | "output" => updated.output_format = Some(value.parse()?),
            "empty_batch_average" => updated.engine.empty_batch_average = value.parse()?,
            _ => anyhow::bail!(
                "Unknown config key: {key}\n\n\
                 Available keys:\n  \
                 backend_url         - Trust-score backend URL\n  \
                 analysis_url        - Review-analysis service URL\n  \
                 timeout_secs        - Per-request timeout in seconds\n  \
                 offline             - Never contact the services (true/false)\n  \
                 output_format       - Default output format (pretty/json/csv/yaml)\n  \
                 empty_batch_average - Authenticity assumed for products without reviews"
            ),
        }
        updated
            .engine
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid engine settings: {e}"))?;
        *self = updated;
        Ok(())
    }
}
