//! Command implementations.

pub mod analyze;
pub mod config;
pub mod feed;
pub mod health;
pub mod score;
pub mod submit;
pub mod trust_score;

use anyhow::{Context as _, Result};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use trustguard::{
    AuthenticityAnalyzer, EngineConfig, FallbackAnalyzer, LocalAnalyzer, Review,
    TrustGuardClient, TrustScoreEngine,
};

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Trust-score backend URL override
    pub backend_url: Option<String>,

    /// Review-analysis service URL override
    pub analysis_url: Option<String>,

    /// Per-request timeout override
    pub timeout: Option<Duration>,

    /// Never contact the services
    pub offline: bool,

    /// Verbose output
    pub verbose: bool,

    /// Scoring engine settings
    pub engine: EngineConfig,
}

impl Context {
    /// Create a service client, or `None` when running offline.
    pub fn client(&self) -> Result<Option<TrustGuardClient>> {
        if self.offline {
            return Ok(None);
        }

        let mut builder = TrustGuardClient::builder();
        if let Some(url) = &self.backend_url {
            builder = builder.backend_url(url);
        }
        if let Some(url) = &self.analysis_url {
            builder = builder.analysis_url(url);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Some(builder.build()?))
    }

    /// The analyzer chain: remote with local fallback, or local only when offline.
    pub fn analyzer(&self) -> Result<Arc<dyn AuthenticityAnalyzer>> {
        Ok(match self.client()? {
            Some(client) => Arc::new(FallbackAnalyzer::remote(client)),
            None => Arc::new(LocalAnalyzer),
        })
    }

    /// Validated scoring engine.
    pub fn engine(&self) -> Result<TrustScoreEngine> {
        TrustScoreEngine::new(self.engine.clone()).context("invalid engine configuration")
    }
}

/// Read a file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Load a JSON array of reviews.
pub fn load_reviews(path: &Path) -> Result<Vec<Review>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).with_context(|| format!("parsing reviews from {}", path.display()))
}
