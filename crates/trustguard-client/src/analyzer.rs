//! Review-authenticity strategies.
//!
//! [`LocalAnalyzer`] runs the keyword heuristic, [`RemoteAnalyzer`] asks the
//! analysis service, and [`FallbackAnalyzer`] tries one and falls back to the
//! other so callers never see a service failure.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};
use trustguard_core::{AuthenticityResult, Result, ReviewAnalysisRequest, ReviewSignal};
use trustguard_engine::score_review;

use crate::TrustGuardClient;

/// A way of scoring a single review
#[async_trait]
pub trait AuthenticityAnalyzer: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Score one review
    async fn analyze(&self, signal: &ReviewSignal) -> Result<AuthenticityResult>;
}

#[async_trait]
impl<T: AuthenticityAnalyzer + ?Sized> AuthenticityAnalyzer for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn analyze(&self, signal: &ReviewSignal) -> Result<AuthenticityResult> {
        (**self).analyze(signal).await
    }
}

/// Local keyword/pattern heuristic. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAnalyzer;

impl LocalAnalyzer {
    /// Score synchronously
    #[must_use]
    pub fn score(&self, signal: &ReviewSignal) -> AuthenticityResult {
        score_review(signal)
    }
}

#[async_trait]
impl AuthenticityAnalyzer for LocalAnalyzer {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn analyze(&self, signal: &ReviewSignal) -> Result<AuthenticityResult> {
        Ok(self.score(signal))
    }
}

/// Review-analysis service. Its verdict is adopted verbatim.
#[derive(Debug, Clone)]
pub struct RemoteAnalyzer {
    client: TrustGuardClient,
}

impl RemoteAnalyzer {
    /// Analyze through the given client
    #[must_use]
    pub const fn new(client: TrustGuardClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthenticityAnalyzer for RemoteAnalyzer {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn analyze(&self, signal: &ReviewSignal) -> Result<AuthenticityResult> {
        let request = ReviewAnalysisRequest::from(signal);
        let response = self.client.analysis().analyze_review(&request).await?;
        debug!(score = response.authenticity_score, "review analyzed remotely");
        Ok(response.into())
    }
}

/// Tries `primary`, and on any error scores locally instead.
#[derive(Debug, Clone)]
pub struct FallbackAnalyzer<P> {
    primary: P,
    fallback: LocalAnalyzer,
}

impl<P: AuthenticityAnalyzer> FallbackAnalyzer<P> {
    /// Wrap a primary analyzer
    pub const fn new(primary: P) -> Self {
        Self {
            primary,
            fallback: LocalAnalyzer,
        }
    }

    /// Score a review; infallible
    pub async fn analyze_or_fallback(&self, signal: &ReviewSignal) -> AuthenticityResult {
        match self.primary.analyze(signal).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    analyzer = self.primary.name(),
                    error = %e,
                    "analysis unavailable, using local heuristic"
                );
                self.fallback.score(signal)
            }
        }
    }
}

impl FallbackAnalyzer<RemoteAnalyzer> {
    /// Remote service with local fallback
    #[must_use]
    pub const fn remote(client: TrustGuardClient) -> Self {
        Self::new(RemoteAnalyzer::new(client))
    }
}

#[async_trait]
impl<P: AuthenticityAnalyzer> AuthenticityAnalyzer for FallbackAnalyzer<P> {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn analyze(&self, signal: &ReviewSignal) -> Result<AuthenticityResult> {
        Ok(self.analyze_or_fallback(signal).await)
    }
}
