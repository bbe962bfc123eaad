//! Review-authenticity scoring and trust-score aggregation.
//!
//! Everything here is synchronous and side-effect free:
//!
//! - [`score_review`]: keyword/pattern heuristic over a single review
//! - [`aggregate`]: weighted sum of the four trust components
//! - [`BatchSummary`]: review-authenticity component from many results
//! - [`simulation`]: clearly separated estimates for missing behavioural metrics
//! - [`AnalysisCache`]: memoized results keyed by product and review
//! - [`ProductFeed`]: state driven by backend push messages
//!
//! # Example
//!
//! ```rust,ignore
//! use trustguard_engine::TrustScoreEngine;
//! use trustguard_core::ReviewSignal;
//!
//! let engine = TrustScoreEngine::default();
//! let result = engine.score_review(&ReviewSignal::new("Does the job.", 4).verified(true));
//! assert!(!result.is_fake);
//! ```

#![doc(html_root_url = "https://docs.rs/trustguard-engine/0.3.0")]

pub mod aggregate;
pub mod authenticity;
pub mod batch;
pub mod cache;
pub mod config;
pub mod feed;
pub mod simulation;

pub use aggregate::{aggregate, aggregate_at, trend_for, AggregationInput};
pub use authenticity::{score_review, HeuristicRule};
pub use batch::BatchSummary;
pub use cache::{AnalysisCache, CacheKey};
pub use config::{ComponentInput, EngineConfig, PlaceholderComponents, TrustWeights};
pub use feed::{FeedUpdate, ProductFeed};

use chrono::{DateTime, Utc};
use trustguard_core::{AuthenticityResult, Result, ReviewSignal, TrustScore};

/// Validated engine configuration bundled with the scoring operations
#[derive(Debug, Clone, Default)]
pub struct TrustScoreEngine {
    config: EngineConfig,
}

impl TrustScoreEngine {
    /// Create an engine, rejecting unusable configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score one review with the local heuristic
    #[must_use]
    pub fn score_review(&self, signal: &ReviewSignal) -> AuthenticityResult {
        score_review(signal)
    }

    /// Aggregate four supplied components
    pub fn aggregate(&self, input: AggregationInput) -> Result<TrustScore> {
        aggregate(input, &self.config.weights)
    }

    /// Synthesize a trust score from review results plus the placeholder components
    pub fn synthesize(&self, summary: &BatchSummary, now: DateTime<Utc>) -> Result<TrustScore> {
        let sentinel = self.config.empty_batch_average;
        let placeholder = &self.config.placeholder;

        let input = AggregationInput::new()
            .review_authenticity(summary.component_score(sentinel), summary.details(sentinel))
            .view_quality(
                placeholder.view_quality.score,
                placeholder.view_quality.details.clone(),
            )
            .purchase_patterns(
                placeholder.purchase_patterns.score,
                placeholder.purchase_patterns.details.clone(),
            )
            .seller_reputation(
                placeholder.seller_reputation.score,
                placeholder.seller_reputation.details.clone(),
            );

        aggregate_at(input, &self.config.weights, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustguard_core::{AuthenticityResult, Trend};

    #[test]
    fn invalid_config_rejected() {
        let config = EngineConfig {
            weights: TrustWeights {
                review_authenticity: 0.9,
                ..TrustWeights::default()
            },
            ..EngineConfig::default()
        };
        assert!(TrustScoreEngine::new(config).is_err());
    }

    #[test]
    fn synthesize_empty_batch() {
        let engine = TrustScoreEngine::default();
        let score = engine.synthesize(&BatchSummary::default(), Utc::now()).unwrap();
        // 75*0.40 + 82*0.15 + 79*0.25 + 87*0.20 = 79.45
        assert_eq!(score.overall, 79);
        assert_eq!(score.trend, Trend::Stable);
        let details = &score.components.review_authenticity.details;
        assert_eq!(details.total_reviews, 0);
        assert!((details.average_authenticity - 75.0).abs() < f64::EPSILON);
        assert_eq!(score.components.view_quality.details.organic_views, 15_420);
    }

    #[test]
    fn synthesize_from_fake_heavy_batch() {
        let results: Vec<_> = [25.0, 10.0, 35.0]
            .into_iter()
            .map(|s| AuthenticityResult::local(s, Vec::new()))
            .collect();
        let engine = TrustScoreEngine::default();
        let score = engine
            .synthesize(&BatchSummary::from_results(&results), Utc::now())
            .unwrap();
        // mean 23.33 -> 23.33*0.40 + 49.45 = 58.78
        assert_eq!(score.overall, 59);
        assert_eq!(score.trend, Trend::Declining);
        assert_eq!(score.components.review_authenticity.details.fake_reviews, 3);
    }
}
