//! Concurrent authenticity analysis of a product's reviews.

use chrono::Utc;
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{info, warn};
use trustguard_core::{AuthenticityResult, Review, ReviewSignal};
use trustguard_engine::simulation::with_simulated_metrics;
use trustguard_engine::{score_review, AnalysisCache, BatchSummary, CacheKey};

use crate::analyzer::AuthenticityAnalyzer;

/// Reviews with authenticity attached, plus their summary
#[derive(Debug, Clone)]
pub struct BatchAnalysis {
    /// Input reviews in input order, each carrying its result
    pub reviews: Vec<Review>,
    /// Totals computed once every review was analyzed
    pub summary: BatchSummary,
    /// Reviews answered from the cache
    pub cache_hits: usize,
}

struct Prepared {
    key: CacheKey,
    cached: Option<AuthenticityResult>,
    signal: ReviewSignal,
}

/// Analyzes every review of a product concurrently.
///
/// Each review is analyzed independently. The summary is only computed after
/// all of them have finished. Results are memoized per product and review.
#[derive(Clone)]
pub struct BatchAnalyzer {
    analyzer: Arc<dyn AuthenticityAnalyzer>,
    cache: Arc<AnalysisCache>,
    simulate: bool,
}

impl std::fmt::Debug for BatchAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchAnalyzer")
            .field("analyzer", &self.analyzer.name())
            .field("cached", &self.cache.len())
            .field("simulate", &self.simulate)
            .finish()
    }
}

impl BatchAnalyzer {
    /// Analyze with the given strategy and a fresh cache
    #[must_use]
    pub fn new(analyzer: Arc<dyn AuthenticityAnalyzer>) -> Self {
        Self {
            analyzer,
            cache: Arc::new(AnalysisCache::new()),
            simulate: true,
        }
    }

    /// Share an existing cache
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<AnalysisCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Whether to fill missing behavioural metrics with simulated values
    /// before analysis. On by default since stored reviews carry none.
    #[must_use]
    pub const fn simulate_metrics(mut self, simulate: bool) -> Self {
        self.simulate = simulate;
        self
    }

    /// The cache backing this analyzer
    #[must_use]
    pub const fn cache(&self) -> &Arc<AnalysisCache> {
        &self.cache
    }

    /// Analyze a batch of reviews. Never fails.
    pub async fn analyze(&self, reviews: Vec<Review>) -> BatchAnalysis {
        let prepared = self.prepare(&reviews);
        let cache_hits = prepared.iter().filter(|p| p.cached.is_some()).count();

        let results = join_all(prepared.iter().map(|p| self.analyze_one(p))).await;

        let summary = BatchSummary::from_results(&results);
        info!(
            total = summary.total(),
            fake = summary.fake(),
            cache_hits,
            analyzer = self.analyzer.name(),
            "review batch analyzed"
        );

        let reviews = reviews
            .into_iter()
            .zip(&results)
            .map(|(review, result)| review.with_authenticity(result))
            .collect();

        BatchAnalysis {
            reviews,
            summary,
            cache_hits,
        }
    }

    fn prepare(&self, reviews: &[Review]) -> Vec<Prepared> {
        let now = Utc::now();
        let mut rng = rand::thread_rng();

        reviews
            .iter()
            .map(|review| {
                let key = CacheKey::new(&review.product_id, &review.id);
                let cached = self.cache.get(&key);
                let mut signal = review.signal();
                if self.simulate && cached.is_none() {
                    signal = with_simulated_metrics(signal, now, &mut rng);
                }
                Prepared {
                    key,
                    cached,
                    signal,
                }
            })
            .collect()
    }

    async fn analyze_one(&self, prepared: &Prepared) -> AuthenticityResult {
        if let Some(hit) = &prepared.cached {
            return hit.clone();
        }

        let result = match self.analyzer.analyze(&prepared.signal).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    review_id = %prepared.key.review_id,
                    error = %e,
                    "analysis failed, using local heuristic"
                );
                score_review(&prepared.signal)
            }
        };

        self.cache.insert(prepared.key.clone(), result.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::LocalAnalyzer;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use trustguard_core::{AnalysisSource, Result, TrustGuardError};

    fn review(id: &str, user: &str, content: &str, verified: bool) -> Review {
        Review {
            id: id.into(),
            product_id: "prod_001".into(),
            user_id: format!("user_{id}"),
            user_name: user.into(),
            user_avatar: String::new(),
            rating: 5,
            headline: "Review".into(),
            content: content.into(),
            date: Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap(),
            verified,
            helpful: 0,
            authenticity_score: 0.0,
            is_fake: false,
            fake_reasons: Vec::new(),
            location: None,
        }
    }

    fn sample() -> Vec<Review> {
        vec![
            review(
                "r1",
                "Sarah Mitchell",
                "Battery lasts two days. The case is a little bulky, but it works well.",
                true,
            ),
            review(
                "r2",
                "Deal_2024",
                "Best amazing perfect incredible product highly recommend five stars",
                false,
            ),
            review("r3", "Tom", "Does what it says. Shipping was slow.", true),
        ]
    }

    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AuthenticityAnalyzer for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn analyze(&self, signal: &ReviewSignal) -> Result<AuthenticityResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(score_review(signal))
        }
    }

    struct Broken;

    #[async_trait]
    impl AuthenticityAnalyzer for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn analyze(&self, _signal: &ReviewSignal) -> Result<AuthenticityResult> {
            Err(TrustGuardError::Timeout(10))
        }
    }

    #[tokio::test]
    async fn preserves_input_order() {
        let batch = BatchAnalyzer::new(Arc::new(LocalAnalyzer))
            .analyze(sample())
            .await;
        let ids: Vec<_> = batch.reviews.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "r3"]);
        assert!(!batch.reviews[0].is_fake);
        assert!(batch.reviews[1].is_fake);
        assert!(!batch.reviews[1].fake_reasons.is_empty());
    }

    #[tokio::test]
    async fn summary_covers_every_review() {
        let batch = BatchAnalyzer::new(Arc::new(LocalAnalyzer))
            .analyze(sample())
            .await;
        assert_eq!(batch.summary.total(), 3);
        assert_eq!(batch.summary.fake(), 1);
        let expected = BatchSummary::from_reviews(&batch.reviews);
        assert_eq!(batch.summary, expected);
    }

    #[tokio::test]
    async fn empty_batch_is_fine() {
        let batch = BatchAnalyzer::new(Arc::new(LocalAnalyzer))
            .analyze(Vec::new())
            .await;
        assert!(batch.reviews.is_empty());
        assert_eq!(batch.summary.total(), 0);
        assert!(batch.summary.mean().is_none());
    }

    #[tokio::test]
    async fn cache_hits_skip_analysis() {
        let counting = Arc::new(Counting::default());
        let analyzer = BatchAnalyzer::new(counting.clone());

        let first = analyzer.analyze(sample()).await;
        assert_eq!(first.cache_hits, 0);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 3);

        let second = analyzer.analyze(sample()).await;
        assert_eq!(second.cache_hits, 3);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 3);
        assert_eq!(second.summary, first.summary);

        analyzer.cache().invalidate_product("prod_001");
        analyzer.analyze(sample()).await;
        assert_eq!(counting.calls.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn analyzer_errors_fall_back_locally() {
        let batch = BatchAnalyzer::new(Arc::new(Broken))
            .simulate_metrics(false)
            .analyze(sample())
            .await;
        for r in &batch.reviews {
            let local = score_review(&r.signal());
            assert!((r.authenticity_score - local.score).abs() < f64::EPSILON);
            assert_eq!(local.source, AnalysisSource::Local);
        }
    }
}
