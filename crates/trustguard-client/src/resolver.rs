//! Trust-score lookup with local synthesis.

use chrono::Utc;
use std::future::Future;
use tracing::{debug, warn};
use trustguard_core::{AnalysisSource, Result, Review, TrustScore};
use trustguard_engine::{BatchSummary, TrustScoreEngine};

use crate::TrustGuardClient;

/// A trust score and where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The score shown for the product
    pub trust_score: TrustScore,
    /// `Remote` when the backend answered, `Local` when synthesized
    pub source: AnalysisSource,
}

/// Resolves a product's trust score.
///
/// Asks the backend first when a client is configured. Any backend failure
/// falls back to synthesizing the score from the product's reviews and the
/// engine's placeholder components.
#[derive(Debug, Clone, Default)]
pub struct TrustScoreResolver {
    engine: TrustScoreEngine,
    client: Option<TrustGuardClient>,
}

impl TrustScoreResolver {
    /// Resolve locally with the given engine
    #[must_use]
    pub const fn new(engine: TrustScoreEngine) -> Self {
        Self {
            engine,
            client: None,
        }
    }

    /// Try the backend before synthesizing
    #[must_use]
    pub fn with_client(mut self, client: TrustGuardClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Resolve from already-analyzed reviews
    pub async fn resolve(&self, product_id: &str, reviews: &[Review]) -> Result<Resolution> {
        self.resolve_summary(product_id, &BatchSummary::from_reviews(reviews))
            .await
    }

    /// Resolve from a batch summary
    pub async fn resolve_summary(
        &self,
        product_id: &str,
        summary: &BatchSummary,
    ) -> Result<Resolution> {
        let summary = *summary;
        self.resolve_with(product_id, || async move { summary })
            .await
    }

    /// Resolve, producing the review summary only if the backend cannot answer
    pub async fn resolve_with<F, Fut>(&self, product_id: &str, summarize: F) -> Result<Resolution>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = BatchSummary>,
    {
        if let Some(client) = &self.client {
            match client.trust_scores().get(product_id).await {
                Ok(trust_score) => {
                    debug!(product_id, overall = trust_score.overall, "trust score from backend");
                    return Ok(Resolution {
                        trust_score,
                        source: AnalysisSource::Remote,
                    });
                }
                Err(e) => {
                    warn!(product_id, error = %e, "backend unavailable, synthesizing trust score");
                }
            }
        }

        let summary = summarize().await;
        let trust_score = self.engine.synthesize(&summary, Utc::now())?;
        Ok(Resolution {
            trust_score,
            source: AnalysisSource::Local,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use trustguard_core::{AuthenticityResult, Trend};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fake_heavy() -> BatchSummary {
        let results = [
            AuthenticityResult::local(25.0, vec!["x".into()]),
            AuthenticityResult::local(40.0, vec!["y".into()]),
        ];
        BatchSummary::from_results(&results)
    }

    #[tokio::test]
    async fn synthesizes_without_client() {
        let resolution = TrustScoreResolver::default()
            .resolve_summary("prod_001", &fake_heavy())
            .await
            .unwrap();
        assert_eq!(resolution.source, AnalysisSource::Local);
        // mean 32.5 -> 13.0 + 49.45
        assert_eq!(resolution.trust_score.overall, 62);
        assert_eq!(resolution.trust_score.trend, Trend::Stable);
        assert_eq!(
            resolution.trust_score.components.review_authenticity.details.fake_reviews,
            2
        );
    }

    #[tokio::test]
    async fn backend_score_wins() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/trust-score/prod_001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "overall": 91,
                "components": {
                    "reviewAuthenticity": {"score": 95, "weight": 0.4},
                    "viewQuality": {"score": 88, "weight": 0.15},
                    "purchasePatterns": {"score": 90, "weight": 0.25},
                    "sellerReputation": {"score": 86, "weight": 0.2}
                },
                "trend": "improving",
                "lastUpdated": "2024-01-24T10:30:00"
            })))
            .mount(&server)
            .await;

        let client = TrustGuardClient::builder()
            .backend_url(server.uri())
            .build()
            .unwrap();
        let resolution = TrustScoreResolver::default()
            .with_client(client)
            .resolve_summary("prod_001", &fake_heavy())
            .await
            .unwrap();
        assert_eq!(resolution.source, AnalysisSource::Remote);
        assert_eq!(resolution.trust_score.overall, 91);
        assert_eq!(resolution.trust_score.trend, Trend::Improving);
    }

    #[tokio::test]
    async fn backend_failure_synthesizes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = TrustGuardClient::builder()
            .backend_url(server.uri())
            .build()
            .unwrap();
        let resolution = TrustScoreResolver::default()
            .with_client(client)
            .resolve("prod_001", &[])
            .await
            .unwrap();
        assert_eq!(resolution.source, AnalysisSource::Local);
        // empty batch uses the 75.0 sentinel
        assert_eq!(resolution.trust_score.overall, 79);
    }

    #[tokio::test]
    async fn summary_is_only_built_when_backend_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/trust-score/prod_ok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "overall": 88,
                "components": {
                    "reviewAuthenticity": {"score": 90, "weight": 0.4},
                    "viewQuality": {"score": 85, "weight": 0.15},
                    "purchasePatterns": {"score": 88, "weight": 0.25},
                    "sellerReputation": {"score": 86, "weight": 0.2}
                },
                "trend": "stable",
                "lastUpdated": "2024-01-24T10:30:00"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/trust-score/prod_down"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = TrustGuardClient::builder()
            .backend_url(server.uri())
            .build()
            .unwrap();
        let resolver = TrustScoreResolver::default().with_client(client);
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let summarize = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            fake_heavy()
        };

        let remote = resolver.resolve_with("prod_ok", summarize).await.unwrap();
        assert_eq!(remote.source, AnalysisSource::Remote);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let local = resolver.resolve_with("prod_down", summarize).await.unwrap();
        assert_eq!(local.source, AnalysisSource::Local);
        assert_eq!(local.trust_score.overall, 62);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
