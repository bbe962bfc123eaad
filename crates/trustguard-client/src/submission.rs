//! Review submission with a local fallback.

use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use trustguard_core::{AnalysisSource, Review, ReviewSignal, ReviewSubmission};

use crate::analyzer::{AuthenticityAnalyzer, FallbackAnalyzer, LocalAnalyzer};
use crate::TrustGuardClient;

/// User id given to locally built reviews
pub const LOCAL_USER_ID: &str = "current_user";

/// Display name given to locally built reviews
pub const LOCAL_USER_NAME: &str = "Current User";

/// Submits reviews for one product.
///
/// When the backend is missing or fails, the review is built locally and
/// scored through the analyzer chain instead.
#[derive(Clone)]
pub struct ReviewSubmitter {
    product_id: String,
    client: Option<TrustGuardClient>,
    analyzer: Arc<dyn AuthenticityAnalyzer>,
}

impl std::fmt::Debug for ReviewSubmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewSubmitter")
            .field("product_id", &self.product_id)
            .field("client", &self.client)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl ReviewSubmitter {
    /// Submit locally, scored by the heuristic
    #[must_use]
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            client: None,
            analyzer: Arc::new(LocalAnalyzer),
        }
    }

    /// Submit to the backend first, scoring local fallbacks with the
    /// analysis service behind the heuristic
    #[must_use]
    pub fn with_client(mut self, client: TrustGuardClient) -> Self {
        self.analyzer = Arc::new(FallbackAnalyzer::remote(client.clone()));
        self.client = Some(client);
        self
    }

    /// Override the analyzer used for locally built reviews
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: Arc<dyn AuthenticityAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Submit a review. Never fails; returns the stored or locally built
    /// record and where it came from.
    pub async fn submit(&self, submission: &ReviewSubmission) -> (Review, AnalysisSource) {
        if let Some(client) = &self.client {
            match client.reviews().submit(submission).await {
                Ok(review) => {
                    info!(review_id = %review.id, "review stored by backend");
                    return (review, AnalysisSource::Remote);
                }
                Err(e) => warn!(error = %e, "backend rejected review, building it locally"),
            }
        }

        (self.build_local(submission).await, AnalysisSource::Local)
    }

    async fn build_local(&self, submission: &ReviewSubmission) -> Review {
        let now = Utc::now();
        let signal = ReviewSignal::new(submission.content.clone(), submission.rating)
            .headline(submission.headline.clone())
            .verified(true)
            .user_name(LOCAL_USER_NAME)
            .submitted_at(now)
            .behavior(submission.behavior());

        let result = match self.analyzer.analyze(&signal).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "analysis failed, using local heuristic");
                LocalAnalyzer.score(&signal)
            }
        };

        Review {
            id: format!("review_{}", now.timestamp_millis()),
            product_id: self.product_id.clone(),
            user_id: LOCAL_USER_ID.to_string(),
            user_name: LOCAL_USER_NAME.to_string(),
            user_avatar: String::new(),
            rating: submission.rating,
            headline: submission.headline.clone(),
            content: submission.content.clone(),
            date: now,
            verified: true,
            helpful: 0,
            authenticity_score: 0.0,
            is_fake: false,
            fake_reasons: Vec::new(),
            location: None,
        }
        .with_authenticity(&result)
    }
}
