//! Product-page state driven by backend push messages.

use tracing::{debug, warn};
use trustguard_core::{PushMessage, Review, TrustScore};

/// What applying a push message did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedUpdate {
    /// The trust score was replaced wholesale
    TrustScoreReplaced,
    /// A review was prepended
    ReviewAdded,
    /// The message was dropped and the state left untouched
    Dropped,
}

/// Trust score and reviews currently displayed for a product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFeed {
    trust_score: Option<TrustScore>,
    reviews: Vec<Review>,
}

impl ProductFeed {
    /// Start from an initial score and review list
    #[must_use]
    pub const fn new(trust_score: Option<TrustScore>, reviews: Vec<Review>) -> Self {
        Self {
            trust_score,
            reviews,
        }
    }

    /// Current trust score
    #[must_use]
    pub const fn trust_score(&self) -> Option<&TrustScore> {
        self.trust_score.as_ref()
    }

    /// Current reviews, newest first
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Apply a decoded message. No merging: scores are replaced, reviews prepended.
    pub fn apply(&mut self, message: PushMessage) -> FeedUpdate {
        match message {
            PushMessage::TrustScoreUpdate(score) => {
                debug!(overall = score.overall, trend = %score.trend, "trust score replaced");
                self.trust_score = Some(score);
                FeedUpdate::TrustScoreReplaced
            }
            PushMessage::NewReview(review) => {
                debug!(review_id = %review.id, "review prepended");
                self.reviews.insert(0, review);
                FeedUpdate::ReviewAdded
            }
        }
    }

    /// Decode and apply a raw text frame, dropping anything malformed
    pub fn apply_raw(&mut self, raw: &str) -> FeedUpdate {
        match PushMessage::from_json(raw) {
            Ok(message) => self.apply(message),
            Err(e) => {
                warn!(error = %e, "dropping push message");
                FeedUpdate::Dropped
            }
        }
    }

    /// Split into the score and reviews
    #[must_use]
    pub fn into_parts(self) -> (Option<TrustScore>, Vec<Review>) {
        (self.trust_score, self.reviews)
    }
}
