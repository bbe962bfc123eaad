use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::authenticity::AuthenticityResult;
use super::common::flexible_datetime;
use crate::error::{Result, TrustGuardError};

/// A product review as shown to shoppers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review identifier
    pub id: String,

    /// Product the review belongs to
    pub product_id: String,

    /// Author identifier
    pub user_id: String,

    /// Author display name
    pub user_name: String,

    /// Author avatar URL
    #[serde(default)]
    pub user_avatar: String,

    /// Star rating (1-5)
    pub rating: u8,

    /// Review headline
    pub headline: String,

    /// Review body
    pub content: String,

    /// Submission time
    #[serde(deserialize_with = "flexible_datetime")]
    pub date: DateTime<Utc>,

    /// Whether the author bought the product
    #[serde(default)]
    pub verified: bool,

    /// Helpful votes
    #[serde(default)]
    pub helpful: u32,

    /// Authenticity score (0-100), zero until analyzed
    #[serde(default)]
    pub authenticity_score: f64,

    /// Whether the review was classified as fake
    #[serde(default)]
    pub is_fake: bool,

    /// Reasons behind the classification
    #[serde(default)]
    pub fake_reasons: Vec<String>,

    /// Author location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Review {
    /// Attach an authenticity result, replacing any previous one
    #[must_use]
    pub fn with_authenticity(mut self, result: &AuthenticityResult) -> Self {
        self.authenticity_score = result.score;
        self.is_fake = result.is_fake;
        self.fake_reasons.clone_from(&result.reasons);
        self
    }

    /// The scoring signal for this review, without behavioural metrics
    #[must_use]
    pub fn signal(&self) -> ReviewSignal {
        ReviewSignal {
            headline: self.headline.clone(),
            content: self.content.clone(),
            rating: self.rating,
            verified: self.verified,
            user_name: self.user_name.clone(),
            submitted_at: self.date,
            account_age_days: None,
            behavior: None,
            previous_reviews: None,
            contains_images: false,
        }
    }
}

/// Keystroke-level behaviour captured while a review was written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingBehavior {
    /// Seconds spent typing
    pub typing_duration_secs: u32,
    /// Number of edits
    pub edit_count: u32,
    /// Number of paste operations
    pub paste_count: u32,
}

/// Everything the authenticity scorers look at for one review.
///
/// Behavioural metrics are optional and never invented by the scorers;
/// callers that want estimates use the simulation utilities explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSignal {
    /// Review headline
    pub headline: String,

    /// Review body
    pub content: String,

    /// Star rating (1-5)
    pub rating: u8,

    /// Verified purchase flag
    pub verified: bool,

    /// Author display name
    pub user_name: String,

    /// Submission time
    pub submitted_at: DateTime<Utc>,

    /// Author account age in days
    #[serde(default)]
    pub account_age_days: Option<u32>,

    /// Typing behaviour while writing
    #[serde(default)]
    pub behavior: Option<TypingBehavior>,

    /// Number of earlier reviews by the same author
    #[serde(default)]
    pub previous_reviews: Option<u32>,

    /// Whether the review has images attached
    #[serde(default)]
    pub contains_images: bool,
}

impl ReviewSignal {
    /// Create a signal with the given body and rating, unverified and anonymous
    #[must_use]
    pub fn new(content: impl Into<String>, rating: u8) -> Self {
        Self {
            headline: String::new(),
            content: content.into(),
            rating,
            verified: false,
            user_name: String::new(),
            submitted_at: Utc::now(),
            account_age_days: None,
            behavior: None,
            previous_reviews: None,
            contains_images: false,
        }
    }

    /// Set the headline
    #[must_use]
    pub fn headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = headline.into();
        self
    }

    /// Set the verified-purchase flag
    #[must_use]
    pub const fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Set the author name
    #[must_use]
    pub fn user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = name.into();
        self
    }

    /// Set the submission time
    #[must_use]
    pub const fn submitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.submitted_at = at;
        self
    }

    /// Set the account age
    #[must_use]
    pub const fn account_age_days(mut self, days: u32) -> Self {
        self.account_age_days = Some(days);
        self
    }

    /// Set the typing behaviour
    #[must_use]
    pub const fn behavior(mut self, behavior: TypingBehavior) -> Self {
        self.behavior = Some(behavior);
        self
    }

    /// Set the author's previous review count
    #[must_use]
    pub const fn previous_reviews(mut self, count: u32) -> Self {
        self.previous_reviews = Some(count);
        self
    }

    /// Check the rating is a valid star count
    pub fn validate(&self) -> Result<()> {
        if (1..=5).contains(&self.rating) {
            Ok(())
        } else {
            Err(TrustGuardError::InvalidRating(self.rating))
        }
    }
}

/// Body of `POST /api/reviews` on the trust-score backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    /// Star rating (1-5)
    pub rating: u8,
    /// Review headline
    pub headline: String,
    /// Review body
    pub content: String,
    /// Seconds spent typing
    pub typing_duration: u32,
    /// Number of edits
    pub edit_count: u32,
    /// Number of paste operations
    pub paste_count: u32,
}

impl ReviewSubmission {
    /// Default typing duration when the form did not record one
    pub const DEFAULT_TYPING_DURATION: u32 = 45;
    /// Default edit count when the form did not record one
    pub const DEFAULT_EDIT_COUNT: u32 = 2;

    /// Create a submission, filling missing behaviour with form defaults
    #[must_use]
    pub fn new(
        rating: u8,
        headline: impl Into<String>,
        content: impl Into<String>,
        behavior: Option<TypingBehavior>,
    ) -> Self {
        let behavior = behavior.unwrap_or(TypingBehavior {
            typing_duration_secs: Self::DEFAULT_TYPING_DURATION,
            edit_count: Self::DEFAULT_EDIT_COUNT,
            paste_count: 0,
        });
        Self {
            rating,
            headline: headline.into(),
            content: content.into(),
            typing_duration: behavior.typing_duration_secs,
            edit_count: behavior.edit_count,
            paste_count: behavior.paste_count,
        }
    }

    /// Typing behaviour carried by the submission
    #[must_use]
    pub const fn behavior(&self) -> TypingBehavior {
        TypingBehavior {
            typing_duration_secs: self.typing_duration,
            edit_count: self.edit_count,
            paste_count: self.paste_count,
        }
    }
}
