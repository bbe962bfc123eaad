use serde::{Deserialize, Serialize};

use super::review::ReviewSignal;

/// Authenticity score below which a review is classified as fake
pub const FAKE_THRESHOLD: f64 = 60.0;

/// Which scorer produced an [`AuthenticityResult`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Local keyword/pattern heuristic
    #[default]
    Local,
    /// External review-analysis service
    Remote,
}

impl std::fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// Outcome of scoring a single review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticityResult {
    /// Authenticity score (0-100)
    pub score: f64,

    /// Fake classification
    pub is_fake: bool,

    /// Human-readable reasons, in rule order
    #[serde(default)]
    pub reasons: Vec<String>,

    /// Scorer that produced the result
    #[serde(default)]
    pub source: AnalysisSource,
}

impl AuthenticityResult {
    /// Build a local result; the fake flag is derived from the threshold
    #[must_use]
    pub fn local(score: f64, reasons: Vec<String>) -> Self {
        Self {
            score,
            is_fake: score < FAKE_THRESHOLD,
            reasons,
            source: AnalysisSource::Local,
        }
    }
}

impl From<ReviewAnalysisResponse> for AuthenticityResult {
    fn from(response: ReviewAnalysisResponse) -> Self {
        Self {
            score: response.authenticity_score,
            is_fake: response.is_fake,
            reasons: response.fake_indicators,
            source: AnalysisSource::Remote,
        }
    }
}

/// Body of `POST /analyze/review` on the review-analysis service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAnalysisRequest {
    /// Star rating
    pub rating: u8,
    /// Review headline
    pub headline: String,
    /// Review body
    pub review_text: String,
    /// Verified purchase flag
    pub verified_purchase: bool,
    /// Author account age in days
    pub account_age_days: u32,
    /// Seconds spent typing
    pub typing_duration_seconds: u32,
    /// Number of edits
    pub edit_count: u32,
    /// Number of paste operations
    pub paste_count: u32,
    /// Body length in characters
    pub review_length_chars: usize,
    /// Whether images are attached
    pub contains_images: bool,
    /// Earlier reviews by the same author
    pub previous_reviews_count: u32,
}

impl ReviewAnalysisRequest {
    /// Service default for a missing account age
    pub const DEFAULT_ACCOUNT_AGE_DAYS: u32 = 365;
    /// Service default for a missing typing duration
    pub const DEFAULT_TYPING_DURATION_SECS: u32 = 60;
    /// Service default for a missing edit count
    pub const DEFAULT_EDIT_COUNT: u32 = 1;
}

impl From<&ReviewSignal> for ReviewAnalysisRequest {
    fn from(signal: &ReviewSignal) -> Self {
        let (typing, edits, pastes) = signal.behavior.map_or(
            (Self::DEFAULT_TYPING_DURATION_SECS, Self::DEFAULT_EDIT_COUNT, 0),
            |b| (b.typing_duration_secs, b.edit_count, b.paste_count),
        );
        Self {
            rating: signal.rating,
            headline: signal.headline.clone(),
            review_text: signal.content.clone(),
            verified_purchase: signal.verified,
            account_age_days: signal
                .account_age_days
                .unwrap_or(Self::DEFAULT_ACCOUNT_AGE_DAYS),
            typing_duration_seconds: typing,
            edit_count: edits,
            paste_count: pastes,
            review_length_chars: signal.content.chars().count(),
            contains_images: signal.contains_images,
            previous_reviews_count: signal.previous_reviews.unwrap_or(0),
        }
    }
}

/// Response of `POST /analyze/review`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAnalysisResponse {
    /// Authenticity score (0-100)
    pub authenticity_score: f64,
    /// Fake classification
    pub is_fake: bool,
    /// Indicators that fired
    #[serde(default)]
    pub fake_indicators: Vec<String>,
}
