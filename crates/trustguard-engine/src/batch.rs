//! Review-batch summaries feeding the review-authenticity component.

use trustguard_core::{AuthenticityResult, Review, ReviewDetails};

/// Review-authenticity component score never drops below this
pub const MIN_COMPONENT_SCORE: f64 = 20.0;

/// Review-authenticity component score never exceeds this
pub const MAX_COMPONENT_SCORE: f64 = 100.0;

/// Totals over every analyzed review of a product
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BatchSummary {
    total: u64,
    fake: u64,
    score_sum: f64,
}

impl BatchSummary {
    /// Summarize authenticity results
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a AuthenticityResult>,
    {
        results.into_iter().fold(Self::default(), |mut acc, r| {
            acc.push(r.score, r.is_fake);
            acc
        })
    }

    /// Summarize reviews that already carry an authenticity result
    pub fn from_reviews<'a, I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = &'a Review>,
    {
        reviews.into_iter().fold(Self::default(), |mut acc, r| {
            acc.push(r.authenticity_score, r.is_fake);
            acc
        })
    }

    fn push(&mut self, score: f64, is_fake: bool) {
        self.total += 1;
        self.score_sum += score;
        if is_fake {
            self.fake += 1;
        }
    }

    /// Number of reviews
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of fake reviews
    #[must_use]
    pub const fn fake(&self) -> u64 {
        self.fake
    }

    /// Mean authenticity, or `None` for an empty batch
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Option<f64> {
        (self.total > 0).then(|| self.score_sum / self.total as f64)
    }

    /// Mean authenticity, `empty_average` for an empty batch
    #[must_use]
    pub fn average_authenticity(&self, empty_average: f64) -> f64 {
        self.mean().unwrap_or(empty_average)
    }

    /// Review-authenticity component score: the mean clamped to 20..=100
    #[must_use]
    pub fn component_score(&self, empty_average: f64) -> f64 {
        self.average_authenticity(empty_average)
            .clamp(MIN_COMPONENT_SCORE, MAX_COMPONENT_SCORE)
    }

    /// Counters for the review-authenticity component
    #[must_use]
    pub fn details(&self, empty_average: f64) -> ReviewDetails {
        ReviewDetails {
            total_reviews: self.total,
            fake_reviews: self.fake,
            average_authenticity: round_to_tenth(self.average_authenticity(empty_average)),
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
