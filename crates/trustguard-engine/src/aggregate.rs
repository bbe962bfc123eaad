//! Weighted trust-score aggregation.

use chrono::{DateTime, Utc};
use trustguard_core::{
    ComponentKind, PurchaseDetails, Result, ReviewDetails, SellerDetails, Trend, TrustComponent,
    TrustComponents, TrustGuardError, TrustScore, ViewDetails,
};

use crate::config::{ComponentInput, TrustWeights};

/// Overall scores at or below this are reported as declining
pub const DECLINING_AT_OR_BELOW: u8 = 60;

/// The four component scores to aggregate.
///
/// Every component must be supplied; missing ones are rejected, never
/// zero-filled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationInput {
    review_authenticity: Option<ComponentInput<ReviewDetails>>,
    view_quality: Option<ComponentInput<ViewDetails>>,
    purchase_patterns: Option<ComponentInput<PurchaseDetails>>,
    seller_reputation: Option<ComponentInput<SellerDetails>>,
}

impl AggregationInput {
    /// Start with no components
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the review-authenticity component
    #[must_use]
    pub fn review_authenticity(mut self, score: f64, details: ReviewDetails) -> Self {
        self.review_authenticity = Some(ComponentInput::new(score, details));
        self
    }

    /// Supply the view-quality component
    #[must_use]
    pub fn view_quality(mut self, score: f64, details: ViewDetails) -> Self {
        self.view_quality = Some(ComponentInput::new(score, details));
        self
    }

    /// Supply the purchase-patterns component
    #[must_use]
    pub fn purchase_patterns(mut self, score: f64, details: PurchaseDetails) -> Self {
        self.purchase_patterns = Some(ComponentInput::new(score, details));
        self
    }

    /// Supply the seller-reputation component
    #[must_use]
    pub fn seller_reputation(mut self, score: f64, details: SellerDetails) -> Self {
        self.seller_reputation = Some(ComponentInput::new(score, details));
        self
    }
}

/// Aggregate component scores into a trust score stamped with the current time.
pub fn aggregate(input: AggregationInput, weights: &TrustWeights) -> Result<TrustScore> {
    aggregate_at(input, weights, Utc::now())
}

/// Aggregate component scores into a trust score stamped with `now`.
pub fn aggregate_at(
    input: AggregationInput,
    weights: &TrustWeights,
    now: DateTime<Utc>,
) -> Result<TrustScore> {
    weights.validate()?;

    let components = TrustComponents {
        review_authenticity: weighted(
            input.review_authenticity,
            ComponentKind::ReviewAuthenticity,
            weights,
        )?,
        view_quality: weighted(input.view_quality, ComponentKind::ViewQuality, weights)?,
        purchase_patterns: weighted(
            input.purchase_patterns,
            ComponentKind::PurchasePatterns,
            weights,
        )?,
        seller_reputation: weighted(
            input.seller_reputation,
            ComponentKind::SellerReputation,
            weights,
        )?,
    };

    let overall = overall_score(&components);

    Ok(TrustScore {
        overall,
        components,
        trend: trend_for(overall),
        last_updated: now,
    })
}

/// Rounded weighted sum of the component scores.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn overall_score(components: &TrustComponents) -> u8 {
    let total: f64 = ComponentKind::ALL
        .iter()
        .map(|kind| {
            let (score, weight) = components.score_and_weight(*kind);
            score * weight
        })
        .sum();
    total.round().clamp(0.0, 100.0) as u8
}

/// Trend derived from an overall score.
///
/// Only `Stable` and `Declining` are derivable from a single score;
/// `Improving` arrives solely through backend updates.
#[must_use]
pub const fn trend_for(overall: u8) -> Trend {
    if overall <= DECLINING_AT_OR_BELOW {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

fn weighted<D>(
    input: Option<ComponentInput<D>>,
    kind: ComponentKind,
    weights: &TrustWeights,
) -> Result<TrustComponent<D>> {
    let input = input.ok_or(TrustGuardError::MissingComponent { component: kind })?;
    if !input.score.is_finite() || !(0.0..=100.0).contains(&input.score) {
        return Err(TrustGuardError::InvalidScore {
            component: kind,
            score: input.score,
        });
    }
    Ok(TrustComponent::new(
        input.score,
        weights.weight(kind),
        input.details,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input(review: f64) -> AggregationInput {
        AggregationInput::new()
            .review_authenticity(review, ReviewDetails::default())
            .view_quality(82.0, ViewDetails::default())
            .purchase_patterns(79.0, PurchaseDetails::default())
            .seller_reputation(87.0, SellerDetails::default())
    }

    #[test]
    fn weighted_sum_is_rounded() {
        // 75*0.40 + 82*0.15 + 79*0.25 + 87*0.20 = 79.45
        let score = aggregate(full_input(75.0), &TrustWeights::default()).unwrap();
        assert_eq!(score.overall, 79);
        assert_eq!(score.trend, Trend::Stable);
        assert!((score.components.review_authenticity.weight - 0.40).abs() < f64::EPSILON);
        assert!((score.components.seller_reputation.weight - 0.20).abs() < f64::EPSILON);
    }

    #[test]
    fn review_delta_moves_overall_by_forty_percent() {
        let weights = TrustWeights::default();
        let low = aggregate(full_input(50.0), &weights).unwrap().overall;
        let high = aggregate(full_input(75.0), &weights).unwrap().overall;
        assert_eq!(high - low, 10);
    }

    #[test]
    fn low_review_score_declines() {
        // 20*0.40 + 49.45 = 57.45 -> 57
        let score = aggregate(full_input(20.0), &TrustWeights::default()).unwrap();
        assert_eq!(score.overall, 57);
        assert_eq!(score.trend, Trend::Declining);
    }

    #[test]
    fn trend_boundary() {
        assert_eq!(trend_for(60), Trend::Declining);
        assert_eq!(trend_for(61), Trend::Stable);
        assert_eq!(trend_for(100), Trend::Stable);
        assert_eq!(trend_for(0), Trend::Declining);
    }

    #[test]
    fn missing_component_rejected() {
        let input = AggregationInput::new()
            .review_authenticity(80.0, ReviewDetails::default())
            .view_quality(82.0, ViewDetails::default())
            .seller_reputation(87.0, SellerDetails::default());
        let err = aggregate(input, &TrustWeights::default()).unwrap_err();
        assert!(matches!(
            err,
            TrustGuardError::MissingComponent {
                component: ComponentKind::PurchasePatterns
            }
        ));
    }

    #[test]
    fn empty_input_reports_first_missing() {
        let err = aggregate(AggregationInput::new(), &TrustWeights::default()).unwrap_err();
        assert!(matches!(
            err,
            TrustGuardError::MissingComponent {
                component: ComponentKind::ReviewAuthenticity
            }
        ));
    }

    #[test]
    fn out_of_range_score_rejected() {
        let err = aggregate(full_input(101.0), &TrustWeights::default()).unwrap_err();
        assert!(matches!(err, TrustGuardError::InvalidScore { .. }));
        let err = aggregate(full_input(f64::NAN), &TrustWeights::default()).unwrap_err();
        assert!(matches!(err, TrustGuardError::InvalidScore { .. }));
    }

    #[test]
    fn custom_weights_applied() {
        let weights = TrustWeights {
            review_authenticity: 1.0,
            view_quality: 0.0,
            purchase_patterns: 0.0,
            seller_reputation: 0.0,
        };
        let score = aggregate(full_input(42.0), &weights).unwrap();
        assert_eq!(score.overall, 42);
    }

    #[test]
    fn timestamp_is_supplied_time() {
        let now = DateTime::parse_from_rfc3339("2024-02-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let score = aggregate_at(full_input(75.0), &TrustWeights::default(), now).unwrap();
        assert_eq!(score.last_updated, now);
    }
}
