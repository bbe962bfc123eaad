use chrono::Utc;
use proptest::prelude::*;
use trustguard_core::{
    PurchaseDetails, ReviewDetails, ReviewSignal, SellerDetails, Trend, ViewDetails,
};
use trustguard_engine::{aggregate, score_review, AggregationInput, BatchSummary, TrustWeights};

fn signal_strategy() -> impl Strategy<Value = ReviewSignal> {
    (
        ".{0,40}",
        ".{0,200}",
        1u8..=5,
        any::<bool>(),
        "[A-Za-z0-9_ ]{0,20}",
    )
        .prop_map(|(headline, content, rating, verified, user)| {
            ReviewSignal::new(content, rating)
                .headline(headline)
                .verified(verified)
                .user_name(user)
                .submitted_at(Utc::now())
        })
}

fn input(review: f64, view: f64, purchase: f64, seller: f64) -> AggregationInput {
    AggregationInput::new()
        .review_authenticity(review, ReviewDetails::default())
        .view_quality(view, ViewDetails::default())
        .purchase_patterns(purchase, PurchaseDetails::default())
        .seller_reputation(seller, SellerDetails::default())
}

proptest! {
    #[test]
    fn score_always_within_bounds(signal in signal_strategy()) {
        let result = score_review(&signal);
        prop_assert!(result.score >= 10.0 && result.score <= 100.0);
    }

    #[test]
    fn fake_iff_below_sixty(signal in signal_strategy()) {
        let result = score_review(&signal);
        prop_assert_eq!(result.is_fake, result.score < 60.0);
    }

    #[test]
    fn reasons_empty_iff_full_score(signal in signal_strategy()) {
        let result = score_review(&signal);
        prop_assert_eq!(result.reasons.is_empty(), (result.score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scoring_is_deterministic(signal in signal_strategy()) {
        prop_assert_eq!(score_review(&signal), score_review(&signal));
    }

    #[test]
    fn overall_is_rounded_weighted_sum(
        r in 0.0f64..=100.0,
        v in 0.0f64..=100.0,
        p in 0.0f64..=100.0,
        s in 0.0f64..=100.0,
    ) {
        let weights = TrustWeights::default();
        let score = aggregate(input(r, v, p, s), &weights).unwrap();
        let expected = r * 0.40 + v * 0.15 + p * 0.25 + s * 0.20;
        prop_assert!((f64::from(score.overall) - expected).abs() <= 0.5 + 1e-9);
        let trend = if score.overall <= 60 { Trend::Declining } else { Trend::Stable };
        prop_assert_eq!(score.trend, trend);
    }

    #[test]
    fn review_delta_scales_by_forty_percent(base in 0u32..=16, steps in 0u32..=4) {
        // Multiples of 5 keep the 0.40 contribution integral
        let low = f64::from(base * 5);
        let high = f64::from((base + steps) * 5);
        let weights = TrustWeights::default();
        let a = aggregate(input(low, 82.0, 79.0, 87.0), &weights).unwrap().overall;
        let b = aggregate(input(high, 82.0, 79.0, 87.0), &weights).unwrap().overall;
        prop_assert_eq!(u32::from(b - a), steps * 2);
    }

    #[test]
    fn component_score_stays_in_band(scores in prop::collection::vec(0.0f64..=100.0, 0..30)) {
        let results: Vec<_> = scores
            .iter()
            .map(|s| trustguard_core::AuthenticityResult::local(*s, Vec::new()))
            .collect();
        let summary = BatchSummary::from_results(&results);
        let component = summary.component_score(75.0);
        prop_assert!((20.0..=100.0).contains(&component));
        prop_assert_eq!(summary.total() as usize, scores.len());
    }
}
