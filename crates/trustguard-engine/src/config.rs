//! Engine configuration: component weights and fallback constants.

use serde::{Deserialize, Serialize};
use trustguard_core::{
    ComponentKind, PurchaseDetails, Result, SellerDetails, TrustGuardError, ViewDetails,
};

/// Tolerance when checking that weights sum to 1.0
const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Weight of each component in the overall trust score.
///
/// All weights must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustWeights {
    /// Reviews carry the most signal
    pub review_authenticity: f64,
    /// Organic vs. bot traffic
    pub view_quality: f64,
    /// Purchase legitimacy
    pub purchase_patterns: f64,
    /// Seller track record
    pub seller_reputation: f64,
}

impl Default for TrustWeights {
    fn default() -> Self {
        Self {
            review_authenticity: 0.40,
            view_quality: 0.15,
            purchase_patterns: 0.25,
            seller_reputation: 0.20,
        }
    }
}

impl TrustWeights {
    /// Weight of a single component
    #[must_use]
    pub const fn weight(&self, kind: ComponentKind) -> f64 {
        match kind {
            ComponentKind::ReviewAuthenticity => self.review_authenticity,
            ComponentKind::ViewQuality => self.view_quality,
            ComponentKind::PurchasePatterns => self.purchase_patterns,
            ComponentKind::SellerReputation => self.seller_reputation,
        }
    }

    /// Sum of all weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        ComponentKind::ALL.iter().map(|k| self.weight(*k)).sum()
    }

    /// Reject negative weights or weights that do not sum to 1.0
    pub fn validate(&self) -> Result<()> {
        let sum = self.sum();
        let any_negative = ComponentKind::ALL.iter().any(|k| self.weight(*k) < 0.0);
        if any_negative || (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(TrustGuardError::InvalidWeights { sum });
        }
        Ok(())
    }
}

/// Score and counters supplied for one component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInput<D> {
    /// Sub-score (0-100)
    pub score: f64,
    /// Domain counters
    #[serde(default)]
    pub details: D,
}

impl<D> ComponentInput<D> {
    /// Create an input
    pub const fn new(score: f64, details: D) -> Self {
        Self { score, details }
    }
}

/// Stand-in values for the components the frontend cannot observe.
///
/// Used when the trust-score backend is unreachable and a score has to be
/// synthesized from reviews alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderComponents {
    /// View quality stand-in
    #[serde(default = "default_view_quality")]
    pub view_quality: ComponentInput<ViewDetails>,
    /// Purchase patterns stand-in
    #[serde(default = "default_purchase_patterns")]
    pub purchase_patterns: ComponentInput<PurchaseDetails>,
    /// Seller reputation stand-in
    #[serde(default = "default_seller_reputation")]
    pub seller_reputation: ComponentInput<SellerDetails>,
}

impl Default for PlaceholderComponents {
    fn default() -> Self {
        Self {
            view_quality: default_view_quality(),
            purchase_patterns: default_purchase_patterns(),
            seller_reputation: default_seller_reputation(),
        }
    }
}

/// Configuration for [`crate::TrustScoreEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Component weights
    #[serde(default)]
    pub weights: TrustWeights,

    /// Average authenticity reported for a product with no reviews
    #[serde(default = "default_empty_batch_average")]
    pub empty_batch_average: f64,

    /// Stand-ins for locally unobservable components
    #[serde(default)]
    pub placeholder: PlaceholderComponents,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: TrustWeights::default(),
            empty_batch_average: default_empty_batch_average(),
            placeholder: PlaceholderComponents::default(),
        }
    }
}

impl EngineConfig {
    /// Check weights and constants are usable
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if !(0.0..=100.0).contains(&self.empty_batch_average) {
            return Err(TrustGuardError::Config(format!(
                "empty_batch_average must be within 0-100, got {}",
                self.empty_batch_average
            )));
        }
        Ok(())
    }
}

// Default value functions for serde.
const fn default_empty_batch_average() -> f64 {
    75.0
}

const fn default_view_quality() -> ComponentInput<ViewDetails> {
    ComponentInput::new(
        82.0,
        ViewDetails {
            organic_views: 15_420,
            bot_views: 3_280,
            view_quality_ratio: 0.82,
        },
    )
}

const fn default_purchase_patterns() -> ComponentInput<PurchaseDetails> {
    ComponentInput::new(
        79.0,
        PurchaseDetails {
            total_purchases: 1_893,
            fraudulent_purchases: 127,
            legitimacy_rate: 0.93,
        },
    )
}

const fn default_seller_reputation() -> ComponentInput<SellerDetails> {
    ComponentInput::new(
        87.0,
        SellerDetails {
            account_age: 1_247,
            total_products: 156,
            average_rating: 4.7,
            suspicious_activities: 3,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let w = TrustWeights::default();
        assert!((w.sum() - 1.0).abs() < WEIGHT_TOLERANCE);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn unbalanced_weights_rejected() {
        let w = TrustWeights {
            review_authenticity: 0.5,
            ..TrustWeights::default()
        };
        assert!(matches!(
            w.validate(),
            Err(TrustGuardError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn negative_weight_rejected() {
        let w = TrustWeights {
            review_authenticity: 0.65,
            view_quality: -0.1,
            ..TrustWeights::default()
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn default_placeholders() {
        let config = EngineConfig::default();
        assert!((config.placeholder.view_quality.score - 82.0).abs() < f64::EPSILON);
        assert!((config.placeholder.purchase_patterns.score - 79.0).abs() < f64::EPSILON);
        assert!((config.placeholder.seller_reputation.score - 87.0).abs() < f64::EPSILON);
        assert!((config.empty_batch_average - 75.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"empty_batch_average": 0.0}"#).unwrap();
        assert!(config.empty_batch_average.abs() < f64::EPSILON);
        assert_eq!(config.weights, TrustWeights::default());
        assert_eq!(config.placeholder, PlaceholderComponents::default());
    }

    #[test]
    fn out_of_range_sentinel_rejected() {
        let config = EngineConfig {
            empty_batch_average: 120.0,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(TrustGuardError::Config(_))));
    }
}
