use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::flexible_datetime;

/// One of the four signal categories feeding the overall trust score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    /// Authenticity of the product's reviews
    ReviewAuthenticity,
    /// Organic vs. bot traffic
    ViewQuality,
    /// Legitimacy of purchases
    PurchasePatterns,
    /// Seller track record
    SellerReputation,
}

impl ComponentKind {
    /// All components in presentation order
    pub const ALL: [Self; 4] = [
        Self::ReviewAuthenticity,
        Self::ViewQuality,
        Self::PurchasePatterns,
        Self::SellerReputation,
    ];

    /// Wire name of the component
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReviewAuthenticity => "reviewAuthenticity",
            Self::ViewQuality => "viewQuality",
            Self::PurchasePatterns => "purchasePatterns",
            Self::SellerReputation => "sellerReputation",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction the trust score is moving in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Getting better. Only ever received from the backend, never computed locally
    Improving,
    /// Holding steady
    #[default]
    Stable,
    /// Getting worse
    Declining,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Improving => write!(f, "improving"),
            Self::Stable => write!(f, "stable"),
            Self::Declining => write!(f, "declining"),
        }
    }
}

/// A weighted sub-score with its domain counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustComponent<D> {
    /// Sub-score (0-100)
    pub score: f64,
    /// Fraction of the overall score
    pub weight: f64,
    /// Domain counters behind the score
    #[serde(default)]
    pub details: D,
}

impl<D> TrustComponent<D> {
    /// Create a component
    pub const fn new(score: f64, weight: f64, details: D) -> Self {
        Self {
            score,
            weight,
            details,
        }
    }

    /// Weighted contribution to the overall score
    #[must_use]
    pub fn contribution(&self) -> f64 {
        self.score * self.weight
    }
}

/// Counters behind the review-authenticity component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewDetails {
    /// Reviews analyzed
    pub total_reviews: u64,
    /// Reviews classified as fake
    pub fake_reviews: u64,
    /// Mean authenticity, one decimal place
    pub average_authenticity: f64,
}

impl ReviewDetails {
    /// Percentage of reviews classified as fake
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fake_ratio(&self) -> f64 {
        if self.total_reviews == 0 {
            0.0
        } else {
            self.fake_reviews as f64 / self.total_reviews as f64
        }
    }
}

/// Counters behind the view-quality component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewDetails {
    /// Views from real shoppers
    pub organic_views: u64,
    /// Views attributed to bots
    pub bot_views: u64,
    /// Organic share of all views
    pub view_quality_ratio: f64,
}

/// Counters behind the purchase-patterns component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseDetails {
    /// Purchases observed
    pub total_purchases: u64,
    /// Purchases flagged as fraudulent
    pub fraudulent_purchases: u64,
    /// Share of legitimate purchases
    pub legitimacy_rate: f64,
}

/// Counters behind the seller-reputation component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SellerDetails {
    /// Seller account age in days
    pub account_age: u32,
    /// Products listed
    pub total_products: u32,
    /// Mean rating across the seller's products
    pub average_rating: f64,
    /// Flagged seller activities
    pub suspicious_activities: u32,
}

/// The four weighted components of a trust score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustComponents {
    /// Review authenticity
    pub review_authenticity: TrustComponent<ReviewDetails>,
    /// View quality
    pub view_quality: TrustComponent<ViewDetails>,
    /// Purchase patterns
    pub purchase_patterns: TrustComponent<PurchaseDetails>,
    /// Seller reputation
    pub seller_reputation: TrustComponent<SellerDetails>,
}

impl TrustComponents {
    /// Score and weight of a component
    #[must_use]
    pub const fn score_and_weight(&self, kind: ComponentKind) -> (f64, f64) {
        match kind {
            ComponentKind::ReviewAuthenticity => {
                (self.review_authenticity.score, self.review_authenticity.weight)
            }
            ComponentKind::ViewQuality => (self.view_quality.score, self.view_quality.weight),
            ComponentKind::PurchasePatterns => {
                (self.purchase_patterns.score, self.purchase_patterns.weight)
            }
            ComponentKind::SellerReputation => {
                (self.seller_reputation.score, self.seller_reputation.weight)
            }
        }
    }
}

/// Weighted composite trust score for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustScore {
    /// Overall score (0-100)
    pub overall: u8,
    /// Component breakdown
    pub components: TrustComponents,
    /// Direction of travel
    #[serde(default)]
    pub trend: Trend,
    /// When the score was computed
    #[serde(deserialize_with = "flexible_datetime")]
    pub last_updated: DateTime<Utc>,
}
