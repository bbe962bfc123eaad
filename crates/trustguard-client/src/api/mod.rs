//! Service API endpoint implementations.

mod analysis;
mod reviews;
mod trust_score;

pub use analysis::AnalysisApi;
pub use reviews::ReviewsApi;
pub use trust_score::TrustScoreApi;
