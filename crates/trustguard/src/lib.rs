//! Review authenticity scoring and product trust scores.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use trustguard::{BatchAnalyzer, FallbackAnalyzer, TrustGuardClient, TrustScoreResolver};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> trustguard::Result<()> {
//!     let client = TrustGuardClient::new()?;
//!
//!     // Remote analysis, falling back to the local heuristic
//!     let analyzer = Arc::new(FallbackAnalyzer::remote(client.clone()));
//!     let batch = BatchAnalyzer::new(analyzer).analyze(reviews).await;
//!     println!("{} of {} reviews look fake", batch.summary.fake(), batch.summary.total());
//!
//!     // Backend score, or one synthesized from the batch
//!     let resolved = TrustScoreResolver::default()
//!         .with_client(client)
//!         .resolve_summary("prod_001", &batch.summary)
//!         .await?;
//!     println!("Trust score: {}", resolved.trust_score.overall);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/trustguard/0.3.0")]

// Re-export core types
pub use trustguard_core::*;

// Re-export the scoring engine
pub use trustguard_engine as engine;
pub use trustguard_engine::{
    aggregate, score_review, AggregationInput, AnalysisCache, BatchSummary, EngineConfig,
    ProductFeed, TrustScoreEngine, TrustWeights,
};

// Re-export client
pub use trustguard_client::{
    AuthenticityAnalyzer, BatchAnalysis, BatchAnalyzer, FallbackAnalyzer, LocalAnalyzer,
    RateLimitConfig, RemoteAnalyzer, Resolution, ReviewSubmitter, Service, TrustGuardClient,
    TrustGuardClientBuilder, TrustScoreResolver,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
