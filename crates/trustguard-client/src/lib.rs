//! HTTP client and analysis strategies for TrustGuard.
//!
//! [`TrustGuardClient`] talks to the review-analysis service and the
//! trust-score backend. The strategy types on top of it never let a service
//! failure escape: every remote path degrades to the local engine.

#![doc(html_root_url = "https://docs.rs/trustguard-client/0.3.0")]

mod client;
mod config;
pub mod analyzer;
pub mod api;
pub mod batch;
pub mod resolver;
pub mod submission;

pub use analyzer::{AuthenticityAnalyzer, FallbackAnalyzer, LocalAnalyzer, RemoteAnalyzer};
pub use batch::{BatchAnalysis, BatchAnalyzer};
pub use client::{TrustGuardClient, TrustGuardClientBuilder};
pub use config::*;
pub use resolver::{Resolution, TrustScoreResolver};
pub use submission::ReviewSubmitter;
pub use trustguard_core::{Result, TrustGuardError};
