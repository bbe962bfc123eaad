//! Core types and errors for TrustGuard.
//!
//! This crate provides the foundational types used across the TrustGuard crates:
//!
//! - **Types**: Strongly-typed reviews, authenticity results, trust scores and
//!   the wire shapes of the analysis service, trust-score backend and push feed
//! - **Errors**: Comprehensive error handling with [`TrustGuardError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use trustguard_core::{TrustScore, Trend, Result};
//!
//! fn show(score: &TrustScore) -> Result<()> {
//!     println!("Overall: {}", score.overall);
//!     println!("Trend: {}", score.trend);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/trustguard-core/0.3.0")]

mod error;
pub mod types;

pub use error::{Result, TrustGuardError};
pub use types::*;
