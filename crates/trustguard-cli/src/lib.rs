//! # trustguard-cli
//!
//! Command-line interface for the TrustGuard scoring engine.
//!
//! ## Features
//!
//! - **Review scoring**: heuristic or analysis-service verdict for one review
//! - **Batch analysis**: score a product's reviews and derive its trust score
//! - **Trust scores**: backend lookup with local synthesis when it is down
//! - **Push feed replay**: apply recorded backend messages to product state
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
