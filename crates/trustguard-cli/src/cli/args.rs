//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Review authenticity and product trust scores
///
/// Scores reviews with the analysis service when it is reachable and with
/// the built-in heuristic when it is not. Use --offline to skip the
/// services entirely.
#[derive(Parser, Debug)]
#[command(name = "tguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Trust-score backend URL
    #[arg(long, env = "TRUSTGUARD_BACKEND_URL", global = true)]
    pub backend_url: Option<String>,

    /// Review-analysis service URL
    #[arg(long, env = "TRUSTGUARD_ANALYSIS_URL", global = true)]
    pub analysis_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Never contact the services; score everything locally
    #[arg(long, global = true)]
    pub offline: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score the authenticity of a single review
    Score(ScoreArgs),

    /// Analyze a product's reviews and derive its trust score
    Analyze(AnalyzeArgs),

    /// Look up a product's trust score
    TrustScore(TrustScoreArgs),

    /// Submit a review for a product
    Submit(SubmitArgs),

    /// Replay recorded push messages against a product's state
    Feed(FeedArgs),

    /// Check whether the services are up
    Health,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Score command
// ============================================================================

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Review body
    pub content: String,

    /// Star rating (1-5)
    #[arg(short, long)]
    pub rating: u8,

    /// Review headline
    #[arg(long, default_value = "")]
    pub headline: String,

    /// The author bought the product
    #[arg(long)]
    pub verified: bool,

    /// Author display name
    #[arg(short, long, default_value = "")]
    pub user: String,

    /// Author account age in days
    #[arg(long)]
    pub account_age: Option<u32>,

    /// Seconds spent typing the review
    #[arg(long)]
    pub typing_duration: Option<u32>,

    /// Number of edits while typing
    #[arg(long, default_value = "0")]
    pub edits: u32,

    /// Number of pastes while typing
    #[arg(long, default_value = "0")]
    pub pastes: u32,

    /// Reviews previously written by the author
    #[arg(long)]
    pub previous_reviews: Option<u32>,

    /// Show which rules fired
    #[arg(long)]
    pub explain: bool,
}

// ============================================================================
// Analyze command
// ============================================================================

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON file holding an array of reviews ("-" for stdin)
    pub reviews: PathBuf,

    /// Product the reviews belong to (defaults to the first review's product)
    #[arg(short, long)]
    pub product: Option<String>,

    /// Send reviews as stored instead of filling in simulated behaviour
    #[arg(long)]
    pub no_simulate: bool,

    /// Only print reviews classified as fake
    #[arg(long)]
    pub fake_only: bool,
}

// ============================================================================
// Trust score command
// ============================================================================

#[derive(Args, Debug)]
pub struct TrustScoreArgs {
    /// Product identifier
    pub product: String,

    /// Reviews to synthesize from when the backend is unavailable
    #[arg(short, long)]
    pub reviews: Option<PathBuf>,
}

// ============================================================================
// Submit command
// ============================================================================

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Product identifier
    pub product: String,

    /// Review body
    pub content: String,

    /// Star rating (1-5)
    #[arg(short, long)]
    pub rating: u8,

    /// Review headline
    #[arg(long, default_value = "")]
    pub headline: String,

    /// Seconds spent typing the review
    #[arg(long)]
    pub typing_duration: Option<u32>,

    /// Number of edits while typing
    #[arg(long)]
    pub edits: Option<u32>,

    /// Number of pastes while typing
    #[arg(long)]
    pub pastes: Option<u32>,
}

// ============================================================================
// Feed command
// ============================================================================

#[derive(Args, Debug)]
pub struct FeedArgs {
    /// File with one push message per line ("-" for stdin)
    pub messages: PathBuf,

    /// Initial trust score (JSON)
    #[arg(long)]
    pub trust_score: Option<PathBuf>,

    /// Initial reviews (JSON array)
    #[arg(long)]
    pub reviews: Option<PathBuf>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., backend_url, offline)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
