//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Flags win over the config file
    let ctx = commands::Context {
        output_format: cli
            .output
            .or(config.output_format)
            .unwrap_or(OutputFormat::Pretty),
        backend_url: cli.backend_url.or(config.backend_url),
        analysis_url: cli.analysis_url.or(config.analysis_url),
        timeout: cli.timeout.or(config.timeout_secs).map(Duration::from_secs),
        offline: cli.offline || config.offline,
        verbose: cli.verbose,
        engine: config.engine,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Score(args) => commands::score::execute(ctx, args).await,
        Commands::Analyze(args) => commands::analyze::execute(ctx, args).await,
        Commands::TrustScore(args) => commands::trust_score::execute(ctx, args).await,
        Commands::Submit(args) => commands::submit::execute(ctx, args).await,
        Commands::Feed(args) => commands::feed::execute(ctx, args),
        Commands::Health => commands::health::execute(ctx).await,
        Commands::Config(args) => commands::config::execute(ctx, args),
    }
}

/// Log to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
