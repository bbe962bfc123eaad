//! `tguard config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::{print_structured, OutputFormat};

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load()?;

    if print_structured(ctx.output_format, &config)? {
        return Ok(());
    }

    let unset = || "(default)".dimmed().to_string();
    println!("{}", "Current Configuration:".bold());
    println!();
    println!("  {} {}", "backend_url:".bold(), config.backend_url.clone().unwrap_or_else(unset));
    println!("  {} {}", "analysis_url:".bold(), config.analysis_url.clone().unwrap_or_else(unset));
    println!(
        "  {} {}",
        "timeout_secs:".bold(),
        config.timeout_secs.map_or_else(unset, |t| t.to_string())
    );
    println!("  {} {}", "offline:".bold(), config.offline);
    println!(
        "  {} {}",
        "output_format:".bold(),
        config.output_format.unwrap_or(OutputFormat::Pretty)
    );
    println!(
        "  {} {}",
        "empty_batch_average:".bold(),
        config.engine.empty_batch_average
    );

    let w = &config.engine.weights;
    println!(
        "  {} reviews {:.2}, views {:.2}, purchases {:.2}, seller {:.2}",
        "weights:".bold(),
        w.review_authenticity,
        w.view_quality,
        w.purchase_patterns,
        w.seller_reputation
    );

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());
    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
