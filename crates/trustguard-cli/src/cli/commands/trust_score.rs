//! `tguard trust-score` - Look up a product's trust score.

use anyhow::Result;
use colored::Colorize;
use trustguard::{AnalysisSource, BatchAnalyzer, BatchSummary, TrustScoreResolver};

use super::{load_reviews, Context};
use crate::cli::args::TrustScoreArgs;
use crate::output::{print_structured, print_trust_score, write_trust_score_csv, OutputFormat};

pub async fn execute(ctx: Context, args: TrustScoreArgs) -> Result<()> {
    let reviews = match &args.reviews {
        Some(path) => load_reviews(path)?,
        None => Vec::new(),
    };

    let mut resolver = TrustScoreResolver::new(ctx.engine()?);
    if let Some(client) = ctx.client()? {
        resolver = resolver.with_client(client);
    }

    let analyzer = ctx.analyzer()?;
    let resolution = resolver
        .resolve_with(&args.product, || async move {
            if reviews.is_empty() {
                BatchSummary::default()
            } else {
                BatchAnalyzer::new(analyzer).analyze(reviews).await.summary
            }
        })
        .await?;

    if print_structured(ctx.output_format, &resolution.trust_score)? {
        return Ok(());
    }

    match ctx.output_format {
        OutputFormat::Csv => write_trust_score_csv(&resolution.trust_score)?,
        _ => {
            println!("{} {}", "Product:".bold(), args.product.cyan());
            print_trust_score(&resolution.trust_score);
            if resolution.source == AnalysisSource::Local {
                println!();
                println!("{}", "Backend unavailable; score synthesized locally.".yellow());
            }
        }
    }

    Ok(())
}
