//! `tguard analyze` - Analyze a product's reviews and derive its trust score.

use anyhow::{bail, Result};
use colored::Colorize;
use serde::Serialize;
use trustguard::{AnalysisSource, BatchAnalyzer, Review, TrustScore, TrustScoreResolver};

use super::{load_reviews, Context};
use crate::cli::args::AnalyzeArgs;
use crate::output::{
    print_review_table, print_structured, print_trust_score, write_review_csv, OutputFormat,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeReport<'a> {
    product_id: &'a str,
    total_reviews: u64,
    fake_reviews: u64,
    trust_score: &'a TrustScore,
    trust_score_source: AnalysisSource,
    reviews: &'a [Review],
}

pub async fn execute(ctx: Context, args: AnalyzeArgs) -> Result<()> {
    let reviews = load_reviews(&args.reviews)?;
    let product_id = match (&args.product, reviews.first()) {
        (Some(id), _) => id.clone(),
        (None, Some(first)) => first.product_id.clone(),
        (None, None) => bail!("No reviews to take a product id from; pass --product"),
    };

    let batch = BatchAnalyzer::new(ctx.analyzer()?)
        .simulate_metrics(!args.no_simulate)
        .analyze(reviews)
        .await;

    let mut resolver = TrustScoreResolver::new(ctx.engine()?);
    if let Some(client) = ctx.client()? {
        resolver = resolver.with_client(client);
    }
    let resolution = resolver.resolve_summary(&product_id, &batch.summary).await?;

    let shown: Vec<Review> = if args.fake_only {
        batch.reviews.iter().filter(|r| r.is_fake).cloned().collect()
    } else {
        batch.reviews.clone()
    };

    let report = AnalyzeReport {
        product_id: &product_id,
        total_reviews: batch.summary.total(),
        fake_reviews: batch.summary.fake(),
        trust_score: &resolution.trust_score,
        trust_score_source: resolution.source,
        reviews: &shown,
    };
    if print_structured(ctx.output_format, &report)? {
        return Ok(());
    }

    match ctx.output_format {
        OutputFormat::Csv => write_review_csv(&shown)?,
        _ => {
            println!("{} {}", "Product:".bold(), product_id.cyan());
            println!(
                "{} {} analyzed, {} flagged as fake",
                "Reviews:".bold(),
                batch.summary.total(),
                batch.summary.fake().to_string().red().bold()
            );
            if ctx.verbose {
                println!("{} {}", "Cache hits:".bold(), batch.cache_hits);
            }
            println!();
            print_review_table(&shown);
            println!();
            print_trust_score(&resolution.trust_score);
            if resolution.source == AnalysisSource::Local {
                println!();
                println!(
                    "{}",
                    "Synthesized locally: view, purchase and seller components are placeholders."
                        .dimmed()
                );
            }
        }
    }

    Ok(())
}
