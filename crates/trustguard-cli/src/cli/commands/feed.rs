//! `tguard feed` - Replay recorded push messages against a product's state.

use anyhow::{Context as _, Result};
use colored::Colorize;
use serde::Serialize;
use trustguard::engine::FeedUpdate;
use trustguard::{ProductFeed, Review, TrustScore};

use super::{load_reviews, read_input, Context};
use crate::cli::args::FeedArgs;
use crate::output::{print_review_table, print_structured, print_trust_score, write_review_csv, OutputFormat};

/// Counts of what each replayed message did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayStats {
    pub score_updates: usize,
    pub reviews_added: usize,
    pub dropped: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedReport<'a> {
    stats: ReplayStats,
    trust_score: Option<&'a TrustScore>,
    reviews: &'a [Review],
}

pub fn execute(ctx: Context, args: FeedArgs) -> Result<()> {
    let trust_score = match &args.trust_score {
        Some(path) => {
            let raw = read_input(path)?;
            Some(serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?)
        }
        None => None,
    };
    let reviews = match &args.reviews {
        Some(path) => load_reviews(path)?,
        None => Vec::new(),
    };

    let mut feed = ProductFeed::new(trust_score, reviews);
    let stats = replay(&mut feed, &read_input(&args.messages)?);

    let report = FeedReport {
        stats,
        trust_score: feed.trust_score(),
        reviews: feed.reviews(),
    };
    if print_structured(ctx.output_format, &report)? {
        return Ok(());
    }

    match ctx.output_format {
        OutputFormat::Csv => write_review_csv(feed.reviews())?,
        _ => {
            println!(
                "{} {} score updates, {} new reviews, {} dropped",
                "Replayed:".bold(),
                stats.score_updates,
                stats.reviews_added,
                stats.dropped.to_string().yellow()
            );
            println!();
            match feed.trust_score() {
                Some(score) => print_trust_score(score),
                None => println!("{}", "No trust score received.".dimmed()),
            }
            println!();
            print_review_table(feed.reviews());
        }
    }

    Ok(())
}

/// Apply every non-blank line as one push message.
pub fn replay(feed: &mut ProductFeed, frames: &str) -> ReplayStats {
    let mut stats = ReplayStats::default();
    for line in frames.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match feed.apply_raw(line) {
            FeedUpdate::TrustScoreReplaced => stats.score_updates += 1,
            FeedUpdate::ReviewAdded => stats.reviews_added += 1,
            FeedUpdate::Dropped => stats.dropped += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAMES: &str = r#"
{"type":"new_review","payload":{"id":"r9","productId":"prod_001","userId":"u9","userName":"Lee","rating":3,"headline":"Ok","content":"Fine.","date":"2024-01-25T08:00:00Z"}}
{"type":"heartbeat"}
not json
{"type":"trust_score_update","payload":{"overall":72,"components":{"reviewAuthenticity":{"score":70,"weight":0.4},"viewQuality":{"score":75,"weight":0.15},"purchasePatterns":{"score":72,"weight":0.25},"sellerReputation":{"score":73,"weight":0.2}},"trend":"stable","lastUpdated":"2024-01-25T08:00:01Z"}}
"#;

    #[test]
    fn counts_each_outcome() {
        let mut feed = ProductFeed::default();
        let stats = replay(&mut feed, FRAMES);
        assert_eq!(
            stats,
            ReplayStats {
                score_updates: 1,
                reviews_added: 1,
                dropped: 2,
            }
        );
        assert_eq!(feed.trust_score().map(|s| s.overall), Some(72));
        assert_eq!(feed.reviews()[0].id, "r9");
    }
}
