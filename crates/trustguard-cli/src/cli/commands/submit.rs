//! `tguard submit` - Submit a review for a product.

use anyhow::Result;
use colored::Colorize;
use trustguard::{AnalysisSource, ReviewSignal, ReviewSubmission, ReviewSubmitter, TypingBehavior};

use super::Context;
use crate::cli::args::SubmitArgs;
use crate::output::{print_review_table, print_structured, score_colored, write_review_csv, OutputFormat};

pub async fn execute(ctx: Context, args: SubmitArgs) -> Result<()> {
    ReviewSignal::new(args.content.clone(), args.rating).validate()?;
    let submission = build_submission(&args);

    let mut submitter = ReviewSubmitter::new(&args.product);
    if let Some(client) = ctx.client()? {
        submitter = submitter.with_client(client);
    }
    let (review, source) = submitter.submit(&submission).await;

    if print_structured(ctx.output_format, &review)? {
        return Ok(());
    }

    match ctx.output_format {
        OutputFormat::Csv => write_review_csv(std::slice::from_ref(&review))?,
        _ => {
            let stored = match source {
                AnalysisSource::Remote => "stored by backend".green(),
                AnalysisSource::Local => "built locally (backend unavailable)".yellow(),
            };
            println!("{} {} {}", "Review".bold(), review.id.cyan(), stored);
            println!("{} {}", "Authenticity:".bold(), score_colored(review.authenticity_score));
            println!();
            print_review_table(std::slice::from_ref(&review));
        }
    }

    Ok(())
}

fn build_submission(args: &SubmitArgs) -> ReviewSubmission {
    let defaults = ReviewSubmission::new(args.rating, "", "", None).behavior();
    let behavior = TypingBehavior {
        typing_duration_secs: args.typing_duration.unwrap_or(defaults.typing_duration_secs),
        edit_count: args.edits.unwrap_or(defaults.edit_count),
        paste_count: args.pastes.unwrap_or(defaults.paste_count),
    };
    ReviewSubmission::new(
        args.rating,
        args.headline.clone(),
        args.content.clone(),
        Some(behavior),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_behaviour_uses_form_defaults() {
        let args = SubmitArgs {
            product: "prod_001".into(),
            content: "Quiet and sturdy.".into(),
            rating: 4,
            headline: "Good".into(),
            typing_duration: None,
            edits: Some(5),
            pastes: None,
        };
        let submission = build_submission(&args);
        assert_eq!(submission.typing_duration, ReviewSubmission::DEFAULT_TYPING_DURATION);
        assert_eq!(submission.edit_count, 5);
        assert_eq!(submission.paste_count, 0);
    }
}
