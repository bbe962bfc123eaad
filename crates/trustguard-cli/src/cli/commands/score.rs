//! `tguard score` - Score the authenticity of one review.

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use trustguard::engine::authenticity::fired_rules;
use trustguard::{AuthenticityResult, ReviewSignal, TypingBehavior};

use super::Context;
use crate::cli::args::ScoreArgs;
use crate::output::{print_structured, score_colored, write_result_csv, OutputFormat};

pub async fn execute(ctx: Context, args: ScoreArgs) -> Result<()> {
    let signal = build_signal(&args);
    signal.validate()?;

    let analyzer = ctx.analyzer()?;
    let result = analyzer.analyze(&signal).await?;

    if print_structured(ctx.output_format, &result)? {
        return Ok(());
    }

    match ctx.output_format {
        OutputFormat::Csv => write_result_csv(std::io::stdout().lock(), &result)?,
        _ => print_pretty(&result, &signal, args.explain),
    }

    Ok(())
}

fn build_signal(args: &ScoreArgs) -> ReviewSignal {
    let mut signal = ReviewSignal::new(args.content.clone(), args.rating)
        .headline(args.headline.clone())
        .verified(args.verified)
        .user_name(args.user.clone())
        .submitted_at(Utc::now());

    if let Some(days) = args.account_age {
        signal = signal.account_age_days(days);
    }
    if let Some(secs) = args.typing_duration {
        signal = signal.behavior(TypingBehavior {
            typing_duration_secs: secs,
            edit_count: args.edits,
            paste_count: args.pastes,
        });
    }
    if let Some(count) = args.previous_reviews {
        signal = signal.previous_reviews(count);
    }
    signal
}

fn print_pretty(result: &AuthenticityResult, signal: &ReviewSignal, explain: bool) {
    let verdict = if result.is_fake {
        "likely fake".red().bold()
    } else {
        "looks genuine".green().bold()
    };
    println!(
        "{} {}  {}",
        "Authenticity:".bold(),
        score_colored(result.score),
        verdict
    );
    println!("{} {}", "Scored by:".bold(), result.source);

    if !result.reasons.is_empty() {
        println!();
        for reason in &result.reasons {
            println!("  {} {}", "-".yellow(), reason);
        }
    }

    if explain {
        println!();
        println!("{}", "Local heuristic deductions:".bold());
        let rules = fired_rules(signal);
        if rules.is_empty() {
            println!("  {}", "none".dimmed());
        }
        for rule in rules {
            println!("  {:>4}  {}", format!("-{}", rule.penalty()).red(), rule);
        }
    }
}
