//! Simulated behavioural metrics for reviews that were not captured live.
//!
//! Historical reviews carry no account age or keystroke data. These helpers
//! estimate plausible values from the text and author name so the analysis
//! service can still be queried. They are simulations, not measurements:
//! the randomness source is always supplied by the caller and the scorers
//! never call into this module.

use chrono::{DateTime, Utc};
use rand::Rng;
use trustguard_core::{ReviewSignal, TypingBehavior};

use crate::authenticity::count_occurrences;

// The typing simulation counts every repeat, against looser lists than the scorer.
const TYPING_GENERIC_PHRASES: [&str; 4] = [
    "great product",
    "highly recommend",
    "five stars",
    "fast shipping",
];

const TYPING_SUPERLATIVES: [&str; 7] = [
    "amazing",
    "incredible",
    "perfect",
    "best",
    "worst",
    "terrible",
    "awful",
];

/// Estimate an author's account age in days.
///
/// Throwaway-looking names get accounts barely older than the review.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate_account_age<R: Rng + ?Sized>(
    user_name: &str,
    reviewed_at: DateTime<Utc>,
    now: DateTime<Utc>,
    rng: &mut R,
) -> u32 {
    let days_since = (now - reviewed_at).num_days().clamp(0, i64::from(u32::MAX / 2)) as u32;
    let lowered = user_name.to_lowercase();

    if user_name.contains('_') && user_name.contains("2024") {
        (days_since + 5).max(5)
    } else if lowered.contains("master") || lowered.contains("99") {
        (days_since + 1).max(1)
    } else {
        (days_since + rng.gen_range(0..365) + 30).max(30)
    }
}

/// Simulate the keystroke behaviour that would have produced a review.
#[allow(clippy::cast_possible_truncation)]
pub fn simulate_typing<R: Rng + ?Sized>(content: &str, headline: &str, rng: &mut R) -> TypingBehavior {
    let total_len = (content.chars().count() + headline.chars().count()) as u32;
    let body = content.to_lowercase();

    let run_on = !content.contains(['.', '!', '?']);
    let generic = count_occurrences(&body, &TYPING_GENERIC_PHRASES) > 1;
    let gushing = count_occurrences(&body, &TYPING_SUPERLATIVES) > 3;

    if run_on || generic {
        // Pasted or bot-generated
        TypingBehavior {
            typing_duration_secs: (total_len / 15).max(2),
            edit_count: rng.gen_range(0..2),
            paste_count: rng.gen_range(1..4),
        }
    } else if gushing {
        // Typed by hand, but fast
        TypingBehavior {
            typing_duration_secs: (total_len / 8).max(5),
            edit_count: rng.gen_range(1..6),
            paste_count: rng.gen_range(0..2),
        }
    } else {
        TypingBehavior {
            typing_duration_secs: (total_len / 3 + rng.gen_range(0..60)).max(30),
            edit_count: rng.gen_range(2..12),
            paste_count: rng.gen_range(0..2),
        }
    }
}

/// Fill any missing behavioural metrics on a signal with simulated values.
///
/// Metrics the caller already supplied are kept.
#[must_use]
pub fn with_simulated_metrics<R: Rng + ?Sized>(
    mut signal: ReviewSignal,
    now: DateTime<Utc>,
    rng: &mut R,
) -> ReviewSignal {
    if signal.account_age_days.is_none() {
        signal.account_age_days = Some(estimate_account_age(
            &signal.user_name,
            signal.submitted_at,
            now,
            rng,
        ));
    }
    if signal.behavior.is_none() {
        signal.behavior = Some(simulate_typing(&signal.content, &signal.headline, rng));
    }
    if signal.previous_reviews.is_none() {
        signal.previous_reviews = Some(rng.gen_range(1..21));
    }
    signal
}
