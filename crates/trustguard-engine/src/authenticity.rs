//! Local review-authenticity heuristic.
//!
//! Every review starts at 100 and loses a fixed penalty for each rule that
//! fires. Rules are independent: the order only decides the order of the
//! reasons in the result.

use trustguard_core::{AuthenticityResult, ReviewSignal};

/// Lowest score the heuristic will report
pub const MIN_SCORE: i32 = 10;

/// Highest score the heuristic will report
pub const MAX_SCORE: i32 = 100;

/// Superlatives counted across headline and body
pub const SUPERLATIVES: [&str; 7] = [
    "amazing",
    "incredible",
    "perfect",
    "best ever",
    "worst ever",
    "terrible",
    "awful",
];

/// Boilerplate phrases counted in the body
pub const GENERIC_PHRASES: [&str; 5] = [
    "great product",
    "highly recommend",
    "five stars",
    "fast shipping",
    "great seller",
];

const MAX_SUPERLATIVES: usize = 3;
const MAX_GENERIC_PHRASES: usize = 2;
const SHORT_REVIEW_CHARS: usize = 50;

/// A single authenticity rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicRule {
    /// 1 or 5 stars without a verified purchase
    ExtremeUnverifiedRating,
    /// Username with an underscore and "2024"
    SuspiciousUsername,
    /// Username containing "master" or "99"
    GenericUsername,
    /// More than three superlatives
    ExcessiveSuperlatives,
    /// More than two boilerplate phrases
    GenericPhrasing,
    /// Body has no sentence-ending punctuation
    NoPunctuation,
    /// Five stars with fewer than 50 characters of body
    ShortMaxRating,
}

impl HeuristicRule {
    /// All rules in evaluation order
    pub const ALL: [Self; 7] = [
        Self::ExtremeUnverifiedRating,
        Self::SuspiciousUsername,
        Self::GenericUsername,
        Self::ExcessiveSuperlatives,
        Self::GenericPhrasing,
        Self::NoPunctuation,
        Self::ShortMaxRating,
    ];

    /// Points deducted when the rule fires
    #[must_use]
    pub const fn penalty(self) -> i32 {
        match self {
            Self::ExtremeUnverifiedRating => 25,
            Self::SuspiciousUsername => 20,
            Self::GenericUsername | Self::ExcessiveSuperlatives | Self::NoPunctuation => 15,
            Self::GenericPhrasing => 10,
            Self::ShortMaxRating => 8,
        }
    }

    /// Reason reported when the rule fires
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::ExtremeUnverifiedRating => "Extreme rating without verified purchase",
            Self::SuspiciousUsername => "Suspicious username pattern",
            Self::GenericUsername => "Generic username pattern",
            Self::ExcessiveSuperlatives => "Excessive use of superlatives",
            Self::GenericPhrasing => "Generic review pattern detected",
            Self::NoPunctuation => "No punctuation usage",
            Self::ShortMaxRating => "Very short review for maximum rating",
        }
    }

    fn fires(self, signal: &ReviewSignal, features: &TextFeatures) -> bool {
        match self {
            Self::ExtremeUnverifiedRating => {
                !signal.verified && (signal.rating == 1 || signal.rating == 5)
            }
            Self::SuspiciousUsername => {
                signal.user_name.contains('_') && signal.user_name.contains("2024")
            }
            Self::GenericUsername => {
                let name = signal.user_name.to_lowercase();
                name.contains("master") || name.contains("99")
            }
            Self::ExcessiveSuperlatives => features.superlatives > MAX_SUPERLATIVES,
            Self::GenericPhrasing => features.generic_phrases > MAX_GENERIC_PHRASES,
            Self::NoPunctuation => !features.has_punctuation,
            Self::ShortMaxRating => signal.rating == 5 && features.content_chars < SHORT_REVIEW_CHARS,
        }
    }
}

impl std::fmt::Display for HeuristicRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// Text statistics the rules are evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFeatures {
    /// Distinct superlatives found in the headline or body
    pub superlatives: usize,
    /// Distinct boilerplate phrases found in the body
    pub generic_phrases: usize,
    /// Whether the body contains `.`, `!` or `?`
    pub has_punctuation: bool,
    /// Body length in characters
    pub content_chars: usize,
}

impl TextFeatures {
    /// Extract statistics from a headline and body
    #[must_use]
    pub fn extract(headline: &str, content: &str) -> Self {
        let headline = headline.to_lowercase();
        let body = content.to_lowercase();
        Self {
            superlatives: count_distinct(&[headline.as_str(), body.as_str()], &SUPERLATIVES),
            generic_phrases: count_distinct(&[body.as_str()], &GENERIC_PHRASES),
            has_punctuation: content.contains(['.', '!', '?']),
            content_chars: content.chars().count(),
        }
    }
}

/// Count the needles found in at least one already-lowercased haystack.
///
/// Each needle counts once however often it repeats.
#[must_use]
pub fn count_distinct(haystacks: &[&str], needles: &[&str]) -> usize {
    needles
        .iter()
        .filter(|n| haystacks.iter().any(|h| h.contains(**n)))
        .count()
}

/// Count non-overlapping occurrences of each needle in an already-lowercased haystack.
#[must_use]
pub fn count_occurrences(haystack: &str, needles: &[&str]) -> usize {
    needles.iter().map(|n| haystack.matches(n).count()).sum()
}

/// Rules that fire for a review, in evaluation order
#[must_use]
pub fn fired_rules(signal: &ReviewSignal) -> Vec<HeuristicRule> {
    let features = TextFeatures::extract(&signal.headline, &signal.content);
    HeuristicRule::ALL
        .into_iter()
        .filter(|rule| rule.fires(signal, &features))
        .collect()
}

/// Score a review with the local heuristic.
///
/// Deterministic: behavioural metrics on the signal are ignored here.
#[must_use]
pub fn score_review(signal: &ReviewSignal) -> AuthenticityResult {
    let rules = fired_rules(signal);
    let penalty: i32 = rules.iter().map(|r| r.penalty()).sum();
    let score = (MAX_SCORE - penalty).clamp(MIN_SCORE, MAX_SCORE);
    let reasons = rules.iter().map(|r| r.reason().to_string()).collect();

    AuthenticityResult::local(f64::from(score), reasons)
}
