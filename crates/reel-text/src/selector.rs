//! Heuristic fragment scoring and selection.
//!
//! Scores candidate fragments on notable-term hits and length, then
//! picks the highest scorer. First-seen order breaks ties, so selection
//! is deterministic for a given vocabulary and length thresholds.

use reel_models::TextFragment;
use tracing::debug;

use crate::tokenize::alnum_words;

/// Terms that tend to indicate an engaging story.
pub const NOTABLE_TERMS: &[&str] = &[
    "controversy",
    "scandal",
    "shocking",
    "outrage",
    "wild",
    "crazy",
    "infamous",
    "notorious",
    "bizarre",
    "unexpected",
    "dramatic",
    "unbelievable",
    "incredible",
    "intense",
];

/// Points per notable-term hit.
const TERM_WEIGHT: i64 = 2;
/// Bonus for fragments in the preferred length band.
const PREFERRED_LENGTH_BONUS: i64 = 3;
/// Penalty for fragments outside the usable length band.
const LENGTH_PENALTY: i64 = -2;

/// Score a piece of text for engagement.
///
/// Score = 2 x notable-term hits, +3 if length is within [100, 300]
/// characters, -2 if shorter than 50 or longer than 500.
pub fn score_text(text: &str) -> i64 {
    let term_hits = alnum_words(text)
        .iter()
        .filter(|word| NOTABLE_TERMS.contains(&word.as_str()))
        .count() as i64;

    let mut score = TERM_WEIGHT * term_hits;

    let length = text.chars().count();
    if (100..=300).contains(&length) {
        score += PREFERRED_LENGTH_BONUS;
    } else if length < 50 || length > 500 {
        score += LENGTH_PENALTY;
    }

    score
}

/// Select the most engaging fragment, or `None` if the list is empty.
///
/// Stable max: among equal top scores the first-seen fragment wins.
pub fn select_fragment(fragments: &[TextFragment]) -> Option<&TextFragment> {
    select_by_score(fragments.iter(), |frag| score_text(&frag.content))
}

/// Select the most engaging paragraph, or `None` if the list is empty.
pub fn select_paragraph<'a>(paragraphs: &[&'a str]) -> Option<&'a str> {
    select_by_score(paragraphs.iter().copied(), |p| score_text(p))
}

fn select_by_score<T, I, F>(items: I, score: F) -> Option<T>
where
    I: Iterator<Item = T>,
    F: Fn(&T) -> i64,
{
    let mut best: Option<(T, i64)> = None;
    for item in items {
        let item_score = score(&item);
        debug!(score = item_score, "scored candidate fragment");
        match &best {
            Some((_, best_score)) if item_score <= *best_score => {}
            _ => best = Some((item, item_score)),
        }
    }
    best.map(|(item, _)| item)
}
