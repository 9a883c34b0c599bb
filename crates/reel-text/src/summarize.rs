//! Frequency-based extractive summarization.

use std::collections::HashMap;

use crate::tokenize::{alnum_words, split_sentences};

/// Default number of sentences kept in a summary.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Reduce text to at most `max_sentences` sentences.
///
/// Sentences are scored by the summed corpus-wide frequency of their
/// case-folded alphanumeric words. Score decides membership only; the
/// selected sentences keep their original order. Text that already fits
/// is returned unchanged.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.len() <= max_sentences {
        return text.to_string();
    }

    let mut word_freq: HashMap<String, usize> = HashMap::new();
    for word in alnum_words(text) {
        *word_freq.entry(word).or_insert(0) += 1;
    }

    let mut scored: Vec<(usize, usize)> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let score = alnum_words(sentence)
                .iter()
                .map(|word| word_freq.get(word).copied().unwrap_or(0))
                .sum();
            (index, score)
        })
        .collect();

    // Top-N by score, earliest sentence wins ties, then restore the
    // original order of the survivors.
    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let mut selected: Vec<usize> = scored
        .into_iter()
        .take(max_sentences)
        .map(|(index, _)| index)
        .collect();
    selected.sort_unstable();

    let summary: Vec<&str> = selected
        .into_iter()
        .map(|index| sentences[index].as_str())
        .collect();
    summary.join(" ")
}
