//! Tokenization helpers shared by the transformation stages.

/// Split text into sentences, keeping terminal punctuation.
///
/// A sentence ends at `.`, `!`, or `?` followed by whitespace or end of
/// input. Trailing text without terminal punctuation forms a final
/// sentence. Whitespace-only sentences are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars.peek().map_or(true, |next| next.is_whitespace());
            if at_boundary {
                push_trimmed(&mut sentences, &current);
                current.clear();
            }
        }
    }
    push_trimmed(&mut sentences, &current);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Split text into whitespace-delimited word tokens.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Case-folded alphanumeric word tokens, punctuation stripped from both
/// ends. Tokens that are empty after stripping are dropped.
pub fn alnum_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|token| {
            let core = trim_non_alnum(token);
            if core.is_empty() {
                None
            } else {
                Some(core.to_lowercase())
            }
        })
        .collect()
}

/// Strip non-alphanumeric characters from both ends of a token.
pub fn trim_non_alnum(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Split text into paragraphs on blank-line boundaries.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
