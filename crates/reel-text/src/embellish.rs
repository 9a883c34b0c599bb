//! Stochastic sentence embellishment.
//!
//! Each sentence is independently embellished with probability 0.7;
//! an embellished sentence gains an intensifier and/or a dramatic
//! adjective at uniformly random token positions. The random source is
//! injected so tests can seed it and assert exact behavior.

use rand::Rng;

use crate::tokenize::{split_sentences, words};

/// Probability a sentence is embellished at all.
const EMBELLISH_PROBABILITY: f64 = 0.7;
/// Probability each insertion kind happens within an embellished sentence.
const INSERT_PROBABILITY: f64 = 0.5;

/// Intensifier insertions.
pub const INTENSIFIERS: &[&str] = &[
    "incredibly",
    "absolutely",
    "outrageously",
    "shockingly",
    "unbelievably",
    "astoundingly",
    "mind-blowingly",
];

/// Dramatic adjective insertions.
pub const DRAMATIC_ADJECTIVES: &[&str] = &[
    "wild",
    "insane",
    "legendary",
    "notorious",
    "scandalous",
    "controversial",
    "unprecedented",
    "jaw-dropping",
];

/// Add dramatic flair to the text, sentence by sentence.
///
/// Sentences that are not embellished pass through verbatim. Embellished
/// sentences are re-joined on single spaces, so each gains zero, one, or
/// two extra word tokens.
pub fn embellish<R: Rng>(text: &str, rng: &mut R) -> String {
    let embellished: Vec<String> = split_sentences(text)
        .into_iter()
        .map(|sentence| {
            if rng.random_bool(EMBELLISH_PROBABILITY) {
                embellish_sentence(&sentence, rng)
            } else {
                sentence
            }
        })
        .collect();

    embellished.join(" ")
}

fn embellish_sentence<R: Rng>(sentence: &str, rng: &mut R) -> String {
    let mut tokens: Vec<String> = words(sentence).iter().map(|w| w.to_string()).collect();

    if rng.random_bool(INSERT_PROBABILITY) {
        insert_random(&mut tokens, INTENSIFIERS, rng);
    }
    // The second position is drawn after any prior insertion, so the two
    // inserted words can land adjacent or in swapped order.
    if rng.random_bool(INSERT_PROBABILITY) {
        insert_random(&mut tokens, DRAMATIC_ADJECTIVES, rng);
    }

    tokens.join(" ")
}

fn insert_random<R: Rng>(tokens: &mut Vec<String>, pool: &[&str], rng: &mut R) {
    let position = rng.random_range(0..=tokens.len());
    let word = pool[rng.random_range(0..pool.len())];
    tokens.insert(position, word.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word_count(text: &str) -> usize {
        text.split_whitespace().count()
    }

    #[test]
    fn test_same_seed_same_output() {
        let input = "The queen threw a party. Everyone came. It ended badly.";
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        assert_eq!(embellish(input, &mut rng_a), embellish(input, &mut rng_b));
    }

    #[test]
    fn test_insertions_bounded_per_sentence() {
        let input = "One single sentence here.";
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let output = embellish(input, &mut rng);
            let delta = word_count(&output) - word_count(input);
            assert!(delta <= 2, "seed {} inserted {} words", seed, delta);
        }
    }

    #[test]
    fn test_inserted_words_come_from_the_pools() {
        let input = "Nothing happened today.";
        let original: Vec<&str> = input.split_whitespace().collect();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let output = embellish(input, &mut rng);
            for token in output.split_whitespace() {
                assert!(
                    original.contains(&token)
                        || INTENSIFIERS.contains(&token)
                        || DRAMATIC_ADJECTIVES.contains(&token),
                    "unexpected token {:?}",
                    token
                );
            }
        }
    }

    #[test]
    fn test_some_seeds_insert_and_some_do_not() {
        let input = "A short tale.";
        let mut saw_insertion = false;
        let mut saw_verbatim = false;
        for seed in 0..128 {
            let mut rng = StdRng::seed_from_u64(seed);
            let output = embellish(input, &mut rng);
            if word_count(&output) > word_count(input) {
                saw_insertion = true;
            } else {
                assert_eq!(output, input);
                saw_verbatim = true;
            }
        }
        assert!(saw_insertion && saw_verbatim);
    }
}
