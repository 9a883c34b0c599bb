//! The end-to-end tale transformation pipeline.

use rand::rngs::StdRng;
use rand::SeedableRng;
use reel_models::TransformedText;
use tracing::debug;

use crate::embellish::embellish;
use crate::error::{TextError, TextResult};
use crate::inversion::SubstitutionTable;
use crate::selector::select_paragraph;
use crate::summarize::{summarize, DEFAULT_SUMMARY_SENTENCES};
use crate::tokenize::split_paragraphs;

/// Transforms a raw tale into a short, punchy excerpt.
///
/// Pipeline: lexical inversion -> embellishment -> extractive
/// summarization -> paragraph selection. Only embellishment is
/// stochastic; it draws from the transformer's own seedable RNG.
#[derive(Debug)]
pub struct TextTransformer {
    table: SubstitutionTable,
    rng: StdRng,
    summary_sentences: usize,
}

impl Default for TextTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextTransformer {
    /// Create a transformer seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a transformer with a fixed seed, for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a transformer with an explicit random source.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            table: SubstitutionTable::new(),
            rng,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
        }
    }

    /// Override the summarization target.
    pub fn with_summary_sentences(mut self, count: usize) -> Self {
        self.summary_sentences = count;
        self
    }

    /// Process a single tale through all transformation stages.
    ///
    /// # Errors
    /// - [`TextError::EmptyInput`] when the input is empty or whitespace
    /// - [`TextError::ProcessingFailed`] when no stage output remains to
    ///   select from
    pub fn process_tale(&mut self, raw: &str) -> TextResult<TransformedText> {
        if raw.trim().is_empty() {
            return Err(TextError::EmptyInput);
        }

        let inverted = self.table.invert(raw);
        debug!(chars = inverted.len(), "inverted gendered words");

        let embellished = embellish(&inverted, &mut self.rng);
        debug!(chars = embellished.len(), "embellished sentences");

        let summarized = summarize(&embellished, self.summary_sentences);
        debug!(chars = summarized.len(), "summarized text");

        let paragraphs = split_paragraphs(&summarized);
        let selected = select_paragraph(&paragraphs)
            .ok_or_else(|| TextError::processing_failed("no paragraph left to select"))?;

        Ok(TransformedText::new(selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_models::TextFragment;

    use crate::selector::select_fragment;

    #[test]
    fn test_empty_input_fails() {
        let mut transformer = TextTransformer::from_seed(1);
        assert!(matches!(
            transformer.process_tale(""),
            Err(TextError::EmptyInput)
        ));
        assert!(matches!(
            transformer.process_tale("   \n\t "),
            Err(TextError::EmptyInput)
        ));
    }

    #[test]
    fn test_output_is_nonempty_for_real_input() {
        let mut transformer = TextTransformer::from_seed(7);
        let excerpt = transformer
            .process_tale("The king threw a wild party. The men cheered. It was notorious.")
            .unwrap();
        assert!(!excerpt.as_str().is_empty());
    }

    #[test]
    fn test_short_input_keeps_all_sentences() {
        // Two sentences is under the default summary target, so every
        // sentence survives (possibly with inserted words).
        let mut transformer = TextTransformer::from_seed(3);
        let excerpt = transformer
            .process_tale("A scandal broke out. Nobody expected it.")
            .unwrap();
        assert!(excerpt.as_str().contains("scandal"));
        assert!(excerpt.as_str().contains("expected"));
    }

    #[test]
    fn test_inversion_applied_before_selection() {
        let mut transformer = TextTransformer::from_seed(11);
        let excerpt = transformer.process_tale("The king spoke.").unwrap();
        assert!(excerpt.as_str().to_lowercase().contains("queen"));
        assert!(!excerpt.as_str().to_lowercase().contains("king"));
    }

    #[test]
    fn test_same_seed_reproduces_excerpt() {
        let input = "The queen hosted an intense gathering. The ladies argued. The madam left early. Everyone talked about it for weeks.";
        let mut a = TextTransformer::from_seed(99);
        let mut b = TextTransformer::from_seed(99);
        assert_eq!(
            a.process_tale(input).unwrap(),
            b.process_tale(input).unwrap()
        );
    }

    #[test]
    fn test_end_to_end_fragment_selection_and_transform() {
        let fragments = vec![
            TextFragment::new("Short.", "test"),
            TextFragment::new(
                "A sufficiently long and dramatic paragraph about a notorious, \
                 scandalous controversy that runs well past one hundred characters \
                 in length.",
                "test",
            ),
        ];

        let chosen = select_fragment(&fragments).unwrap();
        assert!(chosen.content.contains("controversy"));

        let mut transformer = TextTransformer::from_seed(5);
        let excerpt = transformer.process_tale(&chosen.content).unwrap();
        assert!(!excerpt.as_str().is_empty());
        assert!(excerpt.as_str().contains("controversy"));
    }
}
