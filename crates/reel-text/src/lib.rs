//! Text scoring, selection, and transformation for the Reelforge pipeline.
//!
//! This crate provides:
//! - Heuristic fragment scoring and stable-max selection
//! - Lexical inversion through a self-inverse substitution table
//! - Seedable stochastic embellishment
//! - Frequency-based extractive summarization

pub mod embellish;
pub mod error;
pub mod inversion;
pub mod selector;
pub mod summarize;
pub mod tokenize;
pub mod transformer;

pub use embellish::{embellish, DRAMATIC_ADJECTIVES, INTENSIFIERS};
pub use error::{TextError, TextResult};
pub use inversion::SubstitutionTable;
pub use selector::{score_text, select_fragment, select_paragraph};
pub use summarize::summarize;
pub use transformer::TextTransformer;
