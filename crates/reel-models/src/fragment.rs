//! Text fragment and excerpt models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A raw text fragment pulled from an upstream source.
///
/// Fragments are immutable after creation; the pipeline consumes them
/// once during selection and transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextFragment {
    /// Raw fragment content.
    pub content: String,
    /// Identifier of the source the fragment was discovered in.
    pub source: String,
}

impl TextFragment {
    /// Create a new fragment.
    pub fn new(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
        }
    }

    /// Fragment length in characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the fragment holds no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// The final excerpt produced by the text transformation pipeline.
///
/// Immutable once produced; owned by the orchestrator until handed to
/// image rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct TransformedText(String);

impl TransformedText {
    /// Wrap a finished excerpt.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the excerpt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the excerpt.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TransformedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
