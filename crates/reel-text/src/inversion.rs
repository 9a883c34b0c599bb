//! Lexical inversion through a self-inverse substitution table.

use std::collections::HashMap;

use crate::tokenize::trim_non_alnum;

/// Gendered word pairs, one direction each; the table installs both.
///
/// `his` is deliberately absent: `his -> her -> him` would break
/// self-inversion, which the table requires.
const GENDER_PAIRS: &[(&str, &str)] = &[
    ("he", "she"),
    ("him", "her"),
    ("himself", "herself"),
    ("man", "woman"),
    ("men", "women"),
    ("boy", "girl"),
    ("boys", "girls"),
    ("male", "female"),
    ("father", "mother"),
    ("brother", "sister"),
    ("son", "daughter"),
    ("uncle", "aunt"),
    ("gentleman", "lady"),
    ("gentlemen", "ladies"),
    ("sir", "madam"),
    ("mr", "ms"),
    ("king", "queen"),
];

/// An immutable, exactly self-inverse key-to-key lookup table.
///
/// Applying [`SubstitutionTable::invert`] twice restores the original
/// token content (casing normalizes to the patterns described on
/// [`apply_casing`]).
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    mapping: HashMap<&'static str, &'static str>,
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SubstitutionTable {
    /// Build the table from the built-in pairs and validate that it is
    /// exactly self-inverse.
    pub fn new() -> Self {
        let mut mapping = HashMap::with_capacity(GENDER_PAIRS.len() * 2);
        for (a, b) in GENDER_PAIRS {
            mapping.insert(*a, *b);
            mapping.insert(*b, *a);
        }

        let table = Self { mapping };
        assert!(
            table.is_self_inverse(),
            "substitution table is not self-inverse"
        );
        table
    }

    /// Whether every key maps back to itself after two lookups.
    pub fn is_self_inverse(&self) -> bool {
        self.mapping.iter().all(|(key, value)| {
            self.mapping.get(value).copied() == Some(*key)
        })
    }

    /// Look up the counterpart of a lowercase token, if any.
    pub fn lookup(&self, token: &str) -> Option<&'static str> {
        self.mapping.get(token).copied()
    }

    /// Invert gendered words in the text, token by token.
    ///
    /// Tokens are matched on their alphanumeric core so surrounding
    /// punctuation survives. The replacement takes on the original
    /// token's casing pattern.
    pub fn invert(&self, text: &str) -> String {
        let inverted: Vec<String> = text
            .split_whitespace()
            .map(|token| self.invert_token(token))
            .collect();
        inverted.join(" ")
    }

    fn invert_token(&self, token: &str) -> String {
        let core = trim_non_alnum(token);
        if core.is_empty() {
            return token.to_string();
        }

        match self.lookup(&core.to_lowercase()) {
            Some(replacement) => {
                let start = token.find(core).unwrap_or(0);
                let prefix = &token[..start];
                let suffix = &token[start + core.len()..];
                format!("{}{}{}", prefix, apply_casing(core, replacement), suffix)
            }
            None => token.to_string(),
        }
    }
}

/// Re-case `replacement` to follow the casing pattern of `original`:
/// all-caps stays all-caps, title-case stays title-case, anything else
/// comes out lowercase.
fn apply_casing(original: &str, replacement: &str) -> String {
    if original.chars().all(|c| !c.is_lowercase()) && original.chars().any(|c| c.is_uppercase()) {
        return replacement.to_uppercase();
    }

    let mut chars = original.chars();
    let title_case = chars.next().is_some_and(|c| c.is_uppercase())
        && chars.all(|c| !c.is_uppercase());
    if title_case {
        let mut out = String::with_capacity(replacement.len());
        let mut rest = replacement.chars();
        if let Some(first) = rest.next() {
            out.extend(first.to_uppercase());
        }
        out.extend(rest);
        return out;
    }

    replacement.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_self_inverse() {
        let table = SubstitutionTable::new();
        assert!(table.is_self_inverse());
    }

    #[test]
    fn test_inversion_is_involution_on_lowercase_input() {
        let table = SubstitutionTable::new();
        let input = "the king told his son that he was a gentleman";
        let once = table.invert(input);
        let twice = table.invert(&once);
        assert_eq!(twice, input);
    }

    #[test]
    fn test_basic_swaps() {
        let table = SubstitutionTable::new();
        assert_eq!(
            table.invert("the man saw her brother"),
            "the woman saw him sister"
        );
    }

    #[test]
    fn test_casing_preserved() {
        let table = SubstitutionTable::new();
        assert_eq!(table.invert("King"), "Queen");
        assert_eq!(table.invert("KING"), "QUEEN");
        assert_eq!(table.invert("king"), "queen");
    }

    #[test]
    fn test_punctuation_survives() {
        let table = SubstitutionTable::new();
        assert_eq!(table.invert("\"Sir!\" she said."), "\"Madam!\" he said.");
    }

    #[test]
    fn test_non_matching_tokens_pass_through() {
        let table = SubstitutionTable::new();
        assert_eq!(table.invert("nothing gendered here"), "nothing gendered here");
    }
}
