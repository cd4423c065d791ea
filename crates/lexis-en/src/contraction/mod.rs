// Contraction expansion
//
// Rewrites contracted English forms ("gonna", "can't", "y'all'd've") into
// their canonical multi-word spelling. Both tables are literal data ordered
// longest key first, so a short clitic such as "'d" can never shadow a
// listed word such as "how'd'y".

mod tables;

pub use tables::{APOSTROPHE_CONTRACTIONS, PLAIN_CONTRACTIONS};

use lexis_core::character::{capitalize_first, is_apostrophe, normalize_apostrophes};

use crate::LexisError;
use crate::tokenizer::contraction_runs;

/// Whether an apostrophe-table key is a clitic that may also match as the
/// suffix of an unlisted token ("shouldn't" is listed, "needn't" too, but
/// "dog'll" is not).
pub fn is_clitic(key: &str) -> bool {
    key == "n't" || (key.starts_with('\'') && key.len() <= 3)
}

/// Expands contractions using the two literal tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractionExpander;

impl ContractionExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expand every contraction in `text`.
    ///
    /// The text is split into word runs (letters, digits, apostrophes) and
    /// re-joined with single spaces, so punctuation and original spacing are
    /// not preserved. Unmatched runs pass through unchanged.
    ///
    /// Empty or whitespace-only text is rejected.
    pub fn expand(&self, text: &str) -> Result<String, LexisError> {
        if text.trim().is_empty() {
            return Err(LexisError::EmptyInput);
        }
        Ok(self.expand_runs(text).join(" "))
    }

    /// Expand `text` into a list of runs; each entry may hold several
    /// space-separated words. Never fails; empty text gives an empty list.
    pub(crate) fn expand_runs(&self, text: &str) -> Vec<String> {
        // Apostrophe contractions are only worth trying when the text has one.
        let has_apostrophe = text.chars().any(is_apostrophe);
        contraction_runs(text)
            .into_iter()
            .map(|run| self.expand_token(&run, has_apostrophe).unwrap_or(run))
            .collect()
    }

    /// Expand a single run, or `None` when no table entry matches.
    pub fn expand_token(&self, token: &str, try_apostrophes: bool) -> Option<String> {
        let normalized = normalize_apostrophes(token);
        let lower = normalized.to_lowercase();
        let capitalized = token.chars().next().is_some_and(char::is_uppercase);
        let restore_case = |value: &str| {
            if capitalized {
                capitalize_first(value)
            } else {
                value.to_string()
            }
        };

        if let Some((_, value)) = PLAIN_CONTRACTIONS.iter().find(|(key, _)| *key == lower) {
            return Some(restore_case(*value));
        }

        if !try_apostrophes || !normalized.contains('\'') {
            return None;
        }

        for (key, value) in APOSTROPHE_CONTRACTIONS {
            if *key == lower {
                return Some(restore_case(*value));
            }
            if is_clitic(key) && normalized.len() > key.len() {
                let split = normalized.len() - key.len();
                if normalized.is_char_boundary(split)
                    && normalized[split..].eq_ignore_ascii_case(key)
                {
                    let stem = &normalized[..split];
                    if stem.chars().any(char::is_alphanumeric) {
                        return Some(format!("{stem} {value}"));
                    }
                }
            }
        }
        None
    }
}
