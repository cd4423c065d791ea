// Base forms of possibly-contracted, multi-word lemmas

use tracing::{debug, warn};

use crate::contraction::ContractionExpander;
use crate::store::LexicalStore;

/// Reduces a lemma such as `"couldn't've gone"` to a canonical
/// space-joined base-form string (`"could not have go"`).
///
/// Contractions are expanded first; every resulting word is then replaced
/// by its base form from the store's lemma table when one exists. Words
/// without a lemma record, or whose lookup fails, pass through verbatim.
#[derive(Clone, Copy)]
pub struct LemmaResolver<'a> {
    store: &'a dyn LexicalStore,
    expander: ContractionExpander,
}

impl<'a> LemmaResolver<'a> {
    pub fn new(store: &'a dyn LexicalStore) -> Self {
        Self {
            store,
            expander: ContractionExpander::new(),
        }
    }

    /// Canonical base form of `lemma`; empty input gives an empty string.
    pub fn resolve_base(&self, lemma: &str) -> String {
        let words: Vec<String> = self
            .expander
            .expand_runs(lemma)
            .iter()
            .flat_map(|run| run.split_whitespace())
            .map(|word| self.base_of(word))
            .collect();
        words.join(" ").trim().to_string()
    }

    fn base_of(&self, word: &str) -> String {
        match self.store.find_lemma(word) {
            Ok(Some(lemma)) => {
                debug!(target: "lexis::lemma", word, base = lemma.base_form(), "lemma found");
                lemma.base_form().to_string()
            }
            Ok(None) => word.to_string(),
            Err(error) => {
                warn!(target: "lexis::lemma", word, %error, "lemma lookup failed");
                word.to_string()
            }
        }
    }
}
