// Word resolution: overrides, exact lookup, suffix fallback cascade,
// broadened prefix/suffix search

mod rules;

pub use rules::{FALLBACK_RULES, SuffixRule};

use tracing::{debug, warn};

use lexis_core::{CefrLevel, Language, PartOfSpeech, Word};

use crate::store::{LexicalStore, StoreError};

/// Options controlling the fallback behavior of [`WordResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Tokens shorter than this (in characters) never enter the fallback
    /// cascade or the broadened search.
    pub min_fallback_len: usize,
    /// Maximum nesting of recursive fallback attempts.
    pub max_depth: usize,
    /// Whether to finish with a prefix/suffix search when everything else misses.
    pub broadened_search: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            min_fallback_len: 3,
            max_depth: FALLBACK_RULES.len(),
            broadened_search: true,
        }
    }
}

/// Hardcoded entries for irregular high-frequency words and numbers.
///
/// `token` is already lower-cased. Word overrides apply to English only;
/// integers are recognized in every language.
fn override_for(token: &str, language: Language) -> Option<Word> {
    let word = match token {
        "are" | "is" | "am" if language == Language::English => {
            Word::new("be", PartOfSpeech::Verb, CefrLevel::A1)
        }
        "has" | "have" if language == Language::English => {
            Word::new("have", PartOfSpeech::Verb, CefrLevel::A1)
        }
        "i" if language == Language::English => {
            Word::new("I", PartOfSpeech::Pronoun, CefrLevel::A1)
        }
        _ if token.parse::<i64>().is_ok() => {
            Word::new(token, PartOfSpeech::CardinalNumber, CefrLevel::A1)
        }
        _ => return None,
    };
    Some(word.in_language(language))
}

/// Finds the dictionary entries for a single token.
///
/// Resolution runs in a fixed order and stops at the first step that
/// produces anything:
///
/// 1. hardcoded overrides (`is` -> `be`, integers, ...)
/// 2. exact lookup in the store
/// 3. the suffix cascade of [`FALLBACK_RULES`], each rewrite resolved
///    recursively through this same pipeline
/// 4. a broadened prefix/suffix search on the token
///
/// Steps 3 and 4 are skipped for tokens shorter than
/// [`ResolverOptions::min_fallback_len`]. Store faults are logged and
/// treated as zero results, so resolution never fails; an empty list means
/// every strategy came up empty.
#[derive(Clone, Copy)]
pub struct WordResolver<'a> {
    store: &'a dyn LexicalStore,
    options: ResolverOptions,
}

impl<'a> WordResolver<'a> {
    pub fn new(store: &'a dyn LexicalStore) -> Self {
        Self::with_options(store, ResolverOptions::default())
    }

    pub fn with_options(store: &'a dyn LexicalStore, options: ResolverOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn store(&self) -> &'a dyn LexicalStore {
        self.store
    }

    /// Resolve an English token.
    pub fn resolve(&self, token: &str) -> Vec<Word> {
        self.resolve_in(token, Language::English)
    }

    /// Resolve a token in `language`.
    ///
    /// Unlike a language-blind override table, the `be`/`have`/`I` word
    /// overrides only fire for [`Language::English`]; in other languages
    /// those tokens go straight to the store. Integer overrides apply in
    /// every language.
    pub fn resolve_in(&self, token: &str, language: Language) -> Vec<Word> {
        self.resolve_at(token, language, 0)
    }

    fn resolve_at(&self, token: &str, language: Language, depth: usize) -> Vec<Word> {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            return Vec::new();
        }

        if let Some(word) = override_for(&token, language) {
            debug!(target: "lexis::resolver", candidate = %token, rule = "override", matches = 1, depth);
            return vec![word];
        }

        let exact = self.lookup("exact", &token, depth, || {
            self.store.find_exact(&token, language)
        });
        if !exact.is_empty() {
            return exact;
        }

        if token.chars().count() < self.options.min_fallback_len {
            return Vec::new();
        }

        if depth < self.options.max_depth {
            for rule in &FALLBACK_RULES {
                let Some(candidate) = rule.apply(&token) else {
                    continue;
                };
                let found = self.resolve_at(&candidate, language, depth + 1);
                debug!(
                    target: "lexis::resolver",
                    candidate = %candidate,
                    rule = rule.name,
                    matches = found.len(),
                    depth
                );
                if !found.is_empty() {
                    return found;
                }
            }
        }

        if !self.options.broadened_search {
            return Vec::new();
        }
        self.lookup("broadened", &token, depth, || {
            self.store.find_by_prefix_or_suffix(&token, language)
        })
    }

    /// Run one store query, converting a fault into an empty result.
    fn lookup(
        &self,
        rule: &'static str,
        candidate: &str,
        depth: usize,
        query: impl FnOnce() -> Result<Vec<Word>, StoreError>,
    ) -> Vec<Word> {
        match query() {
            Ok(words) => {
                debug!(target: "lexis::resolver", candidate, rule, matches = words.len(), depth);
                words
            }
            Err(error) => {
                warn!(target: "lexis::resolver", candidate, rule, %error, "store lookup failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use lexis_core::Lemma;

    use crate::store::MemoryStore;

    /// Store wrapper recording every query it receives.
    struct RecordingStore {
        inner: MemoryStore,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingStore {
        fn new(words: Vec<Word>) -> Self {
            Self {
                inner: MemoryStore::new(words, Vec::new()).unwrap(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl LexicalStore for RecordingStore {
        fn find_exact(&self, term: &str, language: Language) -> Result<Vec<Word>, StoreError> {
            self.record(format!("exact:{term}"));
            self.inner.find_exact(term, language)
        }

        fn find_by_prefix_or_suffix(
            &self,
            term: &str,
            language: Language,
        ) -> Result<Vec<Word>, StoreError> {
            self.record(format!("broad:{term}"));
            self.inner.find_by_prefix_or_suffix(term, language)
        }

        fn find_lemma(&self, term: &str) -> Result<Option<Lemma>, StoreError> {
            self.inner.find_lemma(term)
        }
    }

    /// Store whose every query fails.
    struct FailingStore;

    impl LexicalStore for FailingStore {
        fn find_exact(&self, _: &str, _: Language) -> Result<Vec<Word>, StoreError> {
            Err(StoreError::Unavailable("connection closed".into()))
        }

        fn find_by_prefix_or_suffix(&self, _: &str, _: Language) -> Result<Vec<Word>, StoreError> {
            Err(StoreError::Unavailable("connection closed".into()))
        }

        fn find_lemma(&self, _: &str) -> Result<Option<Lemma>, StoreError> {
            Err(StoreError::Unavailable("connection closed".into()))
        }
    }

    fn walk_only() -> RecordingStore {
        RecordingStore::new(vec![Word::new("walk", PartOfSpeech::Verb, CefrLevel::A1)])
    }

    #[test]
    fn be_override_ignores_case() {
        let store = walk_only();
        let resolver = WordResolver::new(&store);
        for token in ["IS", "Is", "is", "are", "am"] {
            let found = resolver.resolve(token);
            assert_eq!(found, vec![Word::new("be", PartOfSpeech::Verb, CefrLevel::A1)]);
            assert_eq!(found[0].cefr_level(), CefrLevel::A1);
        }
        assert!(store.calls().is_empty(), "overrides must not touch the store");
    }

    #[test]
    fn have_and_i_overrides() {
        let store = walk_only();
        let resolver = WordResolver::new(&store);
        assert_eq!(
            resolver.resolve("Has"),
            vec![Word::new("have", PartOfSpeech::Verb, CefrLevel::A1)]
        );
        let i = resolver.resolve("i");
        assert_eq!(i, vec![Word::new("I", PartOfSpeech::Pronoun, CefrLevel::A1)]);
        assert_eq!(i[0].term(), "I");
    }

    #[test]
    fn numeric_override() {
        let store = walk_only();
        let found = WordResolver::new(&store).resolve("42");
        assert_eq!(
            found,
            vec![Word::new("42", PartOfSpeech::CardinalNumber, CefrLevel::A1)]
        );
        assert!(store.calls().is_empty());
    }

    #[test]
    fn numbers_are_recognized_in_every_language() {
        let store = walk_only();
        let found = WordResolver::new(&store).resolve_in("7", Language::Swedish);
        assert_eq!(found[0].part_of_speech(), PartOfSpeech::CardinalNumber);
        assert_eq!(found[0].language(), Language::Swedish);
    }

    #[test]
    fn word_overrides_are_english_only() {
        let store = walk_only();
        assert!(WordResolver::new(&store).resolve_in("is", Language::Swedish).is_empty());
        let english = WordResolver::new(&store).resolve_in("is", Language::English);
        assert_eq!(english[0].term(), "be");
        let number = WordResolver::new(&store).resolve_in("42", Language::Swedish);
        assert_eq!(number[0].part_of_speech(), PartOfSpeech::CardinalNumber);
    }

    #[test]
    fn exact_match_short_circuits() {
        let store = walk_only();
        let found = WordResolver::new(&store).resolve("Walk");
        assert_eq!(found.len(), 1);
        assert_eq!(store.calls(), vec!["exact:walk"]);
    }

    #[test]
    fn strips_ing_to_find_walk() {
        let store = walk_only();
        let found = WordResolver::new(&store).resolve("walking");
        assert_eq!(found, vec![Word::new("walk", PartOfSpeech::Verb, CefrLevel::A1)]);
        assert_eq!(store.calls(), vec!["exact:walking", "exact:walk"]);
    }

    #[test]
    fn cascade_tries_rules_in_order() {
        // "walked": strip-d gives "walke", which misses everything (including its
        // own broadened search) before strip-ed gives "walk".
        let store = walk_only();
        let found = WordResolver::new(&store).resolve("walked");
        assert_eq!(found[0].term(), "walk");
        assert_eq!(
            store.calls(),
            vec!["exact:walked", "exact:walke", "broad:walke", "exact:walk"]
        );
    }

    #[test]
    fn recursion_reenters_overrides() {
        // "iss" -> strip-s -> "is" -> override.
        let store = walk_only();
        let found = WordResolver::new(&store).resolve("iss");
        assert_eq!(found[0].term(), "be");
    }

    #[test]
    fn short_tokens_skip_fallbacks() {
        let store = walk_only();
        assert!(WordResolver::new(&store).resolve("an").is_empty());
        assert_eq!(store.calls(), vec!["exact:an"]);
    }

    #[test]
    fn broadened_search_is_last_resort() {
        let store = RecordingStore::new(vec![Word::new(
            "sidewalk",
            PartOfSpeech::CommonNoun,
            CefrLevel::B1,
        )]);
        let found = WordResolver::new(&store).resolve("side");
        assert_eq!(found[0].term(), "sidewalk");
        assert_eq!(store.calls(), vec!["exact:side", "broad:side"]);
    }

    #[test]
    fn broadened_search_can_be_disabled() {
        let store = RecordingStore::new(vec![Word::new(
            "sidewalk",
            PartOfSpeech::CommonNoun,
            CefrLevel::B1,
        )]);
        let options = ResolverOptions {
            broadened_search: false,
            ..ResolverOptions::default()
        };
        assert!(WordResolver::with_options(&store, options).resolve("side").is_empty());
    }

    #[test]
    fn exhausted_resolution_is_empty() {
        let store = walk_only();
        assert!(WordResolver::new(&store).resolve("qqqq").is_empty());
    }

    #[test]
    fn depth_limit_stops_the_cascade() {
        let store = walk_only();
        let options = ResolverOptions {
            max_depth: 0,
            ..ResolverOptions::default()
        };
        assert!(WordResolver::with_options(&store, options).resolve("walking").is_empty());
        assert_eq!(store.calls(), vec!["exact:walking", "broad:walking"]);
    }

    #[test]
    fn store_faults_are_soft() {
        let resolver = WordResolver::new(&FailingStore);
        assert!(resolver.resolve("walking").is_empty());
        // Overrides still work without a store.
        assert_eq!(resolver.resolve("is")[0].term(), "be");
    }

    #[test]
    fn empty_token_resolves_to_nothing() {
        let store = walk_only();
        assert!(WordResolver::new(&store).resolve("  ").is_empty());
        assert!(store.calls().is_empty());
    }
}
