// LexisHandle: one object owning the lexical store and every option.
//
// Resolvers borrow the store, so the handle builds them on the fly in each
// method call instead of holding them (no self-referential lifetimes).

use tracing::warn;

use lexis_core::{Language, Token, Word};

use crate::LexisError;
use crate::analyzer::{AnalysisResult, AnalyzerOptions, CandidatePolicy, TextAnalyzer, analyze_text};
use crate::contraction::ContractionExpander;
use crate::lemma::LemmaResolver;
use crate::resolver::{ResolverOptions, WordResolver};
use crate::store::{LexicalStore, MemoryStore};
use crate::tokenizer::{self, RunMode};

/// Top-level handle for word resolution, contraction expansion, base forms
/// and text analysis over one lexical dataset.
pub struct LexisHandle {
    store: Box<dyn LexicalStore>,
    language: Language,
    resolver_options: ResolverOptions,
    analyzer_options: AnalyzerOptions,
}

impl LexisHandle {
    /// Create a handle from a JSON dataset.
    ///
    /// - `data`: the dataset document (see [`MemoryStore`])
    /// - `language`: language code such as `"en"` or `"en-GB"`
    pub fn from_bytes(data: &[u8], language: &str) -> Result<Self, LexisError> {
        let language: Language = language
            .parse()
            .map_err(|_| LexisError::UnsupportedLanguage(language.to_string()))?;
        let store = MemoryStore::from_json_slice(data)?;
        Ok(Self::from_store(store, language))
    }

    /// Create a handle over any store implementation.
    pub fn from_store(store: impl LexicalStore + 'static, language: Language) -> Self {
        Self {
            store: Box::new(store),
            language,
            resolver_options: ResolverOptions::default(),
            analyzer_options: AnalyzerOptions::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn store(&self) -> &dyn LexicalStore {
        self.store.as_ref()
    }

    /// A resolver bound to this handle's store and options.
    pub fn resolver(&self) -> WordResolver<'_> {
        WordResolver::with_options(self.store.as_ref(), self.resolver_options)
    }

    fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            language: self.language,
            ..self.analyzer_options
        }
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Dictionary entries for `token` in the handle's language.
    pub fn resolve(&self, token: &str) -> Vec<Word> {
        self.resolver().resolve_in(token, self.language)
    }

    /// Dictionary entries for `token` in an explicit language.
    pub fn resolve_in(&self, token: &str, language: Language) -> Vec<Word> {
        self.resolver().resolve_in(token, language)
    }

    /// Expand every contraction in `text`.
    pub fn expand(&self, text: &str) -> Result<String, LexisError> {
        ContractionExpander::new().expand(text)
    }

    /// Canonical base form of a possibly contracted, multi-word lemma.
    pub fn base_form(&self, lemma: &str) -> String {
        LemmaResolver::new(self.store.as_ref()).resolve_base(lemma)
    }

    /// Dictionary search for a query term.
    ///
    /// Resolves the query first; when that finds nothing, falls back to a
    /// plain prefix/suffix search. Results are unique by term and part of
    /// speech, sorted by CEFR level then term, and cut to `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<Word> {
        let query = query.trim();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut found = self.resolve(query);
        if found.is_empty() {
            found = self
                .store
                .find_by_prefix_or_suffix(query, self.language)
                .unwrap_or_else(|error| {
                    warn!(target: "lexis::store", query, %error, "search lookup failed");
                    Vec::new()
                });
        }

        let mut unique: Vec<Word> = Vec::with_capacity(found.len());
        for word in found {
            if !unique.contains(&word) {
                unique.push(word);
            }
        }
        unique.sort_by(|a, b| {
            a.cefr_level()
                .cmp(&b.cefr_level())
                .then_with(|| a.term().cmp(b.term()))
        });
        unique.truncate(limit);
        unique
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Analyze `text` once with the handle's options.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, LexisError> {
        analyze_text(&self.resolver(), text, &self.analyzer_options())
    }

    /// An editable analyzer for `text` that recomputes lazily after edits.
    pub fn analyzer(&self, text: impl Into<String>) -> Result<TextAnalyzer<'_>, LexisError> {
        TextAnalyzer::with_options(self.resolver(), text, self.analyzer_options())
    }

    /// Tokenize text into words (with contractions kept whole), punctuation
    /// and whitespace.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        tokenizer::tokenize(text, RunMode::Contraction)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Set whether closed-class words are left out of analyses.
    pub fn set_exclude_functional(&mut self, value: bool) {
        self.analyzer_options.exclude_functional = value;
    }

    pub fn set_candidate_policy(&mut self, policy: CandidatePolicy) {
        self.analyzer_options.candidate_policy = policy;
    }

    /// Set whether resolution ends with a prefix/suffix search.
    pub fn set_broadened_search(&mut self, value: bool) {
        self.resolver_options.broadened_search = value;
    }

    /// Set whether analyses expand contractions before splitting the text
    /// into runs.
    pub fn set_expand_contractions(&mut self, value: bool) {
        self.analyzer_options.expand_contractions = value;
    }

    /// Set whether analyses resolve tokens in parallel. Has no effect unless
    /// the crate is built with the `parallel` feature.
    pub fn set_parallel(&mut self, value: bool) {
        self.analyzer_options.parallel = value;
    }

    /// Return the crate version (from Cargo.toml).
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
