// Whole-text analysis: tokenize, resolve each run, aggregate
//
// `TextAnalyzer` owns an editable text and a cached `AnalysisResult`. Any
// edit drops the cache (Dirty); the next read recomputes it (Clean).

mod result;

pub use result::{AnalysisResult, Occurrences};

use std::cell::{Cell, OnceCell};
use std::collections::BTreeMap;

use tracing::debug;

use lexis_core::{CefrLevel, Language, PartOfSpeech, Word};

use crate::LexisError;
use crate::contraction::ContractionExpander;
use crate::resolver::WordResolver;
use crate::tokenizer::word_runs;

/// How to pick one word when a token resolves to several candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidatePolicy {
    /// The first candidate, in the store's order.
    #[default]
    First,
    /// The candidate with the easiest CEFR level; ties keep store order.
    LowestLevel,
}

impl CandidatePolicy {
    pub fn pick(self, candidates: Vec<Word>) -> Option<Word> {
        match self {
            Self::First => candidates.into_iter().next(),
            Self::LowestLevel => candidates.into_iter().min_by_key(Word::cefr_level),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Leave closed-class words out of the statistics.
    pub exclude_functional: bool,
    pub candidate_policy: CandidatePolicy,
    /// Resolve tokens on the rayon pool (needs the `parallel` feature;
    /// ignored without it).
    pub parallel: bool,
    /// Expand contractions before splitting into runs, so "don't" counts as
    /// "do" and "not" instead of "don" and "t".
    pub expand_contractions: bool,
    pub language: Language,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            exclude_functional: true,
            candidate_policy: CandidatePolicy::First,
            parallel: false,
            expand_contractions: false,
            language: Language::English,
        }
    }
}

/// Whether the cached result matches the current text and options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerState {
    Clean,
    Dirty,
}

/// Analyze `text` once, without keeping it around.
///
/// Each alphanumeric run of `text` becomes one word, in text order. With
/// [`AnalyzerOptions::expand_contractions`] set, contractions are expanded
/// first. Empty or whitespace-only text is rejected.
pub fn analyze_text(
    resolver: &WordResolver<'_>,
    text: &str,
    options: &AnalyzerOptions,
) -> Result<AnalysisResult, LexisError> {
    if text.trim().is_empty() {
        return Err(LexisError::EmptyInput);
    }
    Ok(compute(resolver, text, options))
}

fn compute(resolver: &WordResolver<'_>, text: &str, options: &AnalyzerOptions) -> AnalysisResult {
    let runs: Vec<String> = if options.expand_contractions {
        ContractionExpander::new()
            .expand_runs(text)
            .iter()
            .flat_map(|expanded| word_runs(expanded))
            .collect()
    } else {
        word_runs(text)
    };
    let classified = classify_all(resolver, &runs, options);
    let result = AnalysisResult::from_classified(classified, options.exclude_functional);
    debug!(
        target: "lexis::analyzer",
        tokens = result.token_count(),
        retained = result.retained_count(),
        "analysis recomputed"
    );
    result
}

fn classify(resolver: &WordResolver<'_>, run: &str, options: &AnalyzerOptions) -> Word {
    options
        .candidate_policy
        .pick(resolver.resolve_in(run, options.language))
        .unwrap_or_else(|| Word::unclassified(run, options.language))
}

#[cfg(feature = "parallel")]
fn classify_all(resolver: &WordResolver<'_>, runs: &[String], options: &AnalyzerOptions) -> Vec<Word> {
    use rayon::prelude::*;

    if options.parallel {
        runs.par_iter().map(|run| classify(resolver, run, options)).collect()
    } else {
        runs.iter().map(|run| classify(resolver, run, options)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn classify_all(resolver: &WordResolver<'_>, runs: &[String], options: &AnalyzerOptions) -> Vec<Word> {
    runs.iter().map(|run| classify(resolver, run, options)).collect()
}

/// Lazily recomputing analysis of an editable text.
///
/// The result is computed on the first read after construction or after
/// any edit, then served from the cache. Edits take `&mut self` and reads
/// are not `Sync`, so recomputation is serialized per instance.
pub struct TextAnalyzer<'a> {
    resolver: WordResolver<'a>,
    options: AnalyzerOptions,
    text: String,
    cache: OnceCell<AnalysisResult>,
    computations: Cell<usize>,
}

impl<'a> TextAnalyzer<'a> {
    /// Create an analyzer with default options. Starts `Dirty`.
    pub fn new(resolver: WordResolver<'a>, text: impl Into<String>) -> Result<Self, LexisError> {
        Self::with_options(resolver, text, AnalyzerOptions::default())
    }

    pub fn with_options(
        resolver: WordResolver<'a>,
        text: impl Into<String>,
        options: AnalyzerOptions,
    ) -> Result<Self, LexisError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(LexisError::EmptyInput);
        }
        Ok(Self {
            resolver,
            options,
            text,
            cache: OnceCell::new(),
            computations: Cell::new(0),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    pub fn state(&self) -> AnalyzerState {
        if self.cache.get().is_some() {
            AnalyzerState::Clean
        } else {
            AnalyzerState::Dirty
        }
    }

    /// How many times the analysis has been computed.
    pub fn computation_count(&self) -> usize {
        self.computations.get()
    }

    /// Replace the text. Empty text is rejected and leaves the analyzer as is.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), LexisError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(LexisError::EmptyInput);
        }
        self.text = text;
        self.invalidate();
        Ok(())
    }

    /// Append to the text.
    pub fn push_str(&mut self, more: &str) {
        self.text.push_str(more);
        self.invalidate();
    }

    pub fn set_exclude_functional(&mut self, exclude: bool) {
        self.options.exclude_functional = exclude;
        self.invalidate();
    }

    pub fn set_candidate_policy(&mut self, policy: CandidatePolicy) {
        self.options.candidate_policy = policy;
        self.invalidate();
    }

    pub fn set_expand_contractions(&mut self, expand: bool) {
        self.options.expand_contractions = expand;
        self.invalidate();
    }

    /// The analysis of the current text, recomputed first if dirty.
    pub fn result(&self) -> &AnalysisResult {
        self.cache.get_or_init(|| {
            self.computations.set(self.computations.get() + 1);
            compute(&self.resolver, &self.text, &self.options)
        })
    }

    pub fn words(&self) -> &[Word] {
        self.result().words()
    }

    pub fn part_of_speech_breakdown(&self) -> &BTreeMap<PartOfSpeech, Occurrences> {
        self.result().part_of_speech_breakdown()
    }

    pub fn level_distribution(&self) -> &BTreeMap<CefrLevel, f64> {
        self.result().level_distribution()
    }

    /// Consume the analyzer, returning the (possibly freshly computed) result.
    pub fn into_result(self) -> AnalysisResult {
        self.result();
        self.cache.into_inner().unwrap_or_default()
    }

    fn invalidate(&mut self) {
        self.cache.take();
    }
}
