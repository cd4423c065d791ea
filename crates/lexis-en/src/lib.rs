//! Offline English lexical resolution.
//!
//! Given raw tokens from user-written text, finds their best dictionary
//! entries (term, part of speech, CEFR level) in a read-only lexical store,
//! falling back to a fixed cascade of suffix rules, and aggregates whole
//! texts into part-of-speech and level statistics.
//!
//! # Architecture
//!
//! - [`tokenizer`] -- word runs, punctuation and whitespace tokens
//! - [`contraction`] -- literal contraction tables and [`ContractionExpander`]
//! - [`store`] -- the [`LexicalStore`] port and the bundled [`MemoryStore`]
//! - [`resolver`] -- [`WordResolver`]: overrides, exact lookup, fallback cascade
//! - [`lemma`] -- [`LemmaResolver`]: multi-word base forms
//! - [`analyzer`] -- [`TextAnalyzer`] and [`AnalysisResult`]
//! - `handle` -- [`LexisHandle`], one object owning the store and options

pub mod analyzer;
pub mod contraction;
#[cfg(feature = "handle")]
pub mod handle;
pub mod lemma;
pub mod resolver;
pub mod store;
pub mod tokenizer;

pub use analyzer::{
    AnalysisResult, AnalyzerOptions, AnalyzerState, CandidatePolicy, TextAnalyzer, analyze_text,
};
pub use contraction::ContractionExpander;
#[cfg(feature = "handle")]
pub use handle::LexisHandle;
pub use lemma::LemmaResolver;
pub use resolver::{ResolverOptions, WordResolver};
pub use store::{LexicalStore, MemoryStore, StoreError};

/// Error type for the public entry points of this crate.
#[derive(Debug, thiserror::Error)]
pub enum LexisError {
    /// Empty or whitespace-only text was passed where text is required.
    #[error("input text is empty")]
    EmptyInput,

    /// The lexical dataset could not be loaded.
    #[error("lexical store error: {0}")]
    Store(#[from] StoreError),

    /// Unsupported language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}
