// Lexical store port
//
// The dictionary dataset is an external, read-only collaborator. Resolvers
// only see this trait; `MemoryStore` is the bundled adapter over a JSON
// dataset loaded once per process.

mod memory;

pub use memory::MemoryStore;

use lexis_core::{Language, Lemma, Word};

/// Error raised by a lexical store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The dataset could not be read.
    #[error("failed to read lexical dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not valid JSON or does not match the record layout.
    #[error("failed to parse lexical dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record was structurally valid but unusable.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// The backend cannot answer queries (closed handle, missing file).
    #[error("lexical store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only word and lemma lookups.
///
/// Implementations must be safe to share between threads; queries never
/// mutate the store. Term matching is case-insensitive.
pub trait LexicalStore: Send + Sync {
    /// All words whose term equals `term`, in `language`.
    fn find_exact(&self, term: &str, language: Language) -> Result<Vec<Word>, StoreError>;

    /// All words whose term starts with or ends with `term`, in `language`.
    fn find_by_prefix_or_suffix(
        &self,
        term: &str,
        language: Language,
    ) -> Result<Vec<Word>, StoreError>;

    /// The lemma record whose surface form equals `term`, if any.
    fn find_lemma(&self, term: &str) -> Result<Option<Lemma>, StoreError>;
}
