// In-memory lexical store backed by a JSON dataset

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use hashbrown::HashMap;
use serde::Deserialize;
use tracing::info;

use lexis_core::{Language, Lemma, Word};

use crate::store::{LexicalStore, StoreError};

/// On-disk layout of a lexical dataset.
#[derive(Debug, Default, Deserialize)]
struct Dataset {
    #[serde(default)]
    words: Vec<Word>,
    #[serde(default)]
    lemmas: Vec<Lemma>,
}

type IndexKey = (Language, String);

/// Read-only dictionary held in memory.
///
/// Words are indexed by lower-cased term three ways: an exact hash index,
/// and two ordered indexes (term and reversed term) that answer prefix and
/// suffix queries with a range scan. Query results come back in dataset
/// order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    words: Vec<Word>,
    exact: HashMap<IndexKey, Vec<usize>>,
    prefixes: BTreeMap<IndexKey, Vec<usize>>,
    suffixes: BTreeMap<IndexKey, Vec<usize>>,
    lemmas: HashMap<String, Lemma>,
}

fn reversed(s: &str) -> String {
    s.chars().rev().collect()
}

impl MemoryStore {
    /// Build a store from word and lemma records.
    ///
    /// Records with an empty term or surface form are rejected. When two
    /// lemma records share a surface form the first one wins.
    pub fn new(words: Vec<Word>, lemmas: Vec<Lemma>) -> Result<Self, StoreError> {
        let mut store = Self::default();

        for (idx, word) in words.iter().enumerate() {
            let term = word.term().trim().to_lowercase();
            if term.is_empty() {
                return Err(StoreError::InvalidRecord(format!("word #{idx} has an empty term")));
            }
            let lang = word.language();
            store.exact.entry((lang, term.clone())).or_default().push(idx);
            store.suffixes.entry((lang, reversed(&term))).or_default().push(idx);
            store.prefixes.entry((lang, term)).or_default().push(idx);
        }
        store.words = words;

        for (idx, lemma) in lemmas.into_iter().enumerate() {
            let surface = lemma.surface_form().trim().to_lowercase();
            if surface.is_empty() {
                return Err(StoreError::InvalidRecord(format!(
                    "lemma #{idx} has an empty surface form"
                )));
            }
            store.lemmas.entry(surface).or_insert(lemma);
        }

        info!(
            target: "lexis::store",
            words = store.words.len(),
            lemmas = store.lemmas.len(),
            "lexical dataset loaded"
        );
        Ok(store)
    }

    /// Load a dataset from JSON bytes.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, StoreError> {
        let dataset: Dataset = serde_json::from_slice(data)?;
        Self::new(dataset.words, dataset.lemmas)
    }

    /// Load a dataset from a JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, StoreError> {
        let dataset: Dataset = serde_json::from_reader(reader)?;
        Self::new(dataset.words, dataset.lemmas)
    }

    /// Load a dataset from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data = std::fs::read(path)?;
        Self::from_json_slice(&data)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn lemma_count(&self) -> usize {
        self.lemmas.len()
    }

    /// Iterate over every word in dataset order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    fn collect(&self, mut indices: Vec<usize>) -> Vec<Word> {
        indices.sort_unstable();
        indices.dedup();
        indices.into_iter().map(|i| self.words[i].clone()).collect()
    }

    fn scan(index: &BTreeMap<IndexKey, Vec<usize>>, lang: Language, prefix: &str) -> Vec<usize> {
        index
            .range((lang, prefix.to_string())..)
            .take_while(|((l, key), _)| *l == lang && key.starts_with(prefix))
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect()
    }
}

impl LexicalStore for MemoryStore {
    fn find_exact(&self, term: &str, language: Language) -> Result<Vec<Word>, StoreError> {
        let key = (language, term.to_lowercase());
        Ok(self
            .exact
            .get(&key)
            .map(|ids| self.collect(ids.clone()))
            .unwrap_or_default())
    }

    fn find_by_prefix_or_suffix(
        &self,
        term: &str,
        language: Language,
    ) -> Result<Vec<Word>, StoreError> {
        let term = term.to_lowercase();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let mut ids = Self::scan(&self.prefixes, language, &term);
        ids.extend(Self::scan(&self.suffixes, language, &reversed(&term)));
        Ok(self.collect(ids))
    }

    fn find_lemma(&self, term: &str) -> Result<Option<Lemma>, StoreError> {
        Ok(self.lemmas.get(&term.to_lowercase()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_core::{CefrLevel, PartOfSpeech};

    fn store() -> MemoryStore {
        MemoryStore::new(
            vec![
                Word::new("walk", PartOfSpeech::Verb, CefrLevel::A1),
                Word::new("walk", PartOfSpeech::CommonNoun, CefrLevel::A2),
                Word::new("sidewalk", PartOfSpeech::CommonNoun, CefrLevel::B1),
                Word::new("walker", PartOfSpeech::CommonNoun, CefrLevel::B2),
                Word::new("London", PartOfSpeech::ProperNoun, CefrLevel::A1),
                Word::new("walk", PartOfSpeech::Verb, CefrLevel::A1).in_language(Language::Swedish),
            ],
            vec![Lemma::new("went", "go"), Lemma::new("Went", "wend")],
        )
        .unwrap()
    }

    fn terms(words: &[Word]) -> Vec<(&str, PartOfSpeech)> {
        words.iter().map(|w| (w.term(), w.part_of_speech())).collect()
    }

    #[test]
    fn exact_lookup_returns_all_classes_in_dataset_order() {
        let found = store().find_exact("walk", Language::English).unwrap();
        assert_eq!(
            terms(&found),
            vec![("walk", PartOfSpeech::Verb), ("walk", PartOfSpeech::CommonNoun)]
        );
    }

    #[test]
    fn exact_lookup_is_case_insensitive() {
        let s = store();
        assert_eq!(s.find_exact("london", Language::English).unwrap().len(), 1);
        assert_eq!(s.find_exact("WALK", Language::English).unwrap().len(), 2);
    }

    #[test]
    fn lookups_are_scoped_to_language() {
        let found = store().find_exact("walk", Language::Swedish).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].language(), Language::Swedish);
        assert!(store().find_exact("london", Language::German).unwrap().is_empty());
    }

    #[test]
    fn prefix_or_suffix_search() {
        let found = store().find_by_prefix_or_suffix("walk", Language::English).unwrap();
        assert_eq!(
            terms(&found),
            vec![
                ("walk", PartOfSpeech::Verb),
                ("walk", PartOfSpeech::CommonNoun),
                ("sidewalk", PartOfSpeech::CommonNoun),
                ("walker", PartOfSpeech::CommonNoun),
            ]
        );
    }

    #[test]
    fn suffix_only_match() {
        let found = store().find_by_prefix_or_suffix("ewalk", Language::English).unwrap();
        assert_eq!(terms(&found), vec![("sidewalk", PartOfSpeech::CommonNoun)]);
    }

    #[test]
    fn empty_broadened_query_matches_nothing() {
        assert!(store().find_by_prefix_or_suffix("", Language::English).unwrap().is_empty());
    }

    #[test]
    fn first_lemma_wins() {
        let lemma = store().find_lemma("WENT").unwrap().unwrap();
        assert_eq!(lemma.base_form(), "go");
        assert_eq!(store().lemma_count(), 1);
        assert!(store().find_lemma("gone").unwrap().is_none());
    }

    #[test]
    fn empty_term_is_rejected() {
        let err = MemoryStore::new(
            vec![Word::new("  ", PartOfSpeech::Verb, CefrLevel::A1)],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord(_)));
    }

    #[test]
    fn loads_json_dataset() {
        let json = br#"{
            "words": [
                {"term": "fox", "part_of_speech": "common_noun", "cefr_level": "B1", "category": "animals"}
            ],
            "lemmas": [{"surface_form": "foxes", "base_form": "fox"}]
        }"#;
        let s = MemoryStore::from_json_slice(json).unwrap();
        assert_eq!(s.word_count(), 1);
        let fox = &s.find_exact("fox", Language::English).unwrap()[0];
        assert_eq!(fox.category(), Some("animals"));
        assert_eq!(s.find_lemma("foxes").unwrap().unwrap().base_form(), "fox");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = MemoryStore::from_json_slice(b"{\"words\": [").unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = MemoryStore::from_path("/nonexistent/lexicon.json").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
