// Dictionary records: Word and Lemma

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::enums::{CefrLevel, Language, PartOfSpeech};

/// A resolved dictionary entry.
///
/// Words are immutable once built. Two words are equal when they share
/// `term` and `part_of_speech`; level, language and category do not take
/// part in equality or hashing, so aggregation tables count one entry per
/// `(term, part_of_speech)` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    term: String,
    part_of_speech: PartOfSpeech,
    cefr_level: CefrLevel,
    #[serde(default)]
    language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl Word {
    /// Create an English word without a category.
    pub fn new(term: impl Into<String>, part_of_speech: PartOfSpeech, cefr_level: CefrLevel) -> Self {
        Self {
            term: term.into(),
            part_of_speech,
            cefr_level,
            language: Language::English,
            category: None,
        }
    }

    /// Placeholder for a token that no lookup could classify.
    pub fn unclassified(term: impl Into<String>, language: Language) -> Self {
        Self::new(term, PartOfSpeech::Unclassified, CefrLevel::Unknown).in_language(language)
    }

    /// Return a copy tagged with `language`.
    pub fn in_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Return a copy carrying a thematic category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.part_of_speech
    }

    pub fn cefr_level(&self) -> CefrLevel {
        self.cefr_level
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether the word belongs to a closed (functional) class.
    pub fn is_functional(&self) -> bool {
        self.part_of_speech.is_functional()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term && self.part_of_speech == other.part_of_speech
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.term.hash(state);
        self.part_of_speech.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.term, self.part_of_speech, self.cefr_level)
    }
}

/// A surface form and the base form it reduces to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lemma {
    surface_form: String,
    base_form: String,
}

impl Lemma {
    pub fn new(surface_form: impl Into<String>, base_form: impl Into<String>) -> Self {
        Self {
            surface_form: surface_form.into(),
            base_form: base_form.into(),
        }
    }

    pub fn surface_form(&self) -> &str {
        &self.surface_form
    }

    pub fn base_form(&self) -> &str {
        &self.base_form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_level_and_category() {
        let a = Word::new("walk", PartOfSpeech::Verb, CefrLevel::A1);
        let b = Word::new("walk", PartOfSpeech::Verb, CefrLevel::B2).with_category("movement");
        assert_eq!(a, b);
    }

    #[test]
    fn equality_distinguishes_part_of_speech() {
        let verb = Word::new("walk", PartOfSpeech::Verb, CefrLevel::A1);
        let noun = Word::new("walk", PartOfSpeech::CommonNoun, CefrLevel::A1);
        assert_ne!(verb, noun);
    }

    #[test]
    fn hash_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(Word::new("walk", PartOfSpeech::Verb, CefrLevel::A1));
        set.insert(Word::new("walk", PartOfSpeech::Verb, CefrLevel::A2));
        set.insert(Word::new("walk", PartOfSpeech::CommonNoun, CefrLevel::A1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn unclassified_placeholder() {
        let w = Word::unclassified("zyx", Language::English);
        assert_eq!(w.term(), "zyx");
        assert_eq!(w.part_of_speech(), PartOfSpeech::Unclassified);
        assert_eq!(w.cefr_level(), CefrLevel::Unknown);
        assert!(!w.is_functional());
    }

    #[test]
    fn deserialize_defaults_language_and_category() {
        let w: Word = serde_json::from_str(
            r#"{"term":"fox","part_of_speech":"common_noun","cefr_level":"B1"}"#,
        )
        .unwrap();
        assert_eq!(w.language(), Language::English);
        assert_eq!(w.category(), None);
        assert_eq!(w.cefr_level(), CefrLevel::B1);
    }

    #[test]
    fn display_shows_term_class_and_level() {
        let w = Word::new("be", PartOfSpeech::Verb, CefrLevel::A1);
        assert_eq!(w.to_string(), "be (verb, A1)");
    }

    #[test]
    fn lemma_accessors() {
        let l = Lemma::new("went", "go");
        assert_eq!(l.surface_form(), "went");
        assert_eq!(l.base_form(), "go");
    }
}
