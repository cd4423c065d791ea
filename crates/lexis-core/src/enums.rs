// Shared tag sets: PartOfSpeech, CefrLevel, Language, TokenType

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

// ---------------------------------------------------------------------------
// Part of speech
// ---------------------------------------------------------------------------

/// Word class attached to every dictionary entry.
///
/// The first block of variants is the closed (functional) set; see
/// [`PartOfSpeech::is_functional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    ClauseOpener,
    Conjunction,
    Determiner,
    DeterminerPronoun,
    ExistentialParticle,
    Genitive,
    InfinitiveMarker,
    InterjectionOrDiscourseMarker,
    NegativeMarker,
    CardinalNumber,
    Ordinal,
    Preposition,
    Pronoun,
    ModalVerb,
    CommonNoun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    /// Placeholder for tokens no lookup strategy could classify.
    Unclassified,
}

impl PartOfSpeech {
    /// Every variant, in declaration order.
    pub const ALL: [PartOfSpeech; 20] = [
        Self::ClauseOpener,
        Self::Conjunction,
        Self::Determiner,
        Self::DeterminerPronoun,
        Self::ExistentialParticle,
        Self::Genitive,
        Self::InfinitiveMarker,
        Self::InterjectionOrDiscourseMarker,
        Self::NegativeMarker,
        Self::CardinalNumber,
        Self::Ordinal,
        Self::Preposition,
        Self::Pronoun,
        Self::ModalVerb,
        Self::CommonNoun,
        Self::ProperNoun,
        Self::Verb,
        Self::Adjective,
        Self::Adverb,
        Self::Unclassified,
    ];

    /// Whether this is a closed-class (grammatical) word class.
    ///
    /// Functional words are resolved like any other token but are left out
    /// of content-word statistics.
    pub fn is_functional(self) -> bool {
        matches!(
            self,
            Self::ClauseOpener
                | Self::Conjunction
                | Self::Determiner
                | Self::DeterminerPronoun
                | Self::ExistentialParticle
                | Self::Genitive
                | Self::InfinitiveMarker
                | Self::InterjectionOrDiscourseMarker
                | Self::NegativeMarker
                | Self::CardinalNumber
                | Self::Ordinal
                | Self::Preposition
                | Self::Pronoun
                | Self::ModalVerb
        )
    }

    /// Stable snake_case identifier, as used in datasets.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClauseOpener => "clause_opener",
            Self::Conjunction => "conjunction",
            Self::Determiner => "determiner",
            Self::DeterminerPronoun => "determiner_pronoun",
            Self::ExistentialParticle => "existential_particle",
            Self::Genitive => "genitive",
            Self::InfinitiveMarker => "infinitive_marker",
            Self::InterjectionOrDiscourseMarker => "interjection_or_discourse_marker",
            Self::NegativeMarker => "negative_marker",
            Self::CardinalNumber => "cardinal_number",
            Self::Ordinal => "ordinal",
            Self::Preposition => "preposition",
            Self::Pronoun => "pronoun",
            Self::ModalVerb => "modal_verb",
            Self::CommonNoun => "common_noun",
            Self::ProperNoun => "proper_noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    /// Human-readable label ("common noun").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().replace('_', " "))
    }
}

impl FromStr for PartOfSpeech {
    type Err = CoreError;

    /// Accepts the snake_case identifier or the spaced/hyphenated label,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        Self::ALL
            .into_iter()
            .find(|pos| pos.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownPartOfSpeech(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// CEFR level
// ---------------------------------------------------------------------------

/// Common European Framework of Reference difficulty level.
///
/// Ordering follows difficulty: `A1 < A2 < ... < C2 < Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    /// Level of a word that could not be classified.
    Unknown,
}

impl CefrLevel {
    pub const ALL: [CefrLevel; 7] = [
        Self::A1,
        Self::A2,
        Self::B1,
        Self::B2,
        Self::C1,
        Self::C2,
        Self::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CefrLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownLevel(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Language tag scoping dictionary lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "sv")]
    Swedish,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Self::English,
        Self::Swedish,
        Self::German,
        Self::French,
        Self::Spanish,
    ];

    /// BCP 47 primary language subtag.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Swedish => "sv",
            Self::German => "de",
            Self::French => "fr",
            Self::Spanish => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    /// Parses a BCP 47 tag; region subtags (`en-GB`) are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.trim().split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(primary))
            .ok_or_else(|| CoreError::UnknownLanguage(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Token type
// ---------------------------------------------------------------------------

/// Token types produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Word-like run of letters and digits.
    Word,
    /// Punctuation token.
    Punctuation,
    /// Whitespace token.
    Whitespace,
    /// Anything else (symbols, emoji).
    Unknown,
}
