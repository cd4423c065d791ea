//! Shared vocabulary for the Lexis offline lexical engine.
//!
//! - [`enums`] -- closed tag sets: part of speech, CEFR level, language, token type
//! - [`word`] -- the [`Word`] and [`Lemma`] records produced by lexical lookups
//! - [`character`] -- character classification used by the tokenizers
//! - [`token`] -- positioned text tokens

pub mod character;
pub mod enums;
pub mod token;
pub mod word;

pub use enums::{CefrLevel, Language, PartOfSpeech, TokenType};
pub use token::Token;
pub use word::{Lemma, Word};

/// Error returned when parsing one of the shared tag sets from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
    #[error("unknown part of speech: {0}")]
    UnknownPartOfSpeech(String),
    #[error("unknown CEFR level: {0}")]
    UnknownLevel(String),
}
