// Tokenizer: splits running text into word runs, punctuation and whitespace

use lexis_core::character::{CharType, get_char_type, is_apostrophe};
use lexis_core::enums::TokenType;
use lexis_core::token::Token;

/// Which characters may continue a word run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Letters and digits only; `don't` splits into `don` and `t`.
    #[default]
    Alphanumeric,
    /// Letters, digits and inner or leading apostrophes; `y'all'd've` is one run.
    Contraction,
}

/// Length of the word run at the start of `text`.
///
/// In `Contraction` mode an apostrophe is part of the run only when the
/// next character is a letter or digit, so a closing quote is never
/// swallowed.
fn word_length(text: &[char], mode: RunMode) -> usize {
    let textlen = text.len();
    let mut wlen = 0;

    while wlen < textlen {
        match get_char_type(text[wlen]) {
            CharType::Letter | CharType::Digit => wlen += 1,
            CharType::Punctuation
                if mode == RunMode::Contraction
                    && is_apostrophe(text[wlen])
                    && wlen + 1 < textlen
                    && matches!(
                        get_char_type(text[wlen + 1]),
                        CharType::Letter | CharType::Digit
                    ) =>
            {
                wlen += 1;
            }
            _ => return wlen,
        }
    }
    textlen
}

/// Find the next token starting at position `pos` in the text.
///
/// Returns `(TokenType, token_length)`, or `None` at end of text. The
/// caller advances `pos` by `token_length`.
pub fn next_token(text: &[char], pos: usize, mode: RunMode) -> Option<(TokenType, usize)> {
    let slice = text.get(pos..).filter(|s| !s.is_empty())?;

    let token = match get_char_type(slice[0]) {
        CharType::Letter | CharType::Digit => (TokenType::Word, word_length(slice, mode)),
        CharType::Whitespace => {
            let len = slice
                .iter()
                .take_while(|&&c| get_char_type(c) == CharType::Whitespace)
                .count();
            (TokenType::Whitespace, len)
        }
        CharType::Punctuation => {
            // Leading apostrophe of a clipped form ('cause, 'tis).
            if mode == RunMode::Contraction && is_apostrophe(slice[0]) {
                let wlen = word_length(slice, mode);
                if wlen > 1 {
                    return Some((TokenType::Word, wlen));
                }
            }
            // Ellipsis: three consecutive dots.
            if slice.len() >= 3 && slice[..3] == ['.', '.', '.'] {
                return Some((TokenType::Punctuation, 3));
            }
            (TokenType::Punctuation, 1)
        }
        CharType::Unknown => (TokenType::Unknown, 1),
    };
    Some(token)
}

/// Split `text` into positioned tokens of every type.
pub fn tokenize(text: &str, mode: RunMode) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut result = Vec::new();
    let mut pos = 0;
    while let Some((token_type, token_len)) = next_token(&chars, pos, mode) {
        if token_len == 0 {
            break;
        }
        let token_text: String = chars[pos..pos + token_len].iter().collect();
        result.push(Token::new(token_type, token_text, pos));
        pos += token_len;
    }
    result
}

/// Word runs of letters and digits, in text order.
pub fn word_runs(text: &str) -> Vec<String> {
    runs(text, RunMode::Alphanumeric)
}

/// Word runs of letters, digits and apostrophes, in text order.
pub fn contraction_runs(text: &str) -> Vec<String> {
    runs(text, RunMode::Contraction)
}

fn runs(text: &str, mode: RunMode) -> Vec<String> {
    tokenize(text, mode)
        .into_iter()
        .filter(Token::is_word)
        .map(|t| t.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumeric_runs_split_on_apostrophe() {
        assert_eq!(word_runs("I don't know."), vec!["I", "don", "t", "know"]);
    }

    #[test]
    fn contraction_runs_keep_inner_apostrophes() {
        assert_eq!(
            contraction_runs("Y'all'd've come, wouldn't you?"),
            vec!["Y'all'd've", "come", "wouldn't", "you"]
        );
    }

    #[test]
    fn contraction_runs_accept_typographic_apostrophe() {
        assert_eq!(contraction_runs("can\u{2019}t"), vec!["can\u{2019}t"]);
        assert_eq!(contraction_runs("can\u{02BC}t"), vec!["can\u{02BC}t"]);
    }

    #[test]
    fn modifier_apostrophe_splits_alphanumeric_runs() {
        assert_eq!(word_runs("don\u{02BC}t"), vec!["don", "t"]);
        assert_eq!(word_runs("don\u{2019}t"), vec!["don", "t"]);
    }

    #[test]
    fn leading_apostrophe_starts_clipped_form() {
        assert_eq!(contraction_runs("'cause it's 'tis"), vec!["'cause", "it's", "'tis"]);
    }

    #[test]
    fn quotes_are_not_swallowed() {
        assert_eq!(contraction_runs("'hello' she said"), vec!["'hello", "she", "said"]);
        assert_eq!(contraction_runs("' '"), Vec::<String>::new());
    }

    #[test]
    fn digits_form_runs() {
        assert_eq!(word_runs("I have 42 cats"), vec!["I", "have", "42", "cats"]);
    }

    #[test]
    fn tokenize_reports_types_and_positions() {
        let tokens = tokenize("Hi, fox...", RunMode::Alphanumeric);
        let summary: Vec<(TokenType, &str, usize)> = tokens
            .iter()
            .map(|t| (t.token_type, t.text.as_str(), t.pos))
            .collect();
        assert_eq!(
            summary,
            vec![
                (TokenType::Word, "Hi", 0),
                (TokenType::Punctuation, ",", 2),
                (TokenType::Whitespace, " ", 3),
                (TokenType::Word, "fox", 4),
                (TokenType::Punctuation, "...", 7),
            ]
        );
    }

    #[test]
    fn unknown_characters_are_single_tokens() {
        let tokens = tokenize("a\u{1F600}b", RunMode::Alphanumeric);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].token_type, TokenType::Unknown);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("", RunMode::Contraction).is_empty());
        assert!(word_runs("  ,;  ").is_empty());
    }
}
