// Character classification for the English tokenizers

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Apostrophes are punctuation here; tokenizers that keep contractions
/// together check [`is_apostrophe`] first.
pub fn get_char_type(c: char) -> CharType {
    // U+02BC is alphabetic to `char`, but it is an apostrophe in text.
    if is_apostrophe(c) {
        return CharType::Punctuation;
    }
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

/// Check whether a character is punctuation in running English text.
fn is_punctuation_char(c: char) -> bool {
    c.is_ascii_punctuation()
        || is_apostrophe(c)
        || matches!(
            c,
            '\u{00AB}' // « LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
                | '\u{00BB}' // » RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
                | '\u{00AD}' // SOFT HYPHEN
                | '\u{2010}' // HYPHEN
                | '\u{2011}' // NON-BREAKING HYPHEN
                | '\u{2013}' // EN DASH
                | '\u{2014}' // EM DASH
                | '\u{2018}' // LEFT SINGLE QUOTATION MARK
                | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
                | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
                | '\u{2026}' // HORIZONTAL ELLIPSIS
        )
}

/// Check whether a character is an apostrophe, including the typographic
/// right single quotation mark produced by mobile keyboards.
pub fn is_apostrophe(c: char) -> bool {
    matches!(
        c,
        '\'' | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
            | '\u{02BC}' // MODIFIER LETTER APOSTROPHE
    )
}

/// Replace typographic apostrophes with ASCII `'`.
pub fn normalize_apostrophes(text: &str) -> String {
    text.chars()
        .map(|c| if is_apostrophe(c) { '\'' } else { c })
        .collect()
}

/// Upper-case the first character of `s`, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
