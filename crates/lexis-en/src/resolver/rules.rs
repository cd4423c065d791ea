// Suffix fallback rules tried when a token has no exact dictionary match

/// One suffix rewrite: replace a trailing `suffix` with `replacement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    /// Short name used in diagnostics.
    pub name: &'static str,
    pub suffix: &'static str,
    pub replacement: &'static str,
}

impl SuffixRule {
    const fn strip(name: &'static str, suffix: &'static str) -> Self {
        Self {
            name,
            suffix,
            replacement: "",
        }
    }

    const fn replace(name: &'static str, suffix: &'static str, replacement: &'static str) -> Self {
        Self {
            name,
            suffix,
            replacement,
        }
    }

    /// Rewrite `token`, or `None` when it does not end with the suffix or
    /// nothing would be left of the stem.
    pub fn apply(&self, token: &str) -> Option<String> {
        let stem = token.strip_suffix(self.suffix)?;
        if stem.is_empty() {
            return None;
        }
        Some(format!("{stem}{}", self.replacement))
    }
}

/// The fallback cascade, in the order it is tried. Every rule shortens the
/// token, so recursion through the cascade always terminates.
pub const FALLBACK_RULES: [SuffixRule; 8] = [
    SuffixRule::strip("strip-s", "s"),
    SuffixRule::strip("strip-ing", "ing"),
    SuffixRule::strip("strip-d", "d"),
    SuffixRule::strip("strip-ed", "ed"),
    SuffixRule::strip("strip-ment", "ment"),
    SuffixRule::replace("iful-to-y", "iful", "y"),
    SuffixRule::replace("ssion-to-t", "ssion", "t"),
    SuffixRule::replace("ility-to-e", "ility", "e"),
];
