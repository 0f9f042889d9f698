//! Sentence tokenization
//!
//! Lower-case, then split on the single space character. Nothing is
//! trimmed: consecutive, leading or trailing spaces produce empty tokens,
//! and the empty sentence is one empty token. Filters depend on this exact
//! behavior, since `add` and `check` must agree on every token.

/// Token separator
pub const SEPARATOR: char = ' ';

/// Capital I with dot above, the one character whose full lowercase
/// mapping is longer than its simple one
const DOTTED_CAPITAL_I: char = '\u{130}';

/// Lower-case a sentence character by character
///
/// Every character maps to exactly one character: `İ` becomes a plain `i`
/// rather than `i` plus a combining dot. No context-sensitive mappings
/// (such as a word-final sigma) are applied.
pub fn normalize(sentence: &str) -> String {
    let mut out = String::with_capacity(sentence.len());
    for c in sentence.chars() {
        match c {
            DOTTED_CAPITAL_I => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Split an already normalized sentence into tokens
pub fn split_tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(SEPARATOR)
}

/// Tokenize a sentence into owned tokens
pub fn tokenize(sentence: &str) -> Vec<String> {
    split_tokens(&normalize(sentence))
        .map(str::to_owned)
        .collect()
}
