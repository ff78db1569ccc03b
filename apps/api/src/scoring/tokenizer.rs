//! Tokenizer: turns free text into lowercase word tokens for set-membership comparison.

/// Word characters are ASCII letters, digits and underscore. Everything else
/// that is not a separator is dropped before splitting.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Token separators: Unicode whitespace plus the byte-order mark, minus
/// NEL (U+0085), which is stripped like any other symbol.
fn is_separator(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Strips non-word characters, lowercases, splits on separator runs and
/// drops empty pieces. Never fails; empty or all-punctuation input yields an
/// empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|&c| is_word_char(c) || is_separator(c))
        .collect::<String>()
        .to_ascii_lowercase();

    cleaned
        .split(is_separator)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
