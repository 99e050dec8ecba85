use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Runs of whitespace, underscores and hyphens collapse to one space
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[\s_-]+").unwrap();
    // Runs of anything that is not an ASCII word character or the separator
    static ref NON_WORD_RUN: Regex = Regex::new(r"[^A-Za-z0-9_ ]+").unwrap();
}

/// Split text into cleaned, non-empty words in left-to-right order.
///
/// Separators are normalized first, then every run of punctuation is
/// turned into a separator as well, so `"hello@world!"`, `"hello@-world"`
/// and `"hello--world"` all give `["hello", "world"]`.
/// Tokens keep their original case and digits.
pub fn tokenize(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let normalized = SEPARATOR_RUN.replace_all(trimmed, " ");
    let cleaned = NON_WORD_RUN.replace_all(&normalized, " ");

    cleaned
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
