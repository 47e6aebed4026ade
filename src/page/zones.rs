//! Column-based text helpers
//!
//! Row text holds one character per column, but characters above 0x7F take
//! more than one byte, so every slice here is done by characters.

/// Characters of `text` in the column range `[begin, end)`
pub(crate) fn columns(text: &str, begin: usize, end: usize) -> String {
    text.chars()
        .skip(begin)
        .take(end.saturating_sub(begin))
        .collect()
}

/// Column of a byte offset inside `text`
pub(crate) fn column_of(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}

pub(crate) fn strip(text: &str) -> &str {
    text.trim_matches(' ')
}

pub(crate) fn rstrip(text: &str) -> &str {
    text.trim_end_matches(' ')
}

pub(crate) fn width(text: &str) -> usize {
    text.chars().count()
}

/// First space-separated word of the stripped text
pub(crate) fn first_word(text: &str) -> &str {
    let text = strip(text);
    text.split(' ').next().unwrap_or(text)
}

/// Join two fragments with a space, skipping empty ones
pub(crate) fn join(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (_, true) => head.to_string(),
        (true, false) => tail.to_string(),
        (false, false) => format!("{head} {tail}"),
    }
}

/// Key, value and description zones of one row, unstripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Zones {
    pub key: String,
    pub value: String,
    pub description: String,
}

impl Zones {
    pub fn split(text: &str, value_column: usize, description_column: usize) -> Self {
        Self {
            key: columns(text, 0, value_column),
            value: columns(text, value_column, description_column),
            description: columns(text, description_column, usize::MAX),
        }
    }
}
