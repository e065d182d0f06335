//! Board vocabulary.
//!
//! Squares are spoken as a column letter followed by a row word. "two" and
//! "to" sound alike, so both spellings name row 2.

use crate::section::Alternative;

/// Column letters, which are spelled the same in speech and notation.
pub const COLUMNS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

/// Spoken row names paired with their notation digit.
pub const ROWS: [(&str, &str); 9] = [
    ("one", "1"),
    ("two", "2"),
    ("to", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
];

/// Spoken row names, in [`ROWS`] order.
pub fn row_words() -> impl Iterator<Item = &'static str> {
    ROWS.iter().map(|(word, _)| *word)
}

/// Row digits, aligned with [`row_words`].
pub fn row_digits() -> impl Iterator<Item = &'static str> {
    ROWS.iter().map(|(_, digit)| *digit)
}

/// Every square as an alternative, column-major, with `prefix` prepended to
/// the spoken form.
///
/// Yields 72 alternatives for 64 distinct squares.
pub fn squares(prefix: &'static str) -> impl Iterator<Item = Alternative> {
    COLUMNS.into_iter().flat_map(move |column| {
        ROWS.into_iter().map(move |(word, digit)| {
            Alternative::new(format!("{prefix}{column} {word}"), format!("{column}{digit}"))
        })
    })
}

/// The canonical spoken form of a square given in notation (`"e4"` ->
/// `"e four"`). Returns `None` for anything that is not a square.
#[must_use]
pub fn spoken_square(square: &str) -> Option<String> {
    let mut chars = square.chars();
    let (column, row, rest) = (chars.next()?, chars.next()?, chars.next());
    if rest.is_some() {
        return None;
    }
    let column = COLUMNS.iter().find(|c| c.starts_with(column))?;
    let word = ROWS
        .iter()
        .find(|(_, digit)| digit.starts_with(row))
        .map(|(word, _)| *word)?;
    Some(format!("{column} {word}"))
}
