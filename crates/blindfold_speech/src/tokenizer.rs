//! Input tokenization.
//!
//! The matchers expect lowercase words separated by whitespace, which is what
//! a recognizer restricted to the catalog vocabulary produces. Free-form
//! transcripts can be brought into that shape with [`Tokenizer::normalize`].

/// Which way an input line should be translated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Spoken words, to be turned into notation.
    Speech,
    /// A notation token, to be turned into words.
    Notation,
}

impl Direction {
    /// Guesses the direction of an input line.
    ///
    /// A single token containing a digit or an upper-case letter is notation
    /// (`e4`, `Bf7+`, `O-O`); everything else is speech.
    #[must_use]
    pub fn detect(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(token), None)
                if token
                    .chars()
                    .any(|c| c.is_ascii_digit() || c.is_ascii_uppercase()) =>
            {
                Self::Notation
            }
            _ => Self::Speech,
        }
    }
}

/// Splits and cleans spoken input.
pub struct Tokenizer;

impl Tokenizer {
    /// Splits text on whitespace.
    #[must_use]
    pub fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    /// Cleans a raw transcript.
    ///
    /// - Converts words to lowercase
    /// - Strips punctuation
    /// - Splits hyphenated words ("king-side" -> "king side")
    /// - Collapses whitespace
    #[must_use]
    pub fn normalize(text: &str) -> String {
        let cleaned: String = text
            .chars()
            .filter(|c| !matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '\'' | '"'))
            .map(|c| if c == '-' { ' ' } else { c })
            .collect::<String>()
            .to_lowercase();
        Self::words(&cleaned).join(" ")
    }
}
