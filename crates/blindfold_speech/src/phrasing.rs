//! Phrasing for speech synthesis.
//!
//! Reverse fragments carry two in-band markers. Every square is prefixed with
//! [`TO_MARKER`], but only the last one may be spoken, so "knight b one to c
//! three" gets a single "to". [`PAUSE_MARKER`] precedes clauses a synthesizer
//! should pause before.

use blindfold_grammar::{PAUSE_MARKER, TO_MARKER};

/// Configuration for turning reverse fragments into a spoken phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhrasingConfig {
    /// Replaces each pause marker together with the space before it.
    pub pause_cue: String,
    /// Word spoken in place of the last "to" marker.
    pub spoken_to: String,
    /// Whether a lone "a" is written "A" so it is read as the column letter
    /// and not the article.
    pub capitalize_letter_a: bool,
}

impl Default for PhrasingConfig {
    fn default() -> Self {
        Self {
            pause_cue: ", ".to_string(),
            spoken_to: "to".to_string(),
            capitalize_letter_a: true,
        }
    }
}

impl PhrasingConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration without pause cues, for plain-text display.
    #[must_use]
    pub fn plain() -> Self {
        Self::default().with_pause_cue(" ")
    }

    /// Builder method to set the pause cue.
    #[must_use]
    pub fn with_pause_cue(mut self, cue: impl Into<String>) -> Self {
        self.pause_cue = cue.into();
        self
    }

    /// Builder method to set the spoken "to".
    #[must_use]
    pub fn with_spoken_to(mut self, word: impl Into<String>) -> Self {
        self.spoken_to = word.into();
        self
    }

    /// Builder method to enable/disable capitalizing the letter "a".
    #[must_use]
    pub fn with_capitalize_letter_a(mut self, capitalize: bool) -> Self {
        self.capitalize_letter_a = capitalize;
        self
    }

    /// Joins reverse fragments into the final phrase.
    #[must_use]
    pub fn finish(&self, fragments: &[&str]) -> String {
        let joined = fragments.join(" ");

        let mut parts: Vec<&str> = joined.split(TO_MARKER).collect();
        let text = match parts.pop() {
            Some(last) if !parts.is_empty() => {
                format!("{} {} {last}", parts.concat(), self.spoken_to)
            }
            _ => joined.clone(),
        };

        let text = text
            .replace(&format!(" {PAUSE_MARKER}"), &self.pause_cue)
            .replace(PAUSE_MARKER, &self.pause_cue);

        text.split_whitespace()
            .map(|word| {
                if self.capitalize_letter_a && word == "a" {
                    "A"
                } else {
                    word
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
