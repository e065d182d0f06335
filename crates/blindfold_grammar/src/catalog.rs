//! The grammar catalog.
//!
//! Builds the four grammars once. Speech words, notation fragments and the
//! order of both are fixed here; the matchers only walk what this module lays
//! out.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use crate::board::{self, COLUMNS};
use crate::grammar::{ForwardGrammar, ReverseGrammar};
use crate::section::Section;

/// Marks where a spoken "to" may go in front of a square.
pub const TO_MARKER: &str = "[TO ]";

/// Marks where a speech synthesizer should pause.
pub const PAUSE_MARKER: &str = "[PAUSE]";

const PIECE_WORDS: [&str; 6] = ["pawn", "bishop", "knight", "rook", "queen", "king"];
const PIECE_LETTERS: [&str; 6] = ["", "B", "N", "R", "Q", "K"];
const PROMOTION_WORDS: [&str; 4] = ["bishop", "rook", "knight", "queen"];
const PROMOTION_LETTERS: [&str; 4] = ["B", "R", "N", "Q"];
const CASTLE_WORD: &str = "castle";

/// All four grammars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrammarSet {
    /// Speech to notation for ordinary moves.
    pub regular: ForwardGrammar,
    /// Speech to notation for castling.
    pub castle: ForwardGrammar,
    /// Notation to speech for ordinary moves.
    pub regular_spoken: ReverseGrammar,
    /// Notation to speech for castling.
    pub castle_spoken: ReverseGrammar,
}

impl GrammarSet {
    /// Builds all four grammars.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regular: regular_grammar(),
            castle: castle_grammar(),
            regular_spoken: regular_spoken_grammar(),
            castle_spoken: castle_spoken_grammar(),
        }
    }

    /// A process-wide instance, built on first use.
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<GrammarSet> = OnceLock::new();
        STANDARD.get_or_init(Self::new)
    }

    /// The word that anchors the castle grammar.
    #[must_use]
    pub fn castle_word(&self) -> &str {
        self.castle
            .section(0)
            .and_then(|section| section.text_values().next())
            .unwrap_or(CASTLE_WORD)
    }

    /// Returns true if `word` names a piece in the regular grammar.
    #[must_use]
    pub fn is_piece_word(&self, word: &str) -> bool {
        self.regular
            .section(0)
            .is_some_and(|pieces| pieces.text_values().any(|piece| piece == word))
    }

    /// Every word the forward grammars accept, sorted and de-duplicated.
    #[must_use]
    pub fn vocabulary(&self) -> Vec<&str> {
        let words: BTreeSet<&str> = self
            .regular
            .sections()
            .iter()
            .chain(self.castle.sections())
            .flat_map(|section| section.alternatives())
            .flat_map(|alt| alt.words())
            .collect();
        words.into_iter().collect()
    }
}

impl Default for GrammarSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GrammarSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            self.regular, self.castle, self.regular_spoken, self.castle_spoken
        )
    }
}

fn check() -> Section {
    Section::new("check").with_alternative("check", "+")
}

fn checkmate() -> Section {
    Section::new("checkmate").with_alternative("checkmate", "#")
}

fn spoken_check() -> Section {
    Section::new("check").with_alternative(format!("{PAUSE_MARKER}check"), "+")
}

fn spoken_checkmate() -> Section {
    Section::new("checkmate").with_alternative(format!("{PAUSE_MARKER}checkmate"), "#")
}

fn position(identifier: &'static str, prefix: &'static str) -> Section {
    board::squares(prefix).fold(Section::new(identifier), |section, alt| {
        section.with_alternative(alt.text(), alt.notation())
    })
}

fn regular_grammar() -> ForwardGrammar {
    ForwardGrammar::new(
        "regular",
        vec![
            Section::new("pieces")
                .required()
                .with_values(&PIECE_WORDS, &PIECE_LETTERS),
            position("position_1", "").required(),
            position("position_2", ""),
            // "promote two" is how recognizers often hear "promote to"
            Section::new("promotion")
                .with_children([1])
                .with_values(&["promote to", "promote two"], &["=", "="]),
            Section::new("promotion_piece").with_values(&PROMOTION_WORDS, &PROMOTION_LETTERS),
            check(),
            checkmate(),
        ],
    )
}

fn castle_grammar() -> ForwardGrammar {
    ForwardGrammar::new(
        "castle",
        vec![
            Section::new("castle")
                .required()
                .with_children([1])
                .with_alternative(CASTLE_WORD, ""),
            Section::new("castle_side").with_values(&["king side", "queen side"], &["O-O", "O-O-O"]),
            check(),
            checkmate(),
        ],
    )
}

fn regular_spoken_grammar() -> ReverseGrammar {
    // Lettered pieces first: the pawn's empty notation is a prefix of anything.
    let pieces = Section::new("pieces").with_values(
        &["bishop", "knight", "rook", "queen", "king", "pawn"],
        &["B", "N", "R", "Q", "K", ""],
    );
    // Column before row, or "R1b2" would read the "b" as a lone column.
    let column = Section::new("position_1_column").with_values(&COLUMNS, &COLUMNS);
    let row_words: Vec<_> = board::row_words().collect();
    let row_digits: Vec<_> = board::row_digits().collect();
    let row = Section::new("position_1_row").with_values(&row_words[..], &row_digits[..]);

    ReverseGrammar::new(
        "regular-spoken",
        vec![
            pieces,
            Section::new("capture_1").with_alternative("", "x"),
            position("position_1", TO_MARKER).with_children([1, 2]),
            column,
            row,
            Section::new("capture_2").with_alternative("", "x"),
            position("position_2", TO_MARKER),
            Section::new("promotion").with_alternative(format!("{PAUSE_MARKER}promote to"), "="),
            Section::new("promotion_piece").with_values(&PROMOTION_WORDS, &PROMOTION_LETTERS),
            spoken_check(),
            spoken_checkmate(),
        ],
    )
}

fn castle_spoken_grammar() -> ReverseGrammar {
    ReverseGrammar::new(
        "castle-spoken",
        vec![
            // O-O is a prefix of O-O-O and must come second
            Section::new("castle_side").with_values(
                &["castle queen side", "castle king side"],
                &["O-O-O", "O-O"],
            ),
            spoken_check(),
            spoken_checkmate(),
        ],
    )
}
