//! Speech to notation.
//!
//! The matcher slides a cursor over the spoken words one token at a time.
//! At each position it scans a window of grammar sections that ends at the
//! next mandatory section and appends the notation of the first section whose
//! phrase fits. Words that fit nothing are skipped, which is what lets
//! "rook two a one" come out as `Ra1`.

use blindfold_foundation::{Error, ErrorContext, Result};
use blindfold_grammar::{ForwardGrammar, GrammarSet};
use tracing::{debug, trace};

use crate::tokenizer::Tokenizer;

/// Translates spoken words into algebraic notation.
///
/// No legality or well-formedness check is made: words that do not follow the
/// grammar produce partial notation.
///
/// # Errors
///
/// Returns [`ErrorKind::NoPieceFound`](blindfold_foundation::ErrorKind::NoPieceFound)
/// if no word names a piece.
pub fn text_to_move(grammars: &GrammarSet, text: &str) -> Result<String> {
    let tokens = Tokenizer::words(text);

    let castle_index = tokens
        .iter()
        .position(|token| *token == grammars.castle_word());
    let Some(piece_index) = tokens
        .iter()
        .position(|token| grammars.is_piece_word(token))
    else {
        return Err(Error::no_piece_found().with_context(
            ErrorContext::new()
                .with_input(text)
                .with_grammar(grammars.regular.name()),
        ));
    };

    // A "castle" heard after a piece name is noise.
    let (grammar, anchor) = match castle_index {
        Some(index) if index <= piece_index => (&grammars.castle, index),
        _ => (&grammars.regular, piece_index),
    };
    debug!(grammar = grammar.name(), anchor, "anchored spoken move");

    let notation = ForwardMatcher::new(grammar, &tokens).run(anchor);
    debug!(input = text, notation = %notation, "spoken move translated");
    Ok(notation)
}

/// Cursor state for one forward translation.
struct ForwardMatcher<'g, 't> {
    grammar: &'g ForwardGrammar,
    tokens: &'t [&'t str],
    /// Last matched section.
    section: Option<usize>,
    /// Current token.
    cursor: usize,
    notation: String,
}

impl<'g, 't> ForwardMatcher<'g, 't> {
    fn new(grammar: &'g ForwardGrammar, tokens: &'t [&'t str]) -> Self {
        Self {
            grammar,
            tokens,
            section: None,
            cursor: 0,
            notation: String::new(),
        }
    }

    fn run(mut self, anchor: usize) -> String {
        self.cursor = anchor;
        loop {
            self.scan_window();
            self.cursor += 1;
            if self.cursor >= self.tokens.len() || self.exhausted() {
                break;
            }
        }
        self.notation
    }

    /// True once the last section of the grammar has matched.
    fn exhausted(&self) -> bool {
        self.section
            .is_some_and(|index| index + 1 >= self.grammar.len())
    }

    /// Tries every section up to the next mandatory one at the cursor.
    fn scan_window(&mut self) {
        let start = self.section.map_or(0, |index| index + 1);
        let end = self.grammar.next_mandatory(self.section);
        let mut skip = 0;

        for index in start..=end {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let Some(section) = self.grammar.section(index) else {
                break;
            };
            let Some(alternative) = section.match_words(self.tokens, self.cursor) else {
                // Children are only reachable through a matching parent.
                skip += section.children().len();
                continue;
            };

            let absorbed = self.absorb_children(index);
            trace!(
                section = section.identifier(),
                cursor = self.cursor,
                absorbed,
                notation = alternative.notation(),
                "section matched"
            );
            self.notation.push_str(alternative.notation());
            self.cursor += absorbed;
            self.section = Some(index);
            break;
        }
    }

    /// Tries each child of the section at `parent`, one token further per
    /// child already matched. Returns how many tokens were absorbed.
    fn absorb_children(&self, parent: usize) -> usize {
        let mut absorbed = 0;
        for child in self.grammar.search_children(parent) {
            let matched = self
                .grammar
                .section(child)
                .and_then(|section| section.match_words(self.tokens, self.cursor + absorbed));
            if matched.is_some() {
                absorbed += 1;
            }
        }
        absorbed
    }
}
