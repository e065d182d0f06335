//! Notation to speech.
//!
//! The generator walks the notation left to right. Each pass tries the
//! remaining sections in catalog order and takes the first one with a notation
//! value that is a literal prefix of what is left. Sections are never revisited
//! once passed, and a matched section may suppress later ones that would
//! re-read the same characters.

use std::collections::BTreeSet;

use blindfold_foundation::{Error, ErrorContext, Result};
use blindfold_grammar::{Alternative, GrammarSet, ReverseGrammar};
use tracing::{debug, trace};

use crate::phrasing::PhrasingConfig;

/// Translates an algebraic-notation move into a phrase for speech synthesis,
/// using the default phrasing.
///
/// Captures are not spoken: `Rxd1` becomes "rook to d one".
///
/// # Errors
///
/// Returns [`ErrorKind::UnrecognizedNotation`](blindfold_foundation::ErrorKind::UnrecognizedNotation)
/// if some part of the move matches no remaining section.
pub fn move_to_text(grammars: &GrammarSet, notation: &str) -> Result<String> {
    let fragments = generate(grammars, notation)?;
    Ok(PhrasingConfig::default().finish(&fragments))
}

/// Chooses the grammar for `notation`.
#[must_use]
pub fn grammar_for<'g>(grammars: &'g GrammarSet, notation: &str) -> &'g ReverseGrammar {
    if notation.starts_with('O') {
        &grammars.castle_spoken
    } else {
        &grammars.regular_spoken
    }
}

/// Produces the raw phrase fragments for `notation`, markers included.
///
/// # Errors
///
/// Returns [`ErrorKind::UnrecognizedNotation`](blindfold_foundation::ErrorKind::UnrecognizedNotation)
/// if some part of the move matches no remaining section.
pub fn generate<'g>(grammars: &'g GrammarSet, notation: &str) -> Result<Vec<&'g str>> {
    let grammar = grammar_for(grammars, notation);
    debug!(grammar = grammar.name(), notation, "speaking move");

    let mut suppressed = BTreeSet::new();
    let mut fragments = Vec::new();
    let mut offset = 0;
    let mut last: Option<usize> = None;

    loop {
        let start = last.map_or(0, |index| index + 1);
        let Some((index, alternative)) = next_match(grammar, notation, offset, start, &suppressed)
        else {
            let mut context = ErrorContext::new()
                .with_input(notation)
                .with_grammar(grammar.name());
            if let Some(section) = last.and_then(|index| grammar.section(index)) {
                context = context.with_last_section(section.identifier());
            }
            return Err(Error::unrecognized_notation(notation, offset).with_context(context));
        };

        trace!(
            section = grammar.sections()[index].identifier(),
            offset,
            text = alternative.text(),
            "section matched"
        );
        fragments.push(alternative.text());
        offset += alternative.notation().len();
        suppressed.extend(grammar.suppressed_by(index));
        last = Some(index);

        if offset >= notation.len() || index + 1 == grammar.len() {
            break;
        }
    }

    Ok(fragments)
}

/// First section from `start` on, not suppressed, whose notation is a prefix
/// of `notation[offset..]`.
fn next_match<'g>(
    grammar: &'g ReverseGrammar,
    notation: &str,
    offset: usize,
    start: usize,
    suppressed: &BTreeSet<usize>,
) -> Option<(usize, &'g Alternative)> {
    grammar
        .sections()
        .iter()
        .enumerate()
        .skip(start)
        .filter(|(index, _)| !suppressed.contains(index))
        .find_map(|(index, section)| {
            section
                .match_prefix(notation, offset)
                .map(|alternative| (index, alternative))
        })
}
