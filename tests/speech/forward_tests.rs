//! Integration tests for speech to notation

use blindfold_foundation::ErrorKind;
use blindfold_grammar::GrammarSet;
use blindfold_speech::text_to_move;

fn hear(text: &str) -> String {
    text_to_move(GrammarSet::standard(), text).unwrap()
}

// =============================================================================
// Squares and Pieces
// =============================================================================

#[test]
fn pawn_moves_have_no_letter() {
    assert_eq!(hear("pawn to h eight"), "h8");
}

#[test]
fn piece_letter_is_prepended() {
    assert_eq!(hear("king to e two"), "Ke2");
    assert_eq!(hear("queen to d eight"), "Qd8");
}

#[test]
fn homophone_before_square_is_absorbed() {
    assert_eq!(hear("rook two a one"), "Ra1");
    assert_eq!(hear("rook to a one"), "Ra1");
}

// =============================================================================
// Suffixes
// =============================================================================

#[test]
fn check_suffix() {
    assert_eq!(hear("bishop to f seven check"), "Bf7+");
}

#[test]
fn checkmate_suffix() {
    assert_eq!(hear("bishop to f seven checkmate"), "Bf7#");
}

#[test]
fn promotion_with_homophone() {
    let spoken = hear("pawn a seven to a eight promote two queen");
    assert_eq!(spoken, "a7a8=Q");
    assert_eq!(spoken, hear("pawn a seven to a eight promote to queen"));
}

// =============================================================================
// Castling
// =============================================================================

#[test]
fn castling_sides() {
    assert_eq!(hear("castle king side"), "O-O");
    assert_eq!(hear("castle queen side"), "O-O-O");
}

#[test]
fn castling_with_mate() {
    assert_eq!(hear("castle queen side checkmate"), "O-O-O#");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn non_move_input() {
    let err = text_to_move(GrammarSet::standard(), "i am bobby fischer").unwrap_err();
    assert_eq!(err.kind, ErrorKind::NoPieceFound);
    let ctx = err.context.unwrap();
    assert_eq!(ctx.grammar, Some("regular"));
}

#[test]
fn uppercase_input_is_not_understood() {
    // The matcher expects the recognizer's lowercase convention
    let err = text_to_move(GrammarSet::standard(), "Pawn to e four").unwrap_err();
    assert_eq!(err.kind, ErrorKind::NoPieceFound);
}
