//! Integration tests for notation to speech

use blindfold_foundation::ErrorKind;
use blindfold_grammar::GrammarSet;
use blindfold_speech::move_to_text;
use blindfold_speech::reverse::generate;

fn speak(notation: &str) -> String {
    move_to_text(GrammarSet::standard(), notation).unwrap()
}

#[test]
fn pawn_to_a_one() {
    assert_eq!(speak("a1"), "pawn to A one");
}

#[test]
fn captures_are_silent() {
    assert_eq!(speak("Rxd1"), "rook to d one");
    assert_eq!(speak("Bxe5"), "bishop to e five");
}

#[test]
fn castling_longer_side_first() {
    assert_eq!(speak("O-O-O"), "castle queen side");
    assert_eq!(speak("O-O"), "castle king side");
}

#[test]
fn castling_with_check() {
    assert_eq!(speak("O-O-O+"), "castle queen side, check");
}

#[test]
fn full_from_and_to_squares() {
    assert_eq!(speak("Nb1c3"), "knight b one to c three");
}

#[test]
fn promotion_and_mate() {
    assert_eq!(speak("e8=Q#"), "pawn to e eight, promote to queen, checkmate");
}

#[test]
fn fragments_keep_markers() {
    let fragments = generate(GrammarSet::standard(), "Bf7+").unwrap();
    assert_eq!(fragments, vec!["bishop", "[TO ]f seven", "[PAUSE]check"]);
}

#[test]
fn unrecognized_notation() {
    let err = move_to_text(GrammarSet::standard(), "aaa").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnrecognizedNotation { offset: 1, .. }));
}

#[test]
fn failure_reports_grammar() {
    let err = move_to_text(GrammarSet::standard(), "O-X").unwrap_err();
    assert_eq!(err.context.unwrap().grammar, Some("castle-spoken"));
}
