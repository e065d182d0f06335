//! Integration tests for transcript cleanup and direction detection

use blindfold_speech::{Direction, Tokenizer};

#[test]
fn normalize_recognizer_output() {
    assert_eq!(
        Tokenizer::normalize("  Queen  to H-five!  "),
        "queen to h five"
    );
    assert_eq!(Tokenizer::normalize("\"Castle,\" queen's side."), "castle queens side");
}

#[test]
fn normalize_empty() {
    assert_eq!(Tokenizer::normalize(""), "");
    assert_eq!(Tokenizer::normalize("?!."), "");
}

#[test]
fn words_keep_order() {
    assert_eq!(Tokenizer::words("rook two a one"), vec!["rook", "two", "a", "one"]);
}

#[test]
fn detect_notation() {
    for line in ["e4", "Nf3", "O-O-O", "exd5", " Qh7# "] {
        assert_eq!(Direction::detect(line), Direction::Notation, "{line}");
    }
}

#[test]
fn detect_speech() {
    for line in ["pawn to e four", "castle", "", "Knight to F three"] {
        assert_eq!(Direction::detect(line), Direction::Speech, "{line}");
    }
}
