//! Integration tests for Section and Alternative matching

use blindfold_grammar::{Alternative, Section};

// =============================================================================
// Word Matching
// =============================================================================

#[test]
fn multi_word_alternative_matches_in_place() {
    let alt = Alternative::new("queen side", "O-O-O");
    let tokens = ["castle", "queen", "side"];
    assert!(alt.matches_words(&tokens, 1));
    assert!(!alt.matches_words(&tokens, 0));
}

#[test]
fn alternative_running_past_the_end_does_not_match() {
    let alt = Alternative::new("king side", "O-O");
    assert!(!alt.matches_words(&["castle", "king"], 1));
    assert!(!alt.matches_words(&["castle", "king"], 5));
}

#[test]
fn empty_alternative_never_matches_words() {
    let alt = Alternative::new("", "x");
    assert_eq!(alt.word_count(), 0);
    assert!(!alt.matches_words(&["rook"], 0));
    assert!(!alt.matches_words(&[], 0));
}

#[test]
fn section_returns_first_matching_alternative() {
    let section = Section::new("promotion").with_values(&["promote to", "promote"], &["=", "?"]);
    let tokens = ["promote", "to", "queen"];
    let alt = section.match_words(&tokens, 0).unwrap();
    assert_eq!(alt.notation(), "=");
    assert_eq!(alt.word_count(), 2);
}

// =============================================================================
// Prefix Matching
// =============================================================================

#[test]
fn prefix_matching_respects_offset() {
    let section = Section::new("capture").with_alternative("", "x");
    assert!(section.match_prefix("Rxd1", 1).is_some());
    assert!(section.match_prefix("Rxd1", 0).is_none());
    assert!(section.match_prefix("Rxd1", 9).is_none());
}

