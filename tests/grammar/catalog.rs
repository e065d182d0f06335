//! Integration tests for the grammar catalog

use blindfold_grammar::{GrammarSet, PAUSE_MARKER, TO_MARKER};

#[test]
fn grammar_names() {
    let grammars = GrammarSet::standard();
    assert_eq!(grammars.regular.name(), "regular");
    assert_eq!(grammars.castle.name(), "castle");
    assert_eq!(grammars.regular_spoken.name(), "regular-spoken");
    assert_eq!(grammars.castle_spoken.name(), "castle-spoken");
}

#[test]
fn independent_sets_are_equal() {
    assert_eq!(GrammarSet::new(), GrammarSet::new());
    assert_eq!(&GrammarSet::new(), GrammarSet::standard());
}

#[test]
fn every_forward_grammar_ends_in_mate() {
    let grammars = GrammarSet::standard();
    for grammar in [&grammars.regular, &grammars.castle] {
        let last = grammar.sections().last().unwrap();
        assert_eq!(last.identifier(), "checkmate");
        assert_eq!(grammar.next_mandatory(Some(grammar.len() - 1)), grammar.len() - 1);
    }
}

#[test]
fn forward_grammars_carry_no_markers() {
    let grammars = GrammarSet::standard();
    for grammar in [&grammars.regular, &grammars.castle] {
        for section in grammar.sections() {
            for text in section.text_values() {
                assert!(!text.contains(TO_MARKER) && !text.contains(PAUSE_MARKER));
            }
        }
    }
}

#[test]
fn display_lists_sections_with_links() {
    let text = GrammarSet::standard().to_string();
    assert!(text.contains("pieces"));
    assert!(text.contains("mandatory"));
    assert!(text.contains("search [1]"));
    assert!(text.contains("suppress [1, 2]"));
}

#[test]
fn shared_between_threads() {
    let grammars = GrammarSet::new();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(grammars.vocabulary(), GrammarSet::standard().vocabulary()));
        }
    });
}
