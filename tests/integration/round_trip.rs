//! Round trips between speech and notation.
//!
//! The two directions are not inverses: captures are never spoken, and the
//! "two"/"to" homophone always comes back as "to".

use blindfold::grammar::GrammarSet;
use blindfold::speech::{Direction, Translator, move_to_text, text_to_move};

#[test]
fn capture_is_lost() {
    let grammars = GrammarSet::standard();
    let spoken = move_to_text(grammars, "Rxd1").unwrap();
    assert_eq!(spoken, "rook to d one");
    let heard = text_to_move(grammars, &spoken).unwrap();
    assert_eq!(heard, "Rd1");
    assert_ne!(heard, "Rxd1");
}

#[test]
fn homophone_spelling_is_lost() {
    let grammars = GrammarSet::standard();
    let heard = text_to_move(grammars, "rook two a one").unwrap();
    assert_eq!(heard, "Ra1");
    let spoken = move_to_text(grammars, &heard).unwrap();
    assert_eq!(spoken, "rook to A one");
    assert_ne!(spoken, "rook two a one");
}

#[test]
fn quiet_moves_survive_through_the_translator() {
    let translator = Translator::default().with_phrasing(blindfold::speech::PhrasingConfig::plain());
    for notation in ["e4", "Nf3", "Bb5", "O-O", "Qh7#", "Nb1c3", "O-O-O+"] {
        let (direction, spoken) = translator.translate(notation).unwrap();
        assert_eq!(direction, Direction::Notation);
        let (direction, heard) = translator.translate(&spoken).unwrap();
        assert_eq!(direction, Direction::Speech);
        assert_eq!(heard, notation, "via {spoken:?}");
    }
}

#[test]
fn pauses_do_not_confuse_the_translator() {
    let translator = Translator::default();
    let (_, spoken) = translator.translate("Bf7+").unwrap();
    assert_eq!(spoken, "bishop to f seven, check");
    let (_, heard) = translator.translate(&spoken).unwrap();
    assert_eq!(heard, "Bf7+");
}

mod props {
    use blindfold::grammar::GrammarSet;
    use blindfold::grammar::board::COLUMNS;
    use blindfold::speech::{move_to_text, text_to_move};
    use proptest::prelude::*;

    /// Strategy for non-capturing single-square moves such as `Nf3` or `e4+`.
    fn quiet_move() -> impl Strategy<Value = String> {
        (
            prop::sample::select(vec!["", "B", "N", "R", "Q", "K"]),
            prop::sample::select(COLUMNS.to_vec()),
            1u8..=8,
            prop::sample::select(vec!["", "+", "#"]),
        )
            .prop_map(|(piece, column, row, suffix)| format!("{piece}{column}{row}{suffix}"))
    }

    proptest! {
        #[test]
        fn quiet_moves_come_back(notation in quiet_move()) {
            let grammars = GrammarSet::standard();
            let spoken = move_to_text(grammars, &notation).unwrap();
            let heard = text_to_move(grammars, &spoken.replace(',', "").to_lowercase()).unwrap();
            prop_assert_eq!(heard, notation);
        }

        #[test]
        fn captures_come_back_without_the_x(
            piece in prop::sample::select(vec!["B", "N", "R", "Q", "K"]),
            column in prop::sample::select(COLUMNS.to_vec()),
            row in 1u8..=8,
        ) {
            let grammars = GrammarSet::standard();
            let spoken = move_to_text(grammars, &format!("{piece}x{column}{row}")).unwrap();
            let heard = text_to_move(grammars, &spoken.to_lowercase()).unwrap();
            prop_assert_eq!(heard, format!("{piece}{column}{row}"));
        }
    }
}
