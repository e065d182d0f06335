//! Integration tests for phrasing configuration

use blindfold_grammar::GrammarSet;
use blindfold_speech::reverse::generate;
use blindfold_speech::{PhrasingConfig, Translator};

fn phrase(config: &PhrasingConfig, notation: &str) -> String {
    let fragments = generate(GrammarSet::standard(), notation).unwrap();
    config.finish(&fragments)
}

#[test]
fn default_phrasing() {
    assert_eq!(
        phrase(&PhrasingConfig::default(), "a7a8=N+"),
        "pawn A seven to A eight, promote to knight, check"
    );
}

#[test]
fn plain_phrasing_drops_pauses() {
    assert_eq!(
        phrase(&PhrasingConfig::plain(), "a7a8=N+"),
        "pawn A seven to A eight promote to knight check"
    );
}

#[test]
fn lowercase_letter_a() {
    let config = PhrasingConfig::new().with_capitalize_letter_a(false);
    assert_eq!(phrase(&config, "Ra1"), "rook to a one");
}

#[test]
fn custom_spoken_to() {
    let config = PhrasingConfig::new().with_spoken_to("onto");
    assert_eq!(phrase(&config, "Nb1c3"), "knight b one onto c three");
}

#[test]
fn custom_pause_cue() {
    let config = PhrasingConfig::new().with_pause_cue("... ");
    assert_eq!(phrase(&config, "Qh7#"), "queen to h seven... checkmate");
}

#[test]
fn translator_uses_its_phrasing() {
    let translator = Translator::default().with_phrasing(PhrasingConfig::plain());
    assert_eq!(translator.move_to_text("O-O+").unwrap(), "castle king side check");
}
