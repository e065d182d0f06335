//! Both translation directions behind one value.

use blindfold_foundation::Result;
use blindfold_grammar::GrammarSet;

use crate::forward;
use crate::phrasing::PhrasingConfig;
use crate::reverse;
use crate::tokenizer::{Direction, Tokenizer};

/// A grammar set plus phrasing settings.
///
/// Cheap to copy around by reference; holds no per-call state, so one value
/// can serve any number of threads.
#[derive(Clone, Debug)]
pub struct Translator<'g> {
    grammars: &'g GrammarSet,
    phrasing: PhrasingConfig,
}

impl Default for Translator<'static> {
    fn default() -> Self {
        Self::new(GrammarSet::standard())
    }
}

impl<'g> Translator<'g> {
    /// Creates a translator over `grammars` with default phrasing.
    #[must_use]
    pub fn new(grammars: &'g GrammarSet) -> Self {
        Self {
            grammars,
            phrasing: PhrasingConfig::default(),
        }
    }

    /// Builder method to set the phrasing configuration.
    #[must_use]
    pub fn with_phrasing(mut self, phrasing: PhrasingConfig) -> Self {
        self.phrasing = phrasing;
        self
    }

    /// The grammars in use.
    #[must_use]
    pub const fn grammars(&self) -> &'g GrammarSet {
        self.grammars
    }

    /// The phrasing configuration in use.
    #[must_use]
    pub const fn phrasing(&self) -> &PhrasingConfig {
        &self.phrasing
    }

    /// Spoken words to notation. See [`forward::text_to_move`].
    ///
    /// # Errors
    ///
    /// Fails if no word names a piece.
    pub fn text_to_move(&self, text: &str) -> Result<String> {
        forward::text_to_move(self.grammars, text)
    }

    /// Notation to a spoken phrase, using this translator's phrasing.
    ///
    /// # Errors
    ///
    /// Fails if part of the move cannot be matched.
    pub fn move_to_text(&self, notation: &str) -> Result<String> {
        let fragments = reverse::generate(self.grammars, notation)?;
        Ok(self.phrasing.finish(&fragments))
    }

    /// Translates a line in whichever direction it reads as, cleaning up
    /// spoken input first.
    ///
    /// # Errors
    ///
    /// Fails as the chosen direction does.
    pub fn translate(&self, line: &str) -> Result<(Direction, String)> {
        match Direction::detect(line) {
            Direction::Notation => Ok((Direction::Notation, self.move_to_text(line.trim())?)),
            Direction::Speech => {
                let text = Tokenizer::normalize(line);
                Ok((Direction::Speech, self.text_to_move(&text)?))
            }
        }
    }
}
