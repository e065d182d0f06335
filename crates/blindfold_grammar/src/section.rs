//! Grammar sections.
//!
//! A [`Section`] pairs spoken phrase variants with the notation fragments they
//! stand for. Alternatives are stored as pairs, so every text value has exactly
//! one notation value.

/// One spoken phrase and the notation fragment it translates to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alternative {
    text: String,
    notation: String,
    word_count: usize,
}

impl Alternative {
    /// Creates an alternative from its spoken and notation forms.
    #[must_use]
    pub fn new(text: impl Into<String>, notation: impl Into<String>) -> Self {
        let text = text.into();
        let word_count = text.split_whitespace().count();
        Self {
            text,
            notation: notation.into(),
            word_count,
        }
    }

    /// The spoken form, possibly containing phrasing markers.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The notation fragment.
    #[must_use]
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// The whitespace-separated words of the spoken form.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    /// Number of words in the spoken form.
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns true if the spoken form equals the token slice starting at `at`.
    ///
    /// An alternative without words never matches.
    #[must_use]
    pub fn matches_words(&self, tokens: &[&str], at: usize) -> bool {
        if self.word_count == 0 {
            return false;
        }
        at.checked_add(self.word_count)
            .and_then(|end| tokens.get(at..end))
            .is_some_and(|slice| self.words().eq(slice.iter().copied()))
    }

    /// Returns true if the notation form is a literal prefix of
    /// `notation[offset..]`.
    #[must_use]
    pub fn matches_prefix(&self, notation: &str, offset: usize) -> bool {
        notation
            .get(offset..)
            .is_some_and(|rest| rest.starts_with(self.notation.as_str()))
    }
}

/// One element of a grammar.
///
/// The meaning of `children` depends on the grammar the section lives in; see
/// [`ForwardGrammar::search_children`](crate::ForwardGrammar::search_children)
/// and [`ReverseGrammar::suppressed_by`](crate::ReverseGrammar::suppressed_by).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    identifier: &'static str,
    mandatory: bool,
    children: Vec<usize>,
    alternatives: Vec<Alternative>,
}

impl Section {
    /// Creates an optional section with no children and no alternatives.
    #[must_use]
    pub fn new(identifier: &'static str) -> Self {
        Self {
            identifier,
            mandatory: false,
            children: Vec::new(),
            alternatives: Vec::new(),
        }
    }

    /// Builder method to mark the section mandatory.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Builder method to set relative child offsets.
    #[must_use]
    pub fn with_children(mut self, offsets: impl IntoIterator<Item = usize>) -> Self {
        self.children = offsets.into_iter().collect();
        self
    }

    /// Builder method to append one alternative.
    #[must_use]
    pub fn with_alternative(mut self, text: impl Into<String>, notation: impl Into<String>) -> Self {
        self.alternatives.push(Alternative::new(text, notation));
        self
    }

    /// Builder method to append alternatives from two aligned value lists.
    ///
    /// # Panics
    ///
    /// Panics if the two lists differ in length.
    #[must_use]
    pub fn with_values<T, N>(mut self, text_values: &[T], notation_values: &[N]) -> Self
    where
        T: AsRef<str>,
        N: AsRef<str>,
    {
        assert_eq!(
            text_values.len(),
            notation_values.len(),
            "section {} has unaligned values",
            self.identifier
        );
        self.alternatives.extend(
            text_values
                .iter()
                .zip(notation_values)
                .map(|(text, notation)| Alternative::new(text.as_ref(), notation.as_ref())),
        );
        self
    }

    /// Diagnostic label.
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        self.identifier
    }

    /// Whether the section bounds a forward scan window.
    #[must_use]
    pub const fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// Relative offsets of the child sections.
    #[must_use]
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// All alternatives, in matching order.
    #[must_use]
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Spoken forms, in matching order.
    pub fn text_values(&self) -> impl Iterator<Item = &str> {
        self.alternatives.iter().map(Alternative::text)
    }

    /// Notation forms, aligned with [`Self::text_values`].
    pub fn notation_values(&self) -> impl Iterator<Item = &str> {
        self.alternatives.iter().map(Alternative::notation)
    }

    /// First alternative whose words equal the tokens starting at `at`.
    #[must_use]
    pub fn match_words(&self, tokens: &[&str], at: usize) -> Option<&Alternative> {
        self.alternatives
            .iter()
            .find(|alt| alt.matches_words(tokens, at))
    }

    /// First alternative whose notation is a prefix of `notation[offset..]`.
    #[must_use]
    pub fn match_prefix(&self, notation: &str, offset: usize) -> Option<&Alternative> {
        self.alternatives
            .iter()
            .find(|alt| alt.matches_prefix(notation, offset))
    }
}
