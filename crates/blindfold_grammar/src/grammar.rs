//! Forward and reverse grammars.
//!
//! Both are ordered section lists; they differ in what a section's children
//! mean. In a [`ForwardGrammar`] children are searched after their parent
//! matches (and skipped when it does not). In a [`ReverseGrammar`] children are
//! suppressed once their parent has matched.

use std::fmt;

use crate::section::Section;

/// A speech-to-notation grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForwardGrammar {
    name: &'static str,
    sections: Vec<Section>,
}

impl ForwardGrammar {
    /// Creates a grammar from its sections, in matching order.
    #[must_use]
    pub fn new(name: &'static str, sections: Vec<Section>) -> Self {
        Self { name, sections }
    }

    /// Diagnostic name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// All sections, in order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section at `index`, if any.
    #[must_use]
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the grammar has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Absolute indices of the sections to search right after the section at
    /// `index` has matched.
    pub fn search_children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.sections
            .get(index)
            .map(Section::children)
            .unwrap_or_default()
            .iter()
            .map(move |offset| index + offset)
    }

    /// Index of the first mandatory section after `after` (or from the start
    /// when `after` is `None`), falling back to the last section.
    #[must_use]
    pub fn next_mandatory(&self, after: Option<usize>) -> usize {
        let start = after.map_or(0, |index| index + 1);
        self.sections
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, section)| section.is_mandatory())
            .map_or(self.sections.len().saturating_sub(1), |(index, _)| index)
    }
}

/// A notation-to-speech grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReverseGrammar {
    name: &'static str,
    sections: Vec<Section>,
}

impl ReverseGrammar {
    /// Creates a grammar from its sections, in matching order.
    #[must_use]
    pub fn new(name: &'static str, sections: Vec<Section>) -> Self {
        Self { name, sections }
    }

    /// Diagnostic name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// All sections, in order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section at `index`, if any.
    #[must_use]
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the grammar has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Absolute indices of the sections that must not fire once the section
    /// at `index` has matched.
    pub fn suppressed_by(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.sections
            .get(index)
            .map(Section::children)
            .unwrap_or_default()
            .iter()
            .map(move |offset| index + offset)
    }
}

fn describe(f: &mut fmt::Formatter<'_>, name: &str, sections: &[Section], link: &str) -> fmt::Result {
    writeln!(f, "{name}:")?;
    for (index, section) in sections.iter().enumerate() {
        write!(
            f,
            "  {index:>2} {:<18} {:<9} {:>3} values",
            section.identifier(),
            if section.is_mandatory() { "mandatory" } else { "optional" },
            section.alternatives().len(),
        )?;
        if !section.children().is_empty() {
            write!(f, "  {link} {:?}", section.children())?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for ForwardGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe(f, self.name, &self.sections, "search")
    }
}

impl fmt::Display for ReverseGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe(f, self.name, &self.sections, "suppress")
    }
}
