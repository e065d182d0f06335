//! Error types for the Blindfold system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result alias used across the Blindfold crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Blindfold operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates the error raised when spoken input names no piece.
    #[must_use]
    pub fn no_piece_found() -> Self {
        Self::new(ErrorKind::NoPieceFound)
    }

    /// Creates the error raised when part of a move cannot be spoken.
    #[must_use]
    pub fn unrecognized_notation(notation: impl Into<String>, offset: usize) -> Self {
        Self::new(ErrorKind::UnrecognizedNotation {
            notation: notation.into(),
            offset,
        })
    }

    /// Creates an I/O error (terminal or file access).
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error came from one of the two translators
    /// rather than from the surrounding terminal plumbing.
    #[must_use]
    pub fn is_translation_failure(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::NoPieceFound | ErrorKind::UnrecognizedNotation { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Spoken input contains no piece name to anchor on.
    #[error("no piece found in spoken input")]
    NoPieceFound,

    /// A suffix of the notation matched no remaining grammar section.
    #[error("unrecognized notation: {notation:?} (unmatched from byte {offset})")]
    UnrecognizedNotation {
        /// The full notation that was being translated.
        notation: String,
        /// Byte offset of the first unmatched character.
        offset: usize,
    },

    /// Reading from the terminal or a file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where a translation failed.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The input that was being translated.
    pub input: Option<String>,
    /// Name of the grammar in use.
    pub grammar: Option<&'static str>,
    /// Identifier of the last section that matched before the failure.
    pub last_section: Option<&'static str>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the offending input.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the grammar name.
    #[must_use]
    pub fn with_grammar(mut self, grammar: &'static str) -> Self {
        self.grammar = Some(grammar);
        self
    }

    /// Sets the last matched section.
    #[must_use]
    pub fn with_last_section(mut self, section: &'static str) -> Self {
        self.last_section = Some(section);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(input) = &self.input {
            write!(f, "in {input:?}")?;
        }
        if let Some(grammar) = self.grammar {
            write!(f, " using {grammar}")?;
        }
        if let Some(section) = self.last_section {
            write!(f, " after {section}")?;
        }
        Ok(())
    }
}
