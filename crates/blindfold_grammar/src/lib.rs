//! Grammar catalog for the Blindfold translator.
//!
//! Four immutable grammars describe every move the translator understands:
//!
//! ```text
//! forward  (speech -> notation)      reverse  (notation -> speech)
//! ┌──────────────────────┐           ┌──────────────────────┐
//! │ regular              │           │ regular-spoken       │
//! │ castle               │           │ castle-spoken        │
//! └──────────────────────┘           └──────────────────────┘
//! ```
//!
//! Each grammar is an ordered list of [`Section`]s. Order is significant in
//! both directions: the matchers never backtrack and always take the first
//! alternative that fits.
//!
//! # Modules
//!
//! - [`board`] - Column and row vocabulary, square expansion
//! - [`section`] - A single grammar element and its alternatives
//! - [`grammar`] - Forward and reverse grammar types
//! - [`catalog`] - The [`GrammarSet`] holding all four grammars

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod catalog;
pub mod grammar;
pub mod section;

pub use catalog::{GrammarSet, PAUSE_MARKER, TO_MARKER};
pub use grammar::{ForwardGrammar, ReverseGrammar};
pub use section::{Alternative, Section};
