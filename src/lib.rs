//! Blindfold - Spoken chess moves to algebraic notation and back
//!
//! This crate re-exports all layers of the Blindfold system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: blindfold_runtime    — REPL, CLI, logging setup
//! Layer 2: blindfold_speech     — Forward matcher, reverse generator, phrasing
//! Layer 1: blindfold_grammar    — Sections, grammars, the move catalog
//! Layer 0: blindfold_foundation — Error types
//! ```

pub use blindfold_foundation as foundation;
pub use blindfold_grammar as grammar;
pub use blindfold_runtime as runtime;
pub use blindfold_speech as speech;
