//! REPL and CLI for Blindfold.
//!
//! This crate provides:
//! - [`Repl`] - Interactive translation loop
//! - [`CliConfig`] - Command-line argument parsing
//! - Logging setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod logging;
pub mod repl;

pub use config::{CliConfig, ParseArgsError};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Repl, Reply};
