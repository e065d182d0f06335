//! Spoken-move translation for Blindfold.
//!
//! Turns recognizer output like "bishop to f seven check" into `Bf7+`, and
//! engine moves like `O-O-O` back into "castle queen side".
//!
//! # Architecture
//!
//! ```text
//! "rook two a one"                       "Rxd1"
//!        │                                  │
//!        ▼                                  ▼
//! ┌─────────────────┐              ┌─────────────────┐
//! │   TOKENIZER     │              │ REVERSE         │ → ["rook", "", "[TO ]d one"]
//! └─────────────────┘              │ GENERATOR       │
//!        │                         └─────────────────┘
//!        ▼                                  │
//! ┌─────────────────┐                       ▼
//! │ FORWARD         │ → "Ra1"      ┌─────────────────┐
//! │ MATCHER         │              │ PHRASING        │ → "rook to d one"
//! └─────────────────┘              └─────────────────┘
//! ```
//!
//! Both directions walk a grammar from [`blindfold_grammar`] without
//! backtracking; see that crate for why section order matters.
//!
//! # Modules
//!
//! - [`tokenizer`] - Word splitting, transcript cleanup, direction detection
//! - [`forward`] - Speech to notation
//! - [`reverse`] - Notation to raw phrase fragments
//! - [`phrasing`] - Fragment post-processing for speech synthesis
//! - [`translator`] - Both directions behind one value

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod forward;
pub mod phrasing;
pub mod reverse;
pub mod tokenizer;
pub mod translator;

pub use forward::text_to_move;
pub use phrasing::PhrasingConfig;
pub use reverse::move_to_text;
pub use tokenizer::{Direction, Tokenizer};
pub use translator::Translator;
