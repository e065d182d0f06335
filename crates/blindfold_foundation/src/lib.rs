//! Core error types for Blindfold.
//!
//! This crate provides:
//! - [`Error`] - Rich error type with context
//! - [`ErrorKind`] - The failure categories of both translation directions
//! - [`Result`] - Crate-wide result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind, Result};
