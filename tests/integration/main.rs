//! Cross-layer integration tests for Blindfold
//!
//! Tests that verify correct interaction between multiple crates.

mod round_trip;
