//! Integration tests for Layer 1: Grammar
//!
//! Tests for sections, the board vocabulary, and the four-grammar catalog.

mod catalog;
mod sections;
