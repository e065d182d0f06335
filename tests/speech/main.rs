//! Integration tests for Layer 2: Speech
//!
//! Tests for both translation directions and the phrasing step:
//! - Speech to notation
//! - Notation to speech
//! - Phrasing configuration
//! - Transcript cleanup and direction detection

mod forward_tests;
mod phrasing_tests;
mod reverse_tests;
mod tokenizer_tests;
