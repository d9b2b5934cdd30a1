//! Integration tests for Layer 1: NLP
//!
//! Tests for pattern extraction, dictionary training, and end-to-end
//! sentence recognition.

mod extraction;
mod recognition;
mod training;
