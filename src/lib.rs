//! Specloom - Trainable natural-language core for executable specifications
//!
//! This crate re-exports all layers of the Specloom system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: specloom_recognizer — Node recognizers, syntax rule validation
//! Layer 1: specloom_nlp        — Pattern/phrase extraction, intent engine
//! Layer 0: specloom_foundation — Core types (Entity, Intent, Issue, Value)
//! ```

pub use specloom_foundation as foundation;
pub use specloom_nlp as nlp;
pub use specloom_recognizer as recognizer;
