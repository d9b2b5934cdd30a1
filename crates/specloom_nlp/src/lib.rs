//! Trainable natural-language understanding for specification sentences.
//!
//! This crate turns a free-text sentence into an intent plus ordered
//! entities, using a combination of fixed pattern recognizers and
//! per-language trained phrase recognizers:
//!
//! ```text
//! "when i click on {login button}"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PATTERN +       │  → [ui_action "click on", ui_element "login button"]
//! │ PHRASE MATCHING │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ OVERLAP         │  → non-overlapping spans, highest priority wins
//! │ RESOLUTION      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ANNOTATION      │  → "when i {ui_action} {ui_element}"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ INTENT          │  → testcase (score 1.0)
//! │ CLASSIFICATION  │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`content`] - The language-dictionary contract and loader seam
//! - [`training`] - The typed training model
//! - [`converter`] - Raw dictionary to typed training model conversion
//! - [`pattern`] - Fixed pattern recognizers and overlap resolution
//! - [`phrase`] - Trained phrase recognizers
//! - [`classifier`] - Intent scoring over annotated sentences
//! - [`engine`] - The trainable, multi-language engine
//! - [`trainer`] - Dictionary-to-engine training bridge

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classifier;
pub mod content;
pub mod converter;
pub mod engine;
pub mod pattern;
pub mod phrase;
pub mod trainer;
pub mod training;

// Re-export main types for convenience
pub use classifier::ClassifierMode;
pub use content::{
    InMemoryLoader, LanguageContent, LanguageContentLoader, TrainingIntentExample, TranslationMap,
};
pub use converter::TrainingDataConverter;
pub use engine::{IntentFilter, NluEngine};
pub use pattern::PatternSet;
pub use phrase::TrainedPhrase;
pub use trainer::NlpTrainer;
pub use training::{EntityTraining, IntentTraining, TrainingData, TrainingMatch};
