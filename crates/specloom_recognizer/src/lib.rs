//! Sentence recognizers and syntax rule validation for document nodes.
//!
//! This crate bridges the recognition engine and the document layer. Each
//! specialized recognizer owns an engine trained on its own intents, drives
//! it over a batch of nodes, projects the recognized entities onto domain
//! fields, and validates the combination against a per-domain rule table:
//!
//! ```text
//! nodes ──▶ NodeSentenceRecognizer ──▶ NluEngine
//!                    │                    │
//!                    │                 NlpResult
//!                    ▼                    │
//!           projector (step / UI / db) ◀──┘
//!                    │
//!                    ▼
//!           SyntaxRule validation ──▶ errors / warnings
//! ```
//!
//! Failures accumulate into caller-supplied lists; a sentence that cannot
//! be recognized degrades to a warning so one bad line never halts a whole
//! document.
//!
//! # Modules
//!
//! - [`rules`] - Syntax rules and the overlay builder for rule tables
//! - [`action_rules`] - The rule table for UI action steps
//! - [`ui_property_rules`] - The rule table for UI properties
//! - [`db_property_rules`] - The rule table for database properties
//! - [`sentence`] - The batch driver and the rule validator
//! - [`step`] - The test step recognizer
//! - [`ui_property`] - The UI property recognizer
//! - [`db_property`] - The database property recognizer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action_rules;
pub mod db_property;
pub mod db_property_rules;
pub mod rules;
pub mod sentence;
pub mod step;
pub mod ui_property;
pub mod ui_property_rules;

// Re-export main types for convenience
pub use action_rules::ui_action_rules;
pub use db_property::DatabasePropertyRecognizer;
pub use db_property_rules::db_property_rules;
pub use rules::{Occurrence, PartialRule, RuleBuilder, RuleDefaults, SyntaxRule};
pub use sentence::NodeSentenceRecognizer;
pub use step::StepRecognizer;
pub use ui_property::UiPropertyRecognizer;
pub use ui_property_rules::ui_property_rules;
