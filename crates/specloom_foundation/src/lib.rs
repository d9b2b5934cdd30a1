//! Core types for the Specloom natural-language core.
//!
//! This crate provides:
//! - [`Entity`] / [`Intent`] - The closed catalogs of span kinds and sentence purposes
//! - [`Location`] - Source positions for sentences and diagnostics
//! - [`Issue`] - Located errors and warnings, accumulated as values
//! - [`Value`] - Typed property values with literal type detection
//! - [`NlpResult`] / [`NlpEntity`] - Recognition output for one sentence
//! - [`SentenceNode`] - The contract between the document AST and recognition

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod intent;
pub mod issue;
pub mod location;
pub mod node;
pub mod result;
pub mod value;

// Re-export main types for convenience
pub use entity::Entity;
pub use intent::Intent;
pub use issue::{Issue, IssueKind, Severity};
pub use location::Location;
pub use node::{DatabasePropertyNode, SentenceNode, Step, UiPropertyNode};
pub use result::{NlpEntity, NlpResult};
pub use value::{PropertyReference, PropertyValue, Value};
