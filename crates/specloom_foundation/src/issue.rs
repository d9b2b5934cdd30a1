//! Located diagnostics for recognition and validation.
//!
//! Uses `thiserror` for ergonomic message definition. Issues are values:
//! recognition and validation append them to caller-supplied error and
//! warning lists and never panic or early-return on them.

use thiserror::Error;

use crate::entity::Entity;
use crate::intent::Intent;
use crate::location::Location;

/// A single diagnostic, tied to the sentence it refers to.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{kind}")]
pub struct Issue {
    /// What went wrong.
    pub kind: IssueKind,
    /// Where the offending sentence sits in its document.
    pub location: Location,
}

/// How severe an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocks downstream validity of the node.
    Error,
    /// Informational; processing continues normally.
    Warning,
}

impl Issue {
    /// Creates a new issue.
    #[must_use]
    pub const fn new(kind: IssueKind, location: Location) -> Self {
        Self { kind, location }
    }

    /// Creates a "language not trained" error.
    #[must_use]
    pub fn not_trained(language: impl Into<String>, subject: impl Into<String>) -> Self {
        Self::new(
            IssueKind::NotTrained {
                language: language.into(),
                subject: subject.into(),
            },
            Location::default(),
        )
    }

    /// Creates an "unrecognized sentence" warning.
    #[must_use]
    pub fn sentence_not_recognized(content: impl Into<String>, location: Location) -> Self {
        Self::new(
            IssueKind::SentenceNotRecognized {
                content: content.into(),
            },
            location,
        )
    }

    /// Creates an "intent does not match node kind" warning.
    #[must_use]
    pub fn unexpected_intent(
        intent: Intent,
        subject: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::new(
            IssueKind::UnexpectedIntent {
                intent,
                subject: subject.into(),
            },
            location,
        )
    }

    /// Creates an "unknown rule" warning.
    #[must_use]
    pub fn unknown_rule(name: impl Into<String>, location: Location) -> Self {
        Self::new(IssueKind::UnknownRule { name: name.into() }, location)
    }

    /// The severity of this issue.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Returns true if this issue blocks downstream validity.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity(), Severity::Error)
    }
}

/// Categorized issue kinds for pattern matching.
///
/// Every kind has a fixed severity; `severity` tells callers which list an
/// issue belongs in.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IssueKind {
    /// The engine has no model for the requested language.
    #[error("no {subject} model trained for language \"{language}\"")]
    NotTrained {
        /// The language that was requested.
        language: String,
        /// What kind of sentences were being recognized, e.g. "step".
        subject: String,
    },

    /// The sentence produced no recognition result at all.
    #[error("unrecognized sentence: \"{content}\"")]
    SentenceNotRecognized {
        /// The sentence content.
        content: String,
    },

    /// The sentence was recognized, but as an intent the node cannot hold.
    #[error("sentence recognized as {intent}, not as a {subject}")]
    UnexpectedIntent {
        /// The intent that was recognized.
        intent: Intent,
        /// What kind of sentences were being recognized, e.g. "step".
        subject: String,
    },

    /// A step sentence has no action verb.
    #[error("no action found in step: \"{content}\"")]
    MissingAction {
        /// The sentence content.
        content: String,
    },

    /// A UI sentence has no property name.
    #[error("no property found in sentence: \"{content}\"")]
    MissingProperty {
        /// The sentence content.
        content: String,
    },

    /// A database sentence has no property name.
    #[error("no database property found in sentence: \"{content}\"")]
    MissingDatabaseProperty {
        /// The sentence content.
        content: String,
    },

    /// A database property sentence carries no value.
    #[error("no value found for database property \"{property}\"")]
    MissingValue {
        /// The property whose value is missing.
        property: String,
    },

    /// No syntax rule is registered under the given name.
    #[error("no syntax rule found for \"{name}\"")]
    UnknownRule {
        /// The rule name that was looked up.
        name: String,
    },

    /// Fewer target entities than the rule's minimum.
    #[error("\"{name}\" expects at least {min} target(s), got {count}")]
    TooFewTargets {
        /// The rule name.
        name: String,
        /// How many targets were recognized.
        count: usize,
        /// The rule's minimum.
        min: usize,
    },

    /// More target entities than the rule's maximum.
    #[error("\"{name}\" expects at most {max} target(s), got {count}")]
    TooManyTargets {
        /// The rule name.
        name: String,
        /// How many targets were recognized.
        count: usize,
        /// The rule's maximum.
        max: usize,
    },

    /// A target entity kind has no occurrence bounds in the rule.
    #[error("\"{name}\" declares no occurrence bounds for {entity}")]
    MissingOccurrence {
        /// The rule name.
        name: String,
        /// The target entity kind without bounds.
        entity: Entity,
    },

    /// An entity kind occurred fewer times than its bounds allow.
    #[error("\"{name}\" expects at least {min} occurrence(s) of {entity}, got {count}")]
    TooFewOccurrences {
        /// The rule name.
        name: String,
        /// The constrained entity kind.
        entity: Entity,
        /// How many occurrences were recognized.
        count: usize,
        /// The occurrence minimum.
        min: usize,
    },

    /// An entity kind occurred more times than its bounds allow.
    #[error("\"{name}\" expects at most {max} occurrence(s) of {entity}, got {count}")]
    TooManyOccurrences {
        /// The rule name.
        name: String,
        /// The constrained entity kind.
        entity: Entity,
        /// How many occurrences were recognized.
        count: usize,
        /// The occurrence maximum.
        max: usize,
    },

    /// A co-required entity kind is absent from the sentence.
    #[error("\"{name}\" must be used together with a {entity}")]
    MissingCompanion {
        /// The rule name.
        name: String,
        /// The required companion entity kind.
        entity: Entity,
    },
}

impl IssueKind {
    /// The fixed severity of this kind.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::NotTrained { .. }
            | Self::MissingValue { .. }
            | Self::TooFewTargets { .. }
            | Self::TooManyTargets { .. }
            | Self::TooFewOccurrences { .. }
            | Self::TooManyOccurrences { .. }
            | Self::MissingCompanion { .. } => Severity::Error,
            Self::SentenceNotRecognized { .. }
            | Self::UnexpectedIntent { .. }
            | Self::MissingAction { .. }
            | Self::MissingProperty { .. }
            | Self::MissingDatabaseProperty { .. }
            | Self::UnknownRule { .. }
            | Self::MissingOccurrence { .. } => Severity::Warning,
        }
    }
}
