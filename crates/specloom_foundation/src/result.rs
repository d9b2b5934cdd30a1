//! Recognition output for a single sentence.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::intent::Intent;

/// One recognized span inside a sentence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NlpEntity {
    /// The kind of span.
    pub entity: Entity,
    /// The exact text the recognizer matched.
    pub raw_match: String,
    /// Character offset of the match in the sentence.
    pub position: usize,
    /// The extracted value: literal content for pattern matches, the
    /// match id for trained phrase matches.
    pub value: String,
    /// Priority of the recognizer that produced this span.
    pub priority: i32,
}

impl NlpEntity {
    /// Creates a recognized span.
    #[must_use]
    pub fn new(
        entity: Entity,
        raw_match: impl Into<String>,
        position: usize,
        value: impl Into<String>,
        priority: i32,
    ) -> Self {
        Self {
            entity,
            raw_match: raw_match.into(),
            position,
            value: value.into(),
            priority,
        }
    }
}

/// The result of recognizing one sentence.
///
/// Produced fresh per call and never cached; consumers copy what they need
/// onto their own nodes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NlpResult {
    /// The winning intent.
    pub intent: Intent,
    /// Classifier confidence in `[0, 1]`.
    pub score: f64,
    /// Recognized spans, ordered by position.
    pub entities: Vec<NlpEntity>,
    /// The sentence with each recognized span replaced by `{entity_name}`.
    pub annotated_text: String,
}

impl NlpResult {
    /// Iterates the recognized spans of one entity kind, in position order.
    pub fn entities_of(&self, entity: Entity) -> impl Iterator<Item = &NlpEntity> {
        self.entities.iter().filter(move |e| e.entity == entity)
    }

    /// Returns the first recognized span of one entity kind.
    #[must_use]
    pub fn first_of(&self, entity: Entity) -> Option<&NlpEntity> {
        self.entities_of(entity).next()
    }

    /// Counts the recognized spans of one entity kind.
    #[must_use]
    pub fn count_of(&self, entity: Entity) -> usize {
        self.entities_of(entity).count()
    }

    /// Returns true if any span of the given kind was recognized.
    #[must_use]
    pub fn has(&self, entity: Entity) -> bool {
        self.first_of(entity).is_some()
    }
}
