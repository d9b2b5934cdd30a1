//! The typed training model the engine consumes.
//!
//! Where [`content`](crate::content) mirrors the external dictionary shape
//! with string keys, this module holds the validated form: intent and
//! entity names resolved against the closed catalogs.

use specloom_foundation::{Entity, Intent};

/// Everything needed to train one language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrainingData {
    /// Per-intent training, in dictionary order.
    pub intents: Vec<IntentTraining>,
}

impl TrainingData {
    /// Returns true if there is nothing to train.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Returns the training for one intent, if present.
    #[must_use]
    pub fn intent(&self, intent: Intent) -> Option<&IntentTraining> {
        self.intents.iter().find(|t| t.intent == intent)
    }
}

/// Training for a single intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentTraining {
    /// The intent being trained.
    pub intent: Intent,
    /// The trained entities this intent recognizes, in dictionary order.
    pub entities: Vec<EntityTraining>,
    /// Example sentences seeding the classifier.
    pub examples: Vec<String>,
}

/// The trained phrases for one entity kind under one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTraining {
    /// The entity kind the phrases resolve to.
    pub entity: Entity,
    /// Phrase groups, in dictionary order.
    pub matches: Vec<TrainingMatch>,
}

/// One match id and the phrases that resolve to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingMatch {
    /// The language-independent identifier, e.g. `click`.
    pub match_id: String,
    /// Sample phrases in the dictionary's language.
    pub samples: Vec<String>,
}

impl TrainingMatch {
    /// Creates a phrase group.
    #[must_use]
    pub fn new(match_id: impl Into<String>, samples: Vec<String>) -> Self {
        Self {
            match_id: match_id.into(),
            samples,
        }
    }
}
