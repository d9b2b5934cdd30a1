//! Conversion from the raw dictionary shape to the typed training model.

use specloom_foundation::{Entity, Intent};

use crate::content::{TrainingIntentExample, TranslationMap};
use crate::training::{EntityTraining, IntentTraining, TrainingData, TrainingMatch};

/// Converts raw dictionary content into [`TrainingData`].
///
/// Stateless; all behavior lives in associated functions.
pub struct TrainingDataConverter;

impl TrainingDataConverter {
    /// Converts a phrase dictionary plus classifier examples.
    ///
    /// Pure and total: key order is preserved, empty inputs yield an empty
    /// model, and names that are not in the closed intent/entity catalogs
    /// are skipped. Example sentences whose intent has no phrase entry
    /// still produce a classifier-only intent entry.
    #[must_use]
    pub fn convert(nlp: &TranslationMap, training: &[TrainingIntentExample]) -> TrainingData {
        let mut intents: Vec<IntentTraining> = Vec::new();

        for (intent_name, entity_map) in nlp {
            let Some(intent) = Intent::from_name(intent_name) else {
                continue;
            };
            let mut entities = Vec::new();
            for (entity_name, match_map) in entity_map {
                let Some(entity) = Entity::from_name(entity_name) else {
                    continue;
                };
                let matches = match_map
                    .iter()
                    .map(|(match_id, samples)| TrainingMatch::new(match_id, samples.clone()))
                    .collect();
                entities.push(EntityTraining { entity, matches });
            }
            intents.push(IntentTraining {
                intent,
                entities,
                examples: Vec::new(),
            });
        }

        for example in training {
            let Some(intent) = Intent::from_name(&example.intent) else {
                continue;
            };
            match intents.iter_mut().find(|t| t.intent == intent) {
                Some(existing) => existing.examples.extend(example.sentences.iter().cloned()),
                None => intents.push(IntentTraining {
                    intent,
                    entities: Vec::new(),
                    examples: example.sentences.clone(),
                }),
            }
        }

        TrainingData { intents }
    }
}
