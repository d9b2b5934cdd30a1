//! The trainable, multi-language recognition engine.

use std::collections::HashMap;

use specloom_foundation::{Intent, NlpResult};

use crate::classifier::{self, ClassifierMode};
use crate::pattern::{PatternSet, ResolvedSpan, annotate, resolve_overlaps};
use crate::phrase::{TrainedPhrase, phrase_candidates};
use crate::training::TrainingData;

/// Which intents a train or recognize call covers.
///
/// Set-valued so a recognizer spanning several intents can train them in a
/// single, replacing call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IntentFilter {
    /// Every intent.
    #[default]
    All,
    /// Only the listed intents.
    Only(Vec<Intent>),
}

impl IntentFilter {
    /// Convenience constructor for a single intent.
    #[must_use]
    pub fn only(intent: Intent) -> Self {
        Self::Only(vec![intent])
    }

    /// Returns true if the filter lets the intent through.
    #[must_use]
    pub fn allows(&self, intent: Intent) -> bool {
        match self {
            Self::All => true,
            Self::Only(intents) => intents.contains(&intent),
        }
    }
}

/// One classifier example, stored pre-annotated and pre-tokenized.
#[derive(Debug)]
struct TrainedExample {
    tokens: Vec<String>,
}

/// Everything trained for one intent in one language.
#[derive(Debug)]
struct IntentModel {
    intent: Intent,
    phrases: Vec<TrainedPhrase>,
    examples: Vec<TrainedExample>,
}

/// Everything trained for one language.
#[derive(Debug, Default)]
struct LanguageModel {
    intents: Vec<IntentModel>,
}

/// The trainable recognition engine.
///
/// Holds one model per trained language. Models are independent;
/// re-training a language replaces its model wholesale.
#[derive(Debug)]
pub struct NluEngine {
    mode: ClassifierMode,
    patterns: PatternSet,
    models: HashMap<String, LanguageModel>,
}

impl NluEngine {
    /// Creates an engine with the given classifier mode.
    #[must_use]
    pub fn new(mode: ClassifierMode) -> Self {
        Self {
            mode,
            patterns: PatternSet::universal(),
            models: HashMap::new(),
        }
    }

    /// Returns true if a model exists for the language.
    #[must_use]
    pub fn is_trained(&self, language: &str) -> bool {
        self.models.contains_key(language)
    }

    /// Trains a language, replacing any existing model for it.
    ///
    /// Intents excluded by the filter are left out of the new model
    /// entirely. Example sentences are annotated through the engine's own
    /// entity extraction before seeding the classifier, so they are
    /// compared in the same space as recognition input.
    pub fn train(&mut self, language: &str, data: &TrainingData, filter: &IntentFilter) {
        let mut intents = Vec::new();
        for training in &data.intents {
            if !filter.allows(training.intent) {
                continue;
            }

            let mut phrases = Vec::new();
            for entity in &training.entities {
                for group in &entity.matches {
                    phrases.push(TrainedPhrase::new(
                        entity.entity,
                        &group.match_id,
                        group.samples.clone(),
                    ));
                }
            }

            let examples = training
                .examples
                .iter()
                .map(|sentence| {
                    let spans = self.extract(sentence, &phrases);
                    let annotated = annotate(sentence, &spans);
                    TrainedExample {
                        tokens: classifier::tokenize(&annotated),
                    }
                })
                .collect();

            intents.push(IntentModel {
                intent: training.intent,
                phrases,
                examples,
            });
        }
        self.models.insert(language.to_string(), LanguageModel { intents });
    }

    /// Recognizes one sentence in one language.
    ///
    /// Returns `None` for untrained languages (nothing is inserted) and
    /// for sentences no trained intent can claim. Per candidate intent the
    /// sentence is entity-extracted, annotated, and scored against that
    /// intent's examples; the best score wins. When every intent scores
    /// zero, the intent whose extraction claimed the most characters wins,
    /// provided it found at least one entity.
    #[must_use]
    pub fn recognize(
        &self,
        language: &str,
        sentence: &str,
        filter: &IntentFilter,
    ) -> Option<NlpResult> {
        let model = self.models.get(language)?;

        let mut results: Vec<(NlpResult, usize)> = Vec::new();
        for intent_model in &model.intents {
            if !filter.allows(intent_model.intent) {
                continue;
            }

            let spans = self.extract(sentence, &intent_model.phrases);
            let annotated = annotate(sentence, &spans);
            let tokens = classifier::tokenize(&annotated);
            let score = intent_model
                .examples
                .iter()
                .map(|example| classifier::score(self.mode, &tokens, &example.tokens))
                .fold(0.0_f64, f64::max);
            let claimed = spans
                .iter()
                .map(|span| span.entity.raw_match.chars().count())
                .sum();

            results.push((
                NlpResult {
                    intent: intent_model.intent,
                    score,
                    entities: spans.into_iter().map(|span| span.entity).collect(),
                    annotated_text: annotated,
                },
                claimed,
            ));
        }

        let mut best_scored: Option<(f64, usize)> = None;
        let mut best_claimed: Option<(usize, usize)> = None;
        for (i, (result, claimed)) in results.iter().enumerate() {
            if result.score > 0.0 && best_scored.is_none_or(|(s, _)| result.score > s) {
                best_scored = Some((result.score, i));
            }
            if !result.entities.is_empty() && best_claimed.is_none_or(|(c, _)| *claimed > c) {
                best_claimed = Some((*claimed, i));
            }
        }

        let index = best_scored
            .map(|(_, i)| i)
            .or_else(|| best_claimed.map(|(_, i)| i))?;
        Some(results.swap_remove(index).0)
    }

    /// Runs pattern and trained-phrase extraction over one sentence.
    fn extract(&self, sentence: &str, phrases: &[TrainedPhrase]) -> Vec<ResolvedSpan> {
        let mut candidates = self.patterns.candidates(sentence);
        candidates.extend(phrase_candidates(sentence, phrases));
        resolve_overlaps(sentence, candidates)
    }
}

impl Default for NluEngine {
    fn default() -> Self {
        Self::new(ClassifierMode::default())
    }
}
