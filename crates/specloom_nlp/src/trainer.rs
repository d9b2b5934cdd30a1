//! Bridges language dictionaries to the engine.

use crate::content::LanguageContentLoader;
use crate::converter::TrainingDataConverter;
use crate::engine::{IntentFilter, NluEngine};

/// Trains engines from a dictionary loader.
///
/// Performs no I/O itself; the loader seam owns storage.
pub struct NlpTrainer<'a> {
    loader: &'a dyn LanguageContentLoader,
}

impl<'a> NlpTrainer<'a> {
    /// Creates a trainer over a loader.
    #[must_use]
    pub fn new(loader: &'a dyn LanguageContentLoader) -> Self {
        Self { loader }
    }

    /// Returns true if a dictionary exists for the language.
    #[must_use]
    pub fn can_be_trained(&self, language: &str) -> bool {
        self.loader.has(language)
    }

    /// Trains the engine for one language through its dictionary.
    ///
    /// Returns false, leaving the engine untouched, when the language is
    /// unavailable.
    pub fn train(&self, engine: &mut NluEngine, language: &str, filter: &IntentFilter) -> bool {
        let Some(content) = self.loader.load(language) else {
            return false;
        };
        let data = TrainingDataConverter::convert(&content.nlp, &content.training);
        engine.train(language, &data, filter);
        true
    }
}
