//! The language-dictionary contract.
//!
//! A language dictionary describes, for one human language, which phrases
//! map to which entities and which example sentences seed the intent
//! classifier. Dictionaries are authored externally (typically as JSON);
//! this module defines their already-parsed shape and the loader seam the
//! trainer pulls them through.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The nested phrase dictionary for one language.
///
/// Keys are, from the outside in: intent name, entity name, match id. The
/// innermost value lists the sample phrases that resolve to the match id.
/// Key order is preserved all the way through conversion.
pub type TranslationMap = IndexMap<String, IndexMap<String, IndexMap<String, Vec<String>>>>;

/// Example sentences seeding the classifier for one intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingIntentExample {
    /// The intent's dictionary name, e.g. `testcase`.
    pub intent: String,
    /// Example sentences in the dictionary's language.
    pub sentences: Vec<String>,
}

/// The already-parsed content of one language dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageContent {
    /// Structural keywords of the specification language, unused by
    /// recognition but part of the dictionary shape.
    #[serde(default)]
    pub keywords: Option<IndexMap<String, Vec<String>>>,
    /// The phrase dictionary.
    #[serde(default)]
    pub nlp: TranslationMap,
    /// Classifier example sentences.
    #[serde(default)]
    pub training: Vec<TrainingIntentExample>,
}

/// Provides language dictionaries to the trainer.
///
/// Implementations own the actual storage (files, embedded data, a test
/// fixture); the trainer performs no I/O itself.
pub trait LanguageContentLoader {
    /// Returns the content for a language, or `None` if unavailable.
    fn load(&self, language: &str) -> Option<&LanguageContent>;

    /// Returns true if content for the language is available.
    fn has(&self, language: &str) -> bool {
        self.load(language).is_some()
    }
}

/// A loader backed by an in-memory map, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoader {
    contents: IndexMap<String, LanguageContent>,
}

impl InMemoryLoader {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a language's content, replacing any previous content.
    pub fn insert(&mut self, language: impl Into<String>, content: LanguageContent) {
        self.contents.insert(language.into(), content);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>, content: LanguageContent) -> Self {
        self.insert(language, content);
        self
    }
}

impl LanguageContentLoader for InMemoryLoader {
    fn load(&self, language: &str) -> Option<&LanguageContent> {
        self.contents.get(language)
    }
}
