//! Integration tests for dictionary-driven training.
//!
//! Covers per-language model isolation, non-additive retraining, and
//! intent filtering at train and recognize time.

use specloom_foundation::{Entity, Intent};
use specloom_nlp::{InMemoryLoader, IntentFilter, LanguageContent, NlpTrainer, NluEngine};

fn content(json: &str) -> LanguageContent {
    serde_json::from_str(json).unwrap()
}

fn full_dictionary() -> LanguageContent {
    content(
        r#"{
            "nlp": {
                "testcase": {
                    "ui_action": { "click": ["click"] }
                },
                "database": {
                    "db_property": { "host": ["host"] },
                    "ui_connector": { "is": ["is"] }
                }
            },
            "training": [
                { "intent": "testcase", "sentences": ["when i click {element}"] },
                { "intent": "database", "sentences": ["host is {value}"] }
            ]
        }"#,
    )
}

// =============================================================================
// Per-language isolation
// =============================================================================

#[test]
fn is_trained_is_tracked_per_language() {
    let loader = InMemoryLoader::new()
        .with_language("en", full_dictionary())
        .with_language("pt", full_dictionary());
    let trainer = NlpTrainer::new(&loader);
    let mut engine = NluEngine::default();

    assert!(!engine.is_trained("en"));
    assert!(trainer.train(&mut engine, "en", &IntentFilter::All));
    assert!(engine.is_trained("en"));
    assert!(!engine.is_trained("pt"));

    assert!(trainer.train(&mut engine, "pt", &IntentFilter::All));
    assert!(engine.is_trained("en"));
    assert!(engine.is_trained("pt"));
}

#[test]
fn training_an_unknown_language_changes_nothing() {
    let loader = InMemoryLoader::new().with_language("en", full_dictionary());
    let trainer = NlpTrainer::new(&loader);
    let mut engine = NluEngine::default();

    assert!(!trainer.can_be_trained("fr"));
    assert!(!trainer.train(&mut engine, "fr", &IntentFilter::All));
    assert!(!engine.is_trained("fr"));
    assert!(engine.recognize("fr", "anything", &IntentFilter::All).is_none());
}

// =============================================================================
// Retraining
// =============================================================================

#[test]
fn retraining_replaces_the_model_wholesale() {
    let original = InMemoryLoader::new().with_language("en", full_dictionary());
    let replacement = InMemoryLoader::new().with_language(
        "en",
        content(
            r#"{
                "nlp": {
                    "testcase": {
                        "ui_action": { "fill": ["fill"] }
                    }
                },
                "training": [
                    { "intent": "testcase", "sentences": ["i fill {element}"] }
                ]
            }"#,
        ),
    );
    let mut engine = NluEngine::default();

    assert!(NlpTrainer::new(&original).train(&mut engine, "en", &IntentFilter::All));
    let before = engine
        .recognize("en", "when i click {Ok}", &IntentFilter::All)
        .unwrap();
    assert!(before.has(Entity::UiAction));

    // Retrain the same language from a dictionary that no longer knows
    // "click": the old phrase must be gone, not merged.
    assert!(NlpTrainer::new(&replacement).train(&mut engine, "en", &IntentFilter::All));
    let after = engine
        .recognize("en", "when i click {Ok}", &IntentFilter::All)
        .unwrap();
    assert!(!after.has(Entity::UiAction));
}

// =============================================================================
// Intent filters
// =============================================================================

#[test]
fn train_filter_excludes_other_intents() {
    let loader = InMemoryLoader::new().with_language("en", full_dictionary());
    let trainer = NlpTrainer::new(&loader);
    let mut engine = NluEngine::default();

    assert!(trainer.train(&mut engine, "en", &IntentFilter::only(Intent::Database)));

    // A step sentence can only come back as the sole trained intent.
    let result = engine
        .recognize("en", "when i click {Ok}", &IntentFilter::All)
        .unwrap();
    assert_eq!(result.intent, Intent::Database);
}

#[test]
fn recognize_filter_narrows_the_candidates() {
    let loader = InMemoryLoader::new().with_language("en", full_dictionary());
    let trainer = NlpTrainer::new(&loader);
    let mut engine = NluEngine::default();
    assert!(trainer.train(&mut engine, "en", &IntentFilter::All));

    let open = engine
        .recognize("en", r#"host is "local""#, &IntentFilter::All)
        .unwrap();
    assert_eq!(open.intent, Intent::Database);

    let narrowed = engine
        .recognize(
            "en",
            r#"host is "local""#,
            &IntentFilter::only(Intent::TestCase),
        )
        .unwrap();
    assert_eq!(narrowed.intent, Intent::TestCase);
}
