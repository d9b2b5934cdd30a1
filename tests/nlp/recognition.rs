//! Integration tests for end-to-end sentence recognition.
//!
//! Exercises the full pipeline from JSON dictionaries through training to
//! scored, entity-bearing results.

use specloom_foundation::{Entity, Intent};
use specloom_nlp::{
    ClassifierMode, InMemoryLoader, IntentFilter, LanguageContent, NlpTrainer, NluEngine,
};

fn dictionary(json: &str) -> LanguageContent {
    serde_json::from_str(json).unwrap()
}

fn english() -> LanguageContent {
    dictionary(
        r#"{
            "nlp": {
                "testcase": {
                    "ui_action": {
                        "click": ["click", "click on"],
                        "see": ["see"],
                        "fill": ["fill"]
                    },
                    "exec_action": { "execute": ["execute"] }
                },
                "database": {
                    "db_property": { "host": ["host"], "port": ["port"] },
                    "ui_connector": { "is": ["is"] }
                }
            },
            "training": [
                {
                    "intent": "testcase",
                    "sentences": [
                        "when i click {element}",
                        "then i see {value}",
                        "i fill {element} with {value}"
                    ]
                },
                {
                    "intent": "database",
                    "sentences": ["host is {value}", "port is {number}"]
                }
            ]
        }"#,
    )
}

fn portuguese() -> LanguageContent {
    dictionary(
        r#"{
            "nlp": {
                "testcase": {
                    "ui_action": { "click": ["clico", "clico em"] }
                }
            },
            "training": [
                { "intent": "testcase", "sentences": ["quando eu clico em {element}"] }
            ]
        }"#,
    )
}

fn engine() -> NluEngine {
    engine_with(ClassifierMode::Fuzzy)
}

fn engine_with(mode: ClassifierMode) -> NluEngine {
    let loader = InMemoryLoader::new()
        .with_language("en", english())
        .with_language("pt", portuguese());
    let trainer = NlpTrainer::new(&loader);
    let mut engine = NluEngine::new(mode);
    assert!(trainer.train(&mut engine, "en", &IntentFilter::All));
    assert!(trainer.train(&mut engine, "pt", &IntentFilter::All));
    engine
}

// =============================================================================
// Scores
// =============================================================================

#[test]
fn the_exact_training_wording_scores_one() {
    let engine = engine();
    let result = engine
        .recognize("en", "when i click {element}", &IntentFilter::All)
        .unwrap();
    assert_eq!(result.intent, Intent::TestCase);
    assert!((result.score - 1.0).abs() < f64::EPSILON);
    assert_eq!(result.annotated_text, "when i {ui_action} {ui_element}");
}

#[test]
fn near_miss_wording_scores_below_one() {
    let engine = engine();
    let result = engine
        .recognize("en", "i click {A} quickly", &IntentFilter::All)
        .unwrap();
    assert_eq!(result.intent, Intent::TestCase);
    assert!(result.score > 0.0 && result.score < 1.0);
    // Three of four tokens line up with "when i click {element}".
    assert!((result.score - 0.75).abs() < 1e-9);
}

// =============================================================================
// Intent competition
// =============================================================================

#[test]
fn the_higher_scoring_intent_wins() {
    let engine = engine();
    let result = engine
        .recognize("en", r#"the host is "local""#, &IntentFilter::All)
        .unwrap();
    assert_eq!(result.intent, Intent::Database);
    assert!(result.score > 0.5);
    assert_eq!(result.first_of(Entity::DbProperty).unwrap().value, "host");
    assert_eq!(result.first_of(Entity::Value).unwrap().value, "local");
}

#[test]
fn zero_scores_fall_back_to_claimed_characters() {
    let engine = engine();
    // No trained wording matches, but the quoted value still claims a span.
    let result = engine
        .recognize("en", r#""cfg" @@"#, &IntentFilter::All)
        .unwrap();
    assert!(result.score.abs() < f64::EPSILON);
    assert_eq!(result.first_of(Entity::Value).unwrap().value, "cfg");
}

#[test]
fn entity_free_gibberish_is_unrecognized() {
    let engine = engine();
    assert!(engine.recognize("en", "@@@@", &IntentFilter::All).is_none());
}

// =============================================================================
// Languages
// =============================================================================

#[test]
fn match_ids_are_stable_across_languages() {
    let engine = engine();

    let en = engine
        .recognize("en", "when i click {Ok}", &IntentFilter::All)
        .unwrap();
    let pt = engine
        .recognize("pt", "quando eu clico em {Ok}", &IntentFilter::All)
        .unwrap();

    // The wording differs per language; the match id does not.
    let en_action = en.first_of(Entity::UiAction).unwrap();
    let pt_action = pt.first_of(Entity::UiAction).unwrap();
    assert_eq!(en_action.value, "click");
    assert_eq!(pt_action.value, "click");
    assert_eq!(en_action.raw_match, "click");
    assert_eq!(pt_action.raw_match, "clico em");
}

#[test]
fn unknown_languages_are_not_recognized() {
    let engine = engine();
    assert!(engine
        .recognize("fr", "when i click {Ok}", &IntentFilter::All)
        .is_none());
}

// =============================================================================
// Classifier modes
// =============================================================================

#[test]
fn fuzzy_mode_forgives_reordering() {
    let fuzzy = engine_with(ClassifierMode::Fuzzy);
    let sequential = engine_with(ClassifierMode::Sequential);

    let sentence = "{A} i click";
    let fuzzy_result = fuzzy.recognize("en", sentence, &IntentFilter::All).unwrap();
    let sequential_result = sequential
        .recognize("en", sentence, &IntentFilter::All)
        .unwrap();

    assert_eq!(fuzzy_result.intent, Intent::TestCase);
    assert_eq!(sequential_result.intent, Intent::TestCase);
    assert!(fuzzy_result.score > sequential_result.score);
    assert!(fuzzy_result.score > 0.7);
    assert!(sequential_result.score < 0.6);
}
