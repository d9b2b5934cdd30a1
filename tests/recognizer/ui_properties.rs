//! Integration tests for UI property recognition.
//!
//! Covers typed value projection, the item-query intent, and mixed-property
//! documents.

use specloom_foundation::{
    Intent, Location, PropertyReference, PropertyValue, UiPropertyNode, Value,
};
use specloom_nlp::{ClassifierMode, InMemoryLoader, LanguageContent, NlpTrainer};
use specloom_recognizer::UiPropertyRecognizer;

fn loader() -> InMemoryLoader {
    let content: LanguageContent = serde_json::from_str(
        r#"{
            "nlp": {
                "ui": {
                    "ui_property": {
                        "data_type": ["data type"],
                        "max_value": ["maximum value"],
                        "min_length": ["minimum length"],
                        "value": ["value"]
                    },
                    "ui_connector": { "is": ["is"] },
                    "ui_data_type": { "string": ["string"] }
                },
                "ui_item_query": {
                    "ui_property": { "value": ["value"] },
                    "ui_connector": { "comes_from": ["comes from"] }
                }
            },
            "training": [
                {
                    "intent": "ui",
                    "sentences": [
                        "data type is string",
                        "maximum value is {value}",
                        "minimum length is 2",
                        "value is {value}"
                    ]
                },
                {
                    "intent": "ui_item_query",
                    "sentences": ["value comes from {query}"]
                }
            ]
        }"#,
    )
    .unwrap();
    InMemoryLoader::new().with_language("en", content)
}

fn trained() -> UiPropertyRecognizer {
    let loader = loader();
    let trainer = NlpTrainer::new(&loader);
    let mut recognizer = UiPropertyRecognizer::new(ClassifierMode::Fuzzy);
    assert!(recognizer.train_with(&trainer, "en"));
    recognizer
}

fn nodes(contents: &[&str]) -> Vec<UiPropertyNode> {
    contents
        .iter()
        .enumerate()
        .map(|(index, content)| {
            let line = u32::try_from(index).unwrap() + 1;
            UiPropertyNode::new(*content, Location::new(line, 5))
        })
        .collect()
}

// =============================================================================
// Typed projection
// =============================================================================

#[test]
fn data_types_project_their_match_id() {
    let recognizer = trained();
    let mut document = nodes(&["data type is string"]);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let ok = recognizer.recognize_sentences("en", &mut document, &mut errors, &mut warnings);

    assert!(ok, "{errors:?}");
    assert_eq!(document[0].property.as_deref(), Some("data_type"));
    assert_eq!(
        document[0].values,
        vec![PropertyValue::plain(Value::String("string".to_string()))]
    );
}

#[test]
fn quoted_dates_are_detected_on_projection() {
    let recognizer = trained();
    let mut document = nodes(&[r#"maximum value is "2030-12-31""#]);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let ok = recognizer.recognize_sentences("en", &mut document, &mut errors, &mut warnings);

    assert!(ok, "{errors:?}");
    assert_eq!(document[0].property.as_deref(), Some("max_value"));
    let value = &document[0].values[0];
    assert_eq!(value.reference, PropertyReference::None);
    assert_eq!(value.value.type_name(), "date");
    assert_eq!(value.value.to_string(), "2030-12-31");
}

// =============================================================================
// Item queries
// =============================================================================

#[test]
fn query_sentences_win_the_item_query_intent() {
    let recognizer = trained();
    let mut document = nodes(&[r#"value comes from "SELECT id FROM users""#]);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let ok = recognizer.recognize_sentences("en", &mut document, &mut errors, &mut warnings);

    assert!(ok, "{errors:?}");
    let node = &document[0];
    assert_eq!(node.nlp_result.as_ref().unwrap().intent, Intent::UiItemQuery);
    assert_eq!(node.property.as_deref(), Some("value"));
    assert_eq!(
        node.values,
        vec![PropertyValue::new(
            PropertyReference::DatabaseAndTable,
            Value::String("SELECT id FROM users".to_string())
        )]
    );
}

// =============================================================================
// Mixed documents
// =============================================================================

#[test]
fn a_property_block_projects_every_node() {
    let recognizer = trained();
    let mut document = nodes(&[
        r#"value is "admin""#,
        "minimum length is 2",
        "data type is string",
    ]);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let ok = recognizer.recognize_sentences("en", &mut document, &mut errors, &mut warnings);

    assert!(ok, "{errors:?}");
    assert!(warnings.is_empty());

    let properties: Vec<_> = document
        .iter()
        .map(|node| node.property.as_deref().unwrap())
        .collect();
    assert_eq!(properties, vec!["value", "min_length", "data_type"]);

    assert_eq!(
        document[0].values,
        vec![PropertyValue::plain(Value::String("admin".to_string()))]
    );
    assert_eq!(
        document[1].values,
        vec![PropertyValue::plain(Value::Integer(2))]
    );
}
