//! Integration tests for database property recognition.

use specloom_foundation::{DatabasePropertyNode, IssueKind, Location};
use specloom_nlp::{ClassifierMode, InMemoryLoader, LanguageContent, NlpTrainer};
use specloom_recognizer::DatabasePropertyRecognizer;

fn loader() -> InMemoryLoader {
    let content: LanguageContent = serde_json::from_str(
        r#"{
            "nlp": {
                "database": {
                    "db_property": {
                        "type": ["type"],
                        "host": ["host"],
                        "port": ["port"],
                        "username": ["username"],
                        "password": ["password"],
                        "charset": ["charset"]
                    },
                    "ui_connector": { "is": ["is"] }
                }
            },
            "training": [
                {
                    "intent": "database",
                    "sentences": ["- type is {value}", "- host is {value}", "- port is {number}"]
                }
            ]
        }"#,
    )
    .unwrap();
    InMemoryLoader::new().with_language("en", content)
}

fn trained() -> DatabasePropertyRecognizer {
    let loader = loader();
    let trainer = NlpTrainer::new(&loader);
    let mut recognizer = DatabasePropertyRecognizer::new(ClassifierMode::Fuzzy);
    assert!(recognizer.train_with(&trainer, "en"));
    recognizer
}

fn nodes(contents: &[&str]) -> Vec<DatabasePropertyNode> {
    contents
        .iter()
        .enumerate()
        .map(|(index, content)| {
            let line = u32::try_from(index).unwrap() + 1;
            DatabasePropertyNode::new(*content, Location::new(line, 3))
        })
        .collect()
}

#[test]
fn a_connection_block_validates_clean() {
    let recognizer = trained();
    let mut document = nodes(&[
        r#"- type is "mysql""#,
        r#"- host is "db.local""#,
        "- port is 3306",
        r#"- username is "root""#,
        r#"- password is "secret""#,
        r#"- charset is "utf8""#,
    ]);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let ok = recognizer.recognize_sentences("en", &mut document, &mut errors, &mut warnings);

    assert!(ok, "{errors:?} {warnings:?}");
    assert!(warnings.is_empty());

    let projected: Vec<_> = document
        .iter()
        .map(|node| {
            (
                node.property.as_deref().unwrap(),
                node.value.as_deref().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        projected,
        vec![
            ("type", "mysql"),
            ("host", "db.local"),
            ("port", "3306"),
            ("username", "root"),
            ("password", "secret"),
            ("charset", "utf8"),
        ]
    );
}

#[test]
fn constant_ports_pass_the_rule_but_lack_a_value() {
    let recognizer = trained();
    let mut document = nodes(&["- port is [DB PORT]"]);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let ok = recognizer.recognize_sentences("en", &mut document, &mut errors, &mut warnings);

    // The rule admits a constant, but the connection layer needs a literal.
    assert!(!ok);
    assert_eq!(document[0].property.as_deref(), Some("port"));
    assert!(document[0].value.is_none());
    assert!(
        errors
            .iter()
            .any(|issue| matches!(issue.kind, IssueKind::MissingValue { .. }))
    );
}

#[test]
fn unrecognizable_lines_degrade_to_warnings() {
    let recognizer = trained();
    let mut document = nodes(&["@@@@", r#"- host is "h""#]);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let ok = recognizer.recognize_sentences("en", &mut document, &mut errors, &mut warnings);

    assert!(ok, "{errors:?}");
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        warnings[0].kind,
        IssueKind::SentenceNotRecognized { .. }
    ));
    assert!(document[0].nlp_result.is_none());
    assert_eq!(document[1].value.as_deref(), Some("h"));
}
