//! Integration tests for the universal pattern recognizers.
//!
//! Exercises entity extraction as a pure function over sentences, covering
//! recognizer priorities, escape handling, and span resolution.

use specloom_foundation::Entity;
use specloom_nlp::PatternSet;

/// Extracts `(entity, value, position)` triples in sentence order.
fn entities(sentence: &str) -> Vec<(Entity, String, usize)> {
    PatternSet::universal()
        .match_entities(sentence)
        .into_iter()
        .map(|entity| (entity.entity, entity.value, entity.position))
        .collect()
}

// =============================================================================
// Individual recognizers
// =============================================================================

#[test]
fn quoted_text_is_a_value() {
    assert_eq!(
        entities(r#""x""#),
        vec![(Entity::Value, "x".to_string(), 0)]
    );
}

#[test]
fn select_statements_are_queries_not_values() {
    let found = entities(r#""SELECT a FROM b""#);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, Entity::Query);
    assert_eq!(found[0].1, "SELECT a FROM b");
}

#[test]
fn bracketed_names_are_constants() {
    let found = entities("port [MAX_PORT] is 8080");
    assert_eq!(
        found,
        vec![
            (Entity::Constant, "MAX_PORT".to_string(), 5),
            (Entity::Number, "8080".to_string(), 19),
        ]
    );
}

#[test]
fn single_quotes_are_commands() {
    let found = entities("run 'npm test' now");
    assert_eq!(found, vec![(Entity::Command, "npm test".to_string(), 4)]);
}

#[test]
fn tildes_are_states() {
    let found = entities("given ~logged in~");
    assert_eq!(found, vec![(Entity::State, "logged in".to_string(), 6)]);
}

#[test]
fn braces_and_angles_are_element_references() {
    let found = entities("{Name} and <#id>");
    assert_eq!(
        found,
        vec![
            (Entity::UiElement, "Name".to_string(), 0),
            (Entity::UiLiteral, "#id".to_string(), 11),
        ]
    );
}

// =============================================================================
// Priorities and span resolution
// =============================================================================

#[test]
fn values_swallow_numbers_inside_their_span() {
    let found = entities(r#"see 42 in "answer 42""#);
    assert_eq!(
        found,
        vec![
            (Entity::Number, "42".to_string(), 4),
            (Entity::Value, "answer 42".to_string(), 10),
        ]
    );
}

#[test]
fn lists_swallow_their_items() {
    let found = entities(r#"one of [5, "five"]"#);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, Entity::ValueList);
    assert_eq!(found[0].1, r#"[5, "five"]"#);
}

#[test]
fn empty_brackets_match_nothing() {
    assert!(entities("[]").is_empty());
    assert!(entities("[  ]").is_empty());
}

#[test]
fn values_keep_sentence_order() {
    let found = entities(r#" prop is "foo" or "bar" "#);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].1, "foo");
    assert_eq!(found[1].1, "bar");
    assert!(found[0].2 < found[1].2);
}

// =============================================================================
// Escapes
// =============================================================================

#[test]
fn escaped_quotes_are_preserved_verbatim() {
    let found = entities(r#" "foo and \"bar\"" "#);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].1, r#"foo and \"bar\""#);
}

#[test]
fn trailing_backslash_defeats_the_value_recognizer() {
    // The closing quote is consumed as an escape, so nothing matches.
    assert!(entities(r#""value \""#).is_empty());
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn positions_count_characters_not_bytes() {
    let found = entities(r#"é "x""#);
    assert_eq!(found, vec![(Entity::Value, "x".to_string(), 2)]);
}
