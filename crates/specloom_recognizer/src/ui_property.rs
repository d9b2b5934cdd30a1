//! Recognition of UI element property sentences.
//!
//! A property sentence names a property and the value it holds. Values are
//! typed on the way in: literals go through detection, while constants,
//! element references, queries, and lists keep a reference kind telling the
//! downstream layers what to resolve.

use specloom_foundation::{
    Entity, Intent, Issue, IssueKind, NlpEntity, NlpResult, PropertyReference, PropertyValue,
    UiPropertyNode, Value,
};
use specloom_nlp::{ClassifierMode, IntentFilter, NlpTrainer, NluEngine};

use crate::rules::SyntaxRule;
use crate::sentence::NodeSentenceRecognizer;
use crate::ui_property_rules::ui_property_rules;

/// Recognizes UI property sentences, covering both declarations and item
/// queries.
#[derive(Debug)]
pub struct UiPropertyRecognizer {
    engine: NluEngine,
    rules: Vec<SyntaxRule>,
}

impl UiPropertyRecognizer {
    /// Creates an untrained UI property recognizer.
    #[must_use]
    pub fn new(mode: ClassifierMode) -> Self {
        Self {
            engine: NluEngine::new(mode),
            rules: ui_property_rules(),
        }
    }

    /// Returns true if a model exists for the language.
    #[must_use]
    pub fn is_trained(&self, language: &str) -> bool {
        self.engine.is_trained(language)
    }

    /// Trains the engine for one language, restricted to the two UI
    /// intents.
    ///
    /// Returns false when the trainer has no dictionary for the language.
    pub fn train_with(&mut self, trainer: &NlpTrainer<'_>, language: &str) -> bool {
        trainer.train(
            &mut self.engine,
            language,
            &IntentFilter::Only(vec![Intent::Ui, Intent::UiItemQuery]),
        )
    }

    /// Recognizes a batch of property sentences, projecting the property
    /// name and its typed values.
    ///
    /// Returns true iff no error was appended.
    pub fn recognize_sentences(
        &self,
        language: &str,
        nodes: &mut [UiPropertyNode],
        errors: &mut Vec<Issue>,
        warnings: &mut Vec<Issue>,
    ) -> bool {
        let rules = &self.rules;
        NodeSentenceRecognizer::recognize(
            &self.engine,
            language,
            nodes,
            &[Intent::Ui, Intent::UiItemQuery],
            "UI property",
            errors,
            warnings,
            |node, result, errors, warnings| {
                Self::project(rules, node, result, errors, warnings);
            },
        )
    }

    fn project(
        rules: &[SyntaxRule],
        node: &mut UiPropertyNode,
        result: &NlpResult,
        errors: &mut Vec<Issue>,
        warnings: &mut Vec<Issue>,
    ) {
        let Some(property) = result.first_of(Entity::UiProperty) else {
            warnings.push(Issue::new(
                IssueKind::MissingProperty {
                    content: node.content.clone(),
                },
                node.location.clone(),
            ));
            return;
        };
        let property_name = property.value.clone();
        node.property = Some(property_name.clone());

        NodeSentenceRecognizer::validate(
            node,
            &result.entities,
            rules,
            &property_name,
            errors,
            warnings,
        );

        // Values are still projected on a rule violation so downstream
        // tooling can report on what was written.
        node.values = result
            .entities
            .iter()
            .filter_map(as_property_value)
            .collect();
    }
}

/// Converts one recognized entity into a typed property value.
///
/// Verbs, connectors, and the property name itself carry no value and map
/// to `None`.
fn as_property_value(entity: &NlpEntity) -> Option<PropertyValue> {
    match entity.entity {
        Entity::Value | Entity::Number => Some(PropertyValue::plain(Value::detect(&entity.value))),
        Entity::Constant => Some(PropertyValue::new(
            PropertyReference::Constant,
            Value::String(entity.value.clone()),
        )),
        Entity::UiElement => Some(PropertyValue::new(
            PropertyReference::UiElement,
            Value::String(entity.value.clone()),
        )),
        Entity::Query => Some(PropertyValue::new(
            PropertyReference::DatabaseAndTable,
            Value::String(entity.value.clone()),
        )),
        Entity::ValueList => Some(PropertyValue::new(
            PropertyReference::List,
            Value::List(parse_value_list(&entity.value)),
        )),
        Entity::UiElementType | Entity::UiDataType => {
            Some(PropertyValue::plain(Value::String(entity.value.clone())))
        }
        _ => None,
    }
}

/// Parses the raw bracketed text of a value list into typed items.
///
/// Items are numbers or double-quoted strings. Quoted content is kept
/// verbatim as a string, matching how quoting suppresses detection
/// elsewhere; unquoted items go through type detection.
fn parse_value_list(raw: &str) -> Vec<Value> {
    let inner = raw
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(raw);

    let mut items = Vec::new();
    let mut rest = inner;
    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        if rest.is_empty() {
            break;
        }
        if let Some(quoted) = rest.strip_prefix('"') {
            let mut end = None;
            let mut escaped = false;
            for (index, c) in quoted.char_indices() {
                if escaped {
                    escaped = false;
                    continue;
                }
                match c {
                    '\\' => escaped = true,
                    '"' => {
                        end = Some(index);
                        break;
                    }
                    _ => {}
                }
            }
            let Some(end) = end else {
                // Unterminated quote: keep the remainder and stop.
                items.push(Value::String(quoted.to_string()));
                break;
            };
            items.push(Value::String(quoted[..end].to_string()));
            rest = &quoted[end + 1..];
        } else {
            let end = rest.find(',').unwrap_or(rest.len());
            let item = rest[..end].trim();
            if !item.is_empty() {
                items.push(Value::detect(item));
            }
            rest = &rest[end..];
        }
    }
    items
}
