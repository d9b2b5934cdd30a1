//! The syntax rule table for UI property sentences.
//!
//! Properties normally carry exactly one value-like operand. `value` itself
//! is the permissive one, accepting references to constants, other UI
//! elements, queries, and whole lists.

use indexmap::IndexMap;
use specloom_foundation::Entity;

use crate::rules::{Occurrence, PartialRule, RuleBuilder, RuleDefaults, SyntaxRule};

/// The baseline UI property rule: exactly one plain value, number, or
/// constant.
#[must_use]
pub fn ui_property_defaults() -> RuleDefaults {
    let mut occurrences = IndexMap::new();
    occurrences.insert(Entity::Value, Occurrence::optional());
    occurrences.insert(Entity::Number, Occurrence::optional());
    occurrences.insert(Entity::Constant, Occurrence::optional());
    RuleDefaults {
        min_targets: 1,
        max_targets: 1,
        targets: vec![Entity::Value, Entity::Number, Entity::Constant],
        occurrences,
        must_be_used_with: Vec::new(),
    }
}

/// Builds the rule table for UI properties, one rule per property name.
#[must_use]
pub fn ui_property_rules() -> Vec<SyntaxRule> {
    RuleBuilder::build(
        vec![
            PartialRule::named("id").targets(vec![Entity::Value]),
            PartialRule::named("type")
                .targets(vec![Entity::UiElementType])
                .occurrence(Entity::UiElementType, Occurrence::optional()),
            PartialRule::named("editable")
                .min_targets(0)
                .targets(vec![Entity::Value]),
            PartialRule::named("data_type")
                .targets(vec![Entity::UiDataType])
                .occurrence(Entity::UiDataType, Occurrence::optional()),
            PartialRule::named("value")
                .targets(vec![
                    Entity::Value,
                    Entity::Number,
                    Entity::Constant,
                    Entity::Query,
                    Entity::UiElement,
                    Entity::ValueList,
                ])
                .occurrence(Entity::Value, Occurrence::optional())
                .occurrence(Entity::Number, Occurrence::optional())
                .occurrence(Entity::Constant, Occurrence::optional())
                .occurrence(Entity::Query, Occurrence::optional())
                .occurrence(Entity::UiElement, Occurrence::optional())
                .occurrence(Entity::ValueList, Occurrence::optional()),
            PartialRule::named("min_length").targets(vec![Entity::Number, Entity::Constant]),
            PartialRule::named("max_length").targets(vec![Entity::Number, Entity::Constant]),
            PartialRule::named("min_value"),
            PartialRule::named("max_value"),
            PartialRule::named("format").targets(vec![Entity::Value, Entity::Constant]),
            PartialRule::named("required")
                .min_targets(0)
                .targets(vec![Entity::Value]),
            PartialRule::named("locale").targets(vec![Entity::Value]),
            PartialRule::named("locale_format").targets(vec![Entity::Value]),
        ],
        &ui_property_defaults(),
    )
}
