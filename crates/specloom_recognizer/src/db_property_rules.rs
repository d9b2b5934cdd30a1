//! The syntax rule table for database property sentences.
//!
//! Every connection property takes exactly one operand; only the accepted
//! operand kinds vary.

use indexmap::IndexMap;
use specloom_foundation::Entity;

use crate::rules::{Occurrence, PartialRule, RuleBuilder, RuleDefaults, SyntaxRule};

/// The baseline database property rule: exactly one value, number, or
/// constant.
#[must_use]
pub fn db_property_defaults() -> RuleDefaults {
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

/// Builds the rule table for database properties, one rule per property name.
#[must_use]
pub fn db_property_rules() -> Vec<SyntaxRule> {
    RuleBuilder::build(
        vec![
            PartialRule::named("type").targets(vec![Entity::Value]),
            PartialRule::named("path").targets(vec![Entity::Value, Entity::Constant]),
            PartialRule::named("name"),
            PartialRule::named("host"),
            PartialRule::named("port").targets(vec![Entity::Number, Entity::Constant]),
            PartialRule::named("username"),
            PartialRule::named("password"),
            PartialRule::named("charset").targets(vec![Entity::Value]),
            PartialRule::named("options").targets(vec![Entity::Value, Entity::Constant]),
        ],
        &db_property_defaults(),
    )
}
