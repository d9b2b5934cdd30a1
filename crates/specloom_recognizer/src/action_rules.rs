//! The syntax rule table for UI action steps.
//!
//! Most actions take at most one element or literal target and tolerate a
//! single value alongside it, so the default covers them; entries only spell
//! out what deviates. Actions whose operands are values rather than widgets
//! (press, run, install) redefine their target kinds instead.

use indexmap::IndexMap;
use specloom_foundation::Entity;

use crate::rules::{Occurrence, PartialRule, RuleBuilder, RuleDefaults, SyntaxRule};

/// Effectively unbounded count for actions that accept arbitrarily many.
const MANY: usize = 999;

/// The baseline UI action rule: at most one element or literal target.
#[must_use]
pub fn ui_action_defaults() -> RuleDefaults {
    let mut occurrences = IndexMap::new();
    occurrences.insert(Entity::UiElement, Occurrence::optional());
    occurrences.insert(Entity::UiLiteral, Occurrence::optional());
    occurrences.insert(Entity::Value, Occurrence::optional());
    occurrences.insert(Entity::Number, Occurrence::optional());
    occurrences.insert(Entity::Constant, Occurrence::optional());
    RuleDefaults {
        min_targets: 0,
        max_targets: 1,
        targets: vec![Entity::UiElement, Entity::UiLiteral],
        occurrences,
        must_be_used_with: Vec::new(),
    }
}

/// Builds the rule table for UI action steps, one rule per action name.
#[must_use]
pub fn ui_action_rules() -> Vec<SyntaxRule> {
    let wide_targets = vec![
        Entity::UiElement,
        Entity::UiLiteral,
        Entity::Value,
        Entity::Number,
        Entity::Constant,
    ];
    RuleBuilder::build(
        vec![
            PartialRule::named("accept"),
            PartialRule::named("am_on").targets(vec![
                Entity::UiElement,
                Entity::UiLiteral,
                Entity::Value,
            ]),
            PartialRule::named("append"),
            PartialRule::named("attach_file"),
            PartialRule::named("cancel").max_targets(0),
            PartialRule::named("check"),
            PartialRule::named("clear").min_targets(1),
            PartialRule::named("click").min_targets(1),
            PartialRule::named("close"),
            PartialRule::named("connect")
                .min_targets(1)
                .targets(vec![Entity::Constant]),
            PartialRule::named("disconnect")
                .min_targets(1)
                .targets(vec![Entity::Constant]),
            PartialRule::named("double_click").min_targets(1),
            PartialRule::named("drag")
                .min_targets(2)
                .max_targets(2)
                .occurrence(Entity::UiElement, Occurrence::new(0, 2))
                .occurrence(Entity::UiLiteral, Occurrence::new(0, 2)),
            PartialRule::named("fill")
                .max_targets(MANY)
                .occurrence(Entity::UiElement, Occurrence::new(0, MANY))
                .occurrence(Entity::UiLiteral, Occurrence::new(0, MANY)),
            PartialRule::named("hide"),
            PartialRule::named("install")
                .min_targets(1)
                .targets(vec![Entity::Value]),
            PartialRule::named("maximize"),
            PartialRule::named("move")
                .min_targets(1)
                .must_be_used_with(vec![Entity::Number]),
            PartialRule::named("mouse_out").min_targets(1),
            PartialRule::named("mouse_over").min_targets(1),
            PartialRule::named("open").targets(vec![
                Entity::UiElement,
                Entity::UiLiteral,
                Entity::Value,
            ]),
            PartialRule::named("press")
                .min_targets(1)
                .max_targets(5)
                .targets(vec![Entity::Value, Entity::Number, Entity::Constant])
                .occurrence(Entity::Value, Occurrence::new(0, 5))
                .occurrence(Entity::Number, Occurrence::new(0, 5))
                .occurrence(Entity::Constant, Occurrence::new(0, 5)),
            PartialRule::named("pull")
                .min_targets(1)
                .targets(vec![Entity::Value]),
            PartialRule::named("refresh").max_targets(0),
            PartialRule::named("remove"),
            PartialRule::named("resize").must_be_used_with(vec![Entity::Number]),
            PartialRule::named("right_click").min_targets(1),
            PartialRule::named("rotate")
                .max_targets(0)
                .must_be_used_with(vec![Entity::Number]),
            PartialRule::named("run")
                .min_targets(1)
                .targets(vec![Entity::Command, Entity::Query])
                .occurrence(Entity::Command, Occurrence::optional())
                .occurrence(Entity::Query, Occurrence::optional()),
            PartialRule::named("save_screenshot")
                .min_targets(1)
                .targets(vec![Entity::Value]),
            PartialRule::named("scroll_to").min_targets(1),
            PartialRule::named("see")
                .max_targets(MANY)
                .targets(wide_targets.clone())
                .occurrence(Entity::UiElement, Occurrence::new(0, MANY))
                .occurrence(Entity::UiLiteral, Occurrence::new(0, MANY))
                .occurrence(Entity::Value, Occurrence::new(0, MANY))
                .occurrence(Entity::Number, Occurrence::new(0, MANY))
                .occurrence(Entity::Constant, Occurrence::new(0, MANY)),
            PartialRule::named("select"),
            PartialRule::named("shake").max_targets(0),
            PartialRule::named("show"),
            PartialRule::named("swipe"),
            PartialRule::named("switch").targets(vec![
                Entity::UiElement,
                Entity::UiLiteral,
                Entity::Value,
            ]),
            PartialRule::named("tap").min_targets(1),
            PartialRule::named("uncheck"),
            PartialRule::named("uninstall")
                .min_targets(1)
                .targets(vec![Entity::Value]),
            PartialRule::named("wait")
                .min_targets(1)
                .max_targets(3)
                .targets(wide_targets),
        ],
        &ui_action_defaults(),
    )
}
