//! The closed catalog of entity kinds recognizable inside a sentence.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A kind of span that can be recognized inside a sentence.
///
/// The catalog is closed: adding a member means adding a pattern or trained
/// recognizer for it and wiring it into the syntax-rule tables. Each member
/// has a stable lowercase name used as the key in language dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Entity {
    /// A double-quoted literal value, e.g. `"hello"`.
    Value,
    /// An integer or decimal number, e.g. `42` or `-3.25`.
    Number,
    /// A reference to a named UI element, e.g. `{login button}`.
    UiElement,
    /// A literal UI element description, e.g. `<sign in button>`.
    UiLiteral,
    /// A quoted SQL query, e.g. `"SELECT name FROM users"`.
    Query,
    /// A reference to a named constant, e.g. `[max retries]`.
    Constant,
    /// A bracketed list of values, e.g. `[1, 2, 3]`.
    ValueList,
    /// A state marker, e.g. `~logged in~`.
    State,
    /// A single-quoted shell command, e.g. `'rm -rf tmp'`.
    Command,
    /// A trained UI action verb, e.g. "click".
    UiAction,
    /// A trained modifier on a UI action, e.g. "not".
    UiActionModifier,
    /// A trained option on a UI action, e.g. "up", "left".
    UiActionOption,
    /// A trained UI element type, e.g. "button".
    UiElementType,
    /// A trained UI property name, e.g. "value", "max length".
    UiProperty,
    /// A trained connector word inside a UI sentence, e.g. "in", "inside".
    UiConnector,
    /// A trained UI data type, e.g. "string", "integer".
    UiDataType,
    /// A trained database property name, e.g. "host", "port".
    DbProperty,
    /// A trained executable action verb, e.g. "run".
    ExecAction,
}

impl Entity {
    /// All entity kinds, in declaration order.
    pub const ALL: [Entity; 18] = [
        Entity::Value,
        Entity::Number,
        Entity::UiElement,
        Entity::UiLiteral,
        Entity::Query,
        Entity::Constant,
        Entity::ValueList,
        Entity::State,
        Entity::Command,
        Entity::UiAction,
        Entity::UiActionModifier,
        Entity::UiActionOption,
        Entity::UiElementType,
        Entity::UiProperty,
        Entity::UiConnector,
        Entity::UiDataType,
        Entity::DbProperty,
        Entity::ExecAction,
    ];

    /// Returns the stable dictionary name for this entity kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Number => "number",
            Self::UiElement => "ui_element",
            Self::UiLiteral => "ui_literal",
            Self::Query => "query",
            Self::Constant => "constant",
            Self::ValueList => "value_list",
            Self::State => "state",
            Self::Command => "command",
            Self::UiAction => "ui_action",
            Self::UiActionModifier => "ui_action_modifier",
            Self::UiActionOption => "ui_action_option",
            Self::UiElementType => "ui_element_type",
            Self::UiProperty => "ui_property",
            Self::UiConnector => "ui_connector",
            Self::UiDataType => "ui_data_type",
            Self::DbProperty => "db_property",
            Self::ExecAction => "exec_action",
        }
    }

    /// Looks up an entity kind by its stable dictionary name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.name() == name)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
