//! The contract between the document AST and sentence recognition.
//!
//! Parsers produce nodes carrying raw sentence content and a source
//! location; recognition writes results and projected fields back onto
//! them. The three node shapes here are the ones recognition knows how to
//! fill.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::result::NlpResult;
use crate::value::PropertyValue;

/// A document node holding one recognizable sentence.
pub trait SentenceNode {
    /// The raw sentence content.
    fn content(&self) -> &str;

    /// Where the sentence sits in its document.
    fn location(&self) -> &Location;

    /// Attaches the raw recognition result.
    ///
    /// Called for every sentence that produced a result, even when the
    /// recognized intent does not fit the node.
    fn set_nlp_result(&mut self, result: NlpResult);
}

/// A test step: one action sentence inside a scenario.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    /// The raw sentence.
    pub content: String,
    /// Source position.
    pub location: Location,
    /// The raw recognition result, once recognized.
    pub nlp_result: Option<NlpResult>,
    /// The action's match id, e.g. `click`.
    pub action: Option<String>,
    /// The action modifier's match id, when exactly one was recognized.
    pub action_modifier: Option<String>,
    /// Match ids of recognized action options, in sentence order.
    pub action_options: Vec<String>,
    /// Match ids of recognized UI element types, in sentence order.
    pub target_types: Vec<String>,
    /// Literal UI element descriptions, in sentence order.
    pub targets: Vec<String>,
    /// Values and commands the action applies, in sentence order.
    pub values: Vec<String>,
}

impl Step {
    /// Creates an unrecognized step from raw content.
    #[must_use]
    pub fn new(content: impl Into<String>, location: Location) -> Self {
        Self {
            content: content.into(),
            location,
            ..Self::default()
        }
    }
}

impl SentenceNode for Step {
    fn content(&self) -> &str {
        &self.content
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn set_nlp_result(&mut self, result: NlpResult) {
        self.nlp_result = Some(result);
    }
}

/// A UI element property sentence, e.g. `- value is "admin"`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiPropertyNode {
    /// The raw sentence.
    pub content: String,
    /// Source position.
    pub location: Location,
    /// The raw recognition result, once recognized.
    pub nlp_result: Option<NlpResult>,
    /// The property's match id, e.g. `value` or `max_length`.
    pub property: Option<String>,
    /// The typed values assigned to the property, in sentence order.
    pub values: Vec<PropertyValue>,
}

impl UiPropertyNode {
    /// Creates an unrecognized UI property node from raw content.
    #[must_use]
    pub fn new(content: impl Into<String>, location: Location) -> Self {
        Self {
            content: content.into(),
            location,
            ..Self::default()
        }
    }
}

impl SentenceNode for UiPropertyNode {
    fn content(&self) -> &str {
        &self.content
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn set_nlp_result(&mut self, result: NlpResult) {
        self.nlp_result = Some(result);
    }
}

/// A database connection property sentence, e.g. `- port is 3306`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DatabasePropertyNode {
    /// The raw sentence.
    pub content: String,
    /// Source position.
    pub location: Location,
    /// The raw recognition result, once recognized.
    pub nlp_result: Option<NlpResult>,
    /// The property's match id, e.g. `host` or `port`.
    pub property: Option<String>,
    /// The property's value, as written.
    pub value: Option<String>,
}

impl DatabasePropertyNode {
    /// Creates an unrecognized database property node from raw content.
    #[must_use]
    pub fn new(content: impl Into<String>, location: Location) -> Self {
        Self {
            content: content.into(),
            location,
            ..Self::default()
        }
    }
}

impl SentenceNode for DatabasePropertyNode {
    fn content(&self) -> &str {
        &self.content
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn set_nlp_result(&mut self, result: NlpResult) {
        self.nlp_result = Some(result);
    }
}
