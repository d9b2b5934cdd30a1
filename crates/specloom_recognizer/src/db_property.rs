//! Recognition of database connection property sentences.

use specloom_foundation::{
    DatabasePropertyNode, Entity, Intent, Issue, IssueKind, NlpResult,
};
use specloom_nlp::{ClassifierMode, IntentFilter, NlpTrainer, NluEngine};

use crate::db_property_rules::db_property_rules;
use crate::rules::SyntaxRule;
use crate::sentence::NodeSentenceRecognizer;

/// Recognizes database property sentences.
#[derive(Debug)]
pub struct DatabasePropertyRecognizer {
    engine: NluEngine,
    rules: Vec<SyntaxRule>,
}

impl DatabasePropertyRecognizer {
    /// Creates an untrained database property recognizer.
    #[must_use]
    pub fn new(mode: ClassifierMode) -> Self {
        Self {
            engine: NluEngine::new(mode),
            rules: db_property_rules(),
        }
    }

    /// Returns true if a model exists for the language.
    #[must_use]
    pub fn is_trained(&self, language: &str) -> bool {
        self.engine.is_trained(language)
    }

    /// Trains the engine for one language, restricted to the database
    /// intent.
    ///
    /// Returns false when the trainer has no dictionary for the language.
    pub fn train_with(&mut self, trainer: &NlpTrainer<'_>, language: &str) -> bool {
        trainer.train(
            &mut self.engine,
            language,
            &IntentFilter::only(Intent::Database),
        )
    }

    /// Recognizes a batch of property sentences, projecting the property
    /// name and its value.
    ///
    /// Returns true iff no error was appended.
    pub fn recognize_sentences(
        &self,
        language: &str,
        nodes: &mut [DatabasePropertyNode],
        errors: &mut Vec<Issue>,
        warnings: &mut Vec<Issue>,
    ) -> bool {
        let rules = &self.rules;
        NodeSentenceRecognizer::recognize(
            &self.engine,
            language,
            nodes,
            &[Intent::Database],
            "database property",
            errors,
            warnings,
            |node, result, errors, warnings| {
                Self::project(rules, node, result, errors, warnings);
            },
        )
    }

    fn project(
        rules: &[SyntaxRule],
        node: &mut DatabasePropertyNode,
        result: &NlpResult,
        errors: &mut Vec<Issue>,
        warnings: &mut Vec<Issue>,
    ) {
        let Some(property) = result.first_of(Entity::DbProperty) else {
            warnings.push(Issue::new(
                IssueKind::MissingDatabaseProperty {
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

        // Connection parameters are kept raw; typing happens at the layer
        // that opens the connection.
        let value = result
            .entities
            .iter()
            .find(|entity| matches!(entity.entity, Entity::Value | Entity::Number))
            .map(|entity| entity.value.clone());
        match value {
            Some(value) => node.value = Some(value),
            None => errors.push(Issue::new(
                IssueKind::MissingValue {
                    property: property_name,
                },
                node.location.clone(),
            )),
        }
    }
}
