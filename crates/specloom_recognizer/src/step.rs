//! Recognition of test steps.
//!
//! A step sentence names an action and the widgets and values it applies
//! to. The projector copies those onto the [`Step`] node and validates the
//! combination against the UI action rule table.

use specloom_foundation::{Entity, Intent, Issue, IssueKind, NlpResult, Step};
use specloom_nlp::{ClassifierMode, IntentFilter, NlpTrainer, NluEngine};

use crate::action_rules::ui_action_rules;
use crate::rules::SyntaxRule;
use crate::sentence::NodeSentenceRecognizer;

/// Recognizes step sentences as test case actions.
#[derive(Debug)]
pub struct StepRecognizer {
    engine: NluEngine,
    rules: Vec<SyntaxRule>,
}

impl StepRecognizer {
    /// Creates an untrained step recognizer.
    #[must_use]
    pub fn new(mode: ClassifierMode) -> Self {
        Self {
            engine: NluEngine::new(mode),
            rules: ui_action_rules(),
        }
    }

    /// Returns true if a model exists for the language.
    #[must_use]
    pub fn is_trained(&self, language: &str) -> bool {
        self.engine.is_trained(language)
    }

    /// Trains the engine for one language, restricted to the test case
    /// intent.
    ///
    /// Returns false when the trainer has no dictionary for the language.
    pub fn train_with(&mut self, trainer: &NlpTrainer<'_>, language: &str) -> bool {
        trainer.train(
            &mut self.engine,
            language,
            &IntentFilter::only(Intent::TestCase),
        )
    }

    /// Recognizes a batch of steps, projecting action fields and validating
    /// each against its action's rule.
    ///
    /// Returns true iff no error was appended.
    pub fn recognize_sentences(
        &self,
        language: &str,
        nodes: &mut [Step],
        errors: &mut Vec<Issue>,
        warnings: &mut Vec<Issue>,
    ) -> bool {
        let rules = &self.rules;
        NodeSentenceRecognizer::recognize(
            &self.engine,
            language,
            nodes,
            &[Intent::TestCase],
            "step",
            errors,
            warnings,
            |node, result, errors, warnings| {
                Self::project(rules, node, result, errors, warnings);
            },
        )
    }

    fn project(
        rules: &[SyntaxRule],
        node: &mut Step,
        result: &NlpResult,
        errors: &mut Vec<Issue>,
        warnings: &mut Vec<Issue>,
    ) {
        let action = result
            .first_of(Entity::UiAction)
            .or_else(|| result.first_of(Entity::ExecAction));
        let Some(action) = action else {
            warnings.push(Issue::new(
                IssueKind::MissingAction {
                    content: node.content.clone(),
                },
                node.location.clone(),
            ));
            return;
        };
        let action_name = action.value.clone();
        node.action = Some(action_name.clone());

        let modifiers: Vec<&str> = result
            .entities_of(Entity::UiActionModifier)
            .map(|entity| entity.value.as_str())
            .collect();
        if let [modifier] = modifiers.as_slice() {
            node.action_modifier = Some((*modifier).to_string());
        }
        node.action_options = result
            .entities_of(Entity::UiActionOption)
            .map(|entity| entity.value.clone())
            .collect();
        node.target_types = result
            .entities_of(Entity::UiElementType)
            .map(|entity| entity.value.clone())
            .collect();
        node.targets = result
            .entities_of(Entity::UiLiteral)
            .map(|entity| entity.value.clone())
            .collect();
        node.values = result
            .entities
            .iter()
            .filter(|entity| {
                matches!(
                    entity.entity,
                    Entity::Value | Entity::Number | Entity::Command
                )
            })
            .map(|entity| entity.value.clone())
            .collect();

        NodeSentenceRecognizer::validate(
            node,
            &result.entities,
            rules,
            &action_name,
            errors,
            warnings,
        );
    }
}
