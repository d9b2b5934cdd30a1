//! Batch sentence recognition and syntax rule validation.
//!
//! [`NodeSentenceRecognizer`] drives an [`NluEngine`] over a slice of
//! document nodes, attaching results and degrading per-node failures to
//! warnings so one bad sentence never halts the rest of a document.
//! `validate` checks a recognized entity set against a named [`SyntaxRule`].

use specloom_foundation::{Intent, Issue, IssueKind, NlpEntity, NlpResult, SentenceNode};
use specloom_nlp::{IntentFilter, NluEngine};

use crate::rules::SyntaxRule;

/// Drives recognition over document nodes and validates the results.
#[derive(Debug, Clone, Copy)]
pub struct NodeSentenceRecognizer;

impl NodeSentenceRecognizer {
    /// Recognizes every node's content and hands accepted results to
    /// `process`.
    ///
    /// An untrained language is a single fatal error for the whole batch and
    /// no node is touched. Per node, a missing result or an unexpected
    /// intent degrades to a warning and the remaining nodes still run; the
    /// raw result is attached to the node even when its intent does not
    /// match. Returns true iff no error was appended for this batch.
    pub fn recognize<N, F>(
        engine: &NluEngine,
        language: &str,
        nodes: &mut [N],
        target_intents: &[Intent],
        display_name: &str,
        errors: &mut Vec<Issue>,
        warnings: &mut Vec<Issue>,
        mut process: F,
    ) -> bool
    where
        N: SentenceNode,
        F: FnMut(&mut N, &NlpResult, &mut Vec<Issue>, &mut Vec<Issue>),
    {
        if !engine.is_trained(language) {
            errors.push(Issue::not_trained(language, display_name));
            return false;
        }

        let errors_before = errors.len();
        for node in nodes.iter_mut() {
            let Some(result) = engine.recognize(language, node.content(), &IntentFilter::All)
            else {
                warnings.push(Issue::sentence_not_recognized(
                    node.content(),
                    node.location().clone(),
                ));
                continue;
            };
            let intent = result.intent;
            node.set_nlp_result(result.clone());
            if !target_intents.contains(&intent) {
                warnings.push(Issue::unexpected_intent(
                    intent,
                    display_name,
                    node.location().clone(),
                ));
                continue;
            }
            process(node, &result, errors, warnings);
        }
        errors.len() == errors_before
    }

    /// Validates recognized entities against the rule named `rule_name`.
    ///
    /// Appends to the caller's error and warning lists, never mutating
    /// anything else, and returns true iff this call appended no error. An
    /// unknown rule name is tolerated as a warning so new actions and
    /// properties degrade gracefully.
    pub fn validate<N: SentenceNode>(
        node: &N,
        recognized: &[NlpEntity],
        rules: &[SyntaxRule],
        rule_name: &str,
        errors: &mut Vec<Issue>,
        warnings: &mut Vec<Issue>,
    ) -> bool {
        let Some(rule) = SyntaxRule::find(rules, rule_name) else {
            warnings.push(Issue::unknown_rule(rule_name, node.location().clone()));
            return false;
        };

        // Only target kinds count; verbs and modifiers are ignored.
        let target_count = recognized
            .iter()
            .filter(|entity| rule.targets.contains(&entity.entity))
            .count();
        if target_count < rule.min_targets {
            errors.push(Issue::new(
                IssueKind::TooFewTargets {
                    name: rule.name.clone(),
                    count: target_count,
                    min: rule.min_targets,
                },
                node.location().clone(),
            ));
            return false;
        }
        if target_count > rule.max_targets {
            errors.push(Issue::new(
                IssueKind::TooManyTargets {
                    name: rule.name.clone(),
                    count: target_count,
                    max: rule.max_targets,
                },
                node.location().clone(),
            ));
            return false;
        }

        let errors_before = errors.len();
        for target in &rule.targets {
            let Some(bounds) = rule.occurrences.get(target) else {
                warnings.push(Issue::new(
                    IssueKind::MissingOccurrence {
                        name: rule.name.clone(),
                        entity: *target,
                    },
                    node.location().clone(),
                ));
                break;
            };
            // Bounds wider than the rule-level target bounds are inert.
            if bounds.min > rule.min_targets || bounds.max > rule.max_targets {
                continue;
            }
            let count = recognized
                .iter()
                .filter(|entity| entity.entity == *target)
                .count();
            if count < bounds.min {
                errors.push(Issue::new(
                    IssueKind::TooFewOccurrences {
                        name: rule.name.clone(),
                        entity: *target,
                        count,
                        min: bounds.min,
                    },
                    node.location().clone(),
                ));
            } else if count > bounds.max {
                errors.push(Issue::new(
                    IssueKind::TooManyOccurrences {
                        name: rule.name.clone(),
                        entity: *target,
                        count,
                        max: bounds.max,
                    },
                    node.location().clone(),
                ));
            }
        }

        for companion in &rule.must_be_used_with {
            if !recognized.iter().any(|entity| entity.entity == *companion) {
                errors.push(Issue::new(
                    IssueKind::MissingCompanion {
                        name: rule.name.clone(),
                        entity: *companion,
                    },
                    node.location().clone(),
                ));
            }
        }

        errors.len() == errors_before
    }
}
