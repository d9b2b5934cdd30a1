//! Syntax rules and the overlay builder that assembles rule tables.
//!
//! A rule constrains which entities a recognized sentence may carry and in
//! what quantity. Rule tables are written as partial entries layered over a
//! per-domain default, so each entry only spells out what deviates from it.

use indexmap::IndexMap;
use specloom_foundation::Entity;

/// Inclusive occurrence bounds for one entity kind within a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// Minimum number of occurrences.
    pub min: usize,
    /// Maximum number of occurrences.
    pub max: usize,
}

impl Occurrence {
    /// Creates bounds from an inclusive range.
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Zero or one occurrence.
    #[must_use]
    pub const fn optional() -> Self {
        Self::new(0, 1)
    }

    /// Exactly one occurrence.
    #[must_use]
    pub const fn required() -> Self {
        Self::new(1, 1)
    }
}

/// Constraints a sentence must satisfy under a given action or property name.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxRule {
    /// The action or property name this rule applies to.
    pub name: String,
    /// Minimum count of target entities, summed over all of `targets`.
    pub min_targets: usize,
    /// Maximum count of target entities, summed over all of `targets`.
    pub max_targets: usize,
    /// The entity kinds counted as targets.
    pub targets: Vec<Entity>,
    /// Per-kind occurrence bounds for target entities.
    pub occurrences: IndexMap<Entity, Occurrence>,
    /// Entity kinds that must appear somewhere in the sentence.
    pub must_be_used_with: Vec<Entity>,
}

impl SyntaxRule {
    /// Looks a rule up by name.
    #[must_use]
    pub fn find<'a>(rules: &'a [SyntaxRule], name: &str) -> Option<&'a SyntaxRule> {
        rules.iter().find(|rule| rule.name == name)
    }
}

/// The baseline every partial entry of a rule table is layered over.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDefaults {
    /// Default minimum target count.
    pub min_targets: usize,
    /// Default maximum target count.
    pub max_targets: usize,
    /// Default target entity kinds.
    pub targets: Vec<Entity>,
    /// Default per-kind occurrence bounds.
    pub occurrences: IndexMap<Entity, Occurrence>,
    /// Default co-occurrence requirements.
    pub must_be_used_with: Vec<Entity>,
}

/// A rule entry that only spells out its deviations from the table default.
///
/// Any field left unset keeps the default's value; any field set replaces
/// the default's field wholesale, collections included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialRule {
    name: String,
    min_targets: Option<usize>,
    max_targets: Option<usize>,
    targets: Option<Vec<Entity>>,
    occurrences: Option<IndexMap<Entity, Occurrence>>,
    must_be_used_with: Option<Vec<Entity>>,
}

impl PartialRule {
    /// Starts a partial entry that deviates in nothing but its name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Overrides the minimum target count.
    #[must_use]
    pub fn min_targets(mut self, min: usize) -> Self {
        self.min_targets = Some(min);
        self
    }

    /// Overrides the maximum target count.
    #[must_use]
    pub fn max_targets(mut self, max: usize) -> Self {
        self.max_targets = Some(max);
        self
    }

    /// Replaces the target entity kinds.
    #[must_use]
    pub fn targets(mut self, targets: Vec<Entity>) -> Self {
        self.targets = Some(targets);
        self
    }

    /// Adds one occurrence bound, replacing the default bounds wholesale.
    ///
    /// The first call discards the default map; chained calls accumulate
    /// into the replacement.
    #[must_use]
    pub fn occurrence(mut self, entity: Entity, bounds: Occurrence) -> Self {
        self.occurrences
            .get_or_insert_with(IndexMap::new)
            .insert(entity, bounds);
        self
    }

    /// Replaces the co-occurrence requirements.
    #[must_use]
    pub fn must_be_used_with(mut self, entities: Vec<Entity>) -> Self {
        self.must_be_used_with = Some(entities);
        self
    }

    fn layer_over(self, defaults: &RuleDefaults) -> SyntaxRule {
        SyntaxRule {
            name: self.name,
            min_targets: self.min_targets.unwrap_or(defaults.min_targets),
            max_targets: self.max_targets.unwrap_or(defaults.max_targets),
            targets: self.targets.unwrap_or_else(|| defaults.targets.clone()),
            occurrences: self
                .occurrences
                .unwrap_or_else(|| defaults.occurrences.clone()),
            must_be_used_with: self
                .must_be_used_with
                .unwrap_or_else(|| defaults.must_be_used_with.clone()),
        }
    }
}

/// Assembles rule tables by layering partial entries over a default.
#[derive(Debug, Clone, Copy)]
pub struct RuleBuilder;

impl RuleBuilder {
    /// Builds a table from its entries, preserving entry order.
    #[must_use]
    pub fn build(partials: Vec<PartialRule>, defaults: &RuleDefaults) -> Vec<SyntaxRule> {
        partials
            .into_iter()
            .map(|partial| partial.layer_over(defaults))
            .collect()
    }
}
