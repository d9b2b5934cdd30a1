//! Intent scoring against trained example sentences.
//!
//! Sentences are compared in annotated form (entity spans replaced by
//! `{entity_name}`), so the classifier sees structure rather than the
//! concrete values. Scoring is pure; the trained examples live in the
//! engine's per-language models.

use std::collections::HashSet;

/// How candidate sentences are scored against trained examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifierMode {
    /// Token overlap blended with a sequence ratio. Tolerant of wording
    /// and word-order variance; the default.
    #[default]
    Fuzzy,
    /// In-order token subsequence ratio only. Strict about token order.
    Sequential,
}

/// Splits a sentence into lowercase scoring tokens.
///
/// Annotation markers survive as single tokens (`{ui_action}`); all other
/// punctuation separates.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '{' || c == '}'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scores a tokenized candidate against one tokenized example, in `[0, 1]`.
///
/// Identical token sequences score 1.0; an empty candidate or example
/// scores 0.0.
#[must_use]
pub fn score(mode: ClassifierMode, candidate: &[String], example: &[String]) -> f64 {
    if candidate.is_empty() || example.is_empty() {
        return 0.0;
    }
    if candidate == example {
        return 1.0;
    }
    match mode {
        ClassifierMode::Fuzzy => fuzzy_score(candidate, example),
        ClassifierMode::Sequential => sequence_ratio(candidate, example),
    }
}

/// Weighted blend of token-set overlap and sequence similarity.
#[allow(clippy::cast_precision_loss)]
fn fuzzy_score(candidate: &[String], example: &[String]) -> f64 {
    let candidate_set: HashSet<&str> = candidate.iter().map(String::as_str).collect();
    let example_set: HashSet<&str> = example.iter().map(String::as_str).collect();
    let shared = candidate_set.intersection(&example_set).count();
    let overlap = 2.0 * shared as f64 / (candidate_set.len() + example_set.len()) as f64;

    overlap * 0.6 + sequence_ratio(candidate, example) * 0.4
}

/// Sequence similarity ratio over tokens, like difflib's ratio but on the
/// longest common subsequence.
#[allow(clippy::cast_precision_loss)]
fn sequence_ratio(a: &[String], b: &[String]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    2.0 * lcs_len(a, b) as f64 / total as f64
}

/// Longest common subsequence length, space-optimized to two rows.
fn lcs_len(a: &[String], b: &[String]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for left in a {
        for (j, right) in b.iter().enumerate() {
            curr[j + 1] = if left == right {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
