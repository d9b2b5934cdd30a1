//! Fixed pattern recognizers shared by every intent.
//!
//! Each recognizer couples a compiled regex with a priority and an
//! extractor. All recognizers run over the sentence, then overlapping
//! candidate spans are resolved by priority so that, for example, a quoted
//! `SELECT` becomes one query instead of a plain value, and a bracketed
//! list swallows the numbers inside it.

use regex::{Captures, Regex};
use specloom_foundation::{Entity, NlpEntity};

/// Pulls the recognized value out of a regex match, or rejects the match.
type Extract = fn(&Captures<'_>) -> Option<String>;

#[derive(Debug)]
struct PatternRecognizer {
    entity: Entity,
    priority: i32,
    pattern: Regex,
    extract: Extract,
}

impl PatternRecognizer {
    fn new(entity: Entity, priority: i32, pattern: &str, extract: Extract) -> Self {
        // Patterns are hard-coded and covered by tests.
        let pattern = Regex::new(pattern).expect("pattern recognizer regex compiles");
        Self {
            entity,
            priority,
            pattern,
            extract,
        }
    }
}

/// A candidate span produced by one recognizer, before overlap resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The kind of span.
    pub entity: Entity,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset where the match ends (exclusive).
    pub end: usize,
    /// The extracted value.
    pub value: String,
    /// Priority of the recognizer that produced the candidate.
    pub priority: i32,
}

/// A span that survived overlap resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSpan {
    /// Byte offset where the span starts.
    pub start: usize,
    /// Byte offset where the span ends (exclusive).
    pub end: usize,
    /// The recognized entity, with its position in characters.
    pub entity: NlpEntity,
}

/// The fixed, priority-ordered set of pattern recognizers.
#[derive(Debug)]
pub struct PatternSet {
    recognizers: Vec<PatternRecognizer>,
}

impl PatternSet {
    /// Builds the universal recognizer set.
    #[must_use]
    pub fn universal() -> Self {
        let recognizers = vec![
            PatternRecognizer::new(
                Entity::Value,
                100,
                r#""((?:[^"\\]|\\.)*)""#,
                quoted_content,
            ),
            PatternRecognizer::new(Entity::UiElement, 100, r"\{([^<{}\r\n]*)\}", trimmed_inner),
            PatternRecognizer::new(Entity::UiLiteral, 100, r"<([^<>\r\n]*)>", trimmed_inner),
            PatternRecognizer::new(Entity::Number, 10, r"-?\d+(?:\.\d+)?", whole_match),
            PatternRecognizer::new(
                Entity::Query,
                200,
                r#""((?:[^"\\]|\\.)*)""#,
                query_content,
            ),
            PatternRecognizer::new(Entity::State, 200, r"~(\p{L}[^~\r\n]*)~", trimmed_inner),
            PatternRecognizer::new(
                Entity::Command,
                500,
                r"'((?:[^'\\]|\\.)*)'",
                quoted_content,
            ),
            PatternRecognizer::new(
                Entity::Constant,
                500,
                r"\[([^\[\]\r\n]*)\]",
                constant_name,
            ),
            PatternRecognizer::new(
                Entity::ValueList,
                1000,
                r#"\[\s*(?:-?\d+(?:\.\d+)?|"(?:[^"\\]|\\.)*")(?:\s*,\s*(?:-?\d+(?:\.\d+)?|"(?:[^"\\]|\\.)*"))*\s*\]"#,
                whole_match,
            ),
        ];
        Self { recognizers }
    }

    /// Collects every candidate span in the sentence, unresolved.
    #[must_use]
    pub fn candidates(&self, sentence: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for recognizer in &self.recognizers {
            for caps in recognizer.pattern.captures_iter(sentence) {
                let Some(whole) = caps.get(0) else {
                    continue;
                };
                let Some(value) = (recognizer.extract)(&caps) else {
                    continue;
                };
                candidates.push(Candidate {
                    entity: recognizer.entity,
                    start: whole.start(),
                    end: whole.end(),
                    value,
                    priority: recognizer.priority,
                });
            }
        }
        candidates
    }

    /// Recognizes all pattern entities in a sentence, in position order.
    ///
    /// Pure: depends only on the sentence and the fixed recognizer table.
    #[must_use]
    pub fn match_entities(&self, sentence: &str) -> Vec<NlpEntity> {
        resolve_overlaps(sentence, self.candidates(sentence))
            .into_iter()
            .map(|span| span.entity)
            .collect()
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::universal()
    }
}

/// Resolves overlapping candidates and orders the survivors by position.
///
/// Higher priority wins a contested region; ties go to the earlier start,
/// then to the longer match. Positions on the produced entities are
/// character offsets.
#[must_use]
pub fn resolve_overlaps(sentence: &str, mut candidates: Vec<Candidate>) -> Vec<ResolvedSpan> {
    candidates.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then(a.start.cmp(&b.start))
            .then((b.end - b.start).cmp(&(a.end - a.start)))
    });

    let mut claimed: Vec<(usize, usize)> = Vec::new();
    let mut spans = Vec::new();
    for cand in candidates {
        if claimed.iter().any(|&(s, e)| cand.start < e && s < cand.end) {
            continue;
        }
        claimed.push((cand.start, cand.end));
        let position = sentence[..cand.start].chars().count();
        spans.push(ResolvedSpan {
            start: cand.start,
            end: cand.end,
            entity: NlpEntity::new(
                cand.entity,
                &sentence[cand.start..cand.end],
                position,
                cand.value,
                cand.priority,
            ),
        });
    }
    spans.sort_by_key(|span| span.start);
    spans
}

/// Replaces each resolved span with `{entity_name}`.
#[must_use]
pub fn annotate(sentence: &str, spans: &[ResolvedSpan]) -> String {
    let mut out = String::with_capacity(sentence.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&sentence[last..span.start]);
        out.push('{');
        out.push_str(span.entity.entity.name());
        out.push('}');
        last = span.end;
    }
    out.push_str(&sentence[last..]);
    out
}

fn quoted_content(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| m.as_str().to_string())
}

fn trimmed_inner(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|m| m.as_str().trim().to_string())
}

fn whole_match(caps: &Captures<'_>) -> Option<String> {
    caps.get(0).map(|m| m.as_str().to_string())
}

fn query_content(caps: &Captures<'_>) -> Option<String> {
    let content = caps.get(1)?.as_str();
    let trimmed = content.trim_start();
    let starts_with_select = trimmed
        .get(..6)
        .is_some_and(|head| head.eq_ignore_ascii_case("select"))
        && trimmed[6..].chars().next().is_none_or(|c| !c.is_alphanumeric());
    if starts_with_select {
        Some(content.to_string())
    } else {
        None
    }
}

fn constant_name(caps: &Captures<'_>) -> Option<String> {
    let name = caps.get(1)?.as_str().trim();
    if name.is_empty() || name.contains('$') {
        return None;
    }
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(name.to_string())
}
