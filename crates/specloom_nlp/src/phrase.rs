//! Trained phrase recognizers.
//!
//! A trained phrase maps configured sample wordings (from a language
//! dictionary) to a language-independent match id. Matching is exact:
//! case-insensitive, word-bounded occurrences of the sample text, nothing
//! fuzzier. Trained matches carry priority 0, the lowest, so pattern
//! recognizers always win contested spans.

use specloom_foundation::Entity;

use crate::pattern::Candidate;

/// One trained phrase group: an entity kind, its match id, and the sample
/// wordings that resolve to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainedPhrase {
    /// The entity kind a match produces.
    pub entity: Entity,
    /// The language-independent value of a match.
    pub match_id: String,
    /// Sample wordings in the trained language.
    pub samples: Vec<String>,
}

impl TrainedPhrase {
    /// Creates a trained phrase group.
    #[must_use]
    pub fn new(entity: Entity, match_id: impl Into<String>, samples: Vec<String>) -> Self {
        Self {
            entity,
            match_id: match_id.into(),
            samples,
        }
    }
}

/// Finds every word-bounded occurrence of the trained sample phrases.
///
/// The produced candidates carry the match id as value, not the matched
/// text. Overlapping candidates are left in; resolution prefers the longer
/// sample at the same start.
#[must_use]
pub fn phrase_candidates(sentence: &str, phrases: &[TrainedPhrase]) -> Vec<Candidate> {
    let starts = word_starts(sentence);
    let mut candidates = Vec::new();
    for phrase in phrases {
        for sample in &phrase.samples {
            if sample.is_empty() {
                continue;
            }
            for &start in &starts {
                if let Some(end) = match_at(sentence, start, sample) {
                    candidates.push(Candidate {
                        entity: phrase.entity,
                        start,
                        end,
                        value: phrase.match_id.clone(),
                        priority: 0,
                    });
                }
            }
        }
    }
    candidates
}

/// Byte offsets where a word-bounded match may begin.
fn word_starts(sentence: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut prev_is_word = false;
    for (i, c) in sentence.char_indices() {
        if !prev_is_word {
            starts.push(i);
        }
        prev_is_word = is_word_char(c);
    }
    starts
}

/// Matches the sample at a byte offset, returning the end offset.
fn match_at(sentence: &str, start: usize, sample: &str) -> Option<usize> {
    let mut pos = start;
    let mut rest = sentence[start..].chars();
    for expected in sample.chars() {
        let actual = rest.next()?;
        if !chars_eq_ignore_case(expected, actual) {
            return None;
        }
        pos += actual.len_utf8();
    }
    match sentence[pos..].chars().next() {
        Some(c) if is_word_char(c) => None,
        _ => Some(pos),
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
