//! Compare result types — the structured output of the sequence comparer.
//!
//! Indices are ordinal positions in the compared sequences. A `None` value on
//! either side means that sequence had already ended at that position.

use serde::{Deserialize, Serialize};

use pa_core::PunctuationMark;

// ---------------------------------------------------------------------------
// EmptySide
// ---------------------------------------------------------------------------

/// Which side of a word comparison had no words after normalization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmptySide {
    Left,
    Right,
    Both,
}

// ---------------------------------------------------------------------------
// WordComparison
// ---------------------------------------------------------------------------

/// One position where the two word sequences disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordMismatch {
    /// Zero-based index into both token sequences.
    pub index: usize,
    /// Left (bilingual extract) token; `None` past the end of the left side.
    pub left: Option<String>,
    /// Right (reference) token; `None` past the end of the right side.
    pub right: Option<String>,
}

/// Result of a word-level comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordComparison {
    pub case_sensitive: bool,
    /// Number of tokens on the left side.
    pub left_len: usize,
    /// Number of tokens on the right side.
    pub right_len: usize,
    /// Set when either side is empty; no positions were compared then.
    pub empty_input: Option<EmptySide>,
    /// Every divergent position, in index order.
    pub mismatches: Vec<WordMismatch>,
}

impl WordComparison {
    pub fn lengths_differ(&self) -> bool {
        self.left_len != self.right_len
    }

    /// `right_len - left_len`; negative when the left side is longer.
    pub fn length_difference(&self) -> i64 {
        self.right_len as i64 - self.left_len as i64
    }

    pub fn first_mismatch(&self) -> Option<&WordMismatch> {
        self.mismatches.first()
    }

    /// Both sides non-empty and equal at every position.
    pub fn is_identical(&self) -> bool {
        self.empty_input.is_none() && self.mismatches.is_empty()
    }
}

// ---------------------------------------------------------------------------
// PunctuationComparison
// ---------------------------------------------------------------------------

/// Classification of a punctuation divergence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PunctuationMismatchKind {
    /// Both sides have a mark at this position but the characters differ.
    CharacterMismatch,
    /// The left sequence ended first.
    LeftShortage,
    /// The right sequence ended first.
    RightShortage,
}

/// One position where the two punctuation sequences disagree.
///
/// The line/column of each mark is carried for diagnosis only; matching is
/// purely ordinal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PunctuationMismatch {
    pub index: usize,
    pub kind: PunctuationMismatchKind,
    pub left: Option<PunctuationMark>,
    pub right: Option<PunctuationMark>,
}

/// Result of a punctuation-level comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunctuationComparison {
    pub left_len: usize,
    pub right_len: usize,
    pub mismatches: Vec<PunctuationMismatch>,
}

impl PunctuationComparison {
    pub fn lengths_differ(&self) -> bool {
        self.left_len != self.right_len
    }

    pub fn length_difference(&self) -> i64 {
        self.right_len as i64 - self.left_len as i64
    }

    pub fn first_mismatch(&self) -> Option<&PunctuationMismatch> {
        self.mismatches.first()
    }

    pub fn count_of(&self, kind: PunctuationMismatchKind) -> usize {
        self.mismatches.iter().filter(|m| m.kind == kind).count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_kind_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&PunctuationMismatchKind::CharacterMismatch).unwrap(),
            "\"character_mismatch\""
        );
        assert_eq!(
            serde_json::to_string(&PunctuationMismatchKind::LeftShortage).unwrap(),
            "\"left_shortage\""
        );
        assert_eq!(serde_json::to_string(&EmptySide::Both).unwrap(), "\"both\"");
    }

    #[test]
    fn past_end_serializes_as_null() {
        let m = WordMismatch {
            index: 7,
            left: None,
            right: Some("And".to_string()),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert!(json["left"].is_null());
        assert_eq!(json["right"], "And");
    }

    #[test]
    fn length_difference_is_signed() {
        let report = WordComparison {
            case_sensitive: true,
            left_len: 11,
            right_len: 7,
            empty_input: None,
            mismatches: vec![],
        };
        assert!(report.lengths_differ());
        assert_eq!(report.length_difference(), -4);
    }
}
