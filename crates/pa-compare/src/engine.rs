//! Text-level entry point for the sequence comparer.
//!
//! [`SequenceComparer`] takes the two raw texts, normalizes them with
//! [`pa_core::tokenize`] / [`pa_core::extract_punctuation`] and runs the
//! ordinal comparisons.

use tracing::info;

use pa_core::{extract_punctuation, tokenize};

use crate::punctuation::compare_punctuation;
use crate::result::{PunctuationComparison, WordComparison};
use crate::words::compare_words;

// ---------------------------------------------------------------------------
// CompareConfig
// ---------------------------------------------------------------------------

/// Runtime configuration for the sequence comparer.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Whether word tokens must match in case.
    /// Default: true.
    pub case_sensitive: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

// ---------------------------------------------------------------------------
// SequenceComparer
// ---------------------------------------------------------------------------

/// Stateless comparer; every call works only on its arguments.
#[derive(Debug, Clone, Default)]
pub struct SequenceComparer {
    config: CompareConfig,
}

impl SequenceComparer {
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Tokenize both texts and compare their words.
    pub fn compare_words(&self, left_text: &str, right_text: &str) -> WordComparison {
        let left = tokenize(left_text);
        let right = tokenize(right_text);
        let report = compare_words(&left, &right, self.config.case_sensitive);
        info!(
            left_words = report.left_len,
            right_words = report.right_len,
            mismatches = report.mismatches.len(),
            "word comparison finished"
        );
        report
    }

    /// Extract punctuation from both texts and compare the marks.
    pub fn compare_punctuation(&self, left_text: &str, right_text: &str) -> PunctuationComparison {
        let left = extract_punctuation(left_text);
        let right = extract_punctuation(right_text);
        let report = compare_punctuation(&left, &right);
        info!(
            left_marks = report.left_len,
            right_marks = report.right_len,
            mismatches = report.mismatches.len(),
            "punctuation comparison finished"
        );
        report
    }
}
