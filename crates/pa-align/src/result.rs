//! Alignment result types — the structured output of the paragraph aligner.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use pa_core::ReferenceParagraph;

// ---------------------------------------------------------------------------
// MatchOutcome
// ---------------------------------------------------------------------------

/// Terminal state of the search for one reference paragraph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// A block of English lines matched. Both indices are positions in the
    /// original, unfiltered bilingual line list.
    Matched {
        first_line: usize,
        last_line: usize,
        block_word_count: usize,
    },
    /// No block matched; the cursor did not move.
    Unmatched {
        /// Blocks that had the right word count but the wrong trailing word.
        last_word_rejections: usize,
    },
}

impl MatchOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }
}

// ---------------------------------------------------------------------------
// ParagraphMatch
// ---------------------------------------------------------------------------

/// One reference paragraph and what became of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParagraphMatch {
    pub paragraph: ReferenceParagraph,
    pub outcome: MatchOutcome,
}

// ---------------------------------------------------------------------------
// AlignmentSummary
// ---------------------------------------------------------------------------

/// Aggregate counts for an alignment run.
///
/// `total == matched + last_word_mismatched + unmatched`; paragraphs without
/// words are only counted in `skipped_empty`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlignmentSummary {
    /// Reference paragraphs that were searched for.
    pub total: usize,
    pub matched: usize,
    /// Unmatched paragraphs for which at least one block had the right word
    /// count but a different trailing word.
    pub last_word_mismatched: usize,
    /// Unmatched paragraphs with no block of the right word count.
    pub unmatched: usize,
    /// Reference paragraphs with zero words, never searched for.
    pub skipped_empty: usize,
}

impl AlignmentSummary {
    pub(crate) fn record(&mut self, outcome: &MatchOutcome) {
        self.total += 1;
        match outcome {
            MatchOutcome::Matched { .. } => self.matched += 1,
            MatchOutcome::Unmatched {
                last_word_rejections,
            } if *last_word_rejections > 0 => self.last_word_mismatched += 1,
            MatchOutcome::Unmatched { .. } => self.unmatched += 1,
        }
    }
}

// ---------------------------------------------------------------------------
// AlignmentReport
// ---------------------------------------------------------------------------

/// The output of a single alignment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentReport {
    /// Searched paragraphs in reference order.
    pub paragraphs: Vec<ParagraphMatch>,
    pub summary: AlignmentSummary,
    /// Number of English lines available to the search.
    pub english_lines: usize,
    /// Final cursor position: English lines consumed by matched blocks or
    /// skipped before them.
    pub lines_consumed: usize,
}

impl AlignmentReport {
    /// Original indices of the first line of every matched block.
    pub fn paragraph_starts(&self) -> BTreeSet<usize> {
        self.paragraphs
            .iter()
            .filter_map(|p| match p.outcome {
                MatchOutcome::Matched { first_line, .. } => Some(first_line),
                MatchOutcome::Unmatched { .. } => None,
            })
            .collect()
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &ParagraphMatch> {
        self.paragraphs.iter().filter(|p| !p.outcome.is_matched())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_splits_unmatched_by_rejections() {
        let mut summary = AlignmentSummary::default();
        summary.record(&MatchOutcome::Matched {
            first_line: 0,
            last_line: 2,
            block_word_count: 9,
        });
        summary.record(&MatchOutcome::Unmatched {
            last_word_rejections: 2,
        });
        summary.record(&MatchOutcome::Unmatched {
            last_word_rejections: 0,
        });
        assert_eq!(summary.total, 3);
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.last_word_mismatched, 1);
        assert_eq!(summary.unmatched, 1);
    }

    #[test]
    fn outcome_is_tagged_by_status() {
        let json = serde_json::to_value(MatchOutcome::Unmatched {
            last_word_rejections: 1,
        })
        .unwrap();
        assert_eq!(json["status"], "unmatched");
        assert_eq!(json["last_word_rejections"], 1);
    }
}
