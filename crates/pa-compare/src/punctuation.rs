//! Punctuation-level sequence comparison.
//!
//! Marks are compared by ordinal position only. Line and column are carried
//! into each mismatch so an operator can find both marks, but two marks on
//! different lines still match when their characters agree.

use tracing::debug;

use pa_core::PunctuationMark;

use crate::result::{PunctuationComparison, PunctuationMismatch, PunctuationMismatchKind};
use crate::walk::zip_longest;

/// Compare two punctuation sequences position by position.
pub fn compare_punctuation(left: &[PunctuationMark], right: &[PunctuationMark]) -> PunctuationComparison {
    let mismatches: Vec<PunctuationMismatch> = zip_longest(left, right)
        .filter_map(|(index, l, r)| {
            let kind = match (l, r) {
                (Some(l), Some(r)) if l.ch == r.ch => return None,
                (Some(_), Some(_)) => PunctuationMismatchKind::CharacterMismatch,
                (None, _) => PunctuationMismatchKind::LeftShortage,
                (_, None) => PunctuationMismatchKind::RightShortage,
            };
            Some(PunctuationMismatch {
                index,
                kind,
                left: l.copied(),
                right: r.copied(),
            })
        })
        .collect();

    debug!(
        left_len = left.len(),
        right_len = right.len(),
        mismatches = mismatches.len(),
        "compared punctuation sequences"
    );

    PunctuationComparison {
        left_len: left.len(),
        right_len: right.len(),
        mismatches,
    }
}
