//! Word-level sequence comparison.
//!
//! The two token sequences are walked position by position over the length
//! of the longer one; no attempt is made to resynchronise after an insertion
//! or deletion, so a single missing word shows up as a mismatch at every
//! later index.

use tracing::debug;

use crate::result::{EmptySide, WordComparison, WordMismatch};
use crate::walk::zip_longest;

/// Compare `left` and `right` position by position.
///
/// When either side is empty nothing is walked and the report carries
/// [`WordComparison::empty_input`] instead of mismatches.
pub fn compare_words<S: AsRef<str>>(left: &[S], right: &[S], case_sensitive: bool) -> WordComparison {
    let empty_input = match (left.is_empty(), right.is_empty()) {
        (true, true) => Some(EmptySide::Both),
        (true, false) => Some(EmptySide::Left),
        (false, true) => Some(EmptySide::Right),
        (false, false) => None,
    };

    let mismatches = if empty_input.is_some() {
        Vec::new()
    } else {
        zip_longest(left, right)
            .filter(|(_, l, r)| !words_equal(*l, *r, case_sensitive))
            .map(|(index, l, r)| WordMismatch {
                index,
                left: l.map(|w| w.as_ref().to_owned()),
                right: r.map(|w| w.as_ref().to_owned()),
            })
            .collect()
    };

    debug!(
        left_len = left.len(),
        right_len = right.len(),
        mismatches = mismatches.len(),
        "compared word sequences"
    );

    WordComparison {
        case_sensitive,
        left_len: left.len(),
        right_len: right.len(),
        empty_input,
        mismatches,
    }
}

fn words_equal<S: AsRef<str>>(left: Option<&S>, right: Option<&S>, case_sensitive: bool) -> bool {
    match (left, right) {
        (Some(l), Some(r)) if case_sensitive => l.as_ref() == r.as_ref(),
        (Some(l), Some(r)) => l.as_ref().to_lowercase() == r.as_ref().to_lowercase(),
        _ => false,
    }
}
