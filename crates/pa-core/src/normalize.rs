//! Punctuation-stripping normalizer.
//!
//! Normalization rules:
//! - Every ASCII punctuation character (the 32 characters of
//!   [`PUNCTUATION`]) is replaced by a single space.
//! - The result is split on runs of whitespace; empty pieces are dropped.
//! - Case is preserved; comparisons decide for themselves whether to fold it.
//!
//! The mapping is lossy on purpose: `word.` and `word` normalize to the same
//! token, and `co-op` becomes `co`, `op`.
//!
//! Example:
//!   "It was pandaemonium ." →
//!   [It][was][pandaemonium]

use crate::line::PunctuationMark;

/// The fixed ASCII punctuation set.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Return `true` if `ch` belongs to the fixed punctuation set.
pub fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
}

/// Split `text` into word tokens after replacing punctuation with spaces.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || is_punctuation(c))
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Number of tokens [`tokenize`] would produce, without allocating them.
pub fn word_count(text: &str) -> usize {
    text.split(|c: char| c.is_whitespace() || is_punctuation(c))
        .filter(|piece| !piece.is_empty())
        .count()
}

/// Extract every punctuation character of `text` with its 1-based line and
/// column.
///
/// Lines are split without keeping their terminators, and every line counts
/// toward numbering, blank ones included. Columns count characters.
pub fn extract_punctuation(text: &str) -> Vec<PunctuationMark> {
    text.lines()
        .enumerate()
        .flat_map(|(line_idx, line)| {
            line.chars()
                .enumerate()
                .filter(|(_, ch)| is_punctuation(*ch))
                .map(move |(col_idx, ch)| PunctuationMark::new(ch, line_idx + 1, col_idx + 1))
        })
        .collect()
}

/// Trailing word of a line: the last whitespace-delimited word once trailing
/// punctuation is stripped. Leading punctuation on that word stays.
///
/// A punctuation-only final piece (as in `"buzzing ."`) is not a word, so the
/// word before it is returned. `None` when the line has no word at all.
pub fn trailing_word(line: &str) -> Option<String> {
    line.trim_end_matches(|c: char| c.is_whitespace() || is_punctuation(c))
        .split_whitespace()
        .last()
        .map(str::to_owned)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
