//! English-line selection from a line-interleaved bilingual document.
//!
//! The document is assumed to alternate one English line with one
//! source-language line, English first, with any number of blank lines in
//! between. Nothing checks that assumption: a file that does not alternate
//! strictly yields the wrong subset.

use tracing::warn;

use crate::line::{ContentLine, EnglishLine};

/// Non-blank lines of `lines`, each tagged with its index in the unfiltered
/// list. Line terminators are stripped; other whitespace is kept.
pub fn content_lines<S: AsRef<str>>(lines: &[S]) -> Vec<ContentLine> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.as_ref().trim().is_empty())
        .map(|(original_index, line)| ContentLine {
            text: strip_terminator(line.as_ref()).to_owned(),
            original_index,
        })
        .collect()
}

/// English lines (even positions among the non-blank lines) with their
/// original indices preserved for re-tagging.
pub fn extract_english_lines<S: AsRef<str>>(lines: &[S]) -> Vec<EnglishLine> {
    let content = content_lines(lines);
    if content.len() % 2 != 0 {
        warn!(
            content_lines = content.len(),
            "bilingual document has an odd number of non-blank lines"
        );
    }
    content
        .into_iter()
        .step_by(2)
        .map(EnglishLine::from)
        .collect()
}

/// The English lines joined with `\n`. Empty when there are none.
pub fn extract_english_text<S: AsRef<str>>(lines: &[S]) -> String {
    content_lines(lines)
        .into_iter()
        .step_by(2)
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
