use serde::{Deserialize, Serialize};

use crate::normalize::{self, trailing_word};

// ---------------------------------------------------------------------------
// PunctuationMark
// ---------------------------------------------------------------------------

/// One punctuation character and where it sits in its source text.
///
/// Both `line` and `column` are 1-based; `column` counts characters, not
/// bytes, within the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctuationMark {
    pub ch: char,
    pub line: usize,
    pub column: usize,
}

impl PunctuationMark {
    pub fn new(ch: char, line: usize, column: usize) -> Self {
        Self { ch, line, column }
    }
}

// ---------------------------------------------------------------------------
// ContentLine / EnglishLine
// ---------------------------------------------------------------------------

/// A non-blank line of the bilingual document.
///
/// `original_index` is the zero-based position in the unfiltered line list,
/// so blank lines are skipped here but still counted for re-insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLine {
    /// Line content without its terminator.
    pub text: String,
    pub original_index: usize,
}

/// A [`ContentLine`] presumed to be English, with its word count cached for
/// the paragraph search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnglishLine {
    pub text: String,
    pub original_index: usize,
    /// Number of tokens after punctuation normalization.
    pub word_count: usize,
}

impl EnglishLine {
    pub fn new(text: impl Into<String>, original_index: usize) -> Self {
        let text = text.into();
        let word_count = normalize::word_count(&text);
        Self {
            text,
            original_index,
            word_count,
        }
    }

    /// Trailing word of this line, or `None` when it has no word characters.
    pub fn trailing_word(&self) -> Option<String> {
        trailing_word(&self.text)
    }
}

impl From<ContentLine> for EnglishLine {
    fn from(line: ContentLine) -> Self {
        EnglishLine::new(line.text, line.original_index)
    }
}

// ---------------------------------------------------------------------------
// ReferenceParagraph
// ---------------------------------------------------------------------------

/// One non-blank line of the reference document, treated as a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceParagraph {
    pub text: String,
    pub word_count: usize,
    /// Final whitespace-delimited word with trailing punctuation stripped.
    /// Empty when the paragraph has no words.
    pub last_word: String,
    /// 1-based line number in the reference document.
    pub line_number: usize,
}

impl ReferenceParagraph {
    pub fn new(text: impl Into<String>, line_number: usize) -> Self {
        let text = text.into();
        let word_count = normalize::word_count(&text);
        let last_word = trailing_word(&text).unwrap_or_default();
        Self {
            text,
            word_count,
            last_word,
            line_number,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

/// Build one [`ReferenceParagraph`] per non-blank line of the reference
/// document, keeping 1-based line numbers of the unfiltered list.
pub fn reference_paragraphs<S: AsRef<str>>(lines: &[S]) -> Vec<ReferenceParagraph> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.as_ref().trim().is_empty())
        .map(|(idx, line)| ReferenceParagraph::new(line.as_ref().trim_end(), idx + 1))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_line_counts_normalized_words() {
        let line = EnglishLine::new("It was pandaemonium .", 4);
        assert_eq!(line.word_count, 3);
        assert_eq!(line.original_index, 4);
        assert_eq!(line.trailing_word().as_deref(), Some("pandaemonium"));
    }

    #[test]
    fn reference_paragraph_fields() {
        let p = ReferenceParagraph::new("A short one.", 1);
        assert_eq!(p.word_count, 3);
        assert_eq!(p.last_word, "one");
        assert_eq!(p.line_number, 1);
        assert!(!p.is_empty());
    }

    #[test]
    fn punctuation_only_paragraph_is_empty() {
        let p = ReferenceParagraph::new("* * *", 7);
        assert!(p.is_empty());
        assert_eq!(p.last_word, "");
    }

    #[test]
    fn reference_paragraphs_skip_blank_lines_but_keep_numbers() {
        let lines = vec!["First one.", "", "   ", "Second one."];
        let paras = reference_paragraphs(&lines);
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[0].line_number, 1);
        assert_eq!(paras[1].line_number, 4);
        assert_eq!(paras[1].text, "Second one.");
    }

    #[test]
    fn content_line_converts_to_english_line() {
        let content = ContentLine {
            text: "The place was buzzing.".to_string(),
            original_index: 2,
        };
        let english = EnglishLine::from(content);
        assert_eq!(english.word_count, 4);
        assert_eq!(english.original_index, 2);
    }
}
