//! Paragraph boundary recovery.
//!
//! Each reference paragraph is matched against a contiguous block of English
//! lines from the bilingual document. A block matches when
//!
//! 1. its total word count equals the paragraph's word count, and
//! 2. the trailing word of its last line equals the paragraph's trailing
//!    word (case-insensitively by default).
//!
//! The search is greedy and uses one cursor into the English lines shared by
//! all paragraphs. A match moves the cursor past its block; an unmatched
//! paragraph leaves it where it was. The cursor never moves backward, so
//! paragraphs must appear in the same order in both documents.

use tracing::{debug, info};

use pa_core::{extract_english_lines, reference_paragraphs, EnglishLine, PaError, ReferenceParagraph, Result};

use crate::result::{AlignmentReport, AlignmentSummary, MatchOutcome, ParagraphMatch};

/// Marker line inserted before every recovered paragraph start.
pub const PARAGRAPH_MARKER: &str = "<P>";

// ---------------------------------------------------------------------------
// AlignConfig
// ---------------------------------------------------------------------------

/// Runtime configuration for the paragraph aligner.
#[derive(Debug, Clone)]
pub struct AlignConfig {
    /// Text of the marker line written before each paragraph start.
    /// Default: [`PARAGRAPH_MARKER`].
    pub marker: String,
    /// Whether trailing words must also agree in case.
    /// Default: false.
    pub case_sensitive_last_word: bool,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            marker: PARAGRAPH_MARKER.to_string(),
            case_sensitive_last_word: false,
        }
    }
}

impl AlignConfig {
    /// The marker must be a single non-empty line.
    pub fn validate(&self) -> Result<()> {
        if self.marker.trim().is_empty() {
            return Err(PaError::InvalidInput("paragraph marker is empty".to_string()));
        }
        if self.marker.contains(|c: char| c == '\n' || c == '\r') {
            return Err(PaError::InvalidInput(format!(
                "paragraph marker {:?} spans more than one line",
                self.marker
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ParagraphAligner
// ---------------------------------------------------------------------------

/// Outcome of searching for one paragraph from a given cursor.
enum BlockSearch {
    Found { start: usize, end: usize, words: usize },
    NotFound { last_word_rejections: usize },
}

/// Greedy block matcher between reference paragraphs and English lines.
#[derive(Debug, Clone, Default)]
pub struct ParagraphAligner {
    config: AlignConfig,
}

impl ParagraphAligner {
    pub fn new(config: AlignConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Extract the English lines of `bilingual_lines` and the paragraphs of
    /// `reference_lines`, then align them.
    pub fn align_documents<S: AsRef<str>, T: AsRef<str>>(
        &self,
        bilingual_lines: &[S],
        reference_lines: &[T],
    ) -> AlignmentReport {
        let english = extract_english_lines(bilingual_lines);
        let paragraphs = reference_paragraphs(reference_lines);
        self.align(&paragraphs, &english)
    }

    /// Match every paragraph in reference order.
    pub fn align(&self, paragraphs: &[ReferenceParagraph], lines: &[EnglishLine]) -> AlignmentReport {
        let mut cursor = 0usize;
        let mut summary = AlignmentSummary::default();
        let mut results = Vec::with_capacity(paragraphs.len());

        for paragraph in paragraphs {
            if paragraph.is_empty() {
                summary.skipped_empty += 1;
                debug!(line = paragraph.line_number, "skipping paragraph without words");
                continue;
            }

            let outcome = match self.find_block(paragraph, lines, cursor) {
                BlockSearch::Found { start, end, words } => {
                    debug!(
                        line = paragraph.line_number,
                        first_line = lines[start].original_index,
                        last_line = lines[end].original_index,
                        skipped = start - cursor,
                        "paragraph matched"
                    );
                    cursor = end + 1;
                    MatchOutcome::Matched {
                        first_line: lines[start].original_index,
                        last_line: lines[end].original_index,
                        block_word_count: words,
                    }
                }
                BlockSearch::NotFound {
                    last_word_rejections,
                } => {
                    debug!(
                        line = paragraph.line_number,
                        words = paragraph.word_count,
                        last_word = %paragraph.last_word,
                        last_word_rejections,
                        "paragraph unmatched"
                    );
                    MatchOutcome::Unmatched {
                        last_word_rejections,
                    }
                }
            };

            summary.record(&outcome);
            results.push(ParagraphMatch {
                paragraph: paragraph.clone(),
                outcome,
            });
        }

        info!(
            total = summary.total,
            matched = summary.matched,
            last_word_mismatched = summary.last_word_mismatched,
            unmatched = summary.unmatched,
            skipped_empty = summary.skipped_empty,
            "paragraph alignment finished"
        );

        AlignmentReport {
            paragraphs: results,
            summary,
            english_lines: lines.len(),
            lines_consumed: cursor,
        }
    }

    /// Try every start position from `cursor` onward. A start is abandoned as
    /// soon as its running word total overshoots the target, or reaches it
    /// with the wrong trailing word; growing the block further can only
    /// overshoot.
    fn find_block(&self, paragraph: &ReferenceParagraph, lines: &[EnglishLine], cursor: usize) -> BlockSearch {
        let target = paragraph.word_count;
        let mut last_word_rejections = 0usize;

        for start in cursor..lines.len() {
            let mut total = 0usize;
            for (end, line) in lines.iter().enumerate().skip(start) {
                total += line.word_count;
                if total > target {
                    break;
                }
                if total == target {
                    if self.trailing_words_agree(line, paragraph) {
                        return BlockSearch::Found {
                            start,
                            end,
                            words: total,
                        };
                    }
                    last_word_rejections += 1;
                    break;
                }
            }
        }

        BlockSearch::NotFound {
            last_word_rejections,
        }
    }

    fn trailing_words_agree(&self, line: &EnglishLine, paragraph: &ReferenceParagraph) -> bool {
        match line.trailing_word() {
            Some(word) if self.config.case_sensitive_last_word => word == paragraph.last_word,
            Some(word) => word.to_lowercase() == paragraph.last_word.to_lowercase(),
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<EnglishLine> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| EnglishLine::new(*t, i * 2))
            .collect()
    }

    fn paragraph(text: &str) -> ReferenceParagraph {
        ReferenceParagraph::new(text, 1)
    }

    #[test]
    fn single_line_block_matches_and_advances_by_one() {
        let report = ParagraphAligner::default().align(&[paragraph("A short one.")], &lines(&["A short one."]));
        assert_eq!(
            report.paragraphs[0].outcome,
            MatchOutcome::Matched {
                first_line: 0,
                last_line: 0,
                block_word_count: 3,
            }
        );
        assert_eq!(report.lines_consumed, 1);
    }

    #[test]
    fn multi_line_block_matches_first_line() {
        let english = lines(&["It was the best of times,", "it was the worst of times.", "Next one."]);
        let paras = vec![
            paragraph("It was the best of times, it was the worst of times."),
            paragraph("Next one."),
        ];
        let report = ParagraphAligner::default().align(&paras, &english);
        assert_eq!(report.summary.matched, 2);
        assert_eq!(report.paragraph_starts().into_iter().collect::<Vec<_>>(), vec![0, 4]);
        assert_eq!(report.lines_consumed, 3);
    }

    #[test]
    fn trailing_word_is_compared_case_insensitively() {
        let report = ParagraphAligner::default().align(&[paragraph("The END.")], &lines(&["the end"]));
        assert!(report.paragraphs[0].outcome.is_matched());

        let strict = ParagraphAligner::new(AlignConfig {
            case_sensitive_last_word: true,
            ..AlignConfig::default()
        });
        let report = strict.align(&[paragraph("The END.")], &lines(&["the end"]));
        assert_eq!(report.summary.last_word_mismatched, 1);
    }

    #[test]
    fn search_skips_lines_before_a_later_match() {
        let english = lines(&["Stray heading", "Real text here."]);
        let report = ParagraphAligner::default().align(&[paragraph("Real text here.")], &english);
        assert_eq!(report.paragraph_starts().into_iter().next(), Some(2));
        assert_eq!(report.lines_consumed, 2);
    }

    #[test]
    fn unmatched_paragraph_does_not_move_cursor() {
        let english = lines(&["First line here.", "Second line."]);
        let paras = vec![paragraph("Nothing like this at all anywhere."), paragraph("First line here.")];
        let report = ParagraphAligner::default().align(&paras, &english);
        assert_eq!(report.paragraphs[0].outcome, MatchOutcome::Unmatched { last_word_rejections: 0 });
        assert!(report.paragraphs[1].outcome.is_matched());
        assert_eq!(report.summary.unmatched, 1);
        assert_eq!(report.lines_consumed, 1);
    }

    #[test]
    fn word_count_match_with_wrong_trailing_word_is_rejected() {
        let english = lines(&["one two three", "four five six"]);
        let report = ParagraphAligner::default().align(&[paragraph("one two seven")], &english);
        assert_eq!(
            report.paragraphs[0].outcome,
            MatchOutcome::Unmatched { last_word_rejections: 2 }
        );
        assert_eq!(report.summary.last_word_mismatched, 1);
        assert_eq!(report.summary.unmatched, 0);
    }

    #[test]
    fn overshooting_start_is_abandoned() {
        // Start 0 overshoots (5 > 2); start 1 matches.
        let english = lines(&["a b c d e", "f g"]);
        let report = ParagraphAligner::default().align(&[paragraph("f g")], &english);
        assert_eq!(report.paragraph_starts().into_iter().next(), Some(2));
    }

    #[test]
    fn empty_paragraphs_are_skipped_and_not_counted() {
        let report = ParagraphAligner::default().align(&[paragraph("* * *"), paragraph("Hi there.")], &lines(&["Hi there."]));
        assert_eq!(report.summary.skipped_empty, 1);
        assert_eq!(report.summary.total, 1);
        assert_eq!(report.paragraphs.len(), 1);
    }

    #[test]
    fn matched_paragraphs_never_reuse_lines() {
        let english = lines(&["Same words.", "Same words."]);
        let paras = vec![paragraph("Same words."), paragraph("Same words."), paragraph("Same words.")];
        let report = ParagraphAligner::default().align(&paras, &english);
        assert_eq!(report.summary.matched, 2);
        assert_eq!(report.summary.unmatched, 1);
        assert_eq!(report.paragraph_starts().len(), 2);
    }

    #[test]
    fn align_documents_uses_original_indices() {
        let bilingual = vec!["It was pandaemonium.", "中文", "", "The place was buzzing.", "中文"];
        let reference = vec!["It was pandaemonium .", "The place was buzzing .", "And one more word."];
        let report = ParagraphAligner::default().align_documents(&bilingual, &reference);
        assert_eq!(report.paragraph_starts().into_iter().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(report.summary.matched, 2);
        assert_eq!(report.summary.unmatched, 1);
        assert_eq!(report.english_lines, 2);
    }

    #[test]
    fn config_validation() {
        assert!(AlignConfig::default().validate().is_ok());
        let empty = AlignConfig {
            marker: "  ".to_string(),
            ..AlignConfig::default()
        };
        assert!(empty.validate().is_err());
        let multi = AlignConfig {
            marker: "<P>\n".to_string(),
            ..AlignConfig::default()
        };
        assert!(multi.validate().is_err());
    }
}
