//! Plain-text rendering of reports for an operator.

use std::fmt::{self, Write};

use pa_align::{AlignmentReport, MatchOutcome};
use pa_compare::{EmptySide, PunctuationComparison, PunctuationMismatchKind, WordComparison};
use pa_core::PunctuationMark;

use crate::output::OutputStatus;
use crate::report::{AlignmentRun, FullRun};

/// Shown in place of a bilingual-side value past the end of its sequence.
pub const END_OF_BILINGUAL: &str = "<END_OF_BILINGUAL_EXTRACT>";
/// Shown in place of a reference-side value past the end of its sequence.
pub const END_OF_REFERENCE: &str = "<END_OF_REFERENCE>";

const PREVIEW_CHARS: usize = 60;
const LABEL_WIDTH: usize = 41;

pub fn render_words(report: &WordComparison) -> String {
    render_with(|out| write_words(out, report))
}

pub fn render_punctuation(report: &PunctuationComparison) -> String {
    render_with(|out| write_punctuation(out, report))
}

pub fn render_alignment(run: &AlignmentRun) -> String {
    render_with(|out| write_alignment(out, run))
}

/// All three sections, one after the other.
pub fn render_full(run: &FullRun) -> String {
    render_with(|out| {
        writeln!(out, "== Words ==")?;
        write_words(out, &run.words)?;
        writeln!(out, "\n== Punctuation ==")?;
        write_punctuation(out, &run.punctuation)?;
        writeln!(out, "\n== Paragraphs ==")?;
        write_alignment(out, &run.paragraphs)
    })
}

fn render_with(write: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write(&mut out);
    out
}

// ---------------------------------------------------------------------------
// Words
// ---------------------------------------------------------------------------

fn write_words(out: &mut String, report: &WordComparison) -> fmt::Result {
    if let Some(side) = report.empty_input {
        return match side {
            EmptySide::Both => {
                writeln!(out, "Both texts are empty or contain no valid words after cleaning punctuation.")
            }
            EmptySide::Left => {
                writeln!(out, "The bilingual extract is empty or has no valid words after cleaning punctuation.")?;
                writeln!(out, "The reference contains {} words after cleaning punctuation.", report.right_len)
            }
            EmptySide::Right => {
                writeln!(out, "The reference is empty or has no valid words after cleaning punctuation.")?;
                writeln!(out, "The bilingual extract contains {} words after cleaning punctuation.", report.left_len)
            }
        };
    }

    for m in &report.mismatches {
        writeln!(out, "Difference at word index {}:", m.index)?;
        writeln!(out, "  Bilingual extract: '{}'", m.left.as_deref().unwrap_or(END_OF_BILINGUAL))?;
        writeln!(out, "  Reference:         '{}'", m.right.as_deref().unwrap_or(END_OF_REFERENCE))?;
        writeln!(out)?;
    }

    if report.mismatches.is_empty() {
        writeln!(out, "No differences found between the English words after cleaning punctuation.")?;
    }
    if report.lengths_differ() {
        writeln!(
            out,
            "(Note: cleaned word counts differ - bilingual extract: {}, reference: {})",
            report.left_len, report.right_len
        )?;
    } else if report.mismatches.is_empty() {
        writeln!(out, "(Cleaned word counts match: {})", report.left_len)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Punctuation
// ---------------------------------------------------------------------------

fn write_punctuation(out: &mut String, report: &PunctuationComparison) -> fmt::Result {
    for m in &report.mismatches {
        let label = match m.kind {
            PunctuationMismatchKind::CharacterMismatch => "different marks",
            PunctuationMismatchKind::LeftShortage => "bilingual extract ran out of marks",
            PunctuationMismatchKind::RightShortage => "reference ran out of marks",
        };
        writeln!(out, "Punctuation difference at mark {} ({label}):", m.index)?;
        writeln!(out, "  Bilingual extract: {}", describe_mark(m.left.as_ref(), END_OF_BILINGUAL))?;
        writeln!(out, "  Reference:         {}", describe_mark(m.right.as_ref(), END_OF_REFERENCE))?;
        writeln!(out)?;
    }

    if report.mismatches.is_empty() {
        writeln!(out, "No punctuation differences found.")?;
    }
    writeln!(
        out,
        "(Punctuation marks - bilingual extract: {}, reference: {})",
        report.left_len, report.right_len
    )
}

fn describe_mark(mark: Option<&PunctuationMark>, sentinel: &str) -> String {
    match mark {
        Some(mark) => format!("'{}' at line {}, column {}", mark.ch, mark.line, mark.column),
        None => sentinel.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Paragraphs
// ---------------------------------------------------------------------------

fn write_alignment(out: &mut String, run: &AlignmentRun) -> fmt::Result {
    write_alignment_report(out, &run.alignment)?;
    match &run.output {
        OutputStatus::Written { path, lines } => {
            writeln!(out, "Tagged output written to {} ({lines} lines).", path.display())
        }
        OutputStatus::Failed { path, reason } => {
            writeln!(out, "Tagged output NOT written to {}: {reason}", path.display())
        }
    }
}

fn write_alignment_report(out: &mut String, report: &AlignmentReport) -> fmt::Result {
    let s = &report.summary;
    writeln!(out, "{:<w$}{}", "Reference paragraphs:", s.total, w = LABEL_WIDTH + 2)?;
    writeln!(out, "  {:<w$}{}", "matched:", s.matched, w = LABEL_WIDTH)?;
    writeln!(out, "  {:<w$}{}", "word count matched, last word differed:", s.last_word_mismatched, w = LABEL_WIDTH)?;
    writeln!(out, "  {:<w$}{}", "unmatched:", s.unmatched, w = LABEL_WIDTH)?;
    if s.skipped_empty > 0 {
        writeln!(out, "  {:<w$}{}", "skipped (no words):", s.skipped_empty, w = LABEL_WIDTH)?;
    }
    writeln!(out, "English lines consumed: {} of {}", report.lines_consumed, report.english_lines)?;

    let mut unmatched = report.unmatched().peekable();
    if unmatched.peek().is_some() {
        writeln!(out, "\nUnmatched paragraphs:")?;
        for p in unmatched {
            write!(out, "  line {}: {}", p.paragraph.line_number, preview(&p.paragraph.text))?;
            if let MatchOutcome::Unmatched { last_word_rejections } = p.outcome {
                if last_word_rejections > 0 {
                    write!(
                        out,
                        " [{last_word_rejections} block(s) had {} words but not '{}']",
                        p.paragraph.word_count, p.paragraph.last_word
                    )?;
                }
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    }
}
