//! Report envelope shared by every workflow operation.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pa_align::AlignmentReport;
use pa_compare::{PunctuationComparison, WordComparison};
use pa_core::{Document, Result};

use crate::output::OutputStatus;

/// Identity of one input document as it was read for a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputInfo {
    pub path: PathBuf,
    /// Hex SHA-256 of the full text.
    pub fingerprint: String,
    pub lines: usize,
}

impl InputInfo {
    pub fn of(doc: &Document) -> Self {
        Self {
            path: doc.path().to_path_buf(),
            fingerprint: doc.fingerprint(),
            lines: doc.lines().len(),
        }
    }
}

/// A result together with the run that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report<T> {
    /// Stable unique identifier for this run (UUIDv4).
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub bilingual: InputInfo,
    pub reference: InputInfo,
    pub result: T,
}

impl<T> Report<T> {
    pub(crate) fn new(bilingual: &Document, reference: &Document, result: T) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            bilingual: InputInfo::of(bilingual),
            reference: InputInfo::of(reference),
            result,
        }
    }
}

impl<T: Serialize> Report<T> {
    /// Pretty-printed JSON of the whole envelope.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Paragraph alignment plus the fate of its tagged output.
///
/// The alignment is kept even when writing the output failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentRun {
    pub alignment: AlignmentReport,
    pub output: OutputStatus,
}

/// All three operations over one pair of inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullRun {
    pub words: WordComparison,
    pub punctuation: PunctuationComparison,
    pub paragraphs: AlignmentRun,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_carries_fingerprints() {
        let bilingual = Document::from_text("b.txt", "One.\n一\n");
        let reference = Document::from_text("e.txt", "One.\n");
        let report = Report::new(&bilingual, &reference, ());
        assert_eq!(report.bilingual.lines, 2);
        assert_eq!(report.reference.fingerprint, pa_core::fingerprint("One.\n"));
        assert_ne!(report.run_id, Uuid::nil());
    }

    #[test]
    fn envelope_serializes_result_field() {
        let doc = Document::from_text("x.txt", "");
        let text = Report::new(&doc, &doc, 42u32).to_json().unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["result"], 42);
        assert_eq!(json["bilingual"]["path"], "x.txt");
    }
}
