use std::path::PathBuf;

use tracing::{info, warn};

use pa_align::{apply_tags, AlignConfig, AlignmentReport, ParagraphAligner};
use pa_compare::{CompareConfig, PunctuationComparison, SequenceComparer, WordComparison};
use pa_core::{extract_english_text, Document, Result};

use crate::output::{derive_output_path, write_tagged, OutputStatus};
use crate::report::{AlignmentRun, FullRun, Report};

/// Default bilingual input looked up in the working directory.
pub const DEFAULT_BILINGUAL: &str = "BilingualText.txt";
/// Default reference input looked up in the working directory.
pub const DEFAULT_REFERENCE: &str = "EnglishText.txt";

/// Paths one invocation works on.
#[derive(Debug, Clone)]
pub struct WorkflowInputs {
    pub bilingual_path: PathBuf,
    pub reference_path: PathBuf,
    /// Where the tagged bilingual document goes; derived from the bilingual
    /// path when `None`.
    pub output_path: Option<PathBuf>,
}

impl Default for WorkflowInputs {
    fn default() -> Self {
        Self {
            bilingual_path: PathBuf::from(DEFAULT_BILINGUAL),
            reference_path: PathBuf::from(DEFAULT_REFERENCE),
            output_path: None,
        }
    }
}

/// One user-triggered run over a bilingual and a reference document.
///
/// Every operation reads both inputs afresh; nothing is carried between
/// calls.
pub struct Workflow {
    inputs: WorkflowInputs,
    comparer: SequenceComparer,
    aligner: ParagraphAligner,
}

impl Workflow {
    pub fn new(inputs: WorkflowInputs) -> Self {
        Self {
            inputs,
            comparer: SequenceComparer::default(),
            aligner: ParagraphAligner::default(),
        }
    }

    pub fn with_compare_config(mut self, config: CompareConfig) -> Self {
        self.comparer = SequenceComparer::new(config);
        self
    }

    pub fn with_align_config(mut self, config: AlignConfig) -> Self {
        self.aligner = ParagraphAligner::new(config);
        self
    }

    pub fn inputs(&self) -> &WorkflowInputs {
        &self.inputs
    }

    /// Output path this workflow writes to.
    pub fn output_path(&self) -> PathBuf {
        self.inputs
            .output_path
            .clone()
            .unwrap_or_else(|| derive_output_path(&self.inputs.bilingual_path))
    }

    /// Compare the words of the bilingual extract with the reference.
    pub fn compare_words(&self) -> Result<Report<WordComparison>> {
        let (bilingual, reference) = self.load()?;
        let result = self.words(&bilingual, &reference);
        Ok(Report::new(&bilingual, &reference, result))
    }

    /// Compare the punctuation of the bilingual extract with the reference.
    pub fn compare_punctuation(&self) -> Result<Report<PunctuationComparison>> {
        let (bilingual, reference) = self.load()?;
        let result = self.punctuation(&bilingual, &reference);
        Ok(Report::new(&bilingual, &reference, result))
    }

    /// Recover paragraph starts and write the tagged bilingual document.
    ///
    /// A failed write is reported in [`AlignmentRun::output`]; only a read
    /// failure or an invalid config is an `Err`.
    pub fn align_paragraphs(&self) -> Result<Report<AlignmentRun>> {
        self.aligner.config().validate()?;
        let (bilingual, reference) = self.load()?;
        let result = self.paragraphs(&bilingual, &reference);
        Ok(Report::new(&bilingual, &reference, result))
    }

    /// Run all three operations over a single read of the inputs.
    pub fn run_all(&self) -> Result<Report<FullRun>> {
        self.aligner.config().validate()?;
        let (bilingual, reference) = self.load()?;
        let result = FullRun {
            words: self.words(&bilingual, &reference),
            punctuation: self.punctuation(&bilingual, &reference),
            paragraphs: self.paragraphs(&bilingual, &reference),
        };
        Ok(Report::new(&bilingual, &reference, result))
    }

    fn load(&self) -> Result<(Document, Document)> {
        let bilingual = Document::load(&self.inputs.bilingual_path)?;
        let reference = Document::load(&self.inputs.reference_path)?;
        Ok((bilingual, reference))
    }

    fn words(&self, bilingual: &Document, reference: &Document) -> WordComparison {
        let extract = extract_english_text(&bilingual.lines());
        self.comparer.compare_words(&extract, reference.text())
    }

    fn punctuation(&self, bilingual: &Document, reference: &Document) -> PunctuationComparison {
        let extract = extract_english_text(&bilingual.lines());
        self.comparer.compare_punctuation(&extract, reference.text())
    }

    fn paragraphs(&self, bilingual: &Document, reference: &Document) -> AlignmentRun {
        let original = bilingual.lines();
        let alignment = self.aligner.align_documents(&original, &reference.lines());
        let output = self.write_output(&original, &alignment, bilingual, reference);
        AlignmentRun { alignment, output }
    }

    fn write_output(
        &self,
        original: &[&str],
        alignment: &AlignmentReport,
        bilingual: &Document,
        reference: &Document,
    ) -> OutputStatus {
        let path = self.output_path();
        let tagged = apply_tags(original, &alignment.paragraph_starts(), &self.aligner.config().marker);

        match write_tagged(&path, &tagged, &[bilingual.path(), reference.path()]) {
            Ok(()) => {
                info!(path = %path.display(), markers = tagged.len() - original.len(), "paragraph markers inserted");
                OutputStatus::Written {
                    path,
                    lines: tagged.len(),
                }
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "tagged output not written");
                OutputStatus::Failed {
                    path,
                    reason: err.to_string(),
                }
            }
        }
    }
}
