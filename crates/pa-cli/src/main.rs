//! bitext-align - bilingual/reference text alignment CLI
//!
//! Usage:
//!   bitext-align words          Compare the English words of both files
//!   bitext-align punctuation    Compare their punctuation marks
//!   bitext-align align          Recover paragraph starts and write a tagged copy
//!   bitext-align all            Run all three over a single read of the inputs

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use pa_align::AlignConfig;
use pa_compare::CompareConfig;
use pa_workflow::render::{render_alignment, render_full, render_punctuation, render_words};
use pa_workflow::{Report, Workflow, WorkflowInputs, DEFAULT_BILINGUAL, DEFAULT_REFERENCE};

/// Exit code when the report was produced but the tagged output was not.
const EXIT_OUTPUT_FAILED: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "bitext-align", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare the English words of the bilingual file with the reference
    Words {
        #[command(flatten)]
        inputs: InputArgs,
        /// Ignore case when comparing words
        #[arg(short, long)]
        ignore_case: bool,
    },
    /// Compare punctuation marks in order, with their positions
    Punctuation {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Recover paragraph starts and write the bilingual file with markers
    Align {
        #[command(flatten)]
        inputs: InputArgs,
        #[command(flatten)]
        align: AlignArgs,
    },
    /// Run words, punctuation and align together
    All {
        #[command(flatten)]
        inputs: InputArgs,
        #[command(flatten)]
        align: AlignArgs,
        /// Ignore case when comparing words
        #[arg(short, long)]
        ignore_case: bool,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Line-interleaved bilingual text file
    #[arg(short, long, default_value = DEFAULT_BILINGUAL)]
    bilingual: PathBuf,
    /// English reference text file
    #[arg(short, long, default_value = DEFAULT_REFERENCE)]
    reference: PathBuf,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct AlignArgs {
    /// Where to write the tagged file (default: derived from the bilingual file's folder)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Marker line inserted before each paragraph
    #[arg(short, long, env = "BITEXT_MARKER", default_value = pa_align::PARAGRAPH_MARKER)]
    marker: String,
    /// Require trailing words to match in case
    #[arg(long)]
    case_sensitive_last_word: bool,
}

impl AlignArgs {
    fn config(&self) -> AlignConfig {
        AlignConfig {
            marker: self.marker.clone(),
            case_sensitive_last_word: self.case_sensitive_last_word,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Words { inputs, ignore_case } => {
            let report = workflow(&inputs, None)?
                .with_compare_config(CompareConfig {
                    case_sensitive: !ignore_case,
                })
                .compare_words()
                .context("word comparison failed")?;
            emit(inputs.json, &report, || render_words(&report.result))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Punctuation { inputs } => {
            let report = workflow(&inputs, None)?
                .compare_punctuation()
                .context("punctuation comparison failed")?;
            emit(inputs.json, &report, || render_punctuation(&report.result))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Align { inputs, align } => {
            let report = workflow(&inputs, align.output.clone())?
                .with_align_config(align.config())
                .align_paragraphs()
                .context("paragraph alignment failed")?;
            emit(inputs.json, &report, || render_alignment(&report.result))?;
            Ok(exit_for(report.result.output.is_written()))
        }
        Commands::All {
            inputs,
            align,
            ignore_case,
        } => {
            let report = workflow(&inputs, align.output.clone())?
                .with_compare_config(CompareConfig {
                    case_sensitive: !ignore_case,
                })
                .with_align_config(align.config())
                .run_all()
                .context("alignment run failed")?;
            emit(inputs.json, &report, || render_full(&report.result))?;
            Ok(exit_for(report.result.paragraphs.output.is_written()))
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}

fn workflow(inputs: &InputArgs, output: Option<PathBuf>) -> Result<Workflow> {
    Ok(Workflow::new(WorkflowInputs {
        bilingual_path: absolute(&inputs.bilingual)?,
        reference_path: absolute(&inputs.reference)?,
        output_path: output,
    }))
}

/// Anchor relative paths at the working directory so the derived output
/// lands next to the bilingual file under its folder's name.
fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(cwd.join(path))
}

fn emit<T: Serialize>(json: bool, report: &Report<T>, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        let rendered = report.to_json().context("Failed to serialize report")?;
        println!("{rendered}");
    } else {
        print!("{}", text());
    }
    Ok(())
}

fn exit_for(written: bool) -> ExitCode {
    if written {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_OUTPUT_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_preloaded_file_names() {
        let cli = Cli::parse_from(["bitext-align", "punctuation"]);
        match cli.command {
            Commands::Punctuation { inputs } => {
                assert_eq!(inputs.bilingual, PathBuf::from("BilingualText.txt"));
                assert_eq!(inputs.reference, PathBuf::from("EnglishText.txt"));
                assert!(!inputs.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn align_flags_map_onto_config() {
        let cli = Cli::parse_from([
            "bitext-align",
            "align",
            "--marker",
            "##",
            "--case-sensitive-last-word",
            "-o",
            "out.txt",
        ]);
        match cli.command {
            Commands::Align { align, .. } => {
                let config = align.config();
                assert_eq!(config.marker, "##");
                assert!(config.case_sensitive_last_word);
                assert_eq!(align.output, Some(PathBuf::from("out.txt")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn relative_paths_are_anchored() {
        let abs = absolute(Path::new("BilingualText.txt")).unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("BilingualText.txt"));
    }
}
