//! Tagged-output placement and writing.
//!
//! The output never overwrites an input: [`write_tagged`] resolves both
//! sides to absolute paths before comparing them.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use pa_core::{PaError, Result};

/// Suffix appended to the derived output file stem.
const OUTPUT_SUFFIX: &str = "_tagged.txt";

/// File name used when neither the folder nor the file yields a usable stem.
const FALLBACK_OUTPUT: &str = "tagged_output.txt";

// ---------------------------------------------------------------------------
// OutputStatus
// ---------------------------------------------------------------------------

/// What happened to the tagged output of an alignment run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutputStatus {
    Written { path: PathBuf, lines: usize },
    Failed { path: PathBuf, reason: String },
}

impl OutputStatus {
    pub fn is_written(&self) -> bool {
        matches!(self, OutputStatus::Written { .. })
    }
}

// ---------------------------------------------------------------------------
// Path derivation
// ---------------------------------------------------------------------------

/// Default output path for a bilingual input.
///
/// `<dir>/<folder>_tagged.txt`, where `<folder>` is the name of the folder
/// holding the bilingual file. Falls back to the file's own stem when the
/// folder has no usable name (a filesystem root, `.`, `..`, blank), and to
/// `tagged_output.txt` when the stem is unusable too.
pub fn derive_output_path(bilingual: &Path) -> PathBuf {
    let dir = bilingual
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let stem = usable_name(dir.file_name().and_then(|n| n.to_str()))
        .or_else(|| usable_name(bilingual.file_stem().and_then(|n| n.to_str())));

    let candidate = match stem {
        Some(stem) => dir.join(format!("{stem}{OUTPUT_SUFFIX}")),
        None => dir.join(FALLBACK_OUTPUT),
    };

    // A bilingual file that is itself named like the derived output.
    if candidate == bilingual {
        dir.join(FALLBACK_OUTPUT)
    } else {
        candidate
    }
}

fn usable_name(name: Option<&str>) -> Option<&str> {
    name.map(str::trim)
        .filter(|n| !n.is_empty() && *n != "." && *n != "..")
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write `lines` to `path`, each followed by `\n`.
///
/// Fails with [`PaError::OutputCollidesWithInput`] before touching the disk
/// when `path` is one of `inputs`.
pub fn write_tagged<S: AsRef<str>>(path: &Path, lines: &[S], inputs: &[&Path]) -> Result<()> {
    let target = resolve(path);
    if inputs.iter().any(|input| resolve(input) == target) {
        return Err(PaError::OutputCollidesWithInput {
            path: path.to_path_buf(),
        });
    }

    let unwritable = |source: std::io::Error| PaError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(unwritable)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(unwritable)?;
    }
    writer.flush().map_err(unwritable)?;

    info!(path = %path.display(), lines = lines.len(), "tagged output written");
    Ok(())
}

/// Absolute, symlink-free form of `path` where it can be determined.
/// A path that does not exist yet resolves through its parent directory.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => {
            debug!(path = %path.display(), "could not resolve path");
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_from_containing_folder() {
        assert_eq!(
            derive_output_path(Path::new("/books/moby_dick/BilingualText.txt")),
            PathBuf::from("/books/moby_dick/moby_dick_tagged.txt")
        );
    }

    #[test]
    fn root_folder_falls_back_to_file_stem() {
        assert_eq!(
            derive_output_path(Path::new("/BilingualText.txt")),
            PathBuf::from("/BilingualText_tagged.txt")
        );
    }

    #[test]
    fn relative_file_falls_back_to_file_stem() {
        assert_eq!(
            derive_output_path(Path::new("BilingualText.txt")),
            PathBuf::from("./BilingualText_tagged.txt")
        );
        assert_eq!(
            derive_output_path(Path::new("../BilingualText.txt")),
            PathBuf::from("../BilingualText_tagged.txt")
        );
    }

    #[test]
    fn unusable_names_fall_back_to_fixed_name() {
        assert_eq!(
            derive_output_path(Path::new("/ .txt")),
            PathBuf::from("/tagged_output.txt")
        );
    }

    #[test]
    fn never_derives_the_input_itself() {
        assert_eq!(derive_output_path(Path::new("/a/a_tagged.txt")), PathBuf::from("/a/tagged_output.txt"));
    }

    #[test]
    fn writes_lines_with_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        write_tagged(&out, &["<P>", "One.", "一"], &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "<P>\nOne.\n一\n");
    }

    #[test]
    fn refuses_to_overwrite_an_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        std::fs::write(&input, "keep me\n").unwrap();

        // Same file reached through a different spelling.
        let aliased = dir.path().join(".").join("in.txt");
        let err = write_tagged(&aliased, &["x"], &[input.as_path()]).unwrap_err();
        assert!(matches!(err, PaError::OutputCollidesWithInput { .. }));
        assert_eq!(std::fs::read_to_string(&input).unwrap(), "keep me\n");
    }

    #[test]
    fn missing_directory_is_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("no").join("such").join("out.txt");
        let err = write_tagged(&out, &["x"], &[]).unwrap_err();
        assert!(matches!(err, PaError::OutputUnwritable { .. }));
    }
}
