//! Loading input documents.
//!
//! Each input is read once, in full, as UTF-8 before any comparison or
//! alignment runs.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PaError, Result};

/// An input text file held entirely in memory.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    /// Read `path` as UTF-8. Invalid UTF-8 is reported as
    /// [`PaError::FileUnreadable`] like any other read failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(|source| PaError::FileUnreadable {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded document");
        Ok(Self { path, text })
    }

    /// Wrap text that did not come from disk.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lines without terminators; blank lines are kept.
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    pub fn fingerprint(&self) -> String {
        crate::hash::fingerprint(&self.text)
    }
}
