use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the pa-core crate and dependents.
#[derive(Debug, Error)]
pub enum PaError {
    #[error("could not read {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output path {} is one of the input files", .path.display())]
    OutputCollidesWithInput { path: PathBuf },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, PaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_unreadable_names_the_path() {
        let err = PaError::FileUnreadable {
            path: PathBuf::from("/tmp/missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn collision_message() {
        let err = PaError::OutputCollidesWithInput {
            path: PathBuf::from("a.txt"),
        };
        assert_eq!(err.to_string(), "output path a.txt is one of the input files");
    }
}
