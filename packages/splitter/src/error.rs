//! Error types for the splitter.
//!
//! Every variant names the stage of the run that failed (read or write).
//! Key derivation has no error variant: blocks without a usable key are
//! routed to placeholder files instead.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// The cheat database does not exist.
    #[error("read stage: input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// The cheat database exists but could not be read.
    #[error("read stage: failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("write stage: cannot create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written. Remaining writes were skipped.
    #[error(
        "write stage: failed to write {}: {source} ({written} files written before the failure)",
        .path.display()
    )]
    WriteFile {
        path: PathBuf,
        written: usize,
        #[source]
        source: std::io::Error,
    },
}

impl SplitterError {
    /// Number of output files that were completely written before this error.
    #[must_use]
    pub fn files_written(&self) -> usize {
        match self {
            Self::WriteFile { written, .. } => *written,
            _ => 0,
        }
    }
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_display() {
        let err = SplitterError::InputNotFound {
            path: PathBuf::from("cheat.db"),
        };
        assert_eq!(err.to_string(), "read stage: input file not found: cheat.db");
        assert_eq!(err.files_written(), 0);
    }

    #[test]
    fn test_write_file_keeps_written_count() {
        let err = SplitterError::WriteFile {
            path: PathBuf::from("output/ULUS10080.ini"),
            written: 3,
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.starts_with("write stage:"));
        assert!(message.contains("ULUS10080.ini"));
        assert!(message.contains("3 files written"));
        assert_eq!(err.files_written(), 3);
    }

    #[test]
    fn test_create_output_dir_display() {
        let err = SplitterError::CreateOutputDir {
            path: PathBuf::from("output"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err
            .to_string()
            .starts_with("write stage: cannot create output directory output"));
    }
}
