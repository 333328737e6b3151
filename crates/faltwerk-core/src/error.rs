use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while normalizing an annotation corpus.
#[derive(Debug, Error)]
pub enum FaltwerkError {
    /// A non-blank corpus line carries no 40-character document id token.
    #[error("no document id found in line: {line:?}")]
    MissingDocid {
        /// The offending line.
        line: String,
    },

    /// A non-blank corpus line carries no tab-delimited target label span.
    #[error("no target label span found in line: {line:?}")]
    MissingTarget {
        /// The offending line.
        line: String,
    },

    /// The requested split cannot be built from the given corpus.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// Reading or writing a corpus or output file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// File or directory the operation touched.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl FaltwerkError {
    /// Attaches the affected path to an I/O error.
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type alias for faltwerk operations.
pub type Result<T> = std::result::Result<T, FaltwerkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = FaltwerkError::MissingDocid {
            line: "broken record".into(),
        };
        assert!(err.to_string().contains("broken record"));

        let err = FaltwerkError::InvalidConfig("num_folds must be greater than 2".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: num_folds must be greater than 2"
        );
    }

    #[test]
    fn io_error_keeps_path() {
        let err = FaltwerkError::io(
            Path::new("/tmp/missing.txt"),
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("/tmp/missing.txt"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FaltwerkError>();
    }
}
