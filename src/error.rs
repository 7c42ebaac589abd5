//! Error kinds shared by the core pipeline
//!
//! Every failure source is local filesystem state, so nothing here is retried.
//! Commands surface these through anyhow and exit non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by config loading, question parsing and FAQ writing
#[derive(Debug, Error)]
pub enum Error {
    /// A required path (config file, questions directory, template) does not exist
    #[error("not found: {path:?}")]
    NotFound { path: PathBuf },

    /// Config file exists but is malformed or missing a required field
    #[error("invalid config {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// A question document fails the minimal structural requirement
    #[error("failed to parse {path:?}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// A file exists but could not be read
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// The rendered FAQ could not be written to its destination
    #[error("failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    /// Map an I/O error from reading `path` into NotFound or Read
    pub fn from_read(path: &std::path::Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_from_read_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            Error::from_read(Path::new("faq.toml"), err),
            Error::NotFound { .. }
        ));
    }

    #[test]
    fn test_from_read_other_kind() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            Error::from_read(Path::new("faq.toml"), err),
            Error::Read { .. }
        ));
    }

    #[test]
    fn test_display_includes_path() {
        let err = Error::NotFound {
            path: PathBuf::from("questions"),
        };
        assert!(err.to_string().contains("questions"));
    }
}
