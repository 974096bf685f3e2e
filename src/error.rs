//! Error types for the refinery
//!
//! Configuration problems fail fast before any I/O. Read errors are scoped to
//! the file that raised them; write errors are always fatal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`crate::config::RefineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `--email-split` value without a `:` separator.
    #[error("invalid --email-split value '{0}': expected format user:domain")]
    EmailSplitFormat(String),

    /// `--email-split` value where one half of `user:domain` is empty.
    #[error("invalid --email-split value '{0}': user and domain must both be non-empty")]
    EmailSplitEmptyPart(String),

    /// `--dup-sense` outside the valid percentage range.
    #[error("--dup-sense must be between 0 and 100, got {0}")]
    DupSenseRange(i64),
}

/// Errors raised while running the refinery.
#[derive(Debug, Error)]
pub enum RefineError {
    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    #[error("failed to read input file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Some input files could not be read. The surviving files were still
    /// processed and written, but the run as a whole did not succeed.
    #[error("{failed} of {total} input files could not be read")]
    PartialIngest { failed: usize, total: usize },
}

impl RefineError {
    /// Wrap an I/O error with the input path it occurred on.
    pub fn read(path: &std::path::Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wrap an I/O error with the output path it occurred on.
    pub fn write(path: &std::path::Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}
