//! Typed error definitions for refile.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelocateError {
    /// A computed path resolved outside the root boundary. Fatal to the
    /// operation in progress; never skip-and-continue.
    #[error("access denied: '{path}' resolves outside the root boundary '{root}'")]
    AccessDenied { path: PathBuf, root: PathBuf },

    #[error("invalid root boundary '{path}': {source}")]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An encoded name collided with a file already present at the
    /// destination. Colliding moves fail loudly rather than overwrite.
    #[error("destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("failed to {context} '{path}': {source}")]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RelocateError {
    pub(crate) fn io(context: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            context,
            path: path.to_path_buf(),
            source,
        }
    }
}
