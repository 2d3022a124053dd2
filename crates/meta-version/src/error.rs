//! Version resolver errors.

use std::io;
use std::path::PathBuf;

/// Errors raised while reading or parsing a version descriptor.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    #[error("version file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read version file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid version format: {0:?} (expected \"x.y[.z[.w]]\" optionally followed by a display suffix)")]
    InvalidFormat(String),
}

