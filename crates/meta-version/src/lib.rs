//! Project version descriptor.
//!
//! A project keeps its release version in a plain-text `version` file at its
//! root: one line such as `2.5.1` or `2.5.1 Beta`. This crate reads that file
//! and splits it into the numeric version and the display name.

mod error;
mod parser;

pub use error::VersionError;
pub use parser::{is_descriptor_whitespace, parse_version, ParsedVersion};

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// Name of the version descriptor file inside a project directory.
pub const VERSION_FILE_NAME: &str = "version";

/// Read and parse `<project_dir>/version`.
pub fn read_version(project_dir: &Path) -> Result<ParsedVersion, VersionError> {
    read_version_file(&project_dir.join(VERSION_FILE_NAME))
}

/// Read a version descriptor file, strip surrounding whitespace, and parse it.
pub fn read_version_file(path: &Path) -> Result<ParsedVersion, VersionError> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => VersionError::NotFound(path.to_path_buf()),
        _ => VersionError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let parsed = parse_version(raw.trim_matches(is_descriptor_whitespace))?;
    debug!(
        path = %path.display(),
        numeric = %parsed.numeric_version,
        "resolved project version"
    );
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_version_strips_whitespace() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(VERSION_FILE_NAME), "  1.4.0 Beta\n\n").unwrap();

        let parsed = read_version(dir.path()).unwrap();
        assert_eq!(parsed.numeric_version, "1.4.0");
        assert_eq!(parsed.full_descriptor, "1.4.0 Beta");
    }

    #[test]
    fn test_read_version_missing_file() {
        let dir = TempDir::new().unwrap();

        let err = read_version(dir.path()).unwrap_err();
        assert!(matches!(err, VersionError::NotFound(ref p) if p.ends_with(VERSION_FILE_NAME)));
        assert!(err.to_string().contains("version file not found"));
    }

    #[test]
    fn test_read_version_bad_contents() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(VERSION_FILE_NAME), "latest\n").unwrap();

        let err = read_version(dir.path()).unwrap_err();
        assert!(matches!(err, VersionError::InvalidFormat(ref s) if s == "latest"));
    }

    #[test]
    fn test_read_version_strips_unicode_and_separator_whitespace() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(VERSION_FILE_NAME), "\u{a0}\u{1e}2.0 Stable\u{3000}\n").unwrap();

        let parsed = read_version(dir.path()).unwrap();
        assert_eq!(parsed.full_descriptor, "2.0 Stable");
    }

    #[test]
    fn test_read_version_file_direct_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("VERSION.txt");
        fs::write(&path, "7.0.1.12\n").unwrap();

        let parsed = read_version_file(&path).unwrap();
        assert_eq!(parsed.numeric_version, "7.0.1.12");
        assert!(parsed.suffix.is_none());
    }

    #[test]
    fn test_directory_is_not_a_version_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(VERSION_FILE_NAME)).unwrap();

        let err = read_version(dir.path()).unwrap_err();
        assert!(matches!(err, VersionError::Io { .. }));
    }
}
