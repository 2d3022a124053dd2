//! Built-in defaults
//!
//! Hardcoded file names and the schema threshold for `version_name`.

use meta_version::VERSION_FILE_NAME;

/// Manifest file name inside a build directory.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// `version_name` is written only when `manifest_version` is strictly greater than this.
pub const VERSION_NAME_MIN_MANIFEST_VERSION: i64 = 2;

/// Built-in default configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinDefaults {
    /// Version descriptor file name (default: "version")
    pub version_file_name: String,

    /// Manifest file name (default: "manifest.json")
    pub manifest_file_name: String,

    /// Schema threshold for `version_name` (default: 2)
    pub version_name_threshold: i64,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            version_file_name: VERSION_FILE_NAME.to_string(),
            manifest_file_name: MANIFEST_FILE_NAME.to_string(),
            version_name_threshold: VERSION_NAME_MIN_MANIFEST_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = BuiltinDefaults::default();
        assert_eq!(defaults.version_file_name, "version");
        assert_eq!(defaults.manifest_file_name, "manifest.json");
        assert_eq!(defaults.version_name_threshold, 2);
    }
}
