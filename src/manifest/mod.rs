//! Extension manifest (manifest.json)
//!
//! The manifest is kept as an open JSON object so unknown keys survive the
//! rewrite untouched. Only `version` and, on newer schemas, `version_name`
//! are ever written.

pub mod format;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use meta_version::ParsedVersion;
use serde_json::{Map, Value};
use tracing::debug;

pub use format::{to_manifest_bytes, to_manifest_string, AsciiPrettyFormatter};

/// Key holding the manifest schema revision
pub const MANIFEST_VERSION_KEY: &str = "manifest_version";

/// Key holding the numeric version
pub const VERSION_KEY: &str = "version";

/// Key holding the display version
pub const VERSION_NAME_KEY: &str = "version_name";

/// Errors for manifest operations
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("manifest must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("manifest is missing required key '{0}'")]
    MissingKey(&'static str),

    #[error("manifest key 'manifest_version' must be a number, found {0}")]
    InvalidManifestVersion(String),
}

impl ManifestError {
    fn io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => ManifestError::NotFound(path.to_path_buf()),
            _ => ManifestError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// What [`Manifest::apply_version`] did
#[derive(Debug, Clone, PartialEq)]
pub struct PatchOutcome {
    /// `manifest_version` as found in the manifest
    pub manifest_version: serde_json::Number,

    /// Whether `version_name` was written
    pub wrote_version_name: bool,
}

/// An open-ended manifest object with sorted keys
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    /// Load from file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let json = fs::read_to_string(path).map_err(|e| ManifestError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Load from JSON
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ManifestError::NotAnObject(json_kind(&other))),
        }
    }

    /// Serialize to the on-disk form
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(to_manifest_string(&Value::Object(self.fields.clone()))?)
    }

    /// Overwrite `path` with the serialized manifest
    pub fn write(&self, path: &Path) -> Result<(), ManifestError> {
        let bytes = to_manifest_bytes(&Value::Object(self.fields.clone()))?;
        fs::write(path, bytes).map_err(|e| ManifestError::io(path, e))
    }

    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set a top-level key, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    /// Borrow the underlying object
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Stamp `version`, and `version_name` when `manifest_version > threshold`.
    ///
    /// An existing `version_name` is left as it is on older schemas.
    pub fn apply_version(
        &mut self,
        version: &ParsedVersion,
        threshold: i64,
    ) -> Result<PatchOutcome, ManifestError> {
        self.insert(VERSION_KEY, Value::String(version.numeric_version.clone()));

        let schema = match self.get(MANIFEST_VERSION_KEY) {
            None => return Err(ManifestError::MissingKey(MANIFEST_VERSION_KEY)),
            Some(Value::Number(n)) => n.clone(),
            Some(other) => {
                return Err(ManifestError::InvalidManifestVersion(
                    json_kind(other).to_string(),
                ))
            }
        };

        let wrote_version_name = exceeds(&schema, threshold);
        if wrote_version_name {
            self.insert(VERSION_NAME_KEY, Value::String(version.full_descriptor.clone()));
        }

        debug!(
            manifest_version = %schema,
            wrote_version_name,
            "applied version to manifest"
        );

        Ok(PatchOutcome {
            manifest_version: schema,
            wrote_version_name,
        })
    }
}

fn exceeds(n: &serde_json::Number, threshold: i64) -> bool {
    if let Some(i) = n.as_i64() {
        i > threshold
    } else if n.is_u64() {
        // Only values past i64::MAX land here
        true
    } else {
        n.as_f64().is_some_and(|f| f > threshold as f64)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
