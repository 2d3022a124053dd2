//! Patch pipeline
//!
//! One linear pass per build:
//! - Resolve the project version
//! - Load the build's manifest.json
//! - Stamp version fields
//! - Rewrite the manifest
//!
//! Every failure before the final write leaves the manifest untouched.

use std::path::PathBuf;

use meta_version::VersionError;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, PatchPaths};
use crate::manifest::{Manifest, ManifestError};

/// Pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

impl PipelineError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Config(_) => 1,
            PipelineError::Version(VersionError::InvalidFormat(_)) => 3,
            PipelineError::Version(_) => 1,
            PipelineError::Manifest(ManifestError::NotFound(_) | ManifestError::Io { .. }) => 1,
            PipelineError::Manifest(ManifestError::Parse(_) | ManifestError::NotAnObject(_)) => 4,
            PipelineError::Manifest(
                ManifestError::MissingKey(_) | ManifestError::InvalidManifestVersion(_),
            ) => 5,
        }
    }
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct PatchReport {
    pub manifest_file: PathBuf,
    pub version: String,
    pub version_name: Option<String>,
    pub manifest_version: serde_json::Number,
}

/// Stamps one build directory's manifest
#[derive(Debug, Clone)]
pub struct MetaPipeline {
    paths: PatchPaths,
}

impl MetaPipeline {
    pub fn new(paths: PatchPaths) -> Self {
        Self { paths }
    }

    /// Run the full read-modify-write cycle
    pub fn run(&self) -> PipelineResult<PatchReport> {
        debug!(
            project_dir = %self.paths.project_dir.display(),
            build_dir = %self.paths.build_dir.display(),
            "starting manifest patch"
        );

        let version = meta_version::read_version_file(&self.paths.version_file)?;
        let mut manifest = Manifest::load(&self.paths.manifest_file)?;

        info!("Updating manifest version to: \"{}\"", version);
        let outcome = manifest.apply_version(&version, self.paths.version_name_threshold)?;
        manifest.write(&self.paths.manifest_file)?;

        Ok(PatchReport {
            manifest_file: self.paths.manifest_file.clone(),
            version: version.numeric_version,
            version_name: outcome.wrote_version_name.then_some(version.full_descriptor),
            manifest_version: outcome.manifest_version,
        })
    }
}
