//! make-meta - stamp the project version into a build's manifest.json
//!
//! Reads the project's `version` descriptor, loads `manifest.json` from a
//! build output directory, writes `version` (and `version_name` on
//! `manifest_version` 3 and later), and rewrites the file with sorted keys
//! and two-space indentation so repeated builds are byte-identical.

pub mod config;
pub mod manifest;
pub mod pipeline;

pub use config::{BuiltinDefaults, PatchPaths};
pub use manifest::{Manifest, ManifestError, PatchOutcome};
pub use meta_version::{parse_version, read_version, ParsedVersion, VersionError};
pub use pipeline::{MetaPipeline, PatchReport, PipelineError};
