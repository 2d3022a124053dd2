//! Run configuration
//!
//! There is no config file and no environment input: every run starts from
//! the built-in defaults and the two directories it is pointed at.

mod defaults;
mod paths;

pub use defaults::{BuiltinDefaults, MANIFEST_FILE_NAME, VERSION_NAME_MIN_MANIFEST_VERSION};
pub use paths::{absolutize, ConfigError, PatchPaths};
