//! Resolved per-run paths

use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::defaults::BuiltinDefaults;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

/// Everything a patch run needs to know about where to read and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchPaths {
    /// Project root holding the version descriptor
    pub project_dir: PathBuf,

    /// Build output directory holding the manifest
    pub build_dir: PathBuf,

    /// `<project_dir>/version`
    pub version_file: PathBuf,

    /// `<build_dir>/manifest.json`
    pub manifest_file: PathBuf,

    /// `version_name` is written only above this `manifest_version`
    pub version_name_threshold: i64,
}

impl PatchPaths {
    /// Build paths from two directories, taken as given.
    pub fn new(project_dir: PathBuf, build_dir: PathBuf, defaults: &BuiltinDefaults) -> Self {
        let version_file = project_dir.join(&defaults.version_file_name);
        let manifest_file = build_dir.join(&defaults.manifest_file_name);
        Self {
            project_dir,
            build_dir,
            version_file,
            manifest_file,
            version_name_threshold: defaults.version_name_threshold,
        }
    }

    /// Resolve both directories to absolute paths against the current directory.
    pub fn resolve(project_dir: &Path, build_dir: &Path) -> Result<Self, ConfigError> {
        let cwd = env::current_dir().map_err(ConfigError::CurrentDir)?;
        Ok(Self::new(
            absolutize(project_dir, &cwd),
            absolutize(build_dir, &cwd),
            &BuiltinDefaults::default(),
        ))
    }

    /// Use the current directory as the project root.
    pub fn from_current_dir(build_dir: &Path) -> Result<Self, ConfigError> {
        Self::resolve(Path::new("."), build_dir)
    }
}

/// Make `path` absolute against `base`, folding `.` and `..` lexically.
///
/// Symlinks are left alone; nothing touches the filesystem.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // ".." at the root stays at the root
                if out.parent().is_some() {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolutize_relative() {
        let base = Path::new("/work/project");
        assert_eq!(absolutize(Path::new("build"), base), PathBuf::from("/work/project/build"));
        assert_eq!(
            absolutize(Path::new("./dist/chrome"), base),
            PathBuf::from("/work/project/dist/chrome")
        );
    }

    #[test]
    fn test_absolutize_folds_parent() {
        let base = Path::new("/work/project");
        assert_eq!(absolutize(Path::new("../other/build"), base), PathBuf::from("/work/other/build"));
        assert_eq!(absolutize(Path::new("/../../x"), base), PathBuf::from("/x"));
    }

    #[test]
    fn test_absolutize_keeps_absolute() {
        let base = Path::new("/work/project");
        assert_eq!(absolutize(Path::new("/srv/build"), base), PathBuf::from("/srv/build"));
    }

    #[test]
    fn test_new_joins_file_names() {
        let paths = PatchPaths::new(
            PathBuf::from("/p"),
            PathBuf::from("/p/build"),
            &BuiltinDefaults::default(),
        );
        assert_eq!(paths.version_file, PathBuf::from("/p/version"));
        assert_eq!(paths.manifest_file, PathBuf::from("/p/build/manifest.json"));
        assert_eq!(paths.version_name_threshold, 2);
    }

    #[test]
    fn test_from_current_dir_uses_cwd() {
        let cwd = env::current_dir().unwrap();
        let paths = PatchPaths::from_current_dir(Path::new("dist/../build")).unwrap();
        assert_eq!(paths.project_dir, absolutize(Path::new("."), &cwd));
        assert_eq!(paths.build_dir, absolutize(Path::new("build"), &cwd));
        assert_eq!(paths.version_file, paths.project_dir.join("version"));
    }

    #[test]
    fn test_resolve_is_absolute() {
        let paths = PatchPaths::resolve(Path::new("."), Path::new("build")).unwrap();
        assert!(paths.project_dir.is_absolute());
        assert!(paths.build_dir.is_absolute());
        assert!(paths.build_dir.ends_with("build"));
    }
}
