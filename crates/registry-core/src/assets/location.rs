//! Source location resolution for the bundled registry
//!
//! The registry is packaged at the workspace root (`registry/`). Every path into
//! it is built two ways:
//! - Primary: the installation directory exactly as given, joined segment by segment
//! - Alternate: the same directory made absolute with symlinks resolved
//!
//! The two diverge whenever the given directory is relative, contains `..`, or
//! passes through a symlink.

use super::kind::AssetKind;
use std::path::{Path, PathBuf};

/// Packaged registry, relative to this crate's manifest
const BUNDLED_REGISTRY: &str = "../../registry";

/// Candidate installation directories holding the bundled `src/` tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRoots {
    primary: PathBuf,
    alternate: PathBuf,
}

impl SourceRoots {
    pub fn new(primary: PathBuf, alternate: PathBuf) -> Self {
        Self { primary, alternate }
    }

    /// Build both roots from an explicit installation directory
    pub fn from_install_dir(dir: &Path) -> Self {
        Self::new(dir.to_path_buf(), resolve(dir))
    }

    /// Roots for the registry packaged with this workspace.
    ///
    /// The primary keeps the `..` segments of the packaged path; the alternate
    /// is its canonical form.
    pub fn bundled() -> Self {
        Self::from_install_dir(&bundled_registry_dir())
    }

    pub fn primary(&self) -> &Path {
        &self.primary
    }

    pub fn alternate(&self) -> &Path {
        &self.alternate
    }

    /// Candidate source directories for every asset of a kind
    pub fn source_dirs(&self, kind: AssetKind) -> AssetLocation {
        AssetLocation {
            primary: kind.source_dir(&self.primary),
            alternate: kind.source_dir(&self.alternate),
        }
    }

    /// Candidate source files for one named asset
    pub fn locate(&self, kind: AssetKind, name: &str) -> AssetLocation {
        let file_name = kind.file_name(name);
        let dirs = self.source_dirs(kind);
        AssetLocation {
            primary: dirs.primary.join(&file_name),
            alternate: dirs.alternate.join(&file_name),
        }
    }
}

/// A primary path and its fallback for the same logical location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocation {
    pub primary: PathBuf,
    pub alternate: PathBuf,
}

impl AssetLocation {
    /// Whether the fallback is a physically different path from the primary
    pub fn diverges(&self) -> bool {
        self.primary != self.alternate
    }
}

fn bundled_registry_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(BUNDLED_REGISTRY)
}

/// Absolute, symlink-free form of `dir`, falling back to a lexical absolute path
/// when the directory does not exist
fn resolve(dir: &Path) -> PathBuf {
    std::fs::canonicalize(dir)
        .or_else(|_| std::path::absolute(dir))
        .unwrap_or_else(|_| dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_builds_both_candidates() {
        let roots = SourceRoots::new(
            PathBuf::from("/usr/lib/fariesky"),
            PathBuf::from("/opt/fariesky"),
        );
        let location = roots.locate(AssetKind::Component, "Modal");

        assert_eq!(
            location.primary,
            PathBuf::from("/usr/lib/fariesky/src/components/ui/Modal.tsx")
        );
        assert_eq!(
            location.alternate,
            PathBuf::from("/opt/fariesky/src/components/ui/Modal.tsx")
        );
        assert!(location.diverges());
    }

    #[test]
    fn test_from_install_dir_resolves_relative_paths() {
        let roots = SourceRoots::from_install_dir(Path::new("relative/registry"));
        assert_eq!(roots.primary(), Path::new("relative/registry"));
        assert!(roots.alternate().is_absolute());
        assert!(roots.alternate().ends_with("relative/registry"));
    }

    #[test]
    fn test_bundled_roots_hold_the_packaged_registry() {
        let roots = SourceRoots::bundled();
        assert!(roots.primary().ends_with("registry"));
        assert!(roots.alternate().is_absolute());

        let location = roots.locate(AssetKind::Component, "DataTable");
        assert!(location.diverges());
        assert!(location.primary.is_file());
        assert!(location.alternate.is_file());
        assert!(roots.locate(AssetKind::Utility, "formatter").primary.is_file());
    }

    #[test]
    fn test_absolute_existing_dir_does_not_diverge() {
        let dir = tempfile::tempdir().unwrap();
        let canonical = std::fs::canonicalize(dir.path()).unwrap();
        let roots = SourceRoots::from_install_dir(&canonical);

        let location = roots.locate(AssetKind::Utility, "formatter");
        assert!(!location.diverges());
        assert!(location.primary.ends_with("src/utils/formatter.ts"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_install_dir_diverges() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real");
        std::fs::create_dir(&real).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let roots = SourceRoots::from_install_dir(&link);
        assert_eq!(roots.primary(), link.as_path());
        assert_eq!(roots.alternate(), std::fs::canonicalize(&real).unwrap());
    }
}
