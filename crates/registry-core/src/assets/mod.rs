//! Asset discovery, validation, and copying
//!
//! This module provides:
//! - Asset kinds and their fixed source/destination layout
//! - Catalog discovery from the bundled registry and name validation
//! - Primary/alternate source path resolution
//! - Copying assets into the consumer's project tree

pub mod catalog;
pub mod copier;
pub mod kind;
pub mod location;

use std::path::{Path, PathBuf};

pub use catalog::AssetCatalog;
pub use copier::{install_asset, install_batch, InstalledAsset, Progress, SourceChoice};
pub use kind::AssetKind;
pub use location::{AssetLocation, SourceRoots};

/// Everything an install needs to know about where files come from and go to
#[derive(Debug, Clone)]
pub struct InstallContext {
    roots: SourceRoots,
    project_root: PathBuf,
}

impl InstallContext {
    pub fn new(roots: SourceRoots, project_root: PathBuf) -> Self {
        Self {
            roots,
            project_root,
        }
    }

    pub fn roots(&self) -> &SourceRoots {
        &self.roots
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Directory assets of `kind` are copied into
    pub fn destination_dir(&self, kind: AssetKind) -> PathBuf {
        kind.destination_dir(&self.project_root)
    }

    /// Discover the catalog for `kind` from this context's registry
    pub async fn catalog(&self, kind: AssetKind) -> AssetCatalog {
        AssetCatalog::discover(kind, &self.roots).await
    }
}
