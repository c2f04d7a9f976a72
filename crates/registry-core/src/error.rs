//! Error types for registry installs

use crate::assets::AssetKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a requested install did not happen
#[derive(Error, Debug)]
pub enum InstallError {
    /// Discovery found no assets of this kind in the bundled registry
    #[error("no {} found in the bundled registry", .kind.plural_name())]
    CatalogUnavailable { kind: AssetKind },

    /// The requested name is not in the catalog
    #[error("{kind} \"{name}\" is not available")]
    UnknownAsset {
        kind: AssetKind,
        name: String,
        available: Vec<String>,
    },

    /// Neither candidate source path exists, so the catalog and the bundle are out of sync
    #[error(
        "source file for {kind} \"{name}\" not found at {} or {}",
        .primary.display(),
        .alternate.display()
    )]
    SourceNotFound {
        kind: AssetKind,
        name: String,
        primary: PathBuf,
        alternate: PathBuf,
    },

    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InstallError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Messages of every underlying cause, outermost first
    pub fn trace(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut current = std::error::Error::source(self);
        while let Some(cause) = current {
            causes.push(cause.to_string());
            current = cause.source();
        }
        causes
    }
}
