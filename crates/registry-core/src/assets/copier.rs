//! Asset materialization: copy one bundled source file into the project

use super::catalog::AssetCatalog;
use super::kind::AssetKind;
use super::location::AssetLocation;
use super::InstallContext;
use crate::error::InstallError;
use crate::report::{AssetOutcome, BatchReport};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Which candidate source path an install was copied from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceChoice {
    Primary,
    Alternate,
}

/// A successfully copied asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledAsset {
    /// Both candidate source paths that were considered
    pub location: AssetLocation,
    pub via: SourceChoice,
    pub destination: PathBuf,
    pub bytes: u64,
}

impl InstalledAsset {
    pub fn source(&self) -> &Path {
        match self.via {
            SourceChoice::Primary => &self.location.primary,
            SourceChoice::Alternate => &self.location.alternate,
        }
    }
}

/// Progress notifications emitted while a batch runs
#[derive(Debug)]
pub enum Progress<'a> {
    Starting { kind: AssetKind, name: &'a str },
    Finished(&'a AssetOutcome),
}

/// Copy one asset into the project, overwriting any existing file.
///
/// Never fails outright: every problem ends up in the returned outcome.
pub async fn install_asset(ctx: &InstallContext, kind: AssetKind, name: &str) -> AssetOutcome {
    let result = copy_asset(ctx, kind, name).await;
    AssetOutcome::new(kind, name, result)
}

/// Install every asset in the catalog, one at a time.
///
/// A failed asset is recorded and the batch moves on to the next one.
pub async fn install_batch<F>(
    ctx: &InstallContext,
    catalog: &AssetCatalog,
    mut on_progress: F,
) -> BatchReport
where
    F: FnMut(Progress<'_>),
{
    let kind = catalog.kind();
    let mut report = BatchReport::new(kind);

    for name in catalog.names() {
        on_progress(Progress::Starting { kind, name });
        let outcome = install_asset(ctx, kind, name).await;
        on_progress(Progress::Finished(&outcome));
        report.push(outcome);
    }

    report
}

async fn copy_asset(
    ctx: &InstallContext,
    kind: AssetKind,
    name: &str,
) -> Result<InstalledAsset, InstallError> {
    // Ensure destination directory exists
    let dest_dir = ctx.destination_dir(kind);
    fs::create_dir_all(&dest_dir)
        .await
        .map_err(|e| InstallError::io("create directory", &dest_dir, e))?;

    let destination = dest_dir.join(kind.file_name(name));
    let location = ctx.roots().locate(kind, name);

    let via = if exists(&location.primary).await {
        SourceChoice::Primary
    } else if exists(&location.alternate).await {
        SourceChoice::Alternate
    } else {
        return Err(InstallError::SourceNotFound {
            kind,
            name: name.to_string(),
            primary: location.primary,
            alternate: location.alternate,
        });
    };

    let source = match via {
        SourceChoice::Primary => &location.primary,
        SourceChoice::Alternate => &location.alternate,
    };
    let bytes = fs::copy(source, &destination)
        .await
        .map_err(|e| InstallError::io("copy to", &destination, e))?;

    Ok(InstalledAsset {
        location,
        via,
        destination,
        bytes,
    })
}

/// Existence check that treats an unreadable path as missing
async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}
