//! Registry Core - Shared library for copying registry assets into a project
//!
//! The registry distributes raw, editable source files instead of a package
//! dependency. UI components (`.tsx`) and utilities (`.ts`) are bundled next to
//! the installer and copied byte-for-byte into the consumer's project.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Catalog discovery, name validation, source
//!   resolution, and copying (`assets`)
//! - **Layer 2: Reporting** - Explicit per-asset outcomes and batch summaries (`report`)
//! - **Layer 3: CLI Interface** - Optional cliclack-based console front end (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based console module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use registry_core::{AssetKind, InstallContext, SourceRoots};
//!
//! let ctx = InstallContext::new(SourceRoots::bundled(), project_root);
//! let catalog = ctx.catalog(AssetKind::Component).await;
//! catalog.validate("DataTable")?;
//! let outcome = registry_core::install_asset(&ctx, AssetKind::Component, "DataTable").await;
//! ```

pub mod assets;
pub mod error;
pub mod report;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use assets::{
    install_asset, install_batch, AssetCatalog, AssetKind, AssetLocation, InstallContext,
    InstalledAsset, SourceChoice, SourceRoots,
};
pub use error::InstallError;
pub use report::{AssetOutcome, BatchReport};

#[cfg(feature = "tui")]
pub use tui::{add, list, AddTarget, RunStatus};
