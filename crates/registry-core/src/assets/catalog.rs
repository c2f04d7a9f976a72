//! Asset discovery and name validation

use super::kind::AssetKind;
use super::location::SourceRoots;
use crate::error::InstallError;
use std::io;
use std::path::Path;
use tokio::fs;

/// Installable asset names of one kind, in directory listing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    kind: AssetKind,
    names: Vec<String>,
}

impl AssetCatalog {
    pub fn new(kind: AssetKind, names: Vec<String>) -> Self {
        Self { kind, names }
    }

    /// Build a catalog from raw directory entries, keeping only this kind's files
    pub fn from_file_names<I, S>(kind: AssetKind, file_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = file_names
            .into_iter()
            .filter_map(|file| kind.asset_name(file.as_ref()).map(str::to_string))
            .collect();
        Self::new(kind, names)
    }

    /// List the bundled source directory for `kind`.
    ///
    /// The primary directory is tried first, then the alternate. If neither can
    /// be read the catalog is empty; callers report that as `CatalogUnavailable`.
    pub async fn discover(kind: AssetKind, roots: &SourceRoots) -> Self {
        let dirs = roots.source_dirs(kind);

        let files = match list_files(&dirs.primary).await {
            Ok(files) => files,
            Err(_) => match list_files(&dirs.alternate).await {
                Ok(files) => files,
                Err(_) => Vec::new(),
            },
        };

        Self::from_file_names(kind, files)
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Confirm `name` can be installed
    pub fn validate(&self, name: &str) -> Result<(), InstallError> {
        if self.is_empty() {
            return Err(InstallError::CatalogUnavailable { kind: self.kind });
        }

        if !self.contains(name) {
            return Err(InstallError::UnknownAsset {
                kind: self.kind,
                name: name.to_string(),
                available: self.names.clone(),
            });
        }

        Ok(())
    }
}

/// File names in `dir`, skipping subdirectories and names that are not valid UTF-8
async fn list_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            files.push(name);
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_file_names_keeps_listing_order() {
        let catalog = AssetCatalog::from_file_names(
            AssetKind::Component,
            ["select.tsx", "README.md", "Modal.tsx", "formatter.ts", "checkbox.tsx"],
        );
        assert_eq!(catalog.names(), ["select", "Modal", "checkbox"]);
    }

    #[test]
    fn test_validate_unknown_lists_available() {
        let catalog = AssetCatalog::new(
            AssetKind::Component,
            vec!["bar".to_string(), "baz".to_string()],
        );

        match catalog.validate("foo") {
            Err(InstallError::UnknownAsset {
                name, available, ..
            }) => {
                assert_eq!(name, "foo");
                assert_eq!(available.join(", "), "bar, baz");
            }
            other => panic!("expected UnknownAsset, got {:?}", other),
        }

        assert!(catalog.validate("baz").is_ok());
    }

    #[test]
    fn test_validate_empty_catalog() {
        let catalog = AssetCatalog::new(AssetKind::Utility, Vec::new());
        assert!(matches!(
            catalog.validate("formatter"),
            Err(InstallError::CatalogUnavailable {
                kind: AssetKind::Utility
            })
        ));
    }

    #[tokio::test]
    async fn test_discover_filters_extension_and_directories() {
        let install = tempfile::tempdir().unwrap();
        let ui = install.path().join("src/components/ui");
        std::fs::create_dir_all(ui.join("d")).unwrap();
        std::fs::write(ui.join("a.tsx"), "export const A = 1;").unwrap();
        std::fs::write(ui.join("b.tsx"), "export const B = 1;").unwrap();
        std::fs::write(ui.join("c.txt"), "notes").unwrap();
        // A directory that happens to look like a component is still not one
        std::fs::create_dir_all(ui.join("e.tsx")).unwrap();

        let roots = SourceRoots::from_install_dir(install.path());
        let catalog = AssetCatalog::discover(AssetKind::Component, &roots).await;

        let mut names = catalog.names().to_vec();
        names.sort();
        assert_eq!(names, ["a", "b"]);
    }

    #[tokio::test]
    async fn test_discover_falls_back_to_alternate_root() {
        let install = tempfile::tempdir().unwrap();
        let utils = install.path().join("src/utils");
        std::fs::create_dir_all(&utils).unwrap();
        std::fs::write(utils.join("formatter.ts"), "export {};").unwrap();

        let roots = SourceRoots::new(
            PathBuf::from("/nonexistent/registry"),
            install.path().to_path_buf(),
        );
        let catalog = AssetCatalog::discover(AssetKind::Utility, &roots).await;
        assert_eq!(catalog.names(), ["formatter"]);
    }

    #[tokio::test]
    async fn test_discover_missing_registry_is_empty() {
        let install = tempfile::tempdir().unwrap();
        let roots = SourceRoots::from_install_dir(&install.path().join("missing"));

        let catalog = AssetCatalog::discover(AssetKind::Component, &roots).await;
        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.validate("Modal"),
            Err(InstallError::CatalogUnavailable { .. })
        ));
    }
}
