//! Asset kinds distributed by the registry

use std::fmt;
use std::path::{Path, PathBuf};

/// The two kinds of asset the registry ships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Component,
    Utility,
}

impl AssetKind {
    /// Every kind, in the order `add all` installs them
    pub const ALL: [AssetKind; 2] = [AssetKind::Component, AssetKind::Utility];

    /// File extension (including the dot) carried by every asset of this kind
    pub fn extension(&self) -> &'static str {
        match self {
            AssetKind::Component => ".tsx",
            AssetKind::Utility => ".ts",
        }
    }

    /// Bundled source directory, relative to the installation directory
    pub fn source_segments(&self) -> &'static [&'static str] {
        match self {
            AssetKind::Component => &["src", "components", "ui"],
            AssetKind::Utility => &["src", "utils"],
        }
    }

    /// Destination directory, relative to the project root
    pub fn destination_segments(&self) -> &'static [&'static str] {
        match self {
            AssetKind::Component => &["components", "ui"],
            AssetKind::Utility => &["utils"],
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AssetKind::Component => "component",
            AssetKind::Utility => "utility",
        }
    }

    pub fn plural_name(&self) -> &'static str {
        match self {
            AssetKind::Component => "components",
            AssetKind::Utility => "utilities",
        }
    }

    /// File name of the named asset, e.g. `DataTable.tsx`
    pub fn file_name(&self, name: &str) -> String {
        format!("{}{}", name, self.extension())
    }

    /// Asset name for a directory entry, or `None` if the entry is not an asset of this kind.
    ///
    /// Utilities (`.ts`) never match components (`.tsx`) and vice versa. A bare
    /// extension such as `.tsx` has no name and is rejected.
    pub fn asset_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_suffix(self.extension())
            .filter(|stem| !stem.is_empty())
    }

    /// Join this kind's source segments onto an installation directory
    pub fn source_dir(&self, install_dir: &Path) -> PathBuf {
        join_segments(install_dir, self.source_segments())
    }

    /// Join this kind's destination segments onto a project root
    pub fn destination_dir(&self, project_root: &Path) -> PathBuf {
        join_segments(project_root, self.destination_segments())
    }

    /// Destination path relative to the project root, as shown to the user
    pub fn relative_destination(&self, name: &str) -> PathBuf {
        join_segments(Path::new(""), self.destination_segments()).join(self.file_name(name))
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn join_segments(base: &Path, segments: &[&str]) -> PathBuf {
    segments
        .iter()
        .fold(base.to_path_buf(), |path, segment| path.join(segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_extension_filter() {
        let kind = AssetKind::Component;
        assert_eq!(kind.asset_name("DataTable.tsx"), Some("DataTable"));
        assert_eq!(kind.asset_name("not-found.tsx"), Some("not-found"));
        assert_eq!(kind.asset_name("notes.txt"), None);
        assert_eq!(kind.asset_name("formatter.ts"), None);
        assert_eq!(kind.asset_name(".tsx"), None);
    }

    #[test]
    fn test_utility_extension_filter() {
        let kind = AssetKind::Utility;
        assert_eq!(kind.asset_name("formatter.ts"), Some("formatter"));
        assert_eq!(kind.asset_name("types.d.ts"), Some("types.d"));
        // Components must not leak into the utility catalog
        assert_eq!(kind.asset_name("Modal.tsx"), None);
    }

    #[test]
    fn test_file_name_round_trips_through_filter() {
        for kind in AssetKind::ALL {
            let file = kind.file_name("Toggle");
            assert_eq!(kind.asset_name(&file), Some("Toggle"));
        }
    }

    #[test]
    fn test_directories() {
        let install = Path::new("/opt/registry");
        assert_eq!(
            AssetKind::Component.source_dir(install),
            PathBuf::from("/opt/registry/src/components/ui")
        );
        assert_eq!(
            AssetKind::Utility.source_dir(install),
            PathBuf::from("/opt/registry/src/utils")
        );

        let project = Path::new("/home/dev/app");
        assert_eq!(
            AssetKind::Component.destination_dir(project),
            PathBuf::from("/home/dev/app/components/ui")
        );
        assert_eq!(
            AssetKind::Utility.relative_destination("formatter"),
            PathBuf::from("utils/formatter.ts")
        );
    }
}
