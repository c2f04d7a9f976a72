//! Per-asset outcomes and batch summaries

use crate::assets::{AssetKind, InstalledAsset};
use crate::error::InstallError;

/// Result of installing a single asset
#[derive(Debug)]
pub struct AssetOutcome {
    pub kind: AssetKind,
    pub name: String,
    pub result: Result<InstalledAsset, InstallError>,
}

impl AssetOutcome {
    pub fn new(
        kind: AssetKind,
        name: impl Into<String>,
        result: Result<InstalledAsset, InstallError>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            result,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a bulk install of one kind
#[derive(Debug)]
pub struct BatchReport {
    kind: AssetKind,
    outcomes: Vec<AssetOutcome>,
}

impl BatchReport {
    pub fn new(kind: AssetKind) -> Self {
        Self {
            kind,
            outcomes: Vec::new(),
        }
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn push(&mut self, outcome: AssetOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[AssetOutcome] {
        &self.outcomes
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> impl Iterator<Item = &AssetOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// True when at least one asset was attempted and none failed
    pub fn all_succeeded(&self) -> bool {
        !self.outcomes.is_empty() && self.succeeded() == self.total()
    }

    /// `"X of Y <kind> installed"`
    pub fn summary(&self) -> String {
        format!(
            "{} of {} {} installed",
            self.succeeded(),
            self.total(),
            self.kind.plural_name()
        )
    }
}
