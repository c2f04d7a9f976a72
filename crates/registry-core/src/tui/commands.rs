//! Charm-style console front end using cliclack

use crate::assets::{
    install_asset, install_batch, AssetCatalog, AssetKind, InstallContext, Progress, SourceChoice,
};
use crate::error::InstallError;
use crate::report::{AssetOutcome, BatchReport};
use anyhow::Result;
use colored::Colorize;
use std::io;

/// What an `add` invocation should install
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTarget {
    /// A single named asset
    One { kind: AssetKind, name: String },
    /// Every asset of one kind
    All(AssetKind),
    /// Every component, then every utility
    Everything,
}

/// Overall outcome of a command, mapped to the process exit code by the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

impl RunStatus {
    pub fn is_success(self) -> bool {
        self == RunStatus::Success
    }

    fn from_success(ok: bool) -> Self {
        if ok {
            RunStatus::Success
        } else {
            RunStatus::Failure
        }
    }
}

/// Run an `add` command, printing progress for every stage
pub async fn add(ctx: &InstallContext, target: AddTarget) -> Result<RunStatus> {
    match target {
        AddTarget::One { kind, name } => add_one(ctx, kind, &name).await,
        AddTarget::All(kind) => add_kind(ctx, kind).await,
        AddTarget::Everything => add_everything(ctx).await,
    }
}

/// Print the catalog for one kind, or for every kind
pub async fn list(ctx: &InstallContext, kind: Option<AssetKind>) -> Result<RunStatus> {
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => AssetKind::ALL.to_vec(),
    };

    let mut all_found = true;
    for kind in kinds {
        let catalog = ctx.catalog(kind).await;
        if catalog.is_empty() {
            eprintln!(
                "{} {}",
                "Warning:".yellow(),
                InstallError::CatalogUnavailable { kind }
            );
            all_found = false;
            continue;
        }

        let heading = match kind {
            AssetKind::Component => "Components",
            AssetKind::Utility => "Utilities",
        };
        println!("{}", format!("{} ({})", heading, catalog.len()).cyan().bold());
        for name in catalog.names() {
            println!("  {} {}", "-".blue(), name);
        }
    }

    Ok(RunStatus::from_success(all_found))
}

async fn add_one(ctx: &InstallContext, kind: AssetKind, name: &str) -> Result<RunStatus> {
    cliclack::intro(format!("Adding {} {}", kind, name))?;

    let catalog = ctx.catalog(kind).await;
    if let Err(err) = catalog.validate(name) {
        log_rejection(&err)?;
        cliclack::outro_cancel("Nothing was installed")?;
        return Ok(RunStatus::Failure);
    }

    log_starting(kind, name)?;
    let outcome = install_asset(ctx, kind, name).await;
    log_outcome(&outcome)?;

    if outcome.is_success() {
        cliclack::outro("Done".green().bold())?;
    } else {
        cliclack::outro_cancel(format!("{} {} was not installed", kind, name))?;
    }
    Ok(RunStatus::from_success(outcome.is_success()))
}

async fn add_kind(ctx: &InstallContext, kind: AssetKind) -> Result<RunStatus> {
    cliclack::intro(format!("Adding all {}", kind.plural_name()))?;

    let catalog = ctx.catalog(kind).await;
    if catalog.is_empty() {
        cliclack::log::warning(InstallError::CatalogUnavailable { kind })?;
        cliclack::outro_cancel("Nothing was installed")?;
        return Ok(RunStatus::Failure);
    }

    let report = run_batch(ctx, &catalog).await?;
    finish(report.all_succeeded(), report.summary())
}

async fn add_everything(ctx: &InstallContext) -> Result<RunStatus> {
    cliclack::intro("Adding all components and utilities")?;

    let mut reports = Vec::new();
    for kind in AssetKind::ALL {
        let catalog = ctx.catalog(kind).await;
        if catalog.is_empty() {
            // An empty kind is skipped; the other kind still installs
            cliclack::log::warning(InstallError::CatalogUnavailable { kind })?;
            reports.push(BatchReport::new(kind));
            continue;
        }

        cliclack::log::info(format!(
            "Installing {} {}...",
            catalog.len(),
            kind.plural_name()
        ))?;
        reports.push(run_batch(ctx, &catalog).await?);
    }

    let counts: Vec<String> = reports
        .iter()
        .map(|r| format!("{}/{} {}", r.succeeded(), r.total(), r.kind().plural_name()))
        .collect();
    let ok = reports.iter().all(BatchReport::all_succeeded);

    finish(ok, format!("{} installed", counts.join(" and ")))
}

async fn run_batch(ctx: &InstallContext, catalog: &AssetCatalog) -> Result<BatchReport> {
    let mut logged: io::Result<()> = Ok(());
    let report = install_batch(ctx, catalog, |progress| {
        if logged.is_ok() {
            logged = log_progress(progress);
        }
    })
    .await;
    logged?;

    Ok(report)
}

fn finish(ok: bool, summary: String) -> Result<RunStatus> {
    if ok {
        cliclack::outro(summary.green().bold())?;
    } else {
        cliclack::outro_cancel(summary)?;
    }
    Ok(RunStatus::from_success(ok))
}

fn log_rejection(err: &InstallError) -> io::Result<()> {
    cliclack::log::error(err)?;
    if let InstallError::UnknownAsset {
        kind, available, ..
    } = err
    {
        cliclack::log::warning(format!(
            "Available {}: {}",
            kind.plural_name(),
            available.join(", ")
        ))?;
    }
    Ok(())
}

fn log_progress(progress: Progress<'_>) -> io::Result<()> {
    match progress {
        Progress::Starting { kind, name } => log_starting(kind, name),
        Progress::Finished(outcome) => log_outcome(outcome),
    }
}

fn log_starting(kind: AssetKind, name: &str) -> io::Result<()> {
    cliclack::log::step(format!("Adding {} {}...", kind, name))
}

fn log_outcome(outcome: &AssetOutcome) -> io::Result<()> {
    let kind = outcome.kind;
    let name = &outcome.name;

    match &outcome.result {
        Ok(installed) => {
            if installed.via == SourceChoice::Alternate {
                cliclack::log::warning(format!(
                    "Source file not found at {}",
                    installed.location.primary.display()
                ))?;
                cliclack::log::info(format!(
                    "Found at alternate location {}",
                    installed.source().display()
                ))?;
            }
            cliclack::log::success(format!(
                "Added {} {} to {}",
                kind,
                name,
                kind.relative_destination(name).display()
            ))
        }
        Err(InstallError::SourceNotFound {
            primary, alternate, ..
        }) => {
            cliclack::log::warning(format!("Source file not found at {}", primary.display()))?;
            cliclack::log::info(format!("Trying alternate location: {}", alternate.display()))?;
            cliclack::log::error(format!(
                "Could not locate {} {} at either location",
                kind, name
            ))
        }
        Err(err) => {
            let mut message = format!("{} {}", "Error:".red().bold(), err);
            for cause in err.trace() {
                message.push_str(&format!("\n{} {}", "caused by:".yellow(), cause));
            }
            cliclack::log::error(message)
        }
    }
}
