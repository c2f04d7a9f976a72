//! asset-installer - Copy registry UI components and utilities into a project

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use registry_core::{AddTarget, AssetKind, InstallContext, SourceRoots};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "asset-installer")]
#[command(about = "CLI for adding UI components and utilities to a project")]
#[command(version)]
pub struct Args {
    /// Registry directory to install from instead of the packaged one (for development use)
    #[arg(long = "registry-dir", global = true, hide = true)]
    pub registry_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add components or utilities to the project
    #[command(subcommand)]
    Add(AddCommand),
    /// List the components and utilities available in the registry
    List(ListArgs),
}

#[derive(Subcommand, Debug)]
pub enum AddCommand {
    /// Add a specific UI component to the project
    Component {
        /// Component name, e.g. DataTable
        name: String,
    },
    /// Add every UI component to the project
    Components,
    /// Add a specific utility file to the project
    Util {
        /// Utility name, e.g. formatter
        name: String,
    },
    /// Add every utility file to the project
    Utils,
    /// Add every UI component and utility to the project
    All,
}

impl From<AddCommand> for AddTarget {
    fn from(command: AddCommand) -> Self {
        match command {
            AddCommand::Component { name } => AddTarget::One {
                kind: AssetKind::Component,
                name,
            },
            AddCommand::Components => AddTarget::All(AssetKind::Component),
            AddCommand::Util { name } => AddTarget::One {
                kind: AssetKind::Utility,
                name,
            },
            AddCommand::Utils => AddTarget::All(AssetKind::Utility),
            AddCommand::All => AddTarget::Everything,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list this kind of asset
    #[arg(value_enum)]
    pub kind: Option<ListKind>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ListKind {
    Components,
    Utils,
}

impl From<ListKind> for AssetKind {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Components => AssetKind::Component,
            ListKind::Utils => AssetKind::Utility,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully; an interrupted batch is safe to re-run
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let roots = match &args.registry_dir {
        Some(dir) => SourceRoots::from_install_dir(dir),
        None => SourceRoots::bundled(),
    };
    let project_root =
        std::env::current_dir().context("Failed to determine the current directory")?;
    let ctx = InstallContext::new(roots, project_root);

    let result = match args.command {
        Command::Add(add) => registry_core::add(&ctx, add.into()).await,
        Command::List(list) => registry_core::list(&ctx, list.kind.map(Into::into)).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    Ok(if result?.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
