//! LiteLearn CLI entry point.
//!
//! Thin presentation layer over the `litelearn` library: opens a file-backed
//! store under the data directory, dispatches the parsed command, and surfaces
//! library errors as messages with a nonzero exit.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use litelearn::{Catalog, Instance, storage::FileStore};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("litelearn=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open(&cli.data_dir)?;
    tracing::debug!("data directory: {}", store.root().display());
    let instance = Instance::open(Arc::new(store), Catalog::demo());
    commands::dispatch(&instance, cli.command)
}
