//! Garden CLI Application
//!
//! Command-line interface for the garden tracker. Each invocation loads the
//! garden document, runs one command and saves the document if it changed.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use garden_core::StoreBuilder;
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_file,
        no_color,
        command,
    } = Args::parse();

    if let Some(Schema) = command {
        return Cli::schema();
    }

    let store = StoreBuilder::new()
        .with_data_path(data_file)
        .build()
        .context("Failed to initialize garden store")?;
    info!("Using garden document {}", store.path().display());

    let cli = Cli::open(store, TerminalRenderer::new(!no_color))?;

    match command {
        Some(Inventory { command }) => cli.handle_inventory_command(command),
        Some(Log { command }) => cli.handle_log_command(command),
        Some(Report { command }) => cli.handle_report_command(command),
        Some(Layout { command }) => cli.handle_layout_command(command),
        Some(Import(args)) => cli.import(args),
        Some(Export(args)) => cli.export(args),
        Some(Schema) => Cli::schema(),
        None => cli.overview(),
    }
}
