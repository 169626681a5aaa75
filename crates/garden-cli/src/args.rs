use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ExportArgs, ImportArgs, InventoryCommands, LayoutCommands, LogCommands, ReportCommands};

/// Garden tracker: plant inventory, care log and bed layouts
///
/// Every care action is logged against a planting batch. Reports rebuild
/// batch timelines, Gantt intervals and the state of each layout cell at any
/// date from that log. The whole garden lives in one JSON document.
#[derive(Parser)]
#[command(version, about, name = "garden")]
pub struct Args {
    /// Path to the garden document. Defaults to
    /// $XDG_DATA_HOME/garden/garden.json
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the garden CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the plant inventory
    #[command(alias = "inv")]
    Inventory {
        #[command(subcommand)]
        command: InventoryCommands,
    },
    /// Record and edit care log entries
    #[command(alias = "l")]
    Log {
        #[command(subcommand)]
        command: LogCommands,
    },
    /// Derived views over the log
    #[command(alias = "r")]
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Manage garden sections and their grids
    #[command(alias = "g")]
    Layout {
        #[command(subcommand)]
        command: LayoutCommands,
    },
    /// Replace the whole garden with a JSON document
    Import(ImportArgs),
    /// Write the whole garden as a JSON document
    Export(ExportArgs),
    /// Print the JSON schema of the garden document
    Schema,
}
