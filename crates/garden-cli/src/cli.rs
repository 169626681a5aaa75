//! Command-line argument definitions using clap
//!
//! Each command has a clap `Args` struct that converts into the matching core
//! parameter type with `From`, so the core stays free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Garden operations
//! ```
//!
//! Cell coordinates are 1-based here and 0-based in the core.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use garden_core::{
    models::Category,
    params::{AddPlant, AppendEntry, CellRef, FilterParams, UpdateEntry},
};
use jiff::civil::Date;

/// Inventory category as accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum CategoryArg {
    #[value(aliases = ["vegetables", "veg"])]
    Vegetable,
    #[value(alias = "fruits")]
    Fruit,
    #[value(alias = "greens")]
    Green,
    #[value(alias = "flowers")]
    Flower,
}

impl From<CategoryArg> for Category {
    fn from(val: CategoryArg) -> Self {
        match val {
            CategoryArg::Vegetable => Category::Vegetable,
            CategoryArg::Fruit => Category::Fruit,
            CategoryArg::Green => Category::Green,
            CategoryArg::Flower => Category::Flower,
        }
    }
}

/// Add a plant to the inventory
#[derive(Args)]
pub struct AddPlantArgs {
    #[arg(value_enum, help = "Category to add the plant to")]
    pub category: CategoryArg,
    #[arg(help = "Plant name; duplicates are allowed")]
    pub name: String,
}

impl From<AddPlantArgs> for AddPlant {
    fn from(val: AddPlantArgs) -> Self {
        AddPlant {
            category: val.category.into(),
            name: val.name,
        }
    }
}

/// List the inventory
#[derive(Args)]
pub struct ListPlantsArgs {
    #[arg(short, long, value_enum, help = "Only list one category")]
    pub category: Option<CategoryArg>,
}

/// Remove a plant from the inventory
#[derive(Args)]
pub struct RemovePlantArgs {
    #[arg(value_enum)]
    pub category: CategoryArg,
    #[arg(help = "Plant name; only the first matching row is removed")]
    pub name: String,
}

#[derive(Subcommand)]
pub enum InventoryCommands {
    #[command(alias = "a")]
    Add(AddPlantArgs),
    #[command(aliases = ["l", "ls"])]
    List(ListPlantsArgs),
    #[command(aliases = ["d", "rm"])]
    Remove(RemovePlantArgs),
}

/// Log a care action
#[derive(Args)]
pub struct AddEntryArgs {
    #[arg(help = "Plant name")]
    pub plant: String,
    #[arg(help = "Action taken: Sown, Transplanted, Watered, Fertilized, Measured, Harvested or any text")]
    pub action: String,
    #[arg(short, long, help = "Date of the action (YYYY-MM-DD), defaults to today")]
    pub date: Option<Date>,
    #[arg(short, long, help = "Garden section")]
    pub section: Option<String>,
    #[arg(short, long, help = "Batch key, defaults to {plant}-Set-{date}")]
    pub batch: Option<String>,
    #[arg(long, help = "Plant height in centimetres")]
    pub height: Option<f64>,
    #[arg(long, help = "Soil moisture in percent (0-100)")]
    pub moisture: Option<f64>,
    #[arg(short, long)]
    pub notes: Option<String>,
    #[arg(long, help = "Next visit (YYYY-MM-DD), defaults to three days after the action")]
    pub next_visit: Option<Date>,
}

impl AddEntryArgs {
    pub fn into_params(self, today: Date) -> AppendEntry {
        AppendEntry {
            date: self.date.unwrap_or(today),
            section: self.section.unwrap_or_default(),
            plant: self.plant,
            batch_key: self.batch,
            action: self.action,
            height_cm: self.height,
            moisture_pct: self.moisture,
            notes: self.notes,
            next_visit: self.next_visit,
        }
    }
}

/// Change fields of a log entry
#[derive(Args)]
pub struct UpdateEntryArgs {
    #[arg(help = "Position of the entry as shown by `log list`")]
    pub index: usize,
    #[arg(short, long)]
    pub date: Option<Date>,
    #[arg(short, long)]
    pub section: Option<String>,
    #[arg(short, long)]
    pub plant: Option<String>,
    #[arg(short, long)]
    pub batch: Option<String>,
    #[arg(short, long)]
    pub action: Option<String>,
    #[arg(long)]
    pub height: Option<f64>,
    #[arg(long)]
    pub moisture: Option<f64>,
    #[arg(short, long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub next_visit: Option<Date>,
}

impl From<UpdateEntryArgs> for UpdateEntry {
    fn from(val: UpdateEntryArgs) -> Self {
        UpdateEntry {
            index: val.index,
            date: val.date,
            section: val.section,
            plant: val.plant,
            batch_key: val.batch,
            action: val.action,
            height_cm: val.height,
            moisture_pct: val.moisture,
            notes: val.notes,
            next_visit: val.next_visit,
        }
    }
}

/// Replace a log entry with a JSON object
#[derive(Args)]
pub struct EditJsonArgs {
    #[arg(help = "Position of the entry as shown by `log list`")]
    pub index: usize,
    #[arg(help = "The complete entry as JSON, or - to read it from stdin")]
    pub json: String,
}

/// Delete a log entry
#[derive(Args)]
pub struct DeleteEntryArgs {
    #[arg(help = "Position of the entry as shown by `log list`")]
    pub index: usize,
}

#[derive(Subcommand)]
pub enum LogCommands {
    #[command(alias = "a")]
    Add(AddEntryArgs),
    /// List entries newest first with their positions
    #[command(aliases = ["l", "ls"])]
    List,
    #[command(alias = "u")]
    Update(UpdateEntryArgs),
    #[command(alias = "e")]
    EditJson(EditJsonArgs),
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteEntryArgs),
}

/// Filters shared by the filtered reports
#[derive(Args)]
pub struct FilterArgs {
    #[arg(long, help = "First day to include (YYYY-MM-DD)")]
    pub from: Option<Date>,
    #[arg(long, help = "Last day to include (YYYY-MM-DD)")]
    pub to: Option<Date>,
    #[arg(short, long = "batch", value_delimiter = ',', help = "Batch keys, comma-separated")]
    pub batches: Vec<String>,
    #[arg(short, long = "plant", value_delimiter = ',', help = "Plant names, comma-separated")]
    pub plants: Vec<String>,
    #[arg(short, long = "section", value_delimiter = ',', help = "Sections, comma-separated")]
    pub sections: Vec<String>,
}

impl From<FilterArgs> for FilterParams {
    fn from(val: FilterArgs) -> Self {
        FilterParams {
            from: val.from,
            to: val.to,
            batch_keys: val.batches,
            plants: val.plants,
            sections: val.sections,
        }
    }
}

/// Show every entry of one batch
#[derive(Args)]
pub struct TimelineArgs {
    pub batch: String,
}

/// Show batches with a follow-up visit due
#[derive(Args)]
pub struct RemindersArgs {
    #[arg(short, long, help = "Reference date (YYYY-MM-DD), defaults to today")]
    pub date: Option<Date>,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    #[command(alias = "t")]
    Timeline(TimelineArgs),
    /// Entries matching the filters with metric averages
    #[command(alias = "f")]
    Filter(FilterArgs),
    /// How long each logged state lasted
    #[command(alias = "g")]
    Gantt(FilterArgs),
    /// One line per batch
    #[command(alias = "b")]
    Batches,
    #[command(alias = "r")]
    Reminders(RemindersArgs),
}

/// Create a section
#[derive(Args)]
pub struct AddSectionArgs {
    pub name: String,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub rows: u8,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub cols: u8,
}

/// Show a section as of a date
#[derive(Args)]
pub struct ShowSectionArgs {
    pub name: String,
    #[arg(long, help = "Reference date (YYYY-MM-DD), defaults to today")]
    pub as_of: Option<Date>,
}

/// Replace a section's grid with an empty one
#[derive(Args)]
pub struct ResizeSectionArgs {
    pub name: String,
    #[arg(value_parser = clap::value_parser!(u8).range(1..=10))]
    pub rows: u8,
    #[arg(value_parser = clap::value_parser!(u8).range(1..=10))]
    pub cols: u8,
}

/// A cell addressed with 1-based coordinates
#[derive(Args)]
pub struct CellArgs {
    pub section: String,
    #[arg(value_parser = clap::value_parser!(u16).range(1..), help = "Row, starting at 1")]
    pub row: u16,
    #[arg(value_parser = clap::value_parser!(u16).range(1..), help = "Column, starting at 1")]
    pub col: u16,
}

impl From<CellArgs> for CellRef {
    fn from(val: CellArgs) -> Self {
        CellRef {
            section: val.section,
            row: usize::from(val.row) - 1,
            col: usize::from(val.col) - 1,
        }
    }
}

/// Replace the batch keys planted in a cell
#[derive(Args)]
pub struct SetCellArgs {
    #[command(flatten)]
    pub cell: CellArgs,
    #[arg(help = "Batch keys; none clears the cell")]
    pub batches: Vec<String>,
}

/// Add or remove one batch key in a cell
#[derive(Args)]
pub struct CellBatchArgs {
    #[command(flatten)]
    pub cell: CellArgs,
    pub batch: String,
}

/// Remove a section
#[derive(Args)]
pub struct RemoveSectionArgs {
    pub name: String,
}

#[derive(Subcommand)]
pub enum LayoutCommands {
    #[command(alias = "a")]
    Add(AddSectionArgs),
    #[command(aliases = ["l", "ls"])]
    List,
    #[command(alias = "s")]
    Show(ShowSectionArgs),
    Resize(ResizeSectionArgs),
    Set(SetCellArgs),
    Assign(CellBatchArgs),
    Unassign(CellBatchArgs),
    #[command(aliases = ["d", "rm"])]
    Remove(RemoveSectionArgs),
}

/// Replace the whole garden with a JSON document
#[derive(Args)]
pub struct ImportArgs {
    pub file: PathBuf,
}

/// Write the whole garden as a JSON document
#[derive(Args)]
pub struct ExportArgs {
    #[arg(short, long, help = "Output file, defaults to stdout")]
    pub output: Option<PathBuf>,
}
