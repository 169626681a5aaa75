//! Command handlers: load the session, run one command, save, render.

use std::{fmt::Display, fs, io};

use anyhow::{Context, Result};
use garden_core::{
    display::OperationStatus,
    models::{Category, Section},
    params::{AddPlant, CellRef, FilterParams},
    DocumentStore, GardenDocument, Session,
};
use jiff::{civil::Date, Zoned};
use log::info;

use crate::{
    cli::{
        EditJsonArgs, ExportArgs, ImportArgs, InventoryCommands, LayoutCommands, LogCommands,
        ReportCommands,
    },
    renderer::TerminalRenderer,
};

/// One CLI invocation against the garden document.
pub struct Cli {
    store: DocumentStore,
    session: Session,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Loads the session from the store.
    pub fn open(store: DocumentStore, renderer: TerminalRenderer) -> Result<Self> {
        let session = store
            .load()
            .with_context(|| format!("Failed to load {}", store.path().display()))?;
        Ok(Self {
            store,
            session,
            renderer,
        })
    }

    pub fn handle_inventory_command(mut self, command: InventoryCommands) -> Result<()> {
        let garden = &mut self.session.garden;
        match command {
            InventoryCommands::Add(args) => {
                let params = AddPlant::from(args);
                let added = garden.add_plant(&params);
                let status = OperationStatus::changed_or(
                    added,
                    format!("Added {} to {}", params.name.trim(), params.category.document_key()),
                    "Plant name is empty; nothing added",
                );
                self.save_if(added)?;
                self.render(status)
            }
            InventoryCommands::List(args) => match args.category {
                Some(category) => {
                    let category = Category::from(category);
                    let plants = self.session.garden.plants(category);
                    if plants.is_empty() {
                        return self.render(format!("No {} found.\n", category.document_key()));
                    }
                    let listing: String = plants.iter().map(|name| format!("- {name}\n")).collect();
                    self.render(listing)
                }
                None => self.render(self.session.garden.inventory()),
            },
            InventoryCommands::Remove(args) => {
                let category = Category::from(args.category);
                let removed = garden.remove_plant(category, &args.name);
                self.save_if(removed)?;
                if removed {
                    self.render(OperationStatus::success(format!(
                        "Removed {} from {}",
                        args.name,
                        category.document_key()
                    )))
                } else {
                    self.render(OperationStatus::failure(format!(
                        "{} not found in {}",
                        args.name,
                        category.document_key()
                    )))
                }
            }
        }
    }

    pub fn handle_log_command(mut self, command: LogCommands) -> Result<()> {
        match command {
            LogCommands::Add(args) => {
                let created = self.session.garden.log_entry(args.into_params(today()))?;
                self.save()?;
                self.render(created)
            }
            LogCommands::List => self.render(self.session.garden.log_listing()),
            LogCommands::Update(args) => {
                let updated = self.session.garden.edit_entry(&args.into())?;
                self.save()?;
                self.render(updated)
            }
            LogCommands::EditJson(EditJsonArgs { index, json }) => {
                let json = if json == "-" {
                    io::read_to_string(io::stdin()).context("Failed to read entry from stdin")?
                } else {
                    json
                };
                let updated = self.session.garden.edit_entry_json(index, &json)?;
                self.save()?;
                self.render(updated)
            }
            LogCommands::Delete(args) => {
                let deleted = self.session.garden.delete_entry(args.index)?;
                self.save()?;
                self.render(deleted)
            }
        }
    }

    pub fn handle_report_command(mut self, command: ReportCommands) -> Result<()> {
        let Session { garden, palette } = &mut self.session;
        let output = match command {
            ReportCommands::Timeline(args) => garden.timeline(&args.batch, palette).to_string(),
            ReportCommands::Filter(args) => garden.report(&FilterParams::from(args)).to_string(),
            ReportCommands::Gantt(args) => garden
                .gantt_chart(&FilterParams::from(args), palette)
                .to_string(),
            ReportCommands::Batches => garden.batches(palette).to_string(),
            ReportCommands::Reminders(args) => garden
                .due_reminders(args.date.unwrap_or_else(today))
                .to_string(),
        };
        self.render(output)
    }

    pub fn handle_layout_command(mut self, command: LayoutCommands) -> Result<()> {
        let garden = &mut self.session.garden;
        let status = match command {
            LayoutCommands::Add(args) => {
                let created =
                    garden.ensure_section(&args.name, args.rows.into(), args.cols.into())?;
                self.save_if(created)?;
                OperationStatus::changed_or(
                    created,
                    format!("Created section {} ({}x{})", args.name, args.rows, args.cols),
                    format!("Section {} already exists", args.name),
                )
            }
            LayoutCommands::List => return self.render(self.session.garden.layout()),
            LayoutCommands::Show(args) => {
                let Session { garden, palette } = &mut self.session;
                let view =
                    garden.section_view(&args.name, args.as_of.unwrap_or_else(today), palette)?;
                return self.render(view);
            }
            LayoutCommands::Resize(args) => {
                garden.resize(&args.name, args.rows.into(), args.cols.into())?;
                self.save()?;
                OperationStatus::success(format!(
                    "Resized {} to {}x{}; all cells are now empty",
                    args.name, args.rows, args.cols
                ))
            }
            LayoutCommands::Set(args) => {
                let cell = CellRef::from(args.cell);
                garden.check_cell(&cell)?;
                garden.set_cell(&cell, args.batches)?;
                self.save()?;
                OperationStatus::success(format!("Updated {}", describe(&cell)))
            }
            LayoutCommands::Assign(args) => {
                let cell = CellRef::from(args.cell);
                garden.check_cell(&cell)?;
                let added = garden.assign(&cell, &args.batch)?;
                self.save_if(added)?;
                OperationStatus::changed_or(
                    added,
                    format!("Planted {} in {}", args.batch, describe(&cell)),
                    format!("{} is already in {}", args.batch, describe(&cell)),
                )
            }
            LayoutCommands::Unassign(args) => {
                let cell = CellRef::from(args.cell);
                garden.check_cell(&cell)?;
                let removed = garden.unassign(&cell, &args.batch)?;
                self.save_if(removed)?;
                OperationStatus::changed_or(
                    removed,
                    format!("Removed {} from {}", args.batch, describe(&cell)),
                    format!("{} is not in {}", args.batch, describe(&cell)),
                )
            }
            LayoutCommands::Remove(args) => {
                let removed: Section = garden.remove_section(&args.name)?;
                self.save()?;
                OperationStatus::success(format!("Removed section {} ({removed})", args.name))
            }
        };
        self.render(status)
    }

    pub fn import(mut self, args: ImportArgs) -> Result<()> {
        let json = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        self.session
            .import_json(&json)
            .with_context(|| format!("Failed to import {}", args.file.display()))?;
        self.save()?;
        info!("Imported {}", args.file.display());
        self.render(OperationStatus::success(format!(
            "Imported {} log entries from {}",
            self.session.garden.len(),
            args.file.display()
        )))
    }

    /// Writes the document to a file, or raw to stdout.
    pub fn export(mut self, args: ExportArgs) -> Result<()> {
        let json = self.session.export_json()?;
        match args.output {
            Some(path) => {
                fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Exported to {}", path.display());
                self.render(OperationStatus::success(format!(
                    "Exported garden to {}",
                    path.display()
                )))
            }
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }

    /// Prints the document schema as JSON.
    pub fn schema() -> Result<()> {
        let schema = schemars::schema_for!(GardenDocument);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    /// Counts, sections and due reminders at a glance.
    pub fn overview(self) -> Result<()> {
        let garden = &self.session.garden;
        let mut output = String::from("# Garden\n\n");
        output.push_str(&format!("- **Plants**: {}\n", garden.inventory().len()));
        output.push_str(&format!("- **Log entries**: {}\n", garden.len()));
        output.push_str(&format!("- **Batches**: {}\n", garden.distinct_batch_keys().len()));
        output.push_str(&format!("- **Sections**: {}\n\n", garden.layout().len()));
        output.push_str("## Reminders\n\n");
        output.push_str(&garden.due_reminders(today()).to_string());
        self.render(output)
    }

    fn save(&mut self) -> Result<()> {
        self.store
            .save(&mut self.session)
            .with_context(|| format!("Failed to save {}", self.store.path().display()))
    }

    fn save_if(&mut self, changed: bool) -> Result<()> {
        if changed {
            self.save()
        } else {
            Ok(())
        }
    }

    fn render(&self, output: impl Display) -> Result<()> {
        self.renderer.render(&output.to_string())
    }
}

fn today() -> Date {
    Zoned::now().date()
}

fn describe(cell: &CellRef) -> String {
    format!("{} row {} col {}", cell.section, cell.row + 1, cell.col + 1)
}
