//! Tests for the garden module.

use jiff::civil::date;

use super::*;
use crate::{
    display::BatchPalette,
    error::GardenError,
    models::{Action, Category, Metrics, MAX_GRID_SIDE},
    params::{AddPlant, AppendEntry, CellRef, FilterParams, UpdateEntry},
};

fn entry(day: i8, plant: &str, batch: &str, action: Action) -> LogEntry {
    let mut entry = LogEntry::new(date(2024, 5, day), plant, action);
    entry.batch_key = batch.to_string();
    entry
}

/// Log of five entries, two of them in batch "T1".
fn create_test_garden() -> Garden {
    let mut garden = Garden::new();
    garden.append(entry(1, "Tomato", "T1", Action::Sown)).unwrap();
    garden.append(entry(2, "Basil", "B1", Action::Sown)).unwrap();
    garden.append(entry(3, "Tomato", "T1", Action::Watered)).unwrap();
    garden.append(entry(4, "Basil", "B1", Action::Watered)).unwrap();
    garden.append(entry(5, "Pepper", "P1", Action::Sown)).unwrap();
    garden
}

fn cell(section: &str, row: usize, col: usize) -> CellRef {
    CellRef {
        section: section.to_string(),
        row,
        col,
    }
}

#[test]
fn test_inventory_ops() {
    let mut garden = Garden::new();
    let tomato = AddPlant {
        category: Category::Vegetable,
        name: " Tomato ".to_string(),
    };
    assert!(garden.add_plant(&tomato));
    assert!(garden.add_plant(&tomato));
    assert!(!garden.add_plant(&AddPlant {
        category: Category::Vegetable,
        name: "   ".to_string(),
    }));
    assert_eq!(garden.plants(Category::Vegetable), [" Tomato ", " Tomato "]);

    assert!(garden.remove_plant(Category::Vegetable, " Tomato "));
    assert_eq!(garden.plants(Category::Vegetable), [" Tomato "]);
    assert!(!garden.remove_plant(Category::Vegetable, "Tomato"));
    assert!(!garden.remove_plant(Category::Fruit, "Tomato"));
    assert!(!garden.is_blank());
}

#[test]
fn test_append_assigns_positions_and_ids() {
    let mut garden = Garden::new();
    let first = garden.append(entry(1, "Tomato", "T1", Action::Sown)).unwrap();
    let second = garden.append(entry(1, "Tomato", "T1", Action::Sown)).unwrap();
    assert_eq!((first.index, second.index), (0, 1));
    assert_ne!(first.id, second.id);
    // Exact duplicates are separate rows.
    assert_eq!(garden.len(), 2);
}

#[test]
fn test_append_rejects_empty_plant_and_batch() {
    let mut garden = Garden::new();
    let err = garden.append(entry(1, " ", "T1", Action::Sown)).unwrap_err();
    assert!(matches!(err, GardenError::InvalidInput { ref field, .. } if field == "plant"));

    let err = garden.append(entry(1, "Tomato", "", Action::Sown)).unwrap_err();
    assert!(matches!(err, GardenError::InvalidInput { ref field, .. } if field == "batch_key"));
    assert!(garden.is_empty());
}

#[test]
fn test_delete_then_edit_same_batch_targets_true_position() {
    let mut garden = create_test_garden();
    let before: Vec<LogEntry> = garden.entries().cloned().collect();

    // The second T1 entry sits at position 2; deleting position 0 moves it.
    let listing = garden.list_reversed();
    let target = listing
        .iter()
        .find(|item| item.entry.batch_key == "T1" && item.entry.action == Action::Watered)
        .unwrap()
        .clone();
    assert_eq!(target.index, 2);

    garden.remove(0).unwrap();
    assert_eq!(garden.index_of(target.id), Some(1));

    // Re-listing pairs each entry with its new position.
    let listing = garden.list_reversed();
    let target = listing.iter().find(|item| item.id == target.id).unwrap();
    assert_eq!(target.index, 1);

    let params = UpdateEntry {
        index: target.index,
        notes: Some("deep watering".to_string()),
        ..Default::default()
    };
    garden.update_params(&params).unwrap();

    let mut edited = before[2].clone();
    edited.notes = "deep watering".to_string();
    let expected = vec![before[1].clone(), edited, before[3].clone(), before[4].clone()];
    let after: Vec<LogEntry> = garden.entries().cloned().collect();
    assert_eq!(after, expected);
}

#[test]
fn test_edit_then_delete_newest_first_from_one_listing() {
    let mut garden = create_test_garden();
    let before: Vec<LogEntry> = garden.entries().cloned().collect();

    // One listing, walked newest first: edit T1 entries, delete B1 entries.
    for item in garden.list_reversed() {
        match item.entry.batch_key.as_str() {
            "T1" => {
                let params = UpdateEntry {
                    index: item.index,
                    notes: Some(format!("checked {}", item.entry.date)),
                    ..Default::default()
                };
                garden.update_params(&params).unwrap();
            }
            "B1" => {
                let removed = garden.remove(item.index).unwrap();
                assert_eq!(removed.entry, item.entry);
            }
            _ => {}
        }
    }

    let mut first = before[0].clone();
    first.notes = "checked 2024-05-01".to_string();
    let mut second = before[2].clone();
    second.notes = "checked 2024-05-03".to_string();
    let after: Vec<LogEntry> = garden.entries().cloned().collect();
    assert_eq!(after, vec![first, second, before[4].clone()]);
}

#[test]
fn test_update_and_remove_by_id_follow_shifts() {
    let mut garden = create_test_garden();
    let pepper = garden.list_reversed()[0].clone();
    garden.remove(1).unwrap();

    let replacement = entry(6, "Pepper", "P1", Action::Transplanted);
    let updated = garden.update_by_id(pepper.id, replacement).unwrap();
    assert_eq!(updated.index, 3);

    garden.remove_by_id(pepper.id).unwrap();
    assert_eq!(garden.len(), 3);
    assert!(matches!(
        garden.remove_by_id(pepper.id),
        Err(GardenError::EntryNotFound { .. })
    ));
}

#[test]
fn test_reverse_order_deletes() {
    let mut garden = create_test_garden();
    let indices: Vec<usize> = garden.list_reversed().iter().map(|i| i.index).collect();
    assert_eq!(indices, vec![4, 3, 2, 1, 0]);

    for index in indices {
        garden.remove(index).unwrap();
    }
    assert!(garden.is_empty());
}

#[test]
fn test_out_of_range_update_and_remove() {
    let mut garden = create_test_garden();
    let err = garden.remove(5).unwrap_err();
    assert!(matches!(err, GardenError::IndexOutOfRange { index: 5, len: 5 }));

    let err = garden
        .update(7, entry(1, "Tomato", "T1", Action::Sown))
        .unwrap_err();
    assert!(matches!(err, GardenError::IndexOutOfRange { index: 7, .. }));

    let err = garden
        .update_params(&UpdateEntry {
            index: 9,
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, GardenError::IndexOutOfRange { .. }));
    assert_eq!(garden.len(), 5);
}

#[test]
fn test_update_validates_like_append() {
    let mut garden = create_test_garden();
    let err = garden
        .update(0, entry(1, "Tomato", " ", Action::Sown))
        .unwrap_err();
    assert!(matches!(err, GardenError::InvalidInput { .. }));
    assert_eq!(garden.get(0).unwrap().batch_key, "T1");
}

#[test]
fn test_update_from_json() {
    let mut garden = create_test_garden();
    let json = r#"{
        "date": "2024-05-07",
        "plant": "Tomato",
        "batch_key": "T1",
        "action": "Staked",
        "metrics": {"height_cm": "12.5", "moisture_%": null}
    }"#;
    let updated = garden.update_from_json(0, json).unwrap();
    assert_eq!(updated.entry.action, Action::Other("Staked".to_string()));
    assert_eq!(updated.entry.metrics.height_cm, Some(12.5));

    let err = garden.update_from_json(0, "{not json").unwrap_err();
    assert!(err.is_malformed_document());
    assert_eq!(garden.get(0).unwrap().date, date(2024, 5, 7));
}

#[test]
fn test_distinct_values() {
    let garden = create_test_garden();
    assert_eq!(garden.distinct_batch_keys(), vec!["B1", "P1", "T1"]);
    assert_eq!(garden.distinct_plants(), vec!["Basil", "Pepper", "Tomato"]);
    assert!(garden.distinct_sections().is_empty());
}

#[test]
fn test_ensure_section_and_resize() {
    let mut garden = create_test_garden();
    assert!(garden.ensure_default_section("Backyard").unwrap());
    assert!(!garden.ensure_section("Backyard", 5, 5).unwrap());
    assert_eq!(garden.section("Backyard").unwrap().rows(), 3);

    garden.assign(&cell("Backyard", 1, 1), "T1").unwrap();
    garden.resize("Backyard", 2, 4).unwrap();

    let section = garden.section("Backyard").unwrap();
    assert_eq!((section.rows(), section.cols()), (2, 4));
    assert_eq!(section.grid().len(), 2);
    assert!(section.grid().iter().all(|row| row.len() == 4));
    assert!(section.grid().iter().flatten().all(|cell| cell.is_empty()));

    assert!(matches!(
        garden.resize("Front", 1, 1),
        Err(GardenError::SectionNotFound { .. })
    ));
    assert!(garden.ensure_section("  ", 1, 1).is_err());
}

#[test]
fn test_section_dimensions_are_capped() {
    let mut garden = create_test_garden();
    assert!(matches!(
        garden.ensure_section("Huge", usize::MAX, usize::MAX),
        Err(GardenError::InvalidInput { .. })
    ));
    assert!(matches!(
        garden.ensure_section("Flat", 0, 3),
        Err(GardenError::InvalidInput { .. })
    ));
    assert!(!garden.layout().contains("Huge"));

    assert!(garden.ensure_section("Bed", MAX_GRID_SIDE, MAX_GRID_SIDE).unwrap());
    garden.assign(&cell("Bed", 9, 9), "T1").unwrap();
    assert!(matches!(
        garden.resize("Bed", MAX_GRID_SIDE + 1, 1),
        Err(GardenError::InvalidInput { .. })
    ));
    let section = garden.section("Bed").unwrap();
    assert_eq!((section.rows(), section.cols()), (10, 10));
    assert_eq!(section.cell(9, 9).keys(), ["T1"]);
}

#[test]
fn test_cell_assignment() {
    let mut garden = create_test_garden();
    garden.ensure_section("Bed", 2, 2).unwrap();
    let target = cell("Bed", 0, 1);

    garden.set_cell(&target, ["T1", "B1", "T1"]).unwrap();
    assert_eq!(garden.get_cell(&target).unwrap().keys(), ["T1", "B1"]);

    assert!(!garden.assign(&target, "T1").unwrap());
    assert!(garden.assign(&target, "P1").unwrap());
    assert!(garden.unassign(&target, "B1").unwrap());
    assert!(!garden.unassign(&target, "B1").unwrap());
    assert_eq!(garden.get_cell(&target).unwrap().keys(), ["T1", "P1"]);

    assert!(matches!(
        garden.check_cell(&cell("Bed", 2, 0)),
        Err(GardenError::CellOutOfRange { rows: 2, cols: 2, .. })
    ));
    assert!(matches!(
        garden.get_cell(&cell("Shed", 0, 0)),
        Err(GardenError::SectionNotFound { .. })
    ));

    garden.remove_section("Bed").unwrap();
    assert!(garden.section("Bed").is_err());
}

#[test]
#[should_panic(expected = "outside 2x2 grid")]
fn test_set_cell_out_of_range_panics() {
    let mut garden = Garden::new();
    garden.ensure_section("Bed", 2, 2).unwrap();
    let _ = garden.set_cell(&cell("Bed", 0, 2), ["T1"]);
}

#[test]
fn test_tomato_report_and_gantt() {
    let mut garden = Garden::new();
    let mut sown = entry(1, "Tomato", "Tomato-Set-2024-05-01", Action::Sown);
    sown.metrics = Metrics::new(Some(2.0), None);
    let mut measured = entry(10, "Tomato", "Tomato-Set-2024-05-01", Action::Measured);
    measured.metrics = Metrics::new(Some(15.0), None);
    garden.append(sown).unwrap();
    garden.append(measured).unwrap();

    let filter = FilterParams {
        batch_keys: vec!["Tomato-Set-2024-05-01".to_string()],
        ..Default::default()
    };
    let report = garden.report(&filter);
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.summary.avg_height_cm, 8.5);

    let mut palette = BatchPalette::new();
    let chart = garden.gantt_chart(&filter, &mut palette);
    let intervals: Vec<_> = chart.bars.iter().map(|bar| (bar.start, bar.end)).collect();
    assert_eq!(
        intervals,
        vec![
            (date(2024, 5, 1), date(2024, 5, 10)),
            (date(2024, 5, 10), date(2024, 5, 11)),
        ]
    );
    assert!(chart.colors.contains_key("Tomato-Set-2024-05-01"));
}

#[test]
fn test_section_view_as_of() {
    let mut garden = create_test_garden();
    garden.ensure_default_section("Backyard").unwrap();
    garden
        .set_cell(&cell("Backyard", 0, 0), ["T1", "P1"])
        .unwrap();

    let mut palette = BatchPalette::new();
    let view = garden
        .section_view("Backyard", date(2024, 4, 30), &mut palette)
        .unwrap();
    assert_eq!(view.cells.len(), 1);
    assert!(view.cells[0].snapshot.is_empty());

    let view = garden
        .section_view("Backyard", date(2024, 5, 3), &mut palette)
        .unwrap();
    let snapshot = &view.cells[0].snapshot;
    assert_eq!(snapshot.batches.len(), 1);
    assert_eq!(snapshot.batches[0].entry.action, Action::Watered);
    assert_eq!(view.cells[0].batches.len(), 2);
    assert_eq!(palette.len(), 2);

    assert!(garden
        .section_view("Front", date(2024, 5, 3), &mut palette)
        .is_err());
}

#[test]
fn test_handlers_wrap_results() {
    let mut garden = Garden::new();
    let created = garden
        .log_entry(AppendEntry {
            date: date(2024, 5, 1),
            plant: "Tomato".to_string(),
            action: "Sown".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(created.resource.index, 0);

    let updated = garden
        .edit_entry(&UpdateEntry {
            index: 0,
            action: Some("watered".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(updated.changes, vec!["Action: Sown -> Watered"]);

    let deleted = garden.delete_entry(0).unwrap();
    assert_eq!(deleted.resource.entry.action, Action::Watered);
    assert!(garden.log_listing().is_empty());
    assert!(garden.delete_entry(0).is_err());
}

#[test]
fn test_batches_and_reminders() {
    let garden = create_test_garden();
    let mut palette = BatchPalette::new();
    let batches = garden.batches(&mut palette);
    assert_eq!(batches.len(), 3);
    assert_eq!(batches.batches[2].batch_key, "T1");
    assert_eq!(batches.batches[2].entries, 2);

    // Default follow-up is three days after each entry.
    let due = garden.due_reminders(date(2024, 5, 7));
    let keys: Vec<&str> = due.iter().map(|r| r.batch_key.as_str()).collect();
    assert_eq!(keys, vec!["T1", "B1"]);
    assert!(garden.due_reminders(date(2024, 5, 1)).is_empty());
}
