mod common;

use garden_core::{
    models::{Action, Category},
    params::{AddPlant, AppendEntry, CellRef, FilterParams, UpdateEntry},
    GardenDocument,
};
use jiff::civil::date;

fn append(day: i8, plant: &str, action: &str, height: Option<f64>) -> AppendEntry {
    AppendEntry {
        date: date(2024, 5, day),
        section: "Backyard".to_string(),
        plant: plant.to_string(),
        batch_key: Some(format!("{plant}-Set-2024-05-01")),
        action: action.to_string(),
        height_cm: height,
        ..AppendEntry::default()
    }
}

#[test]
fn test_complete_season_workflow() {
    let (_temp_dir, store) = common::create_test_store();

    // First session: set up the garden.
    let mut session = store.load().expect("Failed to load");
    let garden = &mut session.garden;
    garden.add_plant(&AddPlant {
        category: Category::Vegetable,
        name: "Tomato".to_string(),
    });
    garden.ensure_default_section("Backyard").unwrap();
    garden.log_entry(append(1, "Tomato", "Sown", Some(2.0))).unwrap();
    garden.log_entry(append(2, "Basil", "Sown", None)).unwrap();
    garden
        .assign(
            &CellRef {
                section: "Backyard".to_string(),
                row: 0,
                col: 0,
            },
            "Tomato-Set-2024-05-01",
        )
        .unwrap();
    store.save(&mut session).expect("Failed to save");

    // Second session: keep logging and fix a mistake.
    let mut session = store.load().expect("Failed to reload");
    assert_eq!(session.garden.len(), 2);
    session
        .garden
        .log_entry(append(10, "Tomato", "measured", Some(15.0)))
        .unwrap();
    let basil = session
        .garden
        .log_listing()
        .into_iter()
        .find(|item| item.entry.plant == "Basil")
        .unwrap();
    session.garden.delete_entry(basil.index).unwrap();
    let update = session
        .garden
        .edit_entry(&UpdateEntry {
            index: 1,
            notes: Some("first truss".to_string()),
            ..UpdateEntry::default()
        })
        .unwrap();
    assert_eq!(update.changes, vec!["Notes updated"]);
    store.save(&mut session).expect("Failed to save");

    // Third session: derived views.
    let mut session = store.load().expect("Failed to reload");
    let report = session.garden.report(&FilterParams {
        plants: vec!["Tomato".to_string()],
        ..FilterParams::default()
    });
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.summary.avg_height_cm, 8.5);

    let chart = session
        .garden
        .gantt_chart(&FilterParams::default(), &mut session.palette);
    assert_eq!(chart.len(), 2);
    assert_eq!(chart.bars[0].end, date(2024, 5, 10));

    let view = session
        .garden
        .section_view("Backyard", date(2024, 5, 12), &mut session.palette)
        .unwrap();
    let snapshot = &view.cells[0].snapshot;
    assert_eq!(snapshot.batches[0].entry.action, Action::Measured);
    assert!(snapshot.label().contains("first truss"));
}

#[test]
fn test_export_file_imports_elsewhere() {
    let (_temp_dir, store) = common::create_test_store();
    let mut session = store.load().unwrap();
    session
        .garden
        .log_entry(append(1, "Tomato", "Sown", Some(2.0)))
        .unwrap();
    store.save(&mut session).unwrap();

    let text = std::fs::read_to_string(store.path()).unwrap();
    let document = GardenDocument::from_json(&text).unwrap();
    assert_eq!(document.logs.len(), 1);
    assert!(document.batch_colors.is_some());

    let (_other_dir, other) = common::create_test_store();
    let mut imported = other.load().unwrap();
    imported.import_json(&text).unwrap();
    assert_eq!(imported.garden.to_parts(), session.garden.to_parts());
}

#[test]
fn test_invalid_metrics_rejected() {
    let (_temp_dir, store) = common::create_test_store();
    let mut session = store.load().unwrap();

    let mut params = append(1, "Tomato", "Watered", None);
    params.moisture_pct = Some(140.0);
    let err = session.garden.log_entry(params).unwrap_err();
    assert!(err.to_string().contains("moisture_%"));

    let mut params = append(1, "Tomato", "Watered", None);
    params.height_cm = Some(-1.0);
    assert!(session.garden.log_entry(params).is_err());
    assert!(session.garden.is_empty());
}
