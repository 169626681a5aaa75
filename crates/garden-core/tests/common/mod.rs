use garden_core::{DocumentStore, StoreBuilder};
use tempfile::TempDir;

/// Helper function to create a store backed by a temporary data file
pub fn create_test_store() -> (TempDir, DocumentStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_path = temp_dir.path().join("garden.json");
    let store = StoreBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create store");
    (temp_dir, store)
}
