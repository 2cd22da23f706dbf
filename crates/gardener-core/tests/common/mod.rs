use std::path::PathBuf;

use gardener_core::{Dataset, Seeder, SeederBuilder, TicketStore};
use tempfile::TempDir;

/// Helper function to create a temp directory holding an empty dataset file
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_path = temp_dir.path().join("tickets.json");
    TicketStore::new(&data_path)
        .save(&Dataset::default())
        .expect("Failed to write empty dataset");
    (temp_dir, data_path)
}

/// Helper function to create a seeder over a fresh empty dataset
pub fn create_test_seeder() -> (TempDir, Seeder) {
    let (temp_dir, data_path) = create_test_environment();
    let seeder = SeederBuilder::new()
        .with_data_file(Some(data_path))
        .build()
        .expect("Failed to create seeder");
    (temp_dir, seeder)
}
