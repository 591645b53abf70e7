use std::path::PathBuf;

use stepwise_core::{Planner, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner backed by a fresh database
#[allow(dead_code)]
pub async fn create_test_planner() -> (TempDir, Planner) {
    let (temp_dir, db_path) = create_test_environment();
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Helper function to create a temporary directory and database path
#[allow(dead_code)]
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("stepwise.db");
    (temp_dir, db_path)
}
