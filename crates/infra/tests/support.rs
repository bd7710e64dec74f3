//! Shared fixtures for `bitacora-infra` integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use bitacora_domain::ActivityFields;
use bitacora_infra::database::DbManager;
use tempfile::TempDir;

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with the schema applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("test.db");

        let manager = DbManager::new(&db_path, 2).expect("db manager should be created");
        manager.run_migrations().expect("schema should apply");

        Self { manager: Arc::new(manager), temp_dir }
    }

    /// Path inside the test's temporary directory.
    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Execute a batch of SQL statements against the database.
    pub fn execute_batch(&self, sql: &str) {
        let conn = self
            .manager
            .get_connection()
            .expect("connection should be available for execute_batch");
        conn.execute_batch(sql).expect("SQL batch execution should succeed");
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// Valid activity input for `date`
pub fn activity_fields(date: &str) -> ActivityFields {
    ActivityFields {
        date: date.to_string(),
        supervisor: "Juan Pérez".to_string(),
        description: "Formwork inspection".to_string(),
        attachments: Some("photos.zip".to_string()),
        responsible: "Ana Gómez".to_string(),
        weather: None,
        recorded_by: None,
    }
}
