//! Database schema initialization and migrations.

use log::debug;

use crate::error::{DatabaseResultExt, Result};

/// Schema version written to `PRAGMA user_version` once all migrations ran.
pub const SCHEMA_VERSION: i64 = 1;

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Current `user_version` of the open database.
    pub fn schema_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")
    }

    /// Applies migrations newer than the stored `user_version`.
    fn apply_migrations(&self) -> Result<()> {
        let version = self.schema_version()?;

        // Version 0 databases predate `created_at`; the fresh schema already has it.
        if version < 1 {
            let has_created_at: bool = self
                .connection
                .query_row(
                    "SELECT COUNT(*) FROM pragma_table_info('documents') WHERE name = 'created_at'",
                    [],
                    |row| row.get(0),
                )
                .map(|count: i64| count > 0)
                .db_context("Failed to inspect documents table")?;

            if !has_created_at {
                debug!("adding created_at column to documents");
                self.connection
                    .execute_batch(
                        "ALTER TABLE documents ADD COLUMN created_at TEXT NOT NULL DEFAULT '';
                         UPDATE documents SET created_at = updated_at;",
                    )
                    .db_context("Failed to add created_at column to documents table")?;
            }
        }

        if version != SCHEMA_VERSION {
            self.connection
                .execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
                .db_context("Failed to record schema version")?;
        }

        Ok(())
    }
}
