//! Document load/save queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::error::{DatabaseResultExt, Result};

const SELECT_DOCUMENT_SQL: &str =
    "SELECT key, value, created_at, updated_at FROM documents WHERE key = ?1";
const UPSERT_DOCUMENT_SQL: &str = "INSERT INTO documents (key, value, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_DOCUMENT_SQL: &str = "DELETE FROM documents WHERE key = ?1";
const SELECT_KEYS_SQL: &str =
    "SELECT key FROM documents WHERE substr(key, 1, length(?1)) = ?1 ORDER BY key";

/// A stored JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub key: String,
    pub value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Document {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            key: row.get(0)?,
            value: row.get(1)?,
            created_at: parse_timestamp(row, 2)?,
            updated_at: parse_timestamp(row, 3)?,
        })
    }
}

fn parse_timestamp(row: &Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Loads the document stored under `key`.
    pub fn load_document(&self, key: &str) -> Result<Option<Document>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_DOCUMENT_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![key], Document::from_row)
            .optional()
            .db_context("Failed to load document")
    }

    /// Loads only the JSON text stored under `key`.
    pub fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_document(key)?.map(|doc| doc.value))
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn save(&mut self, key: &str, value: &str) -> Result<Document> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        tx.execute(UPSERT_DOCUMENT_SQL, params![key, value, &now])
            .db_context("Failed to save document")?;

        let document = tx
            .query_row(SELECT_DOCUMENT_SQL, params![key], Document::from_row)
            .db_context("Failed to read back saved document")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("saved document {key} ({} bytes)", value.len());
        Ok(document)
    }

    /// Deletes the document under `key`. Returns whether one existed.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        let rows = self
            .connection
            .execute(DELETE_DOCUMENT_SQL, params![key])
            .db_context("Failed to delete document")?;
        Ok(rows > 0)
    }

    /// All keys starting with `prefix`, sorted.
    pub fn keys(&self, prefix: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_KEYS_SQL)
            .db_context("Failed to prepare query")?;

        let keys = stmt
            .query_map(params![prefix], |row| row.get(0))
            .db_context("Failed to list document keys")?
            .collect::<rusqlite::Result<Vec<String>>>()
            .db_context("Failed to read document key")?;
        Ok(keys)
    }
}
