//! SQLite-backed document store.
//!
//! Roadmaps, thoughts and view state are persisted as JSON text under string
//! keys. The store knows nothing about their shape; parsing and migration
//! happen in [`crate::planner`] and [`crate::migrate`].

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod documents;
pub mod migrations;

pub use documents::Document;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and brings its schema up to date.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
