//! High-level async API over the roadmap engine and the document store.
//!
//! Every operation follows the same shape: open the database inside
//! [`tokio::task::spawn_blocking`], load the project's documents, apply one
//! pure transition from [`crate::focus`], [`crate::canvas`] or
//! [`crate::thoughts`], and save what changed. Concurrent writers to the same
//! project resolve last-write-wins.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Planner     │    │  pure engine    │    │    Database     │
//! │ (roadmap_ops,   │───▶│ (focus, canvas, │    │  (documents)    │
//! │  canvas_ops,    │    │  thoughts)      │    │                 │
//! │  thought_ops)   │───────────────────────────▶│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`roadmap_ops`]: Focus and structure editing
//! - [`canvas_ops`]: Positions, zoom, pan and centering
//! - [`thought_ops`]: Thoughts and reminders
//!
//! # Usage
//!
//! ```rust,no_run
//! use stepwise_core::{params::Project, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/stepwise.db"))
//!     .build()
//!     .await?;
//!
//! let roadmap = planner.complete_current(&Project::default()).await?;
//! println!("{roadmap}");
//! # Ok(())
//! # }
//! ```
//!
//! # Sessions
//!
//! Automatic centering happens once per session. A session is the lifetime
//! of one [`Planner`]; the flags that track it are kept in memory and never
//! written to the database.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use tokio::task;

use crate::{
    canvas::CanvasConfig,
    error::{Result, StepwiseError},
};

pub mod builder;
pub mod canvas_ops;
pub mod roadmap_ops;
mod store;
pub mod thought_ops;


pub use builder::PlannerBuilder;
use store::Store;

/// Per-project view flags that live only as long as the planner.
#[derive(Debug, Clone, Copy, Default)]
struct SessionFlags {
    auto_centered: bool,
    pending_center: bool,
}

/// Main planner interface for managing roadmaps, their canvas and thoughts.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) canvas: CanvasConfig,
    sessions: Mutex<HashMap<String, SessionFlags>>,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf, canvas: CanvasConfig) -> Self {
        Self {
            db_path,
            canvas,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Path of the SQLite database backing this planner.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Canvas geometry used by every layout operation.
    pub fn canvas_config(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Runs `f` against a freshly opened store on the blocking pool.
    async fn with_store<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Store) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        let canvas = self.canvas;

        task::spawn_blocking(move || {
            let mut store = Store::open(&db_path, canvas)?;
            f(&mut store)
        })
        .await
        .map_err(StepwiseError::join)?
    }

    fn session(&self, project: &str) -> SessionFlags {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(project)
            .copied()
            .unwrap_or_default()
    }

    fn set_session(&self, project: &str, flags: SessionFlags) {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(project.to_string(), flags);
    }

    fn clear_session(&self, project: &str) {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(project);
    }
}

/// Rejects project names that cannot form a document key.
fn validate_project(project: &str) -> Result<String> {
    let trimmed = project.trim();
    if trimmed.is_empty() {
        return Err(StepwiseError::invalid_input("project").with_reason("must not be empty"));
    }
    Ok(trimmed.to_string())
}
