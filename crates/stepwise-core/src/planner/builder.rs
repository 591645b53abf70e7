//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    canvas::CanvasConfig,
    db::Database,
    error::{Result, StepwiseError},
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    canvas: CanvasConfig,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            canvas: CanvasConfig::default(),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/stepwise/stepwise.db` or
    /// `~/.local/share/stepwise/stepwise.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the canvas geometry (padding, card footprint, zoom range).
    pub fn with_canvas_config(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `StepwiseError::InvalidInput` if the canvas configuration is
    /// unusable.
    /// Returns `StepwiseError::FileSystem` if the database path is invalid.
    /// Returns `StepwiseError::Database` if database initialization fails.
    pub async fn build(self) -> Result<Planner> {
        validate_canvas(&self.canvas)?;

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StepwiseError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), StepwiseError>(())
        })
        .await
        .map_err(StepwiseError::join)??;

        debug!("planner ready at {}", db_path.display());
        Ok(Planner::new(db_path, self.canvas))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stepwise")
            .place_data_file("stepwise.db")
            .map_err(|e| StepwiseError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_canvas(canvas: &CanvasConfig) -> Result<()> {
    let finite = [
        canvas.padding,
        canvas.margin,
        canvas.min_zoom,
        canvas.max_zoom,
        canvas.layout_spacing,
    ]
    .iter()
    .all(|v| v.is_finite())
        && canvas.layout_origin.is_finite();
    if !finite {
        return Err(StepwiseError::invalid_input("canvas").with_reason("values must be finite"));
    }
    if !canvas.footprint.is_measured() || !canvas.min_size.is_measured() {
        return Err(StepwiseError::invalid_input("canvas")
            .with_reason("footprint and minimum size must be positive"));
    }
    if canvas.min_zoom <= 0.0 || canvas.min_zoom > canvas.max_zoom {
        return Err(StepwiseError::invalid_input("canvas")
            .with_reason("zoom range must be positive and ordered"));
    }
    Ok(())
}
