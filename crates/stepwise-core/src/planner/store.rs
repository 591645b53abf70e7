//! Typed load/save of a project's documents on top of [`Database`].
//!
//! Missing documents fall back to defaults. Malformed documents are logged
//! and treated the same as missing ones.

use std::path::Path;

use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    canvas::{clamp_zoom, pin_positions, CanvasConfig},
    db::Database,
    error::Result,
    migrate::parse_roadmap,
    models::{Roadmap, Thought, ViewState},
};

pub(super) fn roadmap_key(project: &str) -> String {
    format!("roadmap:{project}")
}

pub(super) fn thoughts_key(project: &str) -> String {
    format!("thoughts:{project}")
}

pub(super) fn view_key(project: &str) -> String {
    format!("view:{project}")
}

/// A database handle plus the canvas geometry used for migration.
pub(super) struct Store {
    db: Database,
    config: CanvasConfig,
}

impl Store {
    pub(super) fn open(path: &Path, config: CanvasConfig) -> Result<Self> {
        Ok(Self {
            db: Database::new(path)?,
            config,
        })
    }

    pub(super) fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Loads the project's roadmap. A project without a usable roadmap gets
    /// the starter template, which is saved right away so its ids are stable.
    pub(super) fn roadmap(&mut self, project: &str) -> Result<Roadmap> {
        let key = roadmap_key(project);
        if let Some(roadmap) = self
            .db
            .load(&key)?
            .and_then(|text| parse_roadmap(&text, &self.config))
        {
            return Ok(roadmap);
        }

        debug!("seeding project {project} with the starter roadmap");
        let roadmap = pin_positions(&Roadmap::template(), &self.config);
        self.save_roadmap(project, &roadmap)?;
        Ok(roadmap)
    }

    pub(super) fn save_roadmap(&mut self, project: &str, roadmap: &Roadmap) -> Result<()> {
        self.save_json(&roadmap_key(project), roadmap)
    }

    pub(super) fn thoughts(&self, project: &str) -> Result<Vec<Thought>> {
        Ok(self.load_json(&thoughts_key(project))?.unwrap_or_default())
    }

    pub(super) fn save_thoughts(&mut self, project: &str, thoughts: &[Thought]) -> Result<()> {
        self.save_json(&thoughts_key(project), thoughts)
    }

    /// Loads the persisted zoom and pan. Session flags always start cleared.
    pub(super) fn view(&self, project: &str) -> Result<ViewState> {
        let view: ViewState = self.load_json(&view_key(project))?.unwrap_or_default();
        let zoom = clamp_zoom(view.zoom, &self.config).unwrap_or(1.0);
        let pan = if view.pan.is_finite() {
            view.pan
        } else {
            ViewState::default().pan
        };
        Ok(ViewState { zoom, pan, ..ViewState::default() })
    }

    pub(super) fn save_view(&mut self, project: &str, view: &ViewState) -> Result<()> {
        self.save_json(&view_key(project), view)
    }

    /// Project names that have a stored roadmap.
    pub(super) fn projects(&self) -> Result<Vec<String>> {
        let prefix = roadmap_key("");
        Ok(self
            .db
            .keys(&prefix)?
            .into_iter()
            .filter_map(|key| key.strip_prefix(&prefix).map(str::to_string))
            .collect())
    }

    /// Deletes every document of the project. Returns whether any existed.
    pub(super) fn delete_project(&mut self, project: &str) -> Result<bool> {
        let mut deleted = false;
        for key in [roadmap_key(project), thoughts_key(project), view_key(project)] {
            deleted |= self.db.delete(&key)?;
        }
        Ok(deleted)
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(text) = self.db.load(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&text) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("ignoring malformed document {key}: {e}");
                Ok(None)
            }
        }
    }

    fn save_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string(value)?;
        self.db.save(key, &text)?;
        Ok(())
    }
}
