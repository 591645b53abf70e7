//! Focus and structure operations for the Planner.

use log::debug;

use super::{validate_project, Planner};
use crate::{
    canvas::pin_positions,
    error::{Result, StepwiseError},
    focus::{self, Placement},
    migrate::parse_roadmap,
    models::{Phase, PhaseId, Roadmap, Step, StepId},
    params::{
        AddPhase, AppendStep, EditStep, FocusAt, ImportRoadmap, InsertStep, Project, RenamePhase,
        StepRef, SwapSteps,
    },
};

impl Planner {
    /// Loads the project's roadmap, seeding the starter template for a new
    /// project.
    pub async fn roadmap(&self, params: &Project) -> Result<Roadmap> {
        let project = validate_project(&params.project)?;
        self.with_store(move |store| store.roadmap(&project)).await
    }

    /// Names of all projects with a stored roadmap.
    pub async fn projects(&self) -> Result<Vec<String>> {
        self.with_store(|store| store.projects()).await
    }

    /// Deletes the project's roadmap, thoughts and view. Returns `false` when
    /// nothing was stored. The next load seeds the starter roadmap again.
    pub async fn delete_project(&self, params: &Project) -> Result<bool> {
        let project = validate_project(&params.project)?;
        let key = project.clone();
        let deleted = self
            .with_store(move |store| store.delete_project(&key))
            .await?;
        self.clear_session(&project);
        debug!("deleted project {project}: {deleted}");
        Ok(deleted)
    }

    /// Refocuses on a linear index (clamped).
    pub async fn focus_at(&self, params: &FocusAt) -> Result<Roadmap> {
        let index = params.index;
        self.transition(&params.project, move |roadmap| {
            (focus::focus_at(roadmap, index), ())
        })
        .await
        .map(|(roadmap, ())| roadmap)
    }

    /// Completes the current step. A no-op once everything is done.
    pub async fn complete_current(&self, params: &Project) -> Result<Roadmap> {
        self.transition(&params.project, |roadmap| {
            (focus::complete_current(roadmap), ())
        })
        .await
        .map(|(roadmap, ())| roadmap)
    }

    /// Inserts a step next to an anchor. Returns the new step, or `None`
    /// when the anchor does not exist.
    pub async fn insert_step(&self, params: &InsertStep) -> Result<Option<Step>> {
        let anchor = StepId::from(params.anchor.as_str());
        let placement = if params.before {
            Placement::Before
        } else {
            Placement::After
        };
        let text = params.text.clone();

        self.transition(&params.project, move |roadmap| {
            let (mut next, id) = focus::insert_step(roadmap, &anchor, placement);
            if let (Some(id), Some(text)) = (&id, text) {
                next = focus::set_step_text(&next, id, text);
            }
            let step = id.and_then(|id| next.step(&id).cloned());
            (next, step)
        })
        .await
        .map(|(_, step)| step)
    }

    /// Appends a step to a phase (the last one when unspecified).
    pub async fn append_step(&self, params: &AppendStep) -> Result<Option<Step>> {
        let phase = params.phase_id.as_deref().map(PhaseId::from);
        let text = params.text.clone();

        self.transition(&params.project, move |roadmap| {
            let (next, id) = focus::append_step(roadmap, phase.as_ref(), text);
            let step = id.and_then(|id| next.step(&id).cloned());
            (next, step)
        })
        .await
        .map(|(_, step)| step)
    }

    /// Removes a step. Returns the removed step, or `None` when it did not
    /// exist. Thoughts linked to it are left alone.
    pub async fn remove_step(&self, params: &StepRef) -> Result<Option<Step>> {
        let id = StepId::from(params.step_id.as_str());
        let canvas = self.canvas;

        // Pinning first keeps steps laid out below the removed one in place.
        self.transition(&params.project, move |roadmap| {
            let removed = roadmap.step(&id).cloned();
            let pinned = pin_positions(roadmap, &canvas);
            (focus::remove_step(&pinned, &id), removed)
        })
        .await
        .map(|(_, removed)| removed)
    }

    /// Replaces a step's text. Returns the updated step.
    pub async fn edit_step(&self, params: &EditStep) -> Result<Option<Step>> {
        let id = StepId::from(params.step_id.as_str());
        let text = params.text.clone();

        self.transition(&params.project, move |roadmap| {
            let next = focus::set_step_text(roadmap, &id, text);
            let step = next.step(&id).cloned();
            (next, step)
        })
        .await
        .map(|(_, step)| step)
    }

    /// Swaps two steps in linear order.
    pub async fn swap_steps(&self, params: &SwapSteps) -> Result<Roadmap> {
        let first = StepId::from(params.first.as_str());
        let second = StepId::from(params.second.as_str());

        self.transition(&params.project, move |roadmap| {
            (focus::swap_steps(roadmap, &first, &second), ())
        })
        .await
        .map(|(roadmap, ())| roadmap)
    }

    /// Appends an empty phase.
    pub async fn add_phase(&self, params: &AddPhase) -> Result<Phase> {
        let name = params.name.clone();

        let (roadmap, id) = self
            .transition(&params.project, move |roadmap| focus::add_phase(roadmap, name))
            .await?;
        roadmap.phase(&id).cloned().ok_or_else(|| StepwiseError::Configuration {
            message: format!("phase {id} missing after creation"),
        })
    }

    /// Renames a phase. Returns the renamed phase.
    pub async fn rename_phase(&self, params: &RenamePhase) -> Result<Option<Phase>> {
        let id = PhaseId::from(params.phase_id.as_str());
        let name = params.name.clone();

        self.transition(&params.project, move |roadmap| {
            let next = focus::rename_phase(roadmap, &id, name);
            let phase = next.phase(&id).cloned();
            (next, phase)
        })
        .await
        .map(|(_, phase)| phase)
    }

    /// Replaces the project's roadmap with a document in any accepted
    /// persisted shape, legacy ones included.
    pub async fn import_roadmap(&self, params: &ImportRoadmap) -> Result<Roadmap> {
        let project = validate_project(&params.project)?;
        let json = params.json.clone();

        self.with_store(move |store| {
            let roadmap = parse_roadmap(&json, store.config()).ok_or_else(|| {
                StepwiseError::invalid_input("json").with_reason("not a recognized roadmap document")
            })?;
            store.save_roadmap(&project, &roadmap)?;
            debug!("imported {} steps into {project}", roadmap.step_count());
            Ok(roadmap)
        })
        .await
    }

    /// Loads a roadmap, applies `f`, and saves the result if it changed.
    /// Returns the resulting roadmap and `f`'s extra output.
    pub(super) async fn transition<T, F>(&self, project: &str, f: F) -> Result<(Roadmap, T)>
    where
        F: FnOnce(&Roadmap) -> (Roadmap, T) + Send + 'static,
        T: Send + 'static,
    {
        let project = validate_project(project)?;
        self.with_store(move |store| {
            let current = store.roadmap(&project)?;
            let (next, out) = f(&current);
            if next != current {
                store.save_roadmap(&project, &next)?;
            }
            Ok((next, out))
        })
        .await
    }
}
