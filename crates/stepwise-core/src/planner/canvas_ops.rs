//! Canvas operations for the Planner.

use super::{validate_project, Planner, SessionFlags};
use crate::{
    canvas::{self, CanvasConfig, CanvasLayout, Connection},
    error::Result,
    models::{Point, Roadmap, Size, StepId, ViewState},
    params::{DragStep, MoveStep, PanBy, Project, SetZoom, Viewport},
};

impl Planner {
    /// Resolved positions, virtual size and connections of the roadmap.
    pub async fn layout(&self, params: &Project) -> Result<CanvasLayout> {
        let project = validate_project(&params.project)?;
        let config = self.canvas;
        let roadmap = self.with_store(move |store| store.roadmap(&project)).await?;
        Ok(canvas::layout(&roadmap, &config))
    }

    /// Connection curves between consecutive steps.
    pub async fn connections(&self, params: &Project) -> Result<Vec<Connection>> {
        Ok(self.layout(params).await?.connections)
    }

    /// Moves a step to an absolute logical position (clamped). Returns the
    /// step's resulting position, or `None` for an unknown step.
    pub async fn move_step(&self, params: &MoveStep) -> Result<Option<Point>> {
        let id = StepId::from(params.step_id.as_str());
        let target = Point::new(params.x, params.y);
        let config = self.canvas;

        self.transition(&params.project, move |roadmap| {
            let next = canvas::move_step(roadmap, &id, target, &config);
            let position = canvas::position_of(&next, &id, &config);
            (next, position)
        })
        .await
        .map(|(_, position)| position)
    }

    /// Commits a drag by a pointer delta (clamped). Returns the step's
    /// resulting position, or `None` for an unknown step.
    pub async fn drag_step(&self, params: &DragStep) -> Result<Option<Point>> {
        let id = StepId::from(params.step_id.as_str());
        let delta = Point::new(params.dx, params.dy);
        let config = self.canvas;

        self.transition(&params.project, move |roadmap| {
            let next = canvas::drag_step(roadmap, &id, delta, &config);
            let position = canvas::position_of(&next, &id, &config);
            (next, position)
        })
        .await
        .map(|(_, position)| position)
    }

    /// Current zoom and pan.
    pub async fn view(&self, params: &Project) -> Result<ViewState> {
        self.view_transition(&params.project, |view, _, _| view).await
    }

    /// Sets the zoom factor, clamped into the configured range.
    pub async fn set_zoom(&self, params: &SetZoom) -> Result<ViewState> {
        let zoom = params.zoom;
        self.view_transition(&params.project, move |view, _, config| {
            view.set_zoom(zoom, config)
        })
        .await
    }

    /// User panning; disables automatic centering for the session.
    pub async fn pan_by(&self, params: &PanBy) -> Result<ViewState> {
        let delta = Point::new(params.dx, params.dy);
        self.view_transition(&params.project, move |view, _, _| view.pan_by(delta))
            .await
    }

    /// Resets zoom to 1.0 and centers the content in the viewport.
    pub async fn reset_view(&self, params: &Viewport) -> Result<ViewState> {
        let viewport = Size::new(params.width, params.height);
        self.view_transition(&params.project, move |view, roadmap, config| {
            view.reset_view(roadmap, viewport, config)
        })
        .await
    }

    /// Centers the content once per session.
    pub async fn auto_center(&self, params: &Viewport) -> Result<ViewState> {
        let viewport = Size::new(params.width, params.height);
        self.view_transition(&params.project, move |view, roadmap, config| {
            view.auto_center(roadmap, viewport, config)
        })
        .await
    }

    /// Reports a new viewport size, replaying a deferred centering.
    pub async fn observe_viewport(&self, params: &Viewport) -> Result<ViewState> {
        let viewport = Size::new(params.width, params.height);
        self.view_transition(&params.project, move |view, roadmap, config| {
            view.observe_viewport(roadmap, viewport, config)
        })
        .await
    }

    /// Loads the view with this session's flags, applies `f`, saves zoom and
    /// pan if they changed and remembers the new flags.
    async fn view_transition<F>(&self, project: &str, f: F) -> Result<ViewState>
    where
        F: FnOnce(ViewState, &Roadmap, &CanvasConfig) -> ViewState + Send + 'static,
    {
        let project = validate_project(project)?;
        let session = self.session(&project);
        let key = project.clone();

        let view = self
            .with_store(move |store| {
                let roadmap = store.roadmap(&project)?;
                let current = ViewState {
                    auto_centered: session.auto_centered,
                    pending_center: session.pending_center,
                    ..store.view(&project)?
                };
                let next = f(current, &roadmap, store.config());
                if (next.zoom, next.pan) != (current.zoom, current.pan) {
                    store.save_view(&project, &next)?;
                }
                Ok(next)
            })
            .await?;

        self.set_session(
            &key,
            SessionFlags {
                auto_centered: view.auto_centered,
                pending_center: view.pending_center,
            },
        );
        Ok(view)
    }
}
