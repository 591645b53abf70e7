//! Zoom, pan and auto-centering of the canvas view.
//!
//! Centering needs a measured viewport. Until one is observed the request is
//! parked in [`ViewState::pending_center`] and replayed by
//! [`ViewState::observe_viewport`]. No path here produces NaN or infinite
//! pan values.

use log::debug;

use super::{layout::content_bounds, layout::to_render, CanvasConfig};
use crate::models::{Point, Roadmap, Size, ViewState};

/// Clamps a zoom factor into the configured range.
///
/// Non-finite input yields `None`.
pub fn clamp_zoom(zoom: f64, config: &CanvasConfig) -> Option<f64> {
    // max/min rather than f64::clamp: an inverted or NaN range must not panic.
    zoom.is_finite()
        .then(|| zoom.max(config.min_zoom).min(config.max_zoom))
        .filter(|zoom| *zoom > 0.0)
}

/// Pan that puts the content's center at the viewport's center:
/// `(viewport_center - content_center) / zoom`, in render coordinates.
///
/// Returns `None` when the viewport is not measured yet, the zoom is not a
/// positive finite number, or there is no content.
pub fn center_pan(
    roadmap: &Roadmap,
    viewport: Size,
    zoom: f64,
    config: &CanvasConfig,
) -> Option<Point> {
    if !viewport.is_measured() || !zoom.is_finite() || zoom <= 0.0 {
        return None;
    }
    let content_center = to_render(content_bounds(roadmap, config)?.center(), config);
    let viewport_center = viewport.center();
    let pan = Point::new(
        (viewport_center.x - content_center.x) / zoom,
        (viewport_center.y - content_center.y) / zoom,
    );
    pan.is_finite().then_some(pan)
}

impl ViewState {
    /// Sets the zoom factor, clamped. Positions are never touched.
    pub fn set_zoom(self, zoom: f64, config: &CanvasConfig) -> Self {
        match clamp_zoom(zoom, config) {
            Some(zoom) => Self { zoom, ..self },
            None => self,
        }
    }

    /// User panning. Counts as taking control of the view, so automatic
    /// centering will not override it afterwards.
    pub fn pan_by(self, delta: Point) -> Self {
        if !delta.is_finite() {
            return self;
        }
        Self {
            pan: Point::new(self.pan.x + delta.x, self.pan.y + delta.y),
            auto_centered: true,
            ..self
        }
    }

    /// Centers the content once per session.
    ///
    /// Later calls are no-ops, as is a call with no content. With an
    /// unmeasured viewport the centering is deferred.
    pub fn auto_center(self, roadmap: &Roadmap, viewport: Size, config: &CanvasConfig) -> Self {
        if self.auto_centered {
            return self;
        }
        self.center_on(roadmap, viewport, config)
    }

    /// Explicit "reset view": zoom back to 1.0 and center the content.
    pub fn reset_view(self, roadmap: &Roadmap, viewport: Size, config: &CanvasConfig) -> Self {
        let reset = Self {
            zoom: 1.0_f64.clamp(config.min_zoom, config.max_zoom),
            ..self
        };
        reset.center_on(roadmap, viewport, config)
    }

    /// Reports the latest viewport size and replays a deferred centering
    /// once the size is non-zero.
    pub fn observe_viewport(self, roadmap: &Roadmap, viewport: Size, config: &CanvasConfig) -> Self {
        if !self.pending_center || !viewport.is_measured() {
            return self;
        }
        self.center_on(roadmap, viewport, config)
    }

    fn center_on(self, roadmap: &Roadmap, viewport: Size, config: &CanvasConfig) -> Self {
        if !viewport.is_measured() {
            debug!("viewport not measured, centering deferred");
            return Self {
                pending_center: true,
                ..self
            };
        }
        match center_pan(roadmap, viewport, self.zoom, config) {
            Some(pan) => Self {
                pan,
                auto_centered: true,
                pending_center: false,
                ..self
            },
            None => Self {
                pending_center: false,
                ..self
            },
        }
    }
}
