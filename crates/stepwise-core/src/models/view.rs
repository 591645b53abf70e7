//! Persisted viewport state of the canvas.

use serde::{Deserialize, Serialize};

use super::Point;

/// Zoom and pan of the canvas view for one project.
///
/// Behaviour lives in [`crate::canvas::viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub zoom: f64,

    pub pan: Point,

    /// Whether the one automatic centering of this session has happened.
    #[serde(default, skip_serializing)]
    pub auto_centered: bool,

    /// A centering request waiting for a measured viewport.
    #[serde(default, skip_serializing)]
    pub pending_center: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Point::ORIGIN,
            auto_centered: false,
            pending_center: false,
        }
    }
}
