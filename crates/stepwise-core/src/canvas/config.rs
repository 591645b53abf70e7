//! Geometry constants of the virtual canvas.

use serde::{Deserialize, Serialize};

use crate::models::{Point, Size};

/// Tunable geometry of the virtual canvas.
///
/// Units are logical canvas units (pixels at zoom 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Space added on every side of the content bounding box; also the
    /// offset between logical and render coordinates.
    pub padding: f64,
    /// Smallest virtual canvas, used when content is small or absent.
    pub min_size: Size,
    /// Size of one step card.
    pub footprint: Size,
    /// Gap kept between a dragged card and the canvas edge.
    pub margin: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Where the first unpositioned step is placed.
    pub layout_origin: Point,
    /// Vertical distance between stacked unpositioned steps.
    pub layout_spacing: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            padding: 1500.0,
            min_size: Size::new(4000.0, 3000.0),
            footprint: Size::new(240.0, 96.0),
            margin: 24.0,
            min_zoom: 0.3,
            max_zoom: 2.0,
            layout_origin: Point::ORIGIN,
            layout_spacing: 140.0,
        }
    }
}
