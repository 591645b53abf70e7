//! Spatial canvas layout engine.
//!
//! Steps live at free logical `(x, y)` positions inside a finite but
//! oversized virtual canvas. The canvas grows with the content: its size is
//! the content's far edge plus [`CanvasConfig::padding`] on every side, and
//! never less than [`CanvasConfig::min_size`]. Rendering adds the padding to
//! every logical coordinate, so steps may be dragged to negative logical
//! coordinates and still render inside a non-negative canvas.
//!
//! ```text
//!  render (0,0)
//!    ┌──────────────────────────────────────────┐
//!    │ padding                                  │
//!    │    logical (0,0)                         │
//!    │       ┌──────┐                           │
//!    │       │ step │──╮                        │
//!    │       └──────┘  │    ┌──────┐            │
//!    │                 ╰───▶│ step │            │
//!    │                      └──────┘    padding │
//!    └──────────────────────────────────────────┘
//! ```
//!
//! Everything here is a pure function of a roadmap snapshot and a
//! [`CanvasConfig`]. Zoom and pan live in [`crate::models::ViewState`] and
//! never change logical positions.

pub mod config;
pub mod layout;
pub mod viewport;


pub use config::CanvasConfig;
pub use layout::{
    clamp_to_canvas, connections, content_bounds, drag_limits, drag_step, layout, move_step,
    pin_positions, position_of, resolve_positions, to_render, virtual_size, Bounds, CanvasLayout,
    Connection, PlacedStep,
};
pub use viewport::{center_pan, clamp_zoom};
