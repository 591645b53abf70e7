//! Data models for roadmaps, steps and thoughts.
//!
//! A [`Roadmap`] is an ordered list of [`Phase`]s, each holding ordered
//! [`Step`]s. Concatenating every phase's steps gives the roadmap's linear
//! order, which the focus state machine in [`crate::focus`] works on.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Persisted shape
//!
//! A roadmap serializes as a JSON array of phases:
//!
//! ```rust
//! use stepwise_core::models::{Phase, Roadmap, Step};
//!
//! let roadmap = Roadmap::from_phases(vec![Phase::new("p1", "Start").with_steps(vec![
//!     Step::new("s1", "Sketch").completed(true).at(10.0, 20.0),
//!     Step::new("s2", "Build"),
//! ])]);
//!
//! let json = serde_json::to_value(&roadmap).unwrap();
//! assert_eq!(json[0]["steps"][0]["x"], 10.0);
//! assert!(json[0]["steps"][1].get("x").is_none());
//! ```

pub mod geometry;
pub mod ids;
pub mod linear;
pub mod phase;
pub mod roadmap;
pub mod step;
pub mod thought;
pub mod view;

#[cfg(test)]
mod tests;

pub use geometry::{Point, Size};
pub use ids::{PhaseId, StepId, ThoughtId};
pub use linear::{FocusState, LinearRef, Progress};
pub use phase::Phase;
pub use roadmap::Roadmap;
pub use step::{Position, Step, NEW_STEP_TEXT};
pub use thought::Thought;
pub use view::ViewState;
