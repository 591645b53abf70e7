//! Parameter structures for Planner operations.
//!
//! These carry plain strings and numbers so interface layers (the CLI's clap
//! arguments, or any future API) can convert into them without the core
//! depending on a UI framework. Ids are converted to their typed form inside
//! the planner.
//!
//! Every structure names the `project` whose documents it operates on. Use
//! [`DEFAULT_PROJECT`] when the caller has no notion of projects.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Project used when none is given.
pub const DEFAULT_PROJECT: &str = "default";

fn default_project() -> String {
    DEFAULT_PROJECT.to_string()
}

/// Parameters for operations that only need the project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default = "default_project")]
    pub project: String,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            project: default_project(),
        }
    }
}

impl Project {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
        }
    }
}

/// Parameters for refocusing on a linear index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusAt {
    #[serde(default = "default_project")]
    pub project: String,
    /// Zero-based linear index; out-of-range values are clamped
    pub index: usize,
}

/// Parameters for operations addressing a single step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRef {
    #[serde(default = "default_project")]
    pub project: String,
    pub step_id: String,
}

/// Parameters for inserting a step next to an anchor step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertStep {
    #[serde(default = "default_project")]
    pub project: String,
    /// Step the new one is placed next to
    pub anchor: String,
    /// Insert before the anchor instead of after it
    #[serde(default)]
    pub before: bool,
    /// Text of the new step; the placeholder text is used when absent
    pub text: Option<String>,
}

/// Parameters for appending a step to the end of a phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendStep {
    #[serde(default = "default_project")]
    pub project: String,
    /// Target phase; the last phase when absent
    pub phase_id: Option<String>,
    pub text: String,
}

/// Parameters for replacing a step's text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditStep {
    #[serde(default = "default_project")]
    pub project: String,
    pub step_id: String,
    pub text: String,
}

/// Parameters for swapping two steps in linear order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapSteps {
    #[serde(default = "default_project")]
    pub project: String,
    pub first: String,
    pub second: String,
}

/// Parameters for adding an empty phase at the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPhase {
    #[serde(default = "default_project")]
    pub project: String,
    pub name: String,
}

/// Parameters for renaming a phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamePhase {
    #[serde(default = "default_project")]
    pub project: String,
    pub phase_id: String,
    pub name: String,
}

/// Parameters for replacing a project's roadmap with imported JSON in any
/// accepted persisted shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRoadmap {
    #[serde(default = "default_project")]
    pub project: String,
    pub json: String,
}

/// Parameters for moving a step to an absolute logical position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveStep {
    #[serde(default = "default_project")]
    pub project: String,
    pub step_id: String,
    pub x: f64,
    pub y: f64,
}

/// Parameters for committing a drag by a pointer delta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragStep {
    #[serde(default = "default_project")]
    pub project: String,
    pub step_id: String,
    pub dx: f64,
    pub dy: f64,
}

/// Parameters for setting the canvas zoom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetZoom {
    #[serde(default = "default_project")]
    pub project: String,
    pub zoom: f64,
}

/// Parameters for user panning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanBy {
    #[serde(default = "default_project")]
    pub project: String,
    pub dx: f64,
    pub dy: f64,
}

/// Parameters for operations that need the current viewport size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    #[serde(default = "default_project")]
    pub project: String,
    pub width: f64,
    pub height: f64,
}

/// Parameters for creating a thought.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddThought {
    #[serde(default = "default_project")]
    pub project: String,
    pub text: String,
    /// Step to link to; roadmap-level when absent
    pub step_id: Option<String>,
    /// Reminder time
    pub scheduled_at: Option<Timestamp>,
}

/// Parameters for operations addressing a single thought.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThoughtRef {
    #[serde(default = "default_project")]
    pub project: String,
    pub thought_id: String,
}

/// Parameters for linking a thought to a step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkThought {
    #[serde(default = "default_project")]
    pub project: String,
    pub thought_id: String,
    pub step_id: String,
}

/// Parameters for scheduling a thought's reminder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleThought {
    #[serde(default = "default_project")]
    pub project: String,
    pub thought_id: String,
    pub at: Timestamp,
}

/// Parameters for listing thoughts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListThoughts {
    #[serde(default = "default_project")]
    pub project: String,
    /// Only thoughts linked to this step
    pub step_id: Option<String>,
}

/// Parameters for querying due reminders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DueReminders {
    #[serde(default = "default_project")]
    pub project: String,
    /// Reference time; the current time when absent
    pub now: Option<Timestamp>,
}
