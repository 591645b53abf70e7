//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Point, StepId};

/// Default text given to steps created by insert or append.
pub const NEW_STEP_TEXT: &str = "New step";

/// Where a step sits on the virtual canvas.
///
/// Steps start out unpositioned and are laid out by the default layout until
/// they are first dragged or moved.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    #[default]
    Unpositioned,
    Positioned { x: f64, y: f64 },
}

impl Position {
    /// Explicit position as a point, if any.
    pub fn point(&self) -> Option<Point> {
        match *self {
            Position::Unpositioned => None,
            Position::Positioned { x, y } => Some(Point::new(x, y)),
        }
    }

    pub fn is_positioned(&self) -> bool {
        matches!(self, Position::Positioned { .. })
    }
}

impl From<Point> for Position {
    fn from(point: Point) -> Self {
        Position::Positioned {
            x: point.x,
            y: point.y,
        }
    }
}

/// An individual step within a phase.
///
/// `completed` is owned by the focus state machine in [`crate::focus`]; the
/// field is public for construction and inspection, but writers outside the
/// machine can leave the frontier non-monotonic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StepRecord", into = "StepRecord")]
pub struct Step {
    /// Stable identifier, never reused
    pub id: StepId,

    /// Display text (may be empty)
    pub text: String,

    /// Completion flag derived from the focus pointer
    pub completed: bool,

    /// Canvas position in logical coordinates
    pub position: Position,
}

impl Step {
    /// Creates an incomplete, unpositioned step.
    pub fn new(id: impl Into<StepId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
            position: Position::Unpositioned,
        }
    }

    /// Creates a step with a freshly generated id.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(StepId::generate(), text)
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position::Positioned { x, y };
        self
    }
}

/// Persisted shape of a step: `{id, text, completed, x?, y?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StepRecord {
    id: StepId,
    #[serde(default)]
    text: String,
    #[serde(default)]
    completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
}

impl From<StepRecord> for Step {
    fn from(record: StepRecord) -> Self {
        let position = match (record.x, record.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Position::Positioned { x, y },
            _ => Position::Unpositioned,
        };
        Self {
            id: record.id,
            text: record.text,
            completed: record.completed,
            position,
        }
    }
}

impl From<Step> for StepRecord {
    fn from(step: Step) -> Self {
        let (x, y) = match step.position {
            Position::Positioned { x, y } => (Some(x), Some(y)),
            Position::Unpositioned => (None, None),
        };
        Self {
            id: step.id,
            text: step.text,
            completed: step.completed,
            x,
            y,
        }
    }
}
