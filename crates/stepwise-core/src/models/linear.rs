//! Derived linear-order views of a roadmap.
//!
//! None of these types are persisted. Any structural mutation invalidates
//! them, so they are rebuilt from the roadmap on every read.

use serde::Serialize;

use super::{PhaseId, StepId};

/// Position of one step in the linearized roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinearRef {
    pub phase_index: usize,
    pub step_index: usize,
    pub linear_index: usize,
    pub phase_id: PhaseId,
    pub step_id: StepId,
    pub completed: bool,
}

/// Which of the three progression states a roadmap is in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "current", rename_all = "snake_case")]
pub enum FocusState {
    /// A current step exists: the first incomplete one in linear order.
    HasFocus(LinearRef),
    /// Non-empty and every step completed.
    AllDone,
    /// No steps at all.
    Empty,
}

impl FocusState {
    /// Id of the current step, if any.
    pub fn current(&self) -> Option<&StepId> {
        match self {
            FocusState::HasFocus(r) => Some(&r.step_id),
            FocusState::AllDone | FocusState::Empty => None,
        }
    }
}

/// Completed/total step counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}
