//! Phase model definition.

use serde::{Deserialize, Serialize};

use super::{PhaseId, Step};

/// An ordered group of steps. Step order defines linear order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// Identifier, unique within a roadmap
    pub id: PhaseId,

    /// Display label
    #[serde(default)]
    pub name: String,

    /// Steps in display order
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Phase {
    /// Creates an empty phase.
    pub fn new(id: impl Into<PhaseId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Creates an empty phase with a freshly generated id.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(PhaseId::generate(), name)
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }
}
