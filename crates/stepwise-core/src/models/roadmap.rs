//! Roadmap model definition and structural lookups.

use serde::{Deserialize, Serialize};

use super::{Phase, PhaseId, Step, StepId};

/// Phase names and step texts of the template a new roadmap starts from.
const TEMPLATE: [(&str, [&str; 2]); 3] = [
    ("Discover", ["Define the goal", "List what you already know"]),
    ("Build", ["Do the first concrete task", "Check progress against the goal"]),
    ("Finish", ["Polish the result", "Share it"]),
];

/// An ordered sequence of phases.
///
/// Serializes as a bare JSON array of phases.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roadmap {
    pub phases: Vec<Phase>,
}

impl Roadmap {
    /// Creates an empty roadmap with no phases.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_phases(phases: Vec<Phase>) -> Self {
        Self { phases }
    }

    /// Creates a roadmap from the default template: three named phases with
    /// two steps each.
    pub fn template() -> Self {
        let phases = TEMPLATE
            .iter()
            .map(|(name, texts)| {
                Phase::named(*name).with_steps(texts.iter().map(|t| Step::with_text(*t)).collect())
            })
            .collect();
        Self { phases }
    }

    /// Total number of steps across all phases.
    pub fn step_count(&self) -> usize {
        self.phases.iter().map(|p| p.steps.len()).sum()
    }

    /// True when the roadmap holds no steps (it may still hold empty phases).
    pub fn is_empty(&self) -> bool {
        self.step_count() == 0
    }

    /// Iterates over all steps in linear order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.phases.iter().flat_map(|p| p.steps.iter())
    }

    pub(crate) fn steps_mut(&mut self) -> impl Iterator<Item = &mut Step> {
        self.phases.iter_mut().flat_map(|p| p.steps.iter_mut())
    }

    /// Returns `(phase_index, step_index)` of the step with the given id.
    pub fn find_step(&self, id: &StepId) -> Option<(usize, usize)> {
        self.phases.iter().enumerate().find_map(|(pi, phase)| {
            phase
                .steps
                .iter()
                .position(|s| &s.id == id)
                .map(|si| (pi, si))
        })
    }

    pub fn step(&self, id: &StepId) -> Option<&Step> {
        self.find_step(id)
            .map(|(pi, si)| &self.phases[pi].steps[si])
    }

    pub(crate) fn step_mut(&mut self, id: &StepId) -> Option<&mut Step> {
        let (pi, si) = self.find_step(id)?;
        Some(&mut self.phases[pi].steps[si])
    }

    pub fn phase(&self, id: &PhaseId) -> Option<&Phase> {
        self.phases.iter().find(|p| &p.id == id)
    }

    pub(crate) fn phase_mut(&mut self, id: &PhaseId) -> Option<&mut Phase> {
        self.phases.iter_mut().find(|p| &p.id == id)
    }
}
