//! Annotation linker: thoughts attached to steps or to the roadmap.
//!
//! Thoughts hold a weak `step_id` that is resolved against the current
//! roadmap on demand. Removing a step never touches thoughts; owners call
//! [`clear_dangling`] when they want stale links dropped.
//!
//! The external reminder poller reads [`due_reminders`] on a fixed interval.

use jiff::Timestamp;

use crate::models::{Roadmap, Step, StepId, Thought, ThoughtId};

/// Looks a step up by id in the current roadmap.
pub fn resolve_step<'a>(roadmap: &'a Roadmap, id: &StepId) -> Option<&'a Step> {
    roadmap.step(id)
}

impl Thought {
    /// Creates an unlinked, unscheduled thought stamped with `created_at`.
    pub fn new(text: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id: ThoughtId::generate(),
            text: text.into(),
            created_at,
            step_id: None,
            scheduled_at: None,
            reminder_dismissed: false,
        }
    }

    pub fn linked_to(mut self, step_id: StepId) -> Self {
        self.step_id = Some(step_id);
        self
    }

    pub fn link(&mut self, step_id: StepId) {
        self.step_id = Some(step_id);
    }

    pub fn unlink(&mut self) {
        self.step_id = None;
    }

    /// Schedules (or reschedules) the reminder; rescheduling re-arms it.
    pub fn schedule(&mut self, at: Timestamp) {
        self.scheduled_at = Some(at);
        self.reminder_dismissed = false;
    }

    pub fn dismiss_reminder(&mut self) {
        self.reminder_dismissed = true;
    }

    /// True when the reminder should fire at `now`.
    pub fn is_due(&self, now: Timestamp) -> bool {
        !self.reminder_dismissed && self.scheduled_at.is_some_and(|at| at <= now)
    }

    /// The linked step, if the link still resolves.
    pub fn step<'a>(&self, roadmap: &'a Roadmap) -> Option<&'a Step> {
        self.step_id.as_ref().and_then(|id| resolve_step(roadmap, id))
    }
}

/// Thoughts linked to the given step.
pub fn thoughts_for_step<'a>(
    thoughts: &'a [Thought],
    step_id: &'a StepId,
) -> impl Iterator<Item = &'a Thought> + 'a {
    thoughts
        .iter()
        .filter(move |t| t.step_id.as_ref() == Some(step_id))
}

/// Thoughts about the roadmap as a whole (no step link).
pub fn roadmap_thoughts(thoughts: &[Thought]) -> impl Iterator<Item = &Thought> {
    thoughts.iter().filter(|t| t.step_id.is_none())
}

/// Thoughts whose step link no longer resolves.
pub fn dangling<'a>(
    thoughts: &'a [Thought],
    roadmap: &'a Roadmap,
) -> impl Iterator<Item = &'a Thought> + 'a {
    thoughts
        .iter()
        .filter(move |t| t.step_id.is_some() && t.step(roadmap).is_none())
}

/// Drops step links that no longer resolve, turning those thoughts into
/// roadmap-level thoughts. Returns the number of links cleared.
pub fn clear_dangling(thoughts: &mut [Thought], roadmap: &Roadmap) -> usize {
    let mut cleared = 0;
    for thought in thoughts {
        if thought.step_id.is_some() && thought.step(roadmap).is_none() {
            thought.unlink();
            cleared += 1;
        }
    }
    cleared
}

/// Reminders that should fire at `now`, earliest first.
pub fn due_reminders(thoughts: &[Thought], now: Timestamp) -> Vec<&Thought> {
    let mut due: Vec<&Thought> = thoughts.iter().filter(|t| t.is_due(now)).collect();
    due.sort_by_key(|t| t.scheduled_at);
    due
}
