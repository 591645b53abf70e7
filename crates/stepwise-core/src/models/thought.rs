//! Thought (annotation) model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{StepId, ThoughtId};

/// A free-form note, optionally linked to a step and optionally scheduled as
/// a reminder.
///
/// `step_id` is a weak reference: it is resolved by lookup and may dangle
/// after the step is removed until the owner clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thought {
    pub id: ThoughtId,

    pub text: String,

    /// Creation time (UTC)
    pub created_at: Timestamp,

    /// Linked step, `None` for roadmap-level thoughts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_id: Option<StepId>,

    /// When the reminder poller should fire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<Timestamp>,

    #[serde(default)]
    pub reminder_dismissed: bool,
}
