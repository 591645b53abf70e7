//! Display implementations for domain models.
//!
//! All output is markdown. A roadmap marks each step with its place relative
//! to the focus: `✓` completed, `➤` current, `○` upcoming.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    canvas::{CanvasLayout, Connection},
    flatten::{focus_state, progress},
    models::{FocusState, Phase, Progress, Roadmap, Step, Thought, ViewState},
};

const DONE_ICON: &str = "✓";
const CURRENT_ICON: &str = "➤";
const UPCOMING_ICON: &str = "○";

/// Shown in place of an empty step text.
const UNTITLED: &str = "*(untitled)*";

fn step_text(step: &Step) -> &str {
    if step.text.trim().is_empty() {
        UNTITLED
    } else {
        &step.text
    }
}

fn fmt_step_line(f: &mut fmt::Formatter<'_>, step: &Step, current: bool) -> fmt::Result {
    if current {
        writeln!(f, "- {CURRENT_ICON} **{}** `{}`", step_text(step), step.id)
    } else {
        let icon = if step.completed { DONE_ICON } else { UPCOMING_ICON };
        writeln!(f, "- {icon} {} `{}`", step_text(step), step.id)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}

impl fmt::Display for FocusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusState::HasFocus(current) => write!(
                f,
                "Current step: #{} (`{}`)",
                current.linear_index + 1,
                current.step_id
            ),
            FocusState::AllDone => write!(f, "All steps complete."),
            FocusState::Empty => write!(f, "No steps in this roadmap."),
        }
    }
}

impl fmt::Display for Roadmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = focus_state(self);
        writeln!(f, "# Roadmap ({} done)", progress(self))?;
        writeln!(f)?;
        writeln!(f, "{state}")?;

        let current = state.current();
        for phase in &self.phases {
            writeln!(f)?;
            writeln!(f, "## {}", phase.name)?;
            writeln!(f)?;
            if phase.steps.is_empty() {
                writeln!(f, "No steps in this phase.")?;
            }
            for step in &phase.steps {
                fmt_step_line(f, step, current == Some(&step.id))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} `{}`", self.name, self.id)?;
        writeln!(f)?;
        let done = self.steps.iter().filter(|s| s.completed).count();
        writeln!(f, "- Steps: {done}/{}", self.steps.len())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_step_line(f, self, false)?;
        if let Some(point) = self.position.point() {
            writeln!(f, "  - Position: ({:.0}, {:.0})", point.x, point.y)?;
        }
        Ok(())
    }
}

impl fmt::Display for Thought {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} `{}`", self.text, self.id)?;
        writeln!(f)?;
        match &self.step_id {
            Some(step) => writeln!(f, "- Step: `{step}`")?,
            None => writeln!(f, "- Step: roadmap")?,
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if let Some(at) = &self.scheduled_at {
            let state = if self.reminder_dismissed {
                " (dismissed)"
            } else {
                ""
            };
            writeln!(f, "- Reminder: {}{state}", LocalDateTime(at))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Zoom: {:.2}", self.zoom)?;
        writeln!(f, "- Pan: ({:.1}, {:.1})", self.pan.x, self.pan.y)
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- `{}` ({:.0}, {:.0}) → `{}` ({:.0}, {:.0})",
            self.from, self.start.x, self.start.y, self.to, self.end.x, self.end.y
        )
    }
}

impl fmt::Display for CanvasLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Canvas {:.0} × {:.0}",
            self.size.width, self.size.height
        )?;
        writeln!(f)?;
        for placed in &self.steps {
            let origin = if placed.explicit { "" } else { " (default)" };
            writeln!(
                f,
                "- `{}` at ({:.0}, {:.0}){origin}",
                placed.step_id, placed.position.x, placed.position.y
            )?;
        }
        Ok(())
    }
}
