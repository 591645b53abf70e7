//! Focus state machine.
//!
//! The roadmap's completion flags are read collectively as one focus pointer
//! `F` (see [`crate::flatten::focus_index`]). Every transition takes a
//! snapshot and returns a new one; none of them fail. Unknown ids and out of
//! range indices leave the roadmap unchanged or are clamped.
//!
//! ```text
//!             complete_current (last)
//!  HAS_FOCUS ─────────────────────────▶ ALL_DONE
//!      ▲  ▲      focus_at(len - 1)         │
//!      │  └────────────────────────────────┘
//!      │ append_step / insert_step
//!    EMPTY ◀──── remove_step (only step) ─── any
//! ```

use log::debug;

use crate::{
    flatten::{first_incomplete, flatten, locate},
    models::{Phase, PhaseId, Roadmap, Step, StepId, NEW_STEP_TEXT},
};

/// Name of the phase created when appending to a roadmap with no phases.
pub const FALLBACK_PHASE_NAME: &str = "Roadmap";

/// Which side of the anchor a new step is spliced on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// Moves the frontier to `index`: every step before it becomes completed,
/// every step from it onward becomes incomplete.
///
/// `index` is clamped into `[0, len - 1]`, so this never produces the
/// all-done state; `focus_at(len - 1)` is how an all-done roadmap reopens
/// its last step.
pub fn focus_at(roadmap: &Roadmap, index: usize) -> Roadmap {
    let mut next = roadmap.clone();
    let len = next.step_count();
    if len == 0 {
        return next;
    }
    let target = index.min(len - 1);
    for (linear_index, step) in next.steps_mut().enumerate() {
        step.completed = linear_index < target;
    }
    debug!("focus moved to linear index {target}");
    next
}

/// Completes the current step and everything before it.
///
/// Later steps keep whatever flags they had. With no current step the
/// roadmap is returned unchanged.
pub fn complete_current(roadmap: &Roadmap) -> Roadmap {
    let mut next = roadmap.clone();
    let Some(current) = first_incomplete(&next) else {
        return next;
    };
    for step in next.steps_mut().take(current.linear_index + 1) {
        step.completed = true;
    }
    debug!("completed step {} at {}", current.step_id, current.linear_index);
    next
}

/// Splices a new `"New step"` next to `anchor` inside the anchor's phase.
///
/// Returns the new roadmap and the id of the inserted step, or the unchanged
/// roadmap and `None` when the anchor does not exist.
pub fn insert_step(
    roadmap: &Roadmap,
    anchor: &StepId,
    placement: Placement,
) -> (Roadmap, Option<StepId>) {
    let Some((phase_index, step_index)) = roadmap.find_step(anchor) else {
        debug!("insert ignored: anchor {anchor} not found");
        return (roadmap.clone(), None);
    };
    let focused = focused_step(roadmap);
    let mut next = roadmap.clone();
    let step = Step::with_text(NEW_STEP_TEXT);
    let id = step.id.clone();
    let at = match placement {
        Placement::Before => step_index,
        Placement::After => step_index + 1,
    };
    next.phases[phase_index].steps.insert(at, step);
    settle_new_step(&mut next, &id, focused.as_ref());
    (next, Some(id))
}

/// Appends a step to the end of a phase.
///
/// With `phase` unset the last phase is used; an unknown phase id leaves the
/// roadmap unchanged. A roadmap with no phases gets a fallback phase first,
/// which is how an empty roadmap gains its first step.
pub fn append_step(
    roadmap: &Roadmap,
    phase: Option<&PhaseId>,
    text: impl Into<String>,
) -> (Roadmap, Option<StepId>) {
    let focused = focused_step(roadmap);
    let mut next = roadmap.clone();
    let phase_index = match phase {
        Some(id) => match next.phases.iter().position(|p| &p.id == id) {
            Some(index) => index,
            None => {
                debug!("append ignored: phase {id} not found");
                return (next, None);
            }
        },
        None => {
            if next.phases.is_empty() {
                next.phases.push(Phase::named(FALLBACK_PHASE_NAME));
            }
            next.phases.len() - 1
        }
    };
    let step = Step::with_text(text);
    let id = step.id.clone();
    next.phases[phase_index].steps.push(step);
    settle_new_step(&mut next, &id, focused.as_ref());
    (next, Some(id))
}

/// Deletes a step from its phase.
///
/// Removing the current step refocuses on the first incomplete step of the
/// new order. An emptied phase is kept.
pub fn remove_step(roadmap: &Roadmap, id: &StepId) -> Roadmap {
    let Some((phase_index, step_index)) = roadmap.find_step(id) else {
        debug!("remove ignored: step {id} not found");
        return roadmap.clone();
    };
    let was_focus = focused_step(roadmap).as_ref() == Some(id);
    let mut next = roadmap.clone();
    next.phases[phase_index].steps.remove(step_index);

    if was_focus {
        if let Some(current) = first_incomplete(&next) {
            return focus_at(&next, current.linear_index);
        }
    }
    next
}

/// Swaps the positions of two steps, which may live in different phases.
///
/// Ids travel with the steps. The step that was current stays current.
pub fn swap_steps(roadmap: &Roadmap, a: &StepId, b: &StepId) -> Roadmap {
    let (Some((pa, sa)), Some((pb, sb))) = (roadmap.find_step(a), roadmap.find_step(b)) else {
        debug!("swap ignored: {a} or {b} not found");
        return roadmap.clone();
    };
    if (pa, sa) == (pb, sb) {
        return roadmap.clone();
    }
    let focused = focused_step(roadmap);
    let mut next = roadmap.clone();
    let first = next.phases[pa].steps[sa].clone();
    let second = std::mem::replace(&mut next.phases[pb].steps[sb], first);
    next.phases[pa].steps[sa] = second;

    match focused.and_then(|id| locate(&next, &id)) {
        Some(current) => focus_at(&next, current.linear_index),
        None => next,
    }
}

/// Replaces a step's text. Unknown ids are ignored.
pub fn set_step_text(roadmap: &Roadmap, id: &StepId, text: impl Into<String>) -> Roadmap {
    let mut next = roadmap.clone();
    if let Some(step) = next.step_mut(id) {
        step.text = text.into();
    }
    next
}

/// Appends an empty phase and returns its id.
pub fn add_phase(roadmap: &Roadmap, name: impl Into<String>) -> (Roadmap, PhaseId) {
    let mut next = roadmap.clone();
    let phase = Phase::named(name);
    let id = phase.id.clone();
    next.phases.push(phase);
    (next, id)
}

/// Renames a phase. Unknown ids are ignored.
pub fn rename_phase(roadmap: &Roadmap, id: &PhaseId, name: impl Into<String>) -> Roadmap {
    let mut next = roadmap.clone();
    if let Some(phase) = next.phase_mut(id) {
        phase.name = name.into();
    }
    next
}

fn focused_step(roadmap: &Roadmap) -> Option<StepId> {
    first_incomplete(roadmap).map(|r| r.step_id)
}

/// Sets the completion flag of a freshly added step so the frontier stays
/// monotonic and the previously focused step keeps the focus.
///
/// With no previous focus (all done or empty) the new step stays incomplete
/// and becomes current.
fn settle_new_step(roadmap: &mut Roadmap, new_id: &StepId, focused: Option<&StepId>) {
    let refs = flatten(roadmap);
    let Some(new_index) = refs.iter().position(|r| &r.step_id == new_id) else {
        return;
    };
    let completed = focused
        .and_then(|id| refs.iter().position(|r| &r.step_id == id))
        .is_some_and(|focus_index| new_index < focus_index);
    if let Some(step) = roadmap.step_mut(new_id) {
        step.completed = completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        flatten::{all_done, focus_state},
        models::FocusState,
    };

    fn linear(ids: &[(&str, bool)]) -> Roadmap {
        Roadmap::from_phases(vec![Phase::new("p", "Only").with_steps(
            ids.iter()
                .map(|(id, done)| Step::new(*id, id.to_uppercase()).completed(*done))
                .collect(),
        )])
    }

    fn two_by_two() -> Roadmap {
        Roadmap::from_phases(vec![
            Phase::new("p1", "One").with_steps(vec![Step::new("a", "A"), Step::new("b", "B")]),
            Phase::new("p2", "Two").with_steps(vec![Step::new("c", "C"), Step::new("d", "D")]),
        ])
    }

    fn flags(roadmap: &Roadmap) -> Vec<bool> {
        roadmap.steps().map(|s| s.completed).collect()
    }

    fn current(roadmap: &Roadmap) -> Option<String> {
        focus_state(roadmap).current().map(|id| id.to_string())
    }

    #[test]
    fn test_complete_current_walks_to_all_done() {
        let mut roadmap = two_by_two();
        let mut seen = vec![current(&roadmap)];
        for _ in 0..4 {
            roadmap = complete_current(&roadmap);
            seen.push(current(&roadmap));
        }

        assert_eq!(
            seen,
            [Some("a"), Some("b"), Some("c"), Some("d"), None]
                .map(|s| s.map(String::from))
                .to_vec()
        );
        assert!(all_done(&roadmap));
        assert_eq!(focus_state(&roadmap), FocusState::AllDone);
    }

    #[test]
    fn test_complete_current_on_all_done_is_noop() {
        let roadmap = linear(&[("a", true), ("b", true)]);
        assert_eq!(complete_current(&roadmap), roadmap);
        assert_eq!(complete_current(&Roadmap::new()), Roadmap::new());
    }

    #[test]
    fn test_complete_current_heals_gap_before_focus_only() {
        // b is incomplete between completed steps; d stays completed.
        let roadmap = linear(&[("a", true), ("b", false), ("c", true), ("d", true)]);
        let next = complete_current(&roadmap);
        assert_eq!(flags(&next), [true, true, true, true]);

        let gapped = linear(&[("a", false), ("b", false), ("c", true)]);
        assert_eq!(flags(&complete_current(&gapped)), [true, false, true]);
    }

    #[test]
    fn test_focus_at_reopens_last_step_from_all_done() {
        let roadmap = linear(&[("a", true), ("b", true), ("c", true)]);
        let next = focus_at(&roadmap, 2);

        assert_eq!(flags(&next), [true, true, false]);
        assert_eq!(current(&next).as_deref(), Some("c"));
    }

    #[test]
    fn test_focus_at_clamps_and_rewrites_frontier() {
        let roadmap = linear(&[("a", false), ("b", true), ("c", false)]);

        assert_eq!(flags(&focus_at(&roadmap, 0)), [false, false, false]);
        assert_eq!(flags(&focus_at(&roadmap, 1)), [true, false, false]);
        assert_eq!(flags(&focus_at(&roadmap, 99)), [true, true, false]);
        assert_eq!(focus_at(&Roadmap::new(), 3), Roadmap::new());
    }

    #[test]
    fn test_focus_at_crosses_phases() {
        let next = focus_at(&two_by_two(), 3);
        assert_eq!(flags(&next), [true, true, true, false]);
        let back = focus_at(&next, 1);
        assert_eq!(flags(&back), [true, false, false, false]);
    }

    #[test]
    fn test_remove_focused_step_selects_next_incomplete() {
        let roadmap = linear(&[("a", true), ("b", false), ("c", false)]);
        let next = remove_step(&roadmap, &"b".into());

        let ids: Vec<&str> = next.steps().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(flags(&next), [true, false]);
        assert_eq!(current(&next).as_deref(), Some("c"));
    }

    #[test]
    fn test_remove_last_focused_step_ends_all_done() {
        let roadmap = linear(&[("a", true), ("b", false)]);
        let next = remove_step(&roadmap, &"b".into());
        assert_eq!(focus_state(&next), FocusState::AllDone);
    }

    #[test]
    fn test_remove_only_step_leaves_empty_phase() {
        let roadmap = linear(&[("a", false)]);
        let next = remove_step(&roadmap, &"a".into());

        assert_eq!(focus_state(&next), FocusState::Empty);
        assert_eq!(next.phases.len(), 1);
        assert!(next.phases[0].steps.is_empty());
    }

    #[test]
    fn test_remove_unknown_step_is_noop() {
        let roadmap = two_by_two();
        assert_eq!(remove_step(&roadmap, &"nope".into()), roadmap);
    }

    #[test]
    fn test_remove_non_focused_step_keeps_flags() {
        let roadmap = linear(&[("a", true), ("b", false), ("c", false)]);
        let next = remove_step(&roadmap, &"a".into());
        assert_eq!(flags(&next), [false, false]);
        assert_eq!(current(&next).as_deref(), Some("b"));
    }

    #[test]
    fn test_insert_after_current_keeps_focus() {
        let roadmap = linear(&[("a", true), ("b", false)]);
        let (next, id) = insert_step(&roadmap, &"b".into(), Placement::After);
        let id = id.unwrap();

        let ids: Vec<&str> = next.steps().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", id.as_str()]);
        assert_eq!(current(&next).as_deref(), Some("b"));
        let inserted = next.step(&id).unwrap();
        assert_eq!(inserted.text, NEW_STEP_TEXT);
        assert!(!inserted.completed);
    }

    #[test]
    fn test_insert_before_current_keeps_focus_by_id() {
        let roadmap = linear(&[("a", true), ("b", false), ("c", false)]);
        let (next, id) = insert_step(&roadmap, &"b".into(), Placement::Before);

        assert_eq!(current(&next).as_deref(), Some("b"));
        assert!(next.step(&id.unwrap()).unwrap().completed);
        assert_eq!(flags(&next), [true, true, false, false]);
    }

    #[test]
    fn test_insert_at_end_of_all_done_reopens() {
        let roadmap = linear(&[("a", true), ("b", true)]);
        let (next, id) = insert_step(&roadmap, &"b".into(), Placement::After);
        assert_eq!(focus_state(&next).current(), id.as_ref());
    }

    #[test]
    fn test_insert_into_middle_of_all_done_focuses_new_step() {
        let roadmap = linear(&[("a", true), ("b", true)]);
        let (next, id) = insert_step(&roadmap, &"a".into(), Placement::After);
        let id = id.unwrap();

        assert!(!all_done(&next));
        assert_eq!(focus_state(&next).current(), Some(&id));
        assert!(!next.step(&id).unwrap().completed);
        assert_eq!(flags(&next), [true, false, true]);
    }

    #[test]
    fn test_insert_with_unknown_anchor_is_noop() {
        let roadmap = two_by_two();
        let (next, id) = insert_step(&roadmap, &"ghost".into(), Placement::Before);
        assert_eq!(next, roadmap);
        assert!(id.is_none());
    }

    #[test]
    fn test_insert_stays_within_anchor_phase() {
        let (next, id) = insert_step(&two_by_two(), &"c".into(), Placement::Before);
        assert_eq!(next.phases[1].steps[0].id, id.unwrap());
        assert_eq!(next.phases[0].steps.len(), 2);
    }

    #[test]
    fn test_append_step_reenters_empty_roadmap() {
        let (next, id) = append_step(&Roadmap::new(), None, "First");
        let id = id.unwrap();

        assert_eq!(next.phases.len(), 1);
        assert_eq!(next.phases[0].name, FALLBACK_PHASE_NAME);
        assert_eq!(focus_state(&next).current(), Some(&id));
    }

    #[test]
    fn test_append_to_named_phase() {
        let (next, id) = append_step(&two_by_two(), Some(&"p1".into()), "Extra");
        assert_eq!(next.phases[0].steps[2].id, id.unwrap());
        assert_eq!(next.phases[0].steps[2].text, "Extra");

        let (unchanged, none) = append_step(&two_by_two(), Some(&"zz".into()), "Extra");
        assert_eq!(unchanged, two_by_two());
        assert!(none.is_none());
    }

    #[test]
    fn test_swap_keeps_ids_and_focus() {
        let roadmap = focus_at(&two_by_two(), 1);
        let next = swap_steps(&roadmap, &"a".into(), &"d".into());

        let ids: Vec<&str> = next.steps().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["d", "b", "c", "a"]);
        assert_eq!(current(&next).as_deref(), Some("b"));
        assert_eq!(flags(&next), [true, false, false, false]);
    }

    #[test]
    fn test_swap_with_missing_step_is_noop() {
        let roadmap = two_by_two();
        assert_eq!(swap_steps(&roadmap, &"a".into(), &"zz".into()), roadmap);
    }

    #[test]
    fn test_text_and_phase_edits() {
        let roadmap = set_step_text(&two_by_two(), &"a".into(), "");
        assert_eq!(roadmap.step(&"a".into()).unwrap().text, "");

        let (roadmap, phase_id) = add_phase(&roadmap, "Three");
        let roadmap = rename_phase(&roadmap, &phase_id, "Third");
        assert_eq!(roadmap.phase(&phase_id).unwrap().name, "Third");
        assert!(roadmap.phase(&phase_id).unwrap().steps.is_empty());
    }
}
