//! Linear projection of a roadmap.
//!
//! Every function here is a pure read over a roadmap snapshot. Results are
//! never cached: inserts, removals and swaps shift every later index, so
//! callers re-run the projection after each mutation and look steps up by id.

use crate::models::{FocusState, LinearRef, Progress, Roadmap, StepId};

/// Linearizes the roadmap: phase order, then step order within each phase.
pub fn flatten(roadmap: &Roadmap) -> Vec<LinearRef> {
    let mut refs = Vec::with_capacity(roadmap.step_count());
    for (phase_index, phase) in roadmap.phases.iter().enumerate() {
        for (step_index, step) in phase.steps.iter().enumerate() {
            refs.push(LinearRef {
                phase_index,
                step_index,
                linear_index: refs.len(),
                phase_id: phase.id.clone(),
                step_id: step.id.clone(),
                completed: step.completed,
            });
        }
    }
    refs
}

/// First step in linear order that is not completed.
///
/// Whatever follows that step is ignored, so a corrupted (gapped) frontier
/// still yields a sensible current step.
pub fn first_incomplete(roadmap: &Roadmap) -> Option<LinearRef> {
    flatten(roadmap).into_iter().find(|r| !r.completed)
}

/// True iff the roadmap has at least one step and all of them are completed.
pub fn all_done(roadmap: &Roadmap) -> bool {
    !roadmap.is_empty() && roadmap.steps().all(|s| s.completed)
}

/// Linear reference of the step with the given id.
pub fn locate(roadmap: &Roadmap, id: &StepId) -> Option<LinearRef> {
    flatten(roadmap).into_iter().find(|r| &r.step_id == id)
}

/// The focus pointer: linear index of the current step, or the step count
/// when there is none.
pub fn focus_index(roadmap: &Roadmap) -> usize {
    first_incomplete(roadmap)
        .map(|r| r.linear_index)
        .unwrap_or_else(|| roadmap.step_count())
}

pub fn focus_state(roadmap: &Roadmap) -> FocusState {
    if roadmap.is_empty() {
        return FocusState::Empty;
    }
    match first_incomplete(roadmap) {
        Some(current) => FocusState::HasFocus(current),
        None => FocusState::AllDone,
    }
}

pub fn progress(roadmap: &Roadmap) -> Progress {
    Progress {
        completed: roadmap.steps().filter(|s| s.completed).count(),
        total: roadmap.step_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Phase, Step};

    fn roadmap(phases: &[&[(&str, bool)]]) -> Roadmap {
        Roadmap::from_phases(
            phases
                .iter()
                .enumerate()
                .map(|(i, steps)| {
                    Phase::new(format!("p{i}"), format!("Phase {i}")).with_steps(
                        steps
                            .iter()
                            .map(|(id, done)| Step::new(*id, id.to_uppercase()).completed(*done))
                            .collect(),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_flatten_orders_by_phase_then_step() {
        let r = roadmap(&[&[("a", true), ("b", false)], &[], &[("c", false)]]);
        let refs = flatten(&r);

        let ids: Vec<&str> = refs.iter().map(|r| r.step_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(refs[2].phase_index, 2);
        assert_eq!(refs[2].step_index, 0);
        assert_eq!(refs[2].linear_index, 2);
        assert_eq!(refs[2].phase_id.as_str(), "p2");
    }

    #[test]
    fn test_flatten_empty_roadmap() {
        assert!(flatten(&Roadmap::new()).is_empty());
        assert!(first_incomplete(&Roadmap::new()).is_none());
        assert!(!all_done(&Roadmap::new()));
        assert_eq!(focus_state(&Roadmap::new()), FocusState::Empty);
    }

    #[test]
    fn test_first_incomplete_tolerates_gaps() {
        let r = roadmap(&[&[("a", false), ("b", true), ("c", true)]]);
        assert_eq!(first_incomplete(&r).unwrap().step_id.as_str(), "a");
        assert_eq!(focus_index(&r), 0);
    }

    #[test]
    fn test_all_done_and_focus_state() {
        let done = roadmap(&[&[("a", true)], &[("b", true)]]);
        assert!(all_done(&done));
        assert_eq!(focus_state(&done), FocusState::AllDone);
        assert_eq!(focus_index(&done), 2);

        let partial = roadmap(&[&[("a", true)], &[("b", false)]]);
        assert!(!all_done(&partial));
        assert_eq!(focus_state(&partial).current().map(StepId::as_str), Some("b"));
    }

    #[test]
    fn test_locate_and_progress() {
        let r = roadmap(&[&[("a", true)], &[("b", false), ("c", false)]]);
        assert_eq!(locate(&r, &"c".into()).unwrap().linear_index, 2);
        assert!(locate(&r, &"zz".into()).is_none());
        assert_eq!(
            progress(&r),
            Progress {
                completed: 1,
                total: 3
            }
        );
    }
}
