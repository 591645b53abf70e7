//! Thought and reminder operations for the Planner.

use jiff::Timestamp;
use log::debug;

use super::{validate_project, Planner};
use crate::{
    error::{Result, StepwiseError},
    models::{Roadmap, StepId, Thought, ThoughtId},
    params::{
        AddThought, DueReminders, LinkThought, ListThoughts, Project, ScheduleThought, ThoughtRef,
    },
    thoughts,
};

impl Planner {
    /// Creates a thought, optionally linked to an existing step and
    /// scheduled as a reminder.
    pub async fn add_thought(&self, params: &AddThought) -> Result<Thought> {
        let project = validate_project(&params.project)?;
        let text = params.text.clone();
        let step_id = params.step_id.as_deref().map(StepId::from);
        let scheduled_at = params.scheduled_at;

        self.with_store(move |store| {
            let roadmap = store.roadmap(&project)?;
            let mut thought = Thought::new(text, Timestamp::now());
            if let Some(step_id) = step_id {
                require_step(&roadmap, &step_id)?;
                thought.link(step_id);
            }
            if let Some(at) = scheduled_at {
                thought.schedule(at);
            }

            let mut all = store.thoughts(&project)?;
            all.push(thought.clone());
            store.save_thoughts(&project, &all)?;
            debug!("added thought {} to {project}", thought.id);
            Ok(thought)
        })
        .await
    }

    /// Lists thoughts in creation order, optionally only those linked to
    /// one step.
    pub async fn thoughts(&self, params: &ListThoughts) -> Result<Vec<Thought>> {
        let project = validate_project(&params.project)?;
        let step_id = params.step_id.as_deref().map(StepId::from);

        self.with_store(move |store| {
            let all = store.thoughts(&project)?;
            Ok(match step_id {
                Some(id) => thoughts::thoughts_for_step(&all, &id).cloned().collect(),
                None => all,
            })
        })
        .await
    }

    /// Retrieves one thought.
    pub async fn thought(&self, params: &ThoughtRef) -> Result<Thought> {
        self.update_thought(params, |_, _| Ok(())).await
    }

    /// Links a thought to an existing step, replacing any previous link.
    pub async fn link_thought(&self, params: &LinkThought) -> Result<Thought> {
        let step_id = StepId::from(params.step_id.as_str());
        let target = ThoughtRef {
            project: params.project.clone(),
            thought_id: params.thought_id.clone(),
        };

        self.update_thought(&target, move |thought, roadmap| {
            require_step(roadmap, &step_id)?;
            thought.link(step_id);
            Ok(())
        })
        .await
    }

    /// Turns a thought into a roadmap-level one.
    pub async fn unlink_thought(&self, params: &ThoughtRef) -> Result<Thought> {
        self.update_thought(params, |thought, _| {
            thought.unlink();
            Ok(())
        })
        .await
    }

    /// Schedules the thought's reminder, re-arming it if it was dismissed.
    pub async fn schedule_thought(&self, params: &ScheduleThought) -> Result<Thought> {
        let at = params.at;
        let target = ThoughtRef {
            project: params.project.clone(),
            thought_id: params.thought_id.clone(),
        };

        self.update_thought(&target, move |thought, _| {
            thought.schedule(at);
            Ok(())
        })
        .await
    }

    /// Marks the thought's reminder as handled.
    pub async fn dismiss_reminder(&self, params: &ThoughtRef) -> Result<Thought> {
        self.update_thought(params, |thought, _| {
            thought.dismiss_reminder();
            Ok(())
        })
        .await
    }

    /// Deletes a thought and returns it.
    pub async fn delete_thought(&self, params: &ThoughtRef) -> Result<Thought> {
        let project = validate_project(&params.project)?;
        let id = ThoughtId::from(params.thought_id.as_str());

        self.with_store(move |store| {
            let mut all = store.thoughts(&project)?;
            let index = find_thought(&all, &id)?;
            let removed = all.remove(index);
            store.save_thoughts(&project, &all)?;
            Ok(removed)
        })
        .await
    }

    /// Reminders due at `now` (the current time when unset), earliest first.
    pub async fn due_reminders(&self, params: &DueReminders) -> Result<Vec<Thought>> {
        let project = validate_project(&params.project)?;
        let now = params.now.unwrap_or_else(Timestamp::now);

        self.with_store(move |store| {
            let all = store.thoughts(&project)?;
            Ok(thoughts::due_reminders(&all, now)
                .into_iter()
                .cloned()
                .collect())
        })
        .await
    }

    /// Thoughts whose linked step no longer exists.
    pub async fn dangling_thoughts(&self, params: &Project) -> Result<Vec<Thought>> {
        let project = validate_project(&params.project)?;

        self.with_store(move |store| {
            let roadmap = store.roadmap(&project)?;
            let all = store.thoughts(&project)?;
            Ok(thoughts::dangling(&all, &roadmap).cloned().collect())
        })
        .await
    }

    /// Unlinks every thought whose step no longer exists. Returns how many
    /// were unlinked.
    pub async fn clear_dangling(&self, params: &Project) -> Result<usize> {
        let project = validate_project(&params.project)?;

        self.with_store(move |store| {
            let roadmap = store.roadmap(&project)?;
            let mut all = store.thoughts(&project)?;
            let cleared = thoughts::clear_dangling(&mut all, &roadmap);
            if cleared > 0 {
                store.save_thoughts(&project, &all)?;
            }
            Ok(cleared)
        })
        .await
    }

    /// Loads the thought named by `params`, applies `f` and saves.
    async fn update_thought<F>(&self, params: &ThoughtRef, f: F) -> Result<Thought>
    where
        F: FnOnce(&mut Thought, &Roadmap) -> Result<()> + Send + 'static,
    {
        let project = validate_project(&params.project)?;
        let id = ThoughtId::from(params.thought_id.as_str());

        self.with_store(move |store| {
            let roadmap = store.roadmap(&project)?;
            let mut all = store.thoughts(&project)?;
            let index = find_thought(&all, &id)?;
            let before = all[index].clone();
            f(&mut all[index], &roadmap)?;
            let updated = all[index].clone();
            if updated != before {
                store.save_thoughts(&project, &all)?;
            }
            Ok(updated)
        })
        .await
    }
}

fn find_thought(all: &[Thought], id: &ThoughtId) -> Result<usize> {
    all.iter()
        .position(|t| &t.id == id)
        .ok_or_else(|| StepwiseError::ThoughtNotFound { id: id.to_string() })
}

fn require_step(roadmap: &Roadmap, id: &StepId) -> Result<()> {
    match thoughts::resolve_step(roadmap, id) {
        Some(_) => Ok(()),
        None => Err(StepwiseError::invalid_input("step_id")
            .with_reason(format!("no step with id {id} in this roadmap"))),
    }
}
