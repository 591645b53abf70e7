//! Command handlers that run planner operations and render their results.
//!
//! ```text
//! User Input → Args (clap) → Core Params → Planner → Display → Renderer
//! ```
//!
//! Missing steps, phases or thoughts are reported as errors so the process
//! exits with a failure status.

use std::fs;

use anyhow::{anyhow, Context, Result};
use log::debug;
use stepwise_core::{
    display::{Connections, CreateResult, DeleteResult, OperationStatus, Thoughts, UpdateResult},
    params::{ImportRoadmap, PanBy, Project, SetZoom},
    Planner,
};

use crate::{
    args::{Commands, ImportArgs, PanArgs, PhaseCommands, ThoughtCommands, ZoomArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    project: String,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, project: String) -> Self {
        Self {
            planner,
            renderer,
            project,
        }
    }

    fn project(&self) -> Project {
        Project::new(self.project.clone())
    }

    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        let project = self.project.clone();

        match command {
            Commands::Show => self.show_roadmap().await,
            Commands::Next => {
                let roadmap = self
                    .planner
                    .complete_current(&self.project())
                    .await
                    .context("Failed to complete current step")?;
                self.renderer.render(&roadmap.to_string())
            }
            Commands::Focus(args) => {
                let roadmap = self
                    .planner
                    .focus_at(&args.into_params(project))
                    .await
                    .context("Failed to change focus")?;
                self.renderer.render(&roadmap.to_string())
            }
            Commands::Insert(args) => {
                let params = args.into_params(project);
                let step = self
                    .planner
                    .insert_step(&params)
                    .await
                    .context("Failed to insert step")?
                    .ok_or_else(|| anyhow!("Step with ID {} not found", params.anchor))?;
                self.renderer.render(&CreateResult::new(step).to_string())
            }
            Commands::Append(args) => {
                let params = args.into_params(project);
                let step = self
                    .planner
                    .append_step(&params)
                    .await
                    .context("Failed to append step")?
                    .ok_or_else(|| {
                        anyhow!(
                            "Phase with ID {} not found",
                            params.phase_id.as_deref().unwrap_or_default()
                        )
                    })?;
                self.renderer.render(&CreateResult::new(step).to_string())
            }
            Commands::Remove(args) => {
                let params = args.into_params(project);
                let step = self
                    .planner
                    .remove_step(&params)
                    .await
                    .context("Failed to remove step")?
                    .ok_or_else(|| anyhow!("Step with ID {} not found", params.step_id))?;
                self.renderer.render(&DeleteResult::new(step).to_string())
            }
            Commands::Edit(args) => {
                let params = args.into_params(project);
                let step = self
                    .planner
                    .edit_step(&params)
                    .await
                    .context("Failed to edit step")?
                    .ok_or_else(|| anyhow!("Step with ID {} not found", params.step_id))?;
                let result = UpdateResult::with_changes(step, vec!["Text updated".to_string()]);
                self.renderer.render(&result.to_string())
            }
            Commands::Swap(args) => {
                let roadmap = self
                    .planner
                    .swap_steps(&args.into_params(project))
                    .await
                    .context("Failed to swap steps")?;
                self.renderer.render(&roadmap.to_string())
            }
            Commands::Phase { command } => self.handle_phase_command(command).await,
            Commands::Import(args) => self.import(args).await,
            Commands::Projects => self.list_projects().await,
            Commands::DeleteProject => {
                let deleted = self
                    .planner
                    .delete_project(&self.project())
                    .await
                    .context("Failed to delete project")?;
                let status = if deleted {
                    OperationStatus::success(format!("Deleted project {}", self.project))
                } else {
                    OperationStatus::failure(format!("Project {} has nothing stored", self.project))
                };
                self.renderer.render(&status.to_string())
            }
            Commands::Layout => {
                let layout = self
                    .planner
                    .layout(&self.project())
                    .await
                    .context("Failed to compute layout")?;
                self.renderer.render(&layout.to_string())
            }
            Commands::Connections => {
                let connections = self
                    .planner
                    .connections(&self.project())
                    .await
                    .context("Failed to compute connections")?;
                let output = format!("# Connections\n\n{}", Connections(connections));
                self.renderer.render(&output)
            }
            Commands::Move(args) => {
                let params = args.into_params(project);
                let at = self
                    .planner
                    .move_step(&params)
                    .await
                    .context("Failed to move step")?
                    .ok_or_else(|| anyhow!("Step with ID {} not found", params.step_id))?;
                let status = OperationStatus::success(format!(
                    "Moved step {} to ({:.0}, {:.0})",
                    params.step_id, at.x, at.y
                ));
                self.renderer.render(&status.to_string())
            }
            Commands::Drag(args) => {
                let params = args.into_params(project);
                let at = self
                    .planner
                    .drag_step(&params)
                    .await
                    .context("Failed to drag step")?
                    .ok_or_else(|| anyhow!("Step with ID {} not found", params.step_id))?;
                let status = OperationStatus::success(format!(
                    "Dragged step {} to ({:.0}, {:.0})",
                    params.step_id, at.x, at.y
                ));
                self.renderer.render(&status.to_string())
            }
            Commands::View => {
                let view = self
                    .planner
                    .view(&self.project())
                    .await
                    .context("Failed to load view")?;
                self.renderer.render(&format!("# View\n\n{view}"))
            }
            Commands::Zoom(ZoomArgs { zoom }) => {
                let view = self
                    .planner
                    .set_zoom(&SetZoom { project, zoom })
                    .await
                    .context("Failed to set zoom")?;
                self.renderer.render(&format!("# View\n\n{view}"))
            }
            Commands::Pan(PanArgs { dx, dy }) => {
                let view = self
                    .planner
                    .pan_by(&PanBy { project, dx, dy })
                    .await
                    .context("Failed to pan")?;
                self.renderer.render(&format!("# View\n\n{view}"))
            }
            Commands::ResetView(args) => {
                let view = self
                    .planner
                    .reset_view(&args.into_params(project))
                    .await
                    .context("Failed to reset view")?;
                self.renderer.render(&format!("# View\n\n{view}"))
            }
            Commands::Thought { command } => self.handle_thought_command(command).await,
        }
    }

    pub async fn show_roadmap(&self) -> Result<()> {
        let roadmap = self
            .planner
            .roadmap(&self.project())
            .await
            .context("Failed to load roadmap")?;
        self.renderer.render(&roadmap.to_string())
    }

    async fn list_projects(&self) -> Result<()> {
        let projects = self
            .planner
            .projects()
            .await
            .context("Failed to list projects")?;

        let mut output = String::from("# Projects\n\n");
        if projects.is_empty() {
            output.push_str("No projects found.\n");
        }
        for name in &projects {
            output.push_str(&format!("- {name}\n"));
        }
        self.renderer.render(&output)
    }

    async fn import(&self, args: ImportArgs) -> Result<()> {
        let json = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        debug!("importing {} bytes from {}", json.len(), args.file.display());

        let roadmap = self
            .planner
            .import_roadmap(&ImportRoadmap {
                project: self.project.clone(),
                json,
            })
            .await
            .context("Failed to import roadmap")?;

        let status = OperationStatus::success(format!(
            "Imported {} steps into {}",
            roadmap.step_count(),
            self.project
        ));
        self.renderer.render(&format!("{status}\n{roadmap}"))
    }

    async fn handle_phase_command(&self, command: PhaseCommands) -> Result<()> {
        let project = self.project.clone();

        match command {
            PhaseCommands::Add(args) => {
                let phase = self
                    .planner
                    .add_phase(&args.into_params(project))
                    .await
                    .context("Failed to add phase")?;
                self.renderer.render(&CreateResult::new(phase).to_string())
            }
            PhaseCommands::Rename(args) => {
                let params = args.into_params(project);
                let phase = self
                    .planner
                    .rename_phase(&params)
                    .await
                    .context("Failed to rename phase")?
                    .ok_or_else(|| anyhow!("Phase with ID {} not found", params.phase_id))?;
                let result = UpdateResult::with_changes(
                    phase,
                    vec![format!("Renamed to \"{}\"", params.name)],
                );
                self.renderer.render(&result.to_string())
            }
        }
    }

    async fn handle_thought_command(&self, command: ThoughtCommands) -> Result<()> {
        let project = self.project.clone();

        match command {
            ThoughtCommands::Add(args) => {
                let thought = self
                    .planner
                    .add_thought(&args.into_params(project))
                    .await
                    .context("Failed to add thought")?;
                self.renderer.render(&CreateResult::new(thought).to_string())
            }
            ThoughtCommands::List(args) => {
                let thoughts = self
                    .planner
                    .thoughts(&args.into_params(project))
                    .await
                    .context("Failed to list thoughts")?;
                let output = format!("# Thoughts\n\n{}", Thoughts(thoughts));
                self.renderer.render(&output)
            }
            ThoughtCommands::Show(args) => {
                let thought = self
                    .planner
                    .thought(&args.into_params(project))
                    .await
                    .context("Failed to get thought")?;
                self.renderer.render(&thought.to_string())
            }
            ThoughtCommands::Link(args) => {
                let params = args.into_params(project);
                let thought = self
                    .planner
                    .link_thought(&params)
                    .await
                    .context("Failed to link thought")?;
                let result = UpdateResult::with_changes(
                    thought,
                    vec![format!("Linked to step {}", params.step_id)],
                );
                self.renderer.render(&result.to_string())
            }
            ThoughtCommands::Unlink(args) => {
                let thought = self
                    .planner
                    .unlink_thought(&args.into_params(project))
                    .await
                    .context("Failed to unlink thought")?;
                let result =
                    UpdateResult::with_changes(thought, vec!["Unlinked from its step".to_string()]);
                self.renderer.render(&result.to_string())
            }
            ThoughtCommands::Schedule(args) => {
                let thought = self
                    .planner
                    .schedule_thought(&args.into_params(project))
                    .await
                    .context("Failed to schedule reminder")?;
                let result =
                    UpdateResult::with_changes(thought, vec!["Reminder scheduled".to_string()]);
                self.renderer.render(&result.to_string())
            }
            ThoughtCommands::Dismiss(args) => {
                let params = args.into_params(project);
                self.planner
                    .dismiss_reminder(&params)
                    .await
                    .context("Failed to dismiss reminder")?;
                let status = OperationStatus::success(format!(
                    "Dismissed reminder of thought {}",
                    params.thought_id
                ));
                self.renderer.render(&status.to_string())
            }
            ThoughtCommands::Due(args) => {
                let due = self
                    .planner
                    .due_reminders(&args.into_params(project))
                    .await
                    .context("Failed to query reminders")?;
                let output = format!("# Due reminders\n\n{}", Thoughts(due));
                self.renderer.render(&output)
            }
            ThoughtCommands::Dangling => {
                let dangling = self
                    .planner
                    .dangling_thoughts(&self.project())
                    .await
                    .context("Failed to find dangling thoughts")?;
                let output = format!("# Dangling thoughts\n\n{}", Thoughts(dangling));
                self.renderer.render(&output)
            }
            ThoughtCommands::Clean => {
                let cleared = self
                    .planner
                    .clear_dangling(&self.project())
                    .await
                    .context("Failed to clean thoughts")?;
                let status = OperationStatus::success(format!("Unlinked {cleared} thoughts"));
                self.renderer.render(&status.to_string())
            }
            ThoughtCommands::Delete(args) => {
                let thought = self
                    .planner
                    .delete_thought(&args.into_params(project))
                    .await
                    .context("Failed to delete thought")?;
                self.renderer.render(&DeleteResult::new(thought).to_string())
            }
        }
    }
}
