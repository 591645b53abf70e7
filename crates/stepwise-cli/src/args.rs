use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::Timestamp;
use stepwise_core::{params::*, DEFAULT_PROJECT};

/// Stepwise keeps a roadmap of phases and steps, always focused on the first
/// unfinished step.
///
/// Steps live on a canvas where they can be moved and dragged; thoughts and
/// reminders can be attached to any step. Everything is stored per project in
/// a local SQLite database.
#[derive(Parser)]
#[command(version, about, name = "stepwise")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/stepwise/stepwise.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Project whose roadmap to operate on
    #[arg(long, short, global = true, default_value = DEFAULT_PROJECT)]
    pub project: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, the roadmap is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the roadmap with its current step
    #[command(alias = "s")]
    Show,
    /// Complete the current step and advance the focus
    #[command(alias = "n")]
    Next,
    /// Make the step at a position current
    #[command(alias = "f")]
    Focus(FocusArgs),
    /// Insert a new step before or after another one
    #[command(alias = "i")]
    Insert(InsertArgs),
    /// Append a step to the end of a phase
    #[command(alias = "a")]
    Append(AppendArgs),
    /// Remove a step
    #[command(aliases = ["rm", "d"])]
    Remove(StepIdArgs),
    /// Replace a step's text
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Swap two steps in roadmap order
    #[command(alias = "sw")]
    Swap(SwapArgs),
    /// Manage phases
    #[command(alias = "p")]
    Phase {
        #[command(subcommand)]
        command: PhaseCommands,
    },
    /// Replace the roadmap with a JSON document
    Import(ImportArgs),
    /// List projects that have a stored roadmap
    Projects,
    /// Delete the project's roadmap, thoughts and view
    DeleteProject,
    /// Show resolved step positions and the canvas size
    Layout,
    /// Show the connections drawn between consecutive steps
    Connections,
    /// Move a step to an absolute canvas position
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Drag a step by an offset
    Drag(DragArgs),
    /// Show the current zoom and pan
    View,
    /// Set the zoom factor
    #[command(alias = "z")]
    Zoom(ZoomArgs),
    /// Pan the canvas by an offset
    Pan(PanArgs),
    /// Reset the zoom and center the roadmap in a viewport
    #[command(alias = "center")]
    ResetView(ViewportArgs),
    /// Manage thoughts and reminders
    #[command(alias = "t")]
    Thought {
        #[command(subcommand)]
        command: ThoughtCommands,
    },
}

// Each argument struct converts into its core parameter structure; the
// project comes from the global `--project` flag.

#[derive(ClapArgs)]
pub struct FocusArgs {
    /// 1-based position as shown by `show`; clamped to the last step
    pub position: usize,
}

impl FocusArgs {
    pub fn into_params(self, project: String) -> FocusAt {
        FocusAt {
            project,
            index: self.position.saturating_sub(1),
        }
    }
}

#[derive(ClapArgs)]
pub struct InsertArgs {
    /// Step to insert next to
    pub anchor: String,
    /// Insert before the anchor instead of after it
    #[arg(long, short)]
    pub before: bool,
    /// Text of the new step
    #[arg(long, short)]
    pub text: Option<String>,
}

impl InsertArgs {
    pub fn into_params(self, project: String) -> InsertStep {
        InsertStep {
            project,
            anchor: self.anchor,
            before: self.before,
            text: self.text,
        }
    }
}

#[derive(ClapArgs)]
pub struct AppendArgs {
    /// Text of the new step
    pub text: String,
    /// Phase to append to. Defaults to the last phase
    #[arg(long)]
    pub phase: Option<String>,
}

impl AppendArgs {
    pub fn into_params(self, project: String) -> AppendStep {
        AppendStep {
            project,
            phase_id: self.phase,
            text: self.text,
        }
    }
}

#[derive(ClapArgs)]
pub struct StepIdArgs {
    /// Step ID
    pub id: String,
}

impl StepIdArgs {
    pub fn into_params(self, project: String) -> StepRef {
        StepRef {
            project,
            step_id: self.id,
        }
    }
}

#[derive(ClapArgs)]
pub struct EditArgs {
    /// Step ID
    pub id: String,
    /// New text
    pub text: String,
}

impl EditArgs {
    pub fn into_params(self, project: String) -> EditStep {
        EditStep {
            project,
            step_id: self.id,
            text: self.text,
        }
    }
}

#[derive(ClapArgs)]
pub struct SwapArgs {
    pub first: String,
    pub second: String,
}

impl SwapArgs {
    pub fn into_params(self, project: String) -> SwapSteps {
        SwapSteps {
            project,
            first: self.first,
            second: self.second,
        }
    }
}

#[derive(Subcommand)]
pub enum PhaseCommands {
    /// Add an empty phase at the end of the roadmap
    #[command(alias = "a")]
    Add(AddPhaseArgs),
    /// Rename a phase
    #[command(alias = "r")]
    Rename(RenamePhaseArgs),
}

#[derive(ClapArgs)]
pub struct AddPhaseArgs {
    pub name: String,
}

impl AddPhaseArgs {
    pub fn into_params(self, project: String) -> AddPhase {
        AddPhase {
            project,
            name: self.name,
        }
    }
}

#[derive(ClapArgs)]
pub struct RenamePhaseArgs {
    /// Phase ID
    pub id: String,
    pub name: String,
}

impl RenamePhaseArgs {
    pub fn into_params(self, project: String) -> RenamePhase {
        RenamePhase {
            project,
            phase_id: self.id,
            name: self.name,
        }
    }
}

#[derive(ClapArgs)]
pub struct ImportArgs {
    /// JSON file holding phases, or a legacy flat list of steps
    pub file: PathBuf,
}

#[derive(ClapArgs)]
pub struct MoveArgs {
    /// Step ID
    pub id: String,
    #[arg(allow_negative_numbers = true)]
    pub x: f64,
    #[arg(allow_negative_numbers = true)]
    pub y: f64,
}

impl MoveArgs {
    pub fn into_params(self, project: String) -> MoveStep {
        MoveStep {
            project,
            step_id: self.id,
            x: self.x,
            y: self.y,
        }
    }
}

#[derive(ClapArgs)]
pub struct DragArgs {
    /// Step ID
    pub id: String,
    #[arg(allow_negative_numbers = true)]
    pub dx: f64,
    #[arg(allow_negative_numbers = true)]
    pub dy: f64,
}

impl DragArgs {
    pub fn into_params(self, project: String) -> DragStep {
        DragStep {
            project,
            step_id: self.id,
            dx: self.dx,
            dy: self.dy,
        }
    }
}

#[derive(ClapArgs)]
pub struct ZoomArgs {
    /// Zoom factor; clamped into the configured range
    pub zoom: f64,
}

#[derive(ClapArgs)]
pub struct PanArgs {
    #[arg(allow_negative_numbers = true)]
    pub dx: f64,
    #[arg(allow_negative_numbers = true)]
    pub dy: f64,
}

#[derive(ClapArgs)]
pub struct ViewportArgs {
    /// Viewport width in pixels
    pub width: f64,
    /// Viewport height in pixels
    pub height: f64,
}

impl ViewportArgs {
    pub fn into_params(self, project: String) -> Viewport {
        Viewport {
            project,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Subcommand)]
pub enum ThoughtCommands {
    /// Capture a thought
    #[command(alias = "a")]
    Add(AddThoughtArgs),
    /// List thoughts
    #[command(aliases = ["l", "ls"])]
    List(ListThoughtsArgs),
    /// Show one thought
    #[command(alias = "s")]
    Show(ThoughtIdArgs),
    /// Link a thought to a step
    Link(LinkThoughtArgs),
    /// Make a thought roadmap-level
    Unlink(ThoughtIdArgs),
    /// Schedule a reminder for a thought
    Schedule(ScheduleArgs),
    /// Dismiss a thought's reminder
    Dismiss(ThoughtIdArgs),
    /// List reminders that are due
    Due(DueArgs),
    /// List thoughts linked to steps that no longer exist
    Dangling,
    /// Unlink thoughts whose step no longer exists
    Clean,
    /// Delete a thought
    #[command(aliases = ["d", "rm"])]
    Delete(ThoughtIdArgs),
}

#[derive(ClapArgs)]
pub struct AddThoughtArgs {
    pub text: String,
    /// Step to link the thought to
    #[arg(long)]
    pub step: Option<String>,
    /// Reminder time, e.g. 2025-03-01T09:00:00Z
    #[arg(long)]
    pub at: Option<Timestamp>,
}

impl AddThoughtArgs {
    pub fn into_params(self, project: String) -> AddThought {
        AddThought {
            project,
            text: self.text,
            step_id: self.step,
            scheduled_at: self.at,
        }
    }
}

#[derive(ClapArgs)]
pub struct ListThoughtsArgs {
    /// Only thoughts linked to this step
    #[arg(long)]
    pub step: Option<String>,
}

impl ListThoughtsArgs {
    pub fn into_params(self, project: String) -> ListThoughts {
        ListThoughts {
            project,
            step_id: self.step,
        }
    }
}

#[derive(ClapArgs)]
pub struct ThoughtIdArgs {
    /// Thought ID
    pub id: String,
}

impl ThoughtIdArgs {
    pub fn into_params(self, project: String) -> ThoughtRef {
        ThoughtRef {
            project,
            thought_id: self.id,
        }
    }
}

#[derive(ClapArgs)]
pub struct LinkThoughtArgs {
    /// Thought ID
    pub id: String,
    /// Step ID
    pub step: String,
}

impl LinkThoughtArgs {
    pub fn into_params(self, project: String) -> LinkThought {
        LinkThought {
            project,
            thought_id: self.id,
            step_id: self.step,
        }
    }
}

#[derive(ClapArgs)]
pub struct ScheduleArgs {
    /// Thought ID
    pub id: String,
    /// Reminder time, e.g. 2025-03-01T09:00:00Z
    pub at: Timestamp,
}

impl ScheduleArgs {
    pub fn into_params(self, project: String) -> ScheduleThought {
        ScheduleThought {
            project,
            thought_id: self.id,
            at: self.at,
        }
    }
}

#[derive(ClapArgs)]
pub struct DueArgs {
    /// Reference time instead of now
    #[arg(long)]
    pub now: Option<Timestamp>,
}

impl DueArgs {
    pub fn into_params(self, project: String) -> DueReminders {
        DueReminders {
            project,
            now: self.now,
        }
    }
}
