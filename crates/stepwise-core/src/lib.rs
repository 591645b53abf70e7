//! Core library for the Stepwise roadmap planner.
//!
//! A roadmap is a list of phases holding steps. Reading the steps in order
//! gives a single linear sequence, and the roadmap's progress is one focus
//! pointer into it: every step before the pointer is completed, the step at
//! it is the current one. Each step also has a free position on a spatial
//! canvas, and free-form thoughts can be attached to steps or to the roadmap.
//!
//! # Layers
//!
//! - **Engine** ([`flatten`], [`focus`], [`canvas`], [`thoughts`]): pure,
//!   total functions from one roadmap snapshot to the next. They never fail
//!   and never touch storage.
//! - **Migration** ([`migrate`]): reads current and legacy persisted shapes.
//! - **Storage** ([`db`]): a SQLite key-value store of JSON documents.
//! - **Facade** ([`planner`]): async load, transition, save.
//! - **Presentation** ([`display`]): markdown `Display` implementations.
//!
//! # Quick Start
//!
//! ```rust
//! use stepwise_core::{flatten::focus_state, focus, models::Roadmap, FocusState};
//!
//! let roadmap = Roadmap::template();
//! let roadmap = focus::complete_current(&roadmap);
//!
//! match focus_state(&roadmap) {
//!     FocusState::HasFocus(current) => assert_eq!(current.linear_index, 1),
//!     other => panic!("unexpected state {other:?}"),
//! }
//! ```
//!
//! With persistence:
//!
//! ```rust,no_run
//! use stepwise_core::{params::Project, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("stepwise.db"))
//!     .build()
//!     .await?;
//!
//! let roadmap = planner.complete_current(&Project::default()).await?;
//! println!("{roadmap}");
//! # Ok(())
//! # }
//! ```

pub mod canvas;
pub mod db;
pub mod display;
pub mod error;
pub mod flatten;
pub mod focus;
pub mod migrate;
pub mod models;
pub mod params;
pub mod planner;
pub mod thoughts;

// Re-export commonly used types
pub use canvas::CanvasConfig;
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, Thoughts, UpdateResult};
pub use error::{Result, StepwiseError};
pub use models::{
    FocusState, LinearRef, Phase, PhaseId, Point, Position, Progress, Roadmap, Size, Step,
    StepId, Thought, ThoughtId, ViewState,
};
pub use params::DEFAULT_PROJECT;
pub use planner::{Planner, PlannerBuilder};
