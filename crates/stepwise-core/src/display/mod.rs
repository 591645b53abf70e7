//! Markdown formatting for roadmaps, thoughts and canvas state.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context such as "Created step with ID" or an empty
//! collection message. The CLI renders the resulting markdown with
//! `termimad`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Roadmap, Step, │───▶│ (CreateResult,  │───▶│     output      │
//! │  Thought, ...)  │    │  Thoughts, ...) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`Thoughts`] and [`Connections`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: [`LocalDateTime`]
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use stepwise_core::{display::OperationStatus, models::Roadmap};
//!
//! let roadmap = Roadmap::template();
//! assert!(roadmap.to_string().contains("## Discover"));
//!
//! print!("{}", OperationStatus::success("Reminder dismissed"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Connections, Thoughts};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, Resource, UpdateResult};
pub use status::OperationStatus;
