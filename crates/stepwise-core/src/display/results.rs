//! Result wrappers for create, update and delete operations.

use std::fmt;

use crate::models::{Phase, Step, Thought};

/// Names the kind of resource in result messages.
pub trait Resource: fmt::Display {
    const KIND: &'static str;

    fn resource_id(&self) -> String;
}

impl Resource for Step {
    const KIND: &'static str = "step";

    fn resource_id(&self) -> String {
        self.id.to_string()
    }
}

impl Resource for Phase {
    const KIND: &'static str = "phase";

    fn resource_id(&self) -> String {
        self.id.to_string()
    }
}

impl Resource for Thought {
    const KIND: &'static str = "thought";

    fn resource_id(&self) -> String {
        self.id.to_string()
    }
}

/// Wrapper type for displaying the result of create operations.
///
/// ```rust
/// use stepwise_core::{display::CreateResult, models::Step};
///
/// let output = CreateResult::new(Step::new("s7", "Ship it")).to_string();
/// assert!(output.starts_with("Created step with ID: s7"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.resource_id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with an
/// optional list of what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Resource> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.resource_id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted {} with ID: {}", T::KIND, self.resource.resource_id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
