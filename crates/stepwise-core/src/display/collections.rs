//! Collection wrappers with empty-collection handling.

use std::fmt;

use crate::{canvas::Connection, models::Thought};

/// Newtype wrapper for displaying a list of thoughts.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use stepwise_core::{display::Thoughts, models::Thought};
///
/// let thoughts = Thoughts(vec![Thought::new("Ask about budget", Timestamp::now())]);
/// assert!(thoughts.to_string().contains("Ask about budget"));
/// assert_eq!(Thoughts(vec![]).to_string(), "No thoughts found.\n");
/// ```
pub struct Thoughts(pub Vec<Thought>);

impl Thoughts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Thought> {
        self.0.iter()
    }
}

impl IntoIterator for Thoughts {
    type Item = Thought;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Thoughts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No thoughts found.")
        } else {
            for thought in &self.0 {
                write!(f, "{thought}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying connection curves.
pub struct Connections(pub Vec<Connection>);

impl fmt::Display for Connections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No connections.")
        } else {
            writeln!(f, "# Connections")?;
            writeln!(f)?;
            for connection in &self.0 {
                write!(f, "{connection}")?;
            }
            Ok(())
        }
    }
}
