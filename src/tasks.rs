//! Caller-facing task vocabulary.
//!
//! These types cross the service boundary in both directions: the UI
//! submits [`TaskForm`]s and receives [`Task`] projections. Neither is
//! owned by the store; translation to and from the internal item
//! vocabulary happens inside the service layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task as shown to the user: an item projected into the external
/// vocabulary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub kind: TaskKind,
    pub status: TaskStatus,
    pub due: Option<DateTime<Utc>>,
    pub description: String,
    pub order: u64,
}

/// User input for creating a task or category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub due: Option<DateTime<Utc>>,
    pub description: String,
    pub kind: TaskKind,
    pub parent_id: i64,
    pub order: u64,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    #[default]
    Category,
    Task,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Normal,
    Completed,
}

impl TaskStatus {
    /// The opposite status.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Normal => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Normal,
        }
    }
}
