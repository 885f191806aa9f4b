//! Task card type

use super::ids::TaskId;
use serde::{Deserialize, Serialize};

/// A task/card on the kanban board.
///
/// The id is fixed at creation. Which column a task sits in is not stored on
/// the task itself; it is the column's `task_ids` that owns ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
}

impl Task {
    /// Create a new task
    pub fn new(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Case-insensitive substring match against the task content.
    ///
    /// An empty query matches every task.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.content
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}
