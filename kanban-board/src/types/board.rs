//! Board-level types: BoardState and Column

use super::ids::{ColumnId, TaskId};
use super::task::Task;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// A column defines a workflow stage and owns the order of its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Ordered task references. No duplicates; order is display order.
    pub task_ids: Vec<TaskId>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    /// Set the task order
    pub fn with_tasks<I, T>(mut self, task_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        self.task_ids = task_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Position of a task within this column
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }

    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }
}

/// The full kanban state: tasks, columns and column display order.
///
/// A `BoardState` is never edited once it is shared; every transition builds
/// a new value so that older snapshots held by the history stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub tasks: BTreeMap<TaskId, Task>,
    pub columns: BTreeMap<ColumnId, Column>,
    /// Left-to-right display order of columns
    pub column_order: Vec<ColumnId>,
}

impl BoardState {
    /// Build a board from its parts, ordering columns as given
    pub fn new(tasks: Vec<Task>, columns: Vec<Column>) -> Self {
        let column_order = columns.iter().map(|c| c.id.clone()).collect();
        Self {
            tasks: tasks.into_iter().map(|t| (t.id.clone(), t)).collect(),
            columns: columns.into_iter().map(|c| (c.id.clone(), c)).collect(),
            column_order,
        }
    }

    /// An empty board with no columns or tasks
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// The default board used when no valid snapshot exists
    pub fn seed() -> Self {
        Self::new(
            vec![
                Task::new("task-1", "Task One"),
                Task::new("task-2", "Task Two"),
                Task::new("task-3", "Task Three"),
            ],
            vec![
                Column::new("column-1", "To Do").with_tasks(["task-1", "task-2"]),
                Column::new("column-2", "In Progress").with_tasks(["task-3"]),
            ],
        )
    }

    /// Look up a column by id
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Look up a task by id
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Columns in display order. Ids missing from `columns` are skipped.
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id))
    }

    /// The column currently holding a task
    pub fn column_of(&self, task_id: &TaskId) -> Option<&Column> {
        self.columns
            .values()
            .find(|c| c.task_ids.contains(task_id))
    }

    /// Tasks present in `tasks` but referenced by no column
    pub fn orphaned_tasks(&self) -> Vec<&Task> {
        let referenced: HashSet<&TaskId> = self
            .columns
            .values()
            .flat_map(|c| c.task_ids.iter())
            .collect();
        self.tasks
            .values()
            .filter(|t| !referenced.contains(&t.id))
            .collect()
    }

    /// Check all board invariants
    pub fn is_consistent(&self) -> bool {
        self.consistency_violations().is_empty()
    }

    /// Describe every broken invariant. Empty means the board is consistent.
    pub fn consistency_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        for (key, task) in &self.tasks {
            if &task.id != key {
                violations.push(format!("task stored under '{}' has id '{}'", key, task.id));
            }
        }

        for (key, column) in &self.columns {
            if &column.id != key {
                violations.push(format!(
                    "column stored under '{}' has id '{}'",
                    key, column.id
                ));
            }
        }

        let mut seen_columns = HashSet::new();
        for id in &self.column_order {
            if !self.columns.contains_key(id) {
                violations.push(format!("column order references unknown column '{}'", id));
            }
            if !seen_columns.insert(id) {
                violations.push(format!("column '{}' appears twice in column order", id));
            }
        }
        for id in self.columns.keys() {
            if !seen_columns.contains(id) {
                violations.push(format!("column '{}' is missing from column order", id));
            }
        }

        let mut owner: HashMap<&TaskId, &ColumnId> = HashMap::new();
        for (column_id, column) in &self.columns {
            for task_id in &column.task_ids {
                if !self.tasks.contains_key(task_id) {
                    violations.push(format!(
                        "column '{}' references unknown task '{}'",
                        column_id, task_id
                    ));
                }
                if let Some(previous) = owner.insert(task_id, column_id) {
                    if previous == column_id {
                        violations.push(format!(
                            "task '{}' appears twice in column '{}'",
                            task_id, column_id
                        ));
                    } else {
                        violations.push(format!(
                            "task '{}' appears in both '{}' and '{}'",
                            task_id, previous, column_id
                        ));
                    }
                }
            }
        }

        violations
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::seed()
    }
}
