//! Drag-and-drop move descriptions.

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// The outcome of a drag gesture, as reported by the drag-capture layer.
///
/// A missing destination column means the card was dropped outside any column
/// and the drag is cancelled. A destination column without an index appends
/// the task at the end of that column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDescription {
    pub task_id: TaskId,
    pub source_column_id: ColumnId,
    pub source_index: usize,
    #[serde(default)]
    pub destination_column_id: Option<ColumnId>,
    #[serde(default)]
    pub destination_index: Option<usize>,
}

impl MoveDescription {
    /// A move from `(source_column, source_index)` to `(destination_column, destination_index)`
    pub fn new(
        task_id: impl Into<TaskId>,
        source_column: impl Into<ColumnId>,
        source_index: usize,
        destination_column: impl Into<ColumnId>,
        destination_index: usize,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            source_column_id: source_column.into(),
            source_index,
            destination_column_id: Some(destination_column.into()),
            destination_index: Some(destination_index),
        }
    }

    /// A drag that ended outside any drop target
    pub fn cancelled(
        task_id: impl Into<TaskId>,
        source_column: impl Into<ColumnId>,
        source_index: usize,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            source_column_id: source_column.into(),
            source_index,
            destination_column_id: None,
            destination_index: None,
        }
    }

    /// Move to the end of a column
    pub fn to_column_end(
        task_id: impl Into<TaskId>,
        source_column: impl Into<ColumnId>,
        source_index: usize,
        destination_column: impl Into<ColumnId>,
    ) -> Self {
        Self {
            destination_column_id: Some(destination_column.into()),
            ..Self::cancelled(task_id, source_column, source_index)
        }
    }

    /// Whether the drag was dropped outside any column
    pub fn is_cancelled(&self) -> bool {
        self.destination_column_id.is_none()
    }

    /// Whether source and destination are the same column
    pub fn is_reorder(&self) -> bool {
        self.destination_column_id.as_ref() == Some(&self.source_column_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_drop_result() {
        let json = r#"{
            "taskId": "task-1",
            "sourceColumnId": "column-1",
            "sourceIndex": 0,
            "destinationColumnId": "column-2",
            "destinationIndex": 1
        }"#;
        let mv: MoveDescription = serde_json::from_str(json).unwrap();
        assert_eq!(mv, MoveDescription::new("task-1", "column-1", 0, "column-2", 1));
        assert!(!mv.is_cancelled());
        assert!(!mv.is_reorder());
    }

    #[test]
    fn test_deserialize_cancelled_drop() {
        let json = r#"{
            "taskId": "task-1",
            "sourceColumnId": "column-1",
            "sourceIndex": 0,
            "destinationColumnId": null
        }"#;
        let mv: MoveDescription = serde_json::from_str(json).unwrap();
        assert!(mv.is_cancelled());
        assert_eq!(mv.destination_index, None);
    }

    #[test]
    fn test_to_column_end() {
        let mv = MoveDescription::to_column_end("task-2", "column-1", 1, "column-1");
        assert!(mv.is_reorder());
        assert_eq!(mv.destination_index, None);
    }
}
