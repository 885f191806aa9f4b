//! DeleteColumn command

use crate::error::{BoardError, Result};
use crate::types::{BoardState, ColumnId};
use kanban_board_operations::{Execute, ExecutionResult, LogEntry, Operation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Remove a column from `columns` and `column_order`.
///
/// The column's tasks stay in `tasks` and become orphaned: they are no longer
/// shown on the board, but an undo brings the column and its cards back.
pub fn delete_column(state: &BoardState, id: &ColumnId) -> Result<BoardState> {
    if !state.columns.contains_key(id) {
        return Err(BoardError::ColumnNotFound { id: id.to_string() });
    }

    let mut next = state.clone();
    next.columns.remove(id);
    next.column_order.retain(|c| c != id);
    Ok(next)
}

/// Delete a column, leaving its tasks in the task map
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for DeleteColumn {
    fn verb(&self) -> &'static str {
        "delete"
    }

    fn noun(&self) -> &'static str {
        "column"
    }

    fn description(&self) -> &'static str {
        "Delete a column"
    }
}

impl Execute<BoardState, BoardError> for DeleteColumn {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState, BoardError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let orphaned = state
            .columns
            .get(&self.id)
            .map(|c| c.task_ids.clone())
            .unwrap_or_default();

        match delete_column(state, &self.id) {
            Ok(next) => ExecutionResult::Logged {
                value: next,
                log_entry: LogEntry::new(
                    self.op_string(),
                    input,
                    serde_json::json!({
                        "deleted": true,
                        "id": self.id,
                        "orphanedTasks": orphaned,
                    }),
                    None,
                    start.elapsed().as_millis() as u64,
                ),
            },
            Err(error) => {
                let error_msg = error.to_string();
                ExecutionResult::Failed {
                    error,
                    log_entry: Some(LogEntry::failure(
                        self.op_string(),
                        input,
                        &error_msg,
                        start.elapsed().as_millis() as u64,
                    )),
                }
            }
        }
    }
}
