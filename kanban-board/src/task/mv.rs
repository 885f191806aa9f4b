//! MoveTask command and the move reducer

use crate::error::{BoardError, Result};
use crate::types::{BoardState, Column, MoveDescription};
use kanban_board_operations::{Execute, ExecutionResult, LogEntry, Operation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Apply a drag-and-drop result to a board, returning the next board.
///
/// The task is removed from the source column by position and inserted into
/// the destination column at `destination_index`, clamped to the column length.
/// For a same-column move the insertion index refers to the already shortened
/// list. `tasks` and `column_order` are carried over untouched.
///
/// A cancelled drag (no destination column) returns an identical board.
pub fn apply_move(state: &BoardState, movement: &MoveDescription) -> Result<BoardState> {
    let Some(destination_id) = movement.destination_column_id.as_ref() else {
        return Ok(state.clone());
    };

    let source = state.columns.get(&movement.source_column_id).ok_or_else(|| {
        BoardError::invalid_move(format!(
            "unknown source column '{}'",
            movement.source_column_id
        ))
    })?;
    let destination = state.columns.get(destination_id).ok_or_else(|| {
        BoardError::invalid_move(format!("unknown destination column '{}'", destination_id))
    })?;

    match source.task_ids.get(movement.source_index) {
        None => {
            return Err(BoardError::invalid_move(format!(
                "source index {} out of bounds for column '{}' with {} tasks",
                movement.source_index,
                source.id,
                source.len()
            )))
        }
        Some(found) if found != &movement.task_id => {
            return Err(BoardError::invalid_move(format!(
                "column '{}' holds '{}' at index {}, not '{}'",
                source.id, found, movement.source_index, movement.task_id
            )))
        }
        Some(_) => {}
    }

    let mut source_tasks = source.task_ids.clone();
    let moved = source_tasks.remove(movement.source_index);

    let mut next = state.clone();
    if source.id == destination.id {
        let index = clamp_index(movement.destination_index, source_tasks.len());
        source_tasks.insert(index, moved);
        next.columns.insert(
            source.id.clone(),
            Column {
                task_ids: source_tasks,
                ..source.clone()
            },
        );
    } else {
        let mut destination_tasks = destination.task_ids.clone();
        let index = clamp_index(movement.destination_index, destination_tasks.len());
        destination_tasks.insert(index, moved);
        next.columns.insert(
            source.id.clone(),
            Column {
                task_ids: source_tasks,
                ..source.clone()
            },
        );
        next.columns.insert(
            destination.id.clone(),
            Column {
                task_ids: destination_tasks,
                ..destination.clone()
            },
        );
    }

    Ok(next)
}

/// Missing index means "append"; anything past the end is clamped to the end.
fn clamp_index(index: Option<usize>, len: usize) -> usize {
    index.map_or(len, |i| i.min(len))
}

/// Move a task to a different column or position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveTask {
    #[serde(flatten)]
    pub movement: MoveDescription,
}

impl MoveTask {
    /// Create a new MoveTask command from a drag result
    pub fn new(movement: MoveDescription) -> Self {
        Self { movement }
    }
}

impl Operation for MoveTask {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn description(&self) -> &'static str {
        "Move a task to a different column or position"
    }
}

impl Execute<BoardState, BoardError> for MoveTask {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState, BoardError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        if self.movement.is_cancelled() {
            return ExecutionResult::Unlogged {
                value: state.clone(),
            };
        }

        let result = apply_move(state, &self.movement);
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(next) => {
                let column = self
                    .movement
                    .destination_column_id
                    .as_ref()
                    .and_then(|id| next.columns.get(id));
                let output = serde_json::json!({
                    "taskId": self.movement.task_id,
                    "from": self.movement.source_column_id,
                    "to": column.map(|c| &c.id),
                    "index": column.and_then(|c| c.position_of(&self.movement.task_id)),
                });
                ExecutionResult::Logged {
                    value: next,
                    log_entry: LogEntry::new(self.op_string(), input, output, None, duration_ms),
                }
            }
            Err(error) => {
                let error_msg = error.to_string();
                ExecutionResult::Failed {
                    error,
                    log_entry: Some(LogEntry::failure(
                        self.op_string(),
                        input,
                        &error_msg,
                        duration_ms,
                    )),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskId;

    fn task_ids(state: &BoardState, column: &str) -> Vec<String> {
        state
            .column(column)
            .unwrap()
            .task_ids
            .iter()
            .map(|id| id.to_string())
            .collect()
    }

    #[test]
    fn test_cross_column_move() {
        let seed = BoardState::seed();
        let next = apply_move(
            &seed,
            &MoveDescription::new("task-1", "column-1", 0, "column-2", 1),
        )
        .unwrap();

        assert_eq!(task_ids(&next, "column-1"), vec!["task-2"]);
        assert_eq!(task_ids(&next, "column-2"), vec!["task-3", "task-1"]);
        assert_eq!(next.tasks, seed.tasks);
        assert_eq!(next.column_order, seed.column_order);
        assert!(next.is_consistent());
    }

    #[test]
    fn test_same_column_reorder() {
        let seed = BoardState::seed();
        let next = apply_move(
            &seed,
            &MoveDescription::new("task-2", "column-1", 1, "column-1", 0),
        )
        .unwrap();

        assert_eq!(task_ids(&next, "column-1"), vec!["task-2", "task-1"]);
        assert_eq!(task_ids(&next, "column-2"), vec!["task-3"]);
    }

    #[test]
    fn test_input_board_is_untouched() {
        let seed = BoardState::seed();
        let before = seed.clone();
        let _ = apply_move(
            &seed,
            &MoveDescription::new("task-1", "column-1", 0, "column-2", 0),
        )
        .unwrap();
        assert_eq!(seed, before);
    }

    #[test]
    fn test_cancelled_drag_is_identity() {
        let seed = BoardState::seed();
        let next = apply_move(&seed, &MoveDescription::cancelled("task-1", "column-1", 0)).unwrap();
        assert_eq!(next, seed);
    }

    #[test]
    fn test_cancelled_drag_skips_validation() {
        let seed = BoardState::seed();
        let next = apply_move(&seed, &MoveDescription::cancelled("task-1", "nowhere", 42)).unwrap();
        assert_eq!(next, seed);
    }

    #[test]
    fn test_destination_index_is_clamped() {
        let seed = BoardState::seed();
        let next = apply_move(
            &seed,
            &MoveDescription::new("task-1", "column-1", 0, "column-2", 99),
        )
        .unwrap();
        assert_eq!(task_ids(&next, "column-2"), vec!["task-3", "task-1"]);

        let next = apply_move(
            &seed,
            &MoveDescription::new("task-1", "column-1", 0, "column-1", 99),
        )
        .unwrap();
        assert_eq!(task_ids(&next, "column-1"), vec!["task-2", "task-1"]);
    }

    #[test]
    fn test_missing_destination_index_appends() {
        let seed = BoardState::seed();
        let next = apply_move(
            &seed,
            &MoveDescription::to_column_end("task-3", "column-2", 0, "column-1"),
        )
        .unwrap();
        assert_eq!(task_ids(&next, "column-1"), vec!["task-1", "task-2", "task-3"]);
        assert!(next.column("column-2").unwrap().is_empty());
    }

    #[test]
    fn test_move_into_empty_column() {
        let mut seed = BoardState::seed();
        let empty = Column::new("column-3", "Done");
        seed.column_order.push(empty.id.clone());
        seed.columns.insert(empty.id.clone(), empty);

        let next = apply_move(
            &seed,
            &MoveDescription::new("task-2", "column-1", 1, "column-3", 0),
        )
        .unwrap();
        assert_eq!(task_ids(&next, "column-3"), vec!["task-2"]);
        assert!(next.is_consistent());
    }

    #[test]
    fn test_unknown_columns_are_invalid() {
        let seed = BoardState::seed();
        let err = apply_move(
            &seed,
            &MoveDescription::new("task-1", "column-9", 0, "column-2", 0),
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::InvalidMove { .. }));
        assert!(err.to_string().contains("column-9"));

        let err = apply_move(
            &seed,
            &MoveDescription::new("task-1", "column-1", 0, "column-9", 0),
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::InvalidMove { .. }));
    }

    #[test]
    fn test_source_index_out_of_bounds() {
        let seed = BoardState::seed();
        let err = apply_move(
            &seed,
            &MoveDescription::new("task-3", "column-2", 1, "column-1", 0),
        )
        .unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
    }

    #[test]
    fn test_task_id_must_match_source_slot() {
        let seed = BoardState::seed();
        let err = apply_move(
            &seed,
            &MoveDescription::new("task-2", "column-1", 0, "column-2", 0),
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::InvalidMove { .. }));
    }

    #[test]
    fn test_execute_logs_move() {
        let seed = BoardState::seed();
        let op = MoveTask::new(MoveDescription::new("task-1", "column-1", 0, "column-2", 1));
        let (result, log) = op.execute(&seed).split();

        let next = result.unwrap();
        assert_eq!(
            next.column("column-2").unwrap().position_of(&TaskId::from("task-1")),
            Some(1)
        );
        let log = log.unwrap();
        assert_eq!(log.op, "move task");
        assert_eq!(log.input["taskId"], "task-1");
        assert_eq!(log.input["sourceColumnId"], "column-1");
        assert_eq!(log.output["to"], "column-2");
        assert_eq!(log.output["index"], 1);
    }

    #[test]
    fn test_execute_cancelled_is_unlogged() {
        let seed = BoardState::seed();
        let op = MoveTask::new(MoveDescription::cancelled("task-1", "column-1", 0));
        let result = op.execute(&seed);
        assert!(!result.should_log());
        assert_eq!(result.into_result().unwrap(), seed);
    }

    #[test]
    fn test_execute_invalid_move_fails_with_log() {
        let seed = BoardState::seed();
        let op = MoveTask::new(MoveDescription::new("task-1", "column-1", 5, "column-2", 0));
        let result = op.execute(&seed);
        assert!(result.should_log());
        let (result, log) = result.split();
        assert!(matches!(result, Err(BoardError::InvalidMove { .. })));
        assert!(log.unwrap().is_failure());
    }
}
