//! AddColumn command

use crate::error::BoardError;
use crate::types::{BoardState, Column, ColumnId};
use chrono::Utc;
use kanban_board_operations::{Execute, ExecutionResult, LogEntry, Operation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicI64, Ordering};

/// Title given to columns created without one
pub const DEFAULT_COLUMN_TITLE: &str = "New Column";

/// Last timestamp handed out, so ids stay unique within the process even when
/// two columns are created in the same millisecond.
static LAST_COLUMN_STAMP: AtomicI64 = AtomicI64::new(0);

/// Generate a fresh `column-<unix millis>` id not already used by `state`.
pub fn next_column_id(state: &BoardState) -> ColumnId {
    loop {
        let now = Utc::now().timestamp_millis();
        let previous = match LAST_COLUMN_STAMP.fetch_update(
            Ordering::SeqCst,
            Ordering::SeqCst,
            |last| Some(now.max(last + 1)),
        ) {
            Ok(prev) | Err(prev) => prev,
        };
        let id = ColumnId::from_string(format!("column-{}", now.max(previous + 1)));
        if !state.columns.contains_key(&id) {
            return id;
        }
    }
}

/// Append a new empty column titled "New Column" with a generated id.
pub fn add_column(state: &BoardState) -> (BoardState, ColumnId) {
    let id = next_column_id(state);
    let next = insert_column(state, Column::new(id.clone(), DEFAULT_COLUMN_TITLE));
    (next, id)
}

fn insert_column(state: &BoardState, column: Column) -> BoardState {
    let mut next = state.clone();
    next.column_order.push(column.id.clone());
    next.columns.insert(column.id.clone(), column);
    next
}

/// Add a new column to the end of the board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddColumn {
    /// The column ID. Generated when absent.
    pub id: Option<ColumnId>,
    /// The column display title
    pub title: String,
}

impl AddColumn {
    /// Create a new AddColumn command with a generated id and the default title
    pub fn new() -> Self {
        Self {
            id: None,
            title: DEFAULT_COLUMN_TITLE.to_string(),
        }
    }

    /// Use an explicit id instead of a generated one
    pub fn with_id(mut self, id: impl Into<ColumnId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for AddColumn {
    fn default() -> Self {
        Self::new()
    }
}

impl Operation for AddColumn {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "column"
    }

    fn description(&self) -> &'static str {
        "Add a new column to the board"
    }
}

impl Execute<BoardState, BoardError> for AddColumn {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState, BoardError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let id = match &self.id {
            Some(id) if state.columns.contains_key(id) => {
                let error = BoardError::DuplicateColumn { id: id.to_string() };
                let error_msg = error.to_string();
                return ExecutionResult::Failed {
                    error,
                    log_entry: Some(LogEntry::failure(
                        self.op_string(),
                        input,
                        &error_msg,
                        start.elapsed().as_millis() as u64,
                    )),
                };
            }
            Some(id) => id.clone(),
            None => next_column_id(state),
        };

        let column = Column::new(id, self.title.clone());
        let output = serde_json::to_value(&column).unwrap_or(Value::Null);
        let next = insert_column(state, column);

        ExecutionResult::Logged {
            value: next,
            log_entry: LogEntry::new(
                self.op_string(),
                input,
                output,
                None,
                start.elapsed().as_millis() as u64,
            ),
        }
    }
}
