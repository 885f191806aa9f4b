//! Kanban board state engine
//!
//! This crate holds the state of a single kanban board: tasks, columns and the
//! left-to-right column order. Every edit produces a new immutable board, which is
//! recorded in a linear undo/redo history and saved as a JSON snapshot in a
//! key-value store.
//!
//! ## Overview
//!
//! - **Pure transitions** - `apply_move`, `add_column` and `delete_column` take a
//!   board and return the next one; the input is never touched
//! - **Operations** - each transition is also an `Operation` that produces an
//!   activity `LogEntry` when it changes the board
//! - **History** - undo/redo over shared snapshots; committing after an undo
//!   discards the redo branch
//! - **Persistence** - the active board is saved after every change and loaded
//!   on open, falling back to a seed board when the stored value is unusable
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_board::{BoardConfig, KanbanSession, MemoryStore, MoveDescription};
//!
//! # fn example() -> kanban_board::Result<()> {
//! let mut session = KanbanSession::open(MemoryStore::new(), BoardConfig::default());
//!
//! // Drag "task-1" to the top of "In Progress"
//! session.move_task(MoveDescription::new("task-1", "column-1", 0, "column-2", 0))?;
//!
//! let column = session.add_column()?;
//! session.delete_column(column)?;
//!
//! session.undo();
//! session.redo();
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Stored Snapshot
//!
//! ```text
//! {
//!   "tasks":   { "task-1": { "id": "task-1", "content": "Task One" }, ... },
//!   "columns": { "column-1": { "id": "column-1", "title": "To Do", "taskIds": ["task-1", "task-2"] }, ... },
//!   "columnOrder": ["column-1", "column-2"]
//! }
//! ```

pub mod column;
pub mod config;
mod error;
pub mod history;
pub mod persistence;
pub mod session;
pub mod storage;
pub mod task;
pub mod types;
pub mod view;

// Re-export operation vocabulary from the operations crate
pub use kanban_board_operations::{Execute, ExecutionResult, LogEntry, Operation};

pub use config::BoardConfig;
pub use error::{BoardError, Result};
pub use history::History;
pub use session::KanbanSession;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use view::{board_view, BoardView, ColumnView};

// Re-export commonly used types
pub use types::{BoardState, Column, ColumnId, MoveDescription, Task, TaskId};
