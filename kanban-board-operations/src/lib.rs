//! # Kanban Board Operations
//!
//! This crate provides the vocabulary shared by every board transition:
//! the `Operation` trait for naming an operation, the `Execute` trait for
//! running it against a state value, the `ExecutionResult` it produces, and
//! the `LogEntry` recorded in the activity log.
//!
//! Operations are structs where the fields ARE the parameters. Executing one
//! never mutates the input state; it returns the next state inside the result.
//!
//! ## Example
//!
//! ```ignore
//! use kanban_board_operations::*;
//!
//! #[derive(Debug, Serialize)]
//! pub struct DeleteColumn {
//!     /// The column to delete
//!     pub id: ColumnId,
//! }
//!
//! impl Operation for DeleteColumn {
//!     fn verb(&self) -> &'static str { "delete" }
//!     fn noun(&self) -> &'static str { "column" }
//!     fn description(&self) -> &'static str { "Delete a column" }
//! }
//!
//! impl Execute<BoardState, BoardError> for DeleteColumn {
//!     fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState, BoardError> {
//!         // returns ExecutionResult::Logged, Unlogged or Failed
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};

// Re-export for use in implementations
pub use serde_json::Value;
