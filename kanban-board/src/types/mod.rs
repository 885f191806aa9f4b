//! Core types for the kanban engine

mod board;
mod ids;
mod movement;
mod task;

// Re-export all types
pub use board::{BoardState, Column};
pub use ids::{ColumnId, TaskId};
pub use movement::MoveDescription;
pub use task::Task;
