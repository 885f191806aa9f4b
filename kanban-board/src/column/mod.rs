//! Column commands

mod add;
mod delete;

pub use add::{add_column, next_column_id, AddColumn, DEFAULT_COLUMN_TITLE};
pub use delete::{delete_column, DeleteColumn};
