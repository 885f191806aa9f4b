//! Task commands

mod mv;

pub use mv::{apply_move, MoveTask};
