//! Drive a file-backed board from the command line
//!
//! Usage: cargo run -p kanban-board --example board_session -- [config.toml]
//!
//! Without `storage_dir` in the config, snapshots go to `./.kanban-board`.
//! Run it twice to see the board restored from the previous run.

use kanban_board::{BoardConfig, FileStore, KanbanSession, MoveDescription};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for console output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kanban_board=debug".parse()?),
        )
        .with_target(true)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => BoardConfig::load_from(path)?,
        None => BoardConfig::load()?,
    };
    let store = config
        .file_store()
        .unwrap_or_else(|| FileStore::new(".kanban-board"));
    println!("Board stored in: {}", store.root().display());

    let mut session = KanbanSession::open(store, config).with_actor("board_session");
    print_board(&session);

    // Move the first task of the first column to the end of the last column
    let state = session.state();
    let first = state.ordered_columns().next().map(|c| (c.id.clone(), c.task_ids.first().cloned()));
    let last = state.column_order.last().cloned();
    if let (Some((from, Some(task))), Some(to)) = (first, last) {
        session.move_task(MoveDescription::to_column_end(task, from, 0, to))?;
    }

    let column = session.add_column()?;
    println!("Added {}", column);
    print_board(&session);

    session.undo();
    println!("Undo - can redo: {}", session.can_redo());
    print_board(&session);

    println!("---");
    for entry in session.activity() {
        println!("{} {} {}", entry.timestamp.format("%H:%M:%S"), entry.op, entry.output);
    }
    Ok(())
}

fn print_board(session: &KanbanSession<FileStore>) {
    println!("---");
    for column in session.state().ordered_columns() {
        let tasks: Vec<&str> = column
            .task_ids
            .iter()
            .filter_map(|id| session.state().task(id.as_str()))
            .map(|task| task.content.as_str())
            .collect();
        println!("{:<12} {}", column.title, tasks.join(", "));
    }
}
