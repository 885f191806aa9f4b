//! KanbanSession - the state container for one open board.
//!
//! The session owns the undo/redo history, the snapshot store and the
//! activity log. Every change goes through an operation: the operation computes
//! the next board from the current one, the session commits it to history and
//! then saves a snapshot. Readers only ever see committed boards.

use crate::column::{next_column_id, AddColumn, DeleteColumn};
use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::history::History;
use crate::persistence;
use crate::storage::KeyValueStore;
use crate::task::MoveTask;
use crate::types::{BoardState, ColumnId, MoveDescription};
use crate::view::{board_view, BoardView};
use kanban_board_operations::{Execute, LogEntry};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Oldest activity entries are dropped past this many
const MAX_ACTIVITY_ENTRIES: usize = 500;

/// A board being edited, backed by a key-value store
pub struct KanbanSession<S: KeyValueStore> {
    store: S,
    config: BoardConfig,
    history: History<BoardState>,
    /// Newest first
    activity: VecDeque<LogEntry>,
    actor: Option<String>,
}

impl<S: KeyValueStore> KanbanSession<S> {
    /// Open the board stored under `config.storage_key`, or the seed board if
    /// there is no usable snapshot. The starting board is saved right away.
    pub fn open(store: S, config: BoardConfig) -> Self {
        let initial = persistence::load(&store, &config.storage_key).unwrap_or_else(|| {
            info!(key = %config.storage_key, "starting from seed board");
            BoardState::seed()
        });

        let mut session = Self {
            store,
            history: History::new(initial).with_limit(config.history_limit),
            config,
            activity: VecDeque::new(),
            actor: None,
        };
        session.persist();
        session
    }

    /// Attribute subsequent activity entries to `actor`
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// The current board
    pub fn state(&self) -> &BoardState {
        self.history.current()
    }

    /// The current board as a shared handle that outlives later edits
    pub fn snapshot(&self) -> Arc<BoardState> {
        self.history.current_shared()
    }

    pub fn history(&self) -> &History<BoardState> {
        &self.history
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Close the session and hand back the store
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Activity log, newest first
    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.activity.iter()
    }

    /// Display projection of the current board for a search query
    pub fn view(&self, query: &str) -> BoardView<'_> {
        board_view(self.state(), query)
    }

    /// Run an operation against the current board.
    ///
    /// Returns `Ok(true)` when a new board was committed and `Ok(false)` when
    /// the operation changed nothing. On error the current board is left as is.
    pub fn execute<O>(&mut self, operation: &O) -> Result<bool>
    where
        O: Execute<BoardState, BoardError>,
    {
        let outcome = operation.execute(self.history.current());
        let changed = outcome.is_change();
        let (result, log_entry) = outcome.split();

        if let Some(entry) = log_entry {
            self.record(entry);
        }

        let next = match result {
            Ok(next) => next,
            Err(e) => {
                warn!(op = %operation.op_string(), error = %e, "rejected board transition");
                return Err(e);
            }
        };

        if changed {
            self.history.commit(next);
            info!(
                op = %operation.op_string(),
                index = self.history.current_index(),
                "committed board transition"
            );
            self.persist();
        } else {
            debug!(op = %operation.op_string(), "operation left board unchanged");
        }
        Ok(changed)
    }

    /// Apply a drag result expressed in canonical indices.
    /// Returns false for a cancelled drag.
    pub fn move_task(&mut self, movement: MoveDescription) -> Result<bool> {
        self.execute(&MoveTask::new(movement))
    }

    /// Apply a drag result whose indices refer to the board filtered by `query`
    pub fn move_task_in_view(&mut self, query: &str, raw: &MoveDescription) -> Result<bool> {
        let resolved = self.view(query).resolve_move(raw)?;
        self.move_task(resolved)
    }

    /// Append a new empty column with the configured title
    pub fn add_column(&mut self) -> Result<ColumnId> {
        let title = self.config.new_column_title.clone();
        self.add_column_titled(title)
    }

    /// Append a new empty column with the given title
    pub fn add_column_titled(&mut self, title: impl Into<String>) -> Result<ColumnId> {
        let id = next_column_id(self.state());
        self.execute(&AddColumn::new().with_id(id.clone()).with_title(title))?;
        Ok(id)
    }

    /// Delete a column. Its tasks stay in the task map.
    pub fn delete_column(&mut self, id: impl Into<ColumnId>) -> Result<()> {
        self.execute(&DeleteColumn::new(id)).map(|_| ())
    }

    /// Step back one board. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.step("undo", History::undo)
    }

    /// Step forward one board. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.step("redo", History::redo)
    }

    fn step(&mut self, verb: &str, apply: fn(&mut History<BoardState>) -> bool) -> bool {
        let start = std::time::Instant::now();
        if !apply(&mut self.history) {
            debug!(verb, "nothing to {}", verb);
            return false;
        }

        let index = self.history.current_index();
        info!(verb, index, "moved through board history");
        self.record(LogEntry::new(
            format!("{} board", verb),
            serde_json::Value::Null,
            serde_json::json!({ "index": index, "snapshots": self.history.len() }),
            None,
            start.elapsed().as_millis() as u64,
        ));
        self.persist();
        true
    }

    fn record(&mut self, entry: LogEntry) {
        let entry = match &self.actor {
            Some(actor) => entry.with_actor(actor.clone()),
            None => entry,
        };
        self.activity.push_front(entry);
        self.activity.truncate(MAX_ACTIVITY_ENTRIES);
    }

    fn persist(&mut self) {
        persistence::save(
            &mut self.store,
            &self.config.storage_key,
            self.history.current(),
        );
    }
}
