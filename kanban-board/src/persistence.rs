//! Snapshot persistence: board <-> JSON text in a key-value store.
//!
//! Loading is forgiving. A missing, unreadable, unparseable or inconsistent
//! snapshot loads as `None`, and the caller starts from the seed board.
//! Saving is best effort: failures are logged and the in-memory board stays
//! authoritative for the session.

use crate::error::{BoardError, Result};
use crate::storage::KeyValueStore;
use crate::types::BoardState;
use tracing::{debug, warn};

/// Key the board snapshot is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "kanban-board";

/// Serialize a board to its stored JSON form
pub fn encode_snapshot(state: &BoardState) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// Parse a stored snapshot, rejecting values that break board invariants
pub fn decode_snapshot(key: &str, text: &str) -> Result<BoardState> {
    let state: BoardState =
        serde_json::from_str(text).map_err(|e| BoardError::decode(key, e.to_string()))?;

    let violations = state.consistency_violations();
    if !violations.is_empty() {
        return Err(BoardError::decode(key, violations.join("; ")));
    }
    Ok(state)
}

/// Write `state` under `key`. Returns whether the write succeeded.
pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, state: &BoardState) -> bool {
    let result = encode_snapshot(state).and_then(|text| store.set(key, &text));
    match result {
        Ok(()) => {
            debug!(key, columns = state.columns.len(), tasks = state.tasks.len(), "saved board snapshot");
            true
        }
        Err(e) => {
            warn!(key, error = %e, "failed to save board snapshot");
            false
        }
    }
}

/// Read the board stored under `key`, or `None` if there is no usable snapshot
pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<BoardState> {
    let text = match store.get(key) {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!(key, "no board snapshot stored");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read board snapshot");
            return None;
        }
    };

    match decode_snapshot(key, &text) {
        Ok(state) => {
            debug!(key, columns = state.columns.len(), tasks = state.tasks.len(), "loaded board snapshot");
            Some(state)
        }
        Err(e) => {
            warn!(key, error = %e, "discarding unusable board snapshot");
            None
        }
    }
}
