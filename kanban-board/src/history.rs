//! Linear undo/redo history over board snapshots.
//!
//! The history is a list of snapshots plus a pointer to the active one.
//! Committing after an undo discards the undone branch; there is never more
//! than one future.

use std::sync::Arc;

/// Undo/redo stack of immutable snapshots.
///
/// Snapshots are shared behind `Arc`, so moving the pointer never copies a
/// board and a reader holding an older snapshot keeps a valid value.
#[derive(Debug, Clone)]
pub struct History<T> {
    snapshots: Vec<Arc<T>>,
    current: usize,
    limit: Option<usize>,
}

impl<T> History<T> {
    /// Start a history whose only snapshot is `initial`
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![Arc::new(initial)],
            current: 0,
            limit: None,
        }
    }

    /// Keep at most `limit` snapshots, dropping the oldest first.
    ///
    /// A limit of zero is treated as one: the current snapshot is always kept.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.map(|l| l.max(1));
        self.enforce_limit();
        self
    }

    /// The active snapshot
    pub fn current(&self) -> &T {
        &self.snapshots[self.current]
    }

    /// The active snapshot as a shared handle
    pub fn current_shared(&self) -> Arc<T> {
        Arc::clone(&self.snapshots[self.current])
    }

    /// Record a new snapshot, discarding any redo branch, and make it active
    pub fn commit(&mut self, next: T) -> &T {
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(Arc::new(next));
        self.current = self.snapshots.len() - 1;
        self.enforce_limit();
        self.current()
    }

    /// Step back one snapshot. Returns false at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Step forward one snapshot. Returns false at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        if self.current + 1 >= self.snapshots.len() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.snapshots.len()
    }

    /// Index of the active snapshot
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of retained snapshots (never zero)
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Retained snapshots, oldest first
    pub fn snapshots(&self) -> impl Iterator<Item = &T> {
        self.snapshots.iter().map(|s| s.as_ref())
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.snapshots.len() > limit {
            let excess = self.snapshots.len() - limit;
            // Never drop the active snapshot
            let excess = excess.min(self.current);
            self.snapshots.drain(..excess);
            self.current -= excess;
        }
    }
}
