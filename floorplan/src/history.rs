//! Linear snapshot history.
//!
//! Every completed gesture commits one [`SceneSnapshot`]. The cursor points at
//! the snapshot matching the live scene; undo and redo move it and hand back
//! the snapshot to restore. Committing after an undo discards the redo tail.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::scene::SceneSnapshot;

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<SceneSnapshot>,
    cursor: usize,
    capacity: usize,
}

impl History {
    /// Start a history whose only entry is `initial`. Capacity is at least 1.
    #[must_use]
    pub fn new(initial: SceneSnapshot, capacity: usize) -> Self {
        Self { entries: vec![initial], cursor: 0, capacity: capacity.max(1) }
    }

    /// Push a snapshot, truncating anything past the cursor. The oldest entry
    /// is dropped once the history is at capacity.
    pub fn commit(&mut self, snapshot: SceneSnapshot) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back. Returns the snapshot to restore, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&SceneSnapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward. Returns the snapshot to restore, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&SceneSnapshot> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    /// Snapshot at the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&SceneSnapshot> {
        self.entries.get(self.cursor)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry and start over from `initial`.
    pub fn reset(&mut self, initial: SceneSnapshot) {
        self.entries.clear();
        self.entries.push(initial);
        self.cursor = 0;
    }
}
