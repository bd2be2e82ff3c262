//! Snapshot-based undo history.

use alloc::vec::Vec;

use super::count::Shoe;
use super::round::RoundState;
use super::state::Phase;

/// A full value copy of the live session state, captured before a mutating
/// input.
///
/// Snapshots are structural copies sharing no mutable substructure with the
/// live state, so later mutation cannot retroactively alter them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Shoe bookkeeping at capture time.
    pub shoe: Shoe,
    /// Round state at capture time.
    pub round: RoundState,
    /// Session phase (including any burn progress) at capture time.
    pub phase: Phase,
}

/// Undo log of snapshots, most recent last.
///
/// Append-only until popped by undo.
#[derive(Debug, Clone)]
pub struct History {
    /// Stored snapshots, oldest first.
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Appends a snapshot.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Removes and returns the most recent snapshot, or `None` when the
    /// history is empty.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drops all snapshots.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
