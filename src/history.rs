use log::debug;

/// Undo log of surface snapshots, one per completed stroke.
///
/// The stack grows without bound; every entry is a full copy of the surface.
#[derive(Debug, Clone)]
pub struct SnapshotHistory<S> {
    undo_stack: Vec<S>,
}

impl<S> Default for SnapshotHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SnapshotHistory<S> {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
        }
    }

    /// Records the state at the end of a stroke
    pub fn push(&mut self, snapshot: S) {
        self.undo_stack.push(snapshot);
        debug!("History depth: {}", self.undo_stack.len());
    }

    /// Removes and returns the most recent snapshot
    pub fn pop(&mut self) -> Option<S> {
        self.undo_stack.pop()
    }

    /// The most recent snapshot, if any
    pub fn top(&self) -> Option<&S> {
        self.undo_stack.last()
    }

    /// Returns true if there is a snapshot that can be restored
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[S] {
        &self.undo_stack
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }
}
