/// A committed state of the piece table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub pieces: Vec<crate::piece_table::piece::Piece>,
    /// Document length the pieces add up to.
    pub len: usize,
}

/// Linear undo history: committed snapshots plus a cursor at the current one.
///
/// `snapshots` is never empty and `cursor` always indexes into it. Entries
/// after the cursor are the redo branch; committing discards them.
#[derive(Debug)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
    limit: Option<usize>,
}

impl History {
    /// Starts a history whose oldest entry is `initial`.
    ///
    /// `limit` caps the number of retained snapshots; `Some(0)` behaves like
    /// `Some(1)`.
    #[must_use]
    pub fn new(initial: Snapshot, limit: Option<usize>) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            limit: limit.map(|limit| limit.max(1)),
        }
    }

    /// Records `snapshot` as the new current state.
    pub fn commit(&mut self, snapshot: Snapshot) {
        let discarded = self.snapshots.len() - (self.cursor + 1);

        if discarded > 0 {
            tracing::debug!(discarded, "redo branch discarded");
        }

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;

        if let Some(limit) = self.limit
            && self.snapshots.len() > limit
        {
            let evicted = self.snapshots.len() - limit;

            self.snapshots.drain(..evicted);
            self.cursor -= evicted;

            tracing::debug!(evicted, limit, "oldest snapshots evicted");
        }
    }

    /// Steps back one entry. `None` at the oldest retained entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        self.cursor = self.cursor.checked_sub(1)?;

        self.snapshots.get(self.cursor)
    }

    /// Steps forward one entry. `None` unless an undo left a redo branch.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }

        self.cursor += 1;

        self.snapshots.get(self.cursor)
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    #[inline]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[inline]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of retained snapshots, redo branch included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`; kept for symmetry with `len`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(len: usize) -> Snapshot {
        Snapshot {
            pieces: Vec::new(),
            len,
        }
    }

    #[test]
    fn undo_stops_at_oldest() {
        let mut history = History::new(snap(0), None);

        history.commit(snap(1));
        assert_eq!(history.undo().map(|s| s.len), Some(0));
        assert!(history.undo().is_none());
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current().len, 0);
    }

    #[test]
    fn redo_only_after_undo() {
        let mut history = History::new(snap(0), None);

        history.commit(snap(1));
        assert!(history.redo().is_none());

        history.undo();
        assert!(history.can_redo());
        assert_eq!(history.redo().map(|s| s.len), Some(1));
        assert!(!history.can_redo());
    }

    #[test]
    fn commit_truncates_redo_branch() {
        let mut history = History::new(snap(0), None);

        history.commit(snap(1));
        history.commit(snap(2));
        history.undo();
        history.undo();
        history.commit(snap(3));

        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
        assert_eq!(history.current().len, 3);
    }

    #[test]
    fn limit_evicts_oldest() {
        let mut history = History::new(snap(0), Some(3));

        for len in 1..=5 {
            history.commit(snap(len));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);

        assert_eq!(history.undo().map(|s| s.len), Some(4));
        assert_eq!(history.undo().map(|s| s.len), Some(3));
        assert!(history.undo().is_none());
    }

    #[test]
    fn zero_limit_keeps_current() {
        let mut history = History::new(snap(0), Some(0));

        history.commit(snap(1));

        assert_eq!(history.len(), 1);
        assert_eq!(history.current().len, 1);
        assert!(!history.can_undo());
    }
}
