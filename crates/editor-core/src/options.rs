/// Tuning knobs for an [`crate::editor::Editor`].
///
/// ```
/// let options = editor_core::options::EditorOptions::default()
///     .with_history_limit(Some(64))
///     .with_coalesce_inserts(false);
///
/// assert_eq!(options.history_limit, Some(64));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Bytes reserved up front for the add store.
    pub add_capacity: usize,
    /// Maximum number of snapshots kept, the current one included.
    /// `None` keeps everything.
    pub history_limit: Option<usize>,
    /// Extend the add piece right before an insertion point instead of
    /// creating a new piece when the new bytes directly follow it.
    pub coalesce_inserts: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            add_capacity: crate::piece_table::BASELINE_CAPACITY,
            history_limit: None,
            coalesce_inserts: true,
        }
    }
}

impl EditorOptions {
    #[must_use]
    pub fn with_add_capacity(mut self, add_capacity: usize) -> Self {
        self.add_capacity = add_capacity;
        self
    }

    #[must_use]
    pub fn with_history_limit(mut self, history_limit: Option<usize>) -> Self {
        self.history_limit = history_limit;
        self
    }

    #[must_use]
    pub fn with_coalesce_inserts(mut self, coalesce_inserts: bool) -> Self {
        self.coalesce_inserts = coalesce_inserts;
        self
    }
}
