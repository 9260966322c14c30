/// An editable document with linear undo/redo.
///
/// Every mutating method returns `&mut Self` so calls chain:
///
/// ```
/// let mut editor = editor_core::Editor::new("A span of text");
///
/// editor.insert(10, "English ").insert(0, "This is ").undo();
/// assert_eq!(editor.text(), "A span of English text");
/// ```
///
/// None of them fail. Out-of-range input is clamped or ignored:
///
/// - `insert` past the end appends; inserting `""` does nothing.
/// - `delete` starting at or past the end does nothing; a length running
///   past the end is clamped.
/// - `undo` at the oldest state and `redo` without a pending undo do nothing.
///
/// Offsets are byte positions. Nothing here knows about lines or characters.
#[derive(Debug)]
pub struct Editor {
    table: crate::piece_table::table::PieceTable,
    history: crate::history::History,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new("")
    }
}

/*

==================================
============ CREATION ============
==================================

*/

impl Editor {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_options(text, crate::options::EditorOptions::default())
    }

    #[must_use]
    pub fn with_options(text: impl Into<String>, options: crate::options::EditorOptions) -> Self {
        let table = crate::piece_table::table::PieceTable::new(text, &options);
        let history = crate::history::History::new(table.snapshot(), options.history_limit);

        tracing::debug!(len = table.len(), ?options, "editor created");

        Self { table, history }
    }
}

/*

==================================
============ EDITING =============
==================================

*/

impl Editor {
    /// Inserts `text` at byte `position`.
    pub fn insert(&mut self, position: usize, text: &str) -> &mut Self {
        match self.table.insert(position, text.as_bytes()) {
            Ok(true) => self.commit(),
            Ok(false) => {}
            Err(err) => tracing::error!(%err, position, "insert abandoned"),
        }

        self
    }

    /// Removes `length` bytes starting at byte `offset`.
    pub fn delete(&mut self, offset: usize, length: usize) -> &mut Self {
        match self.table.delete(offset, length) {
            Ok(true) => self.commit(),
            Ok(false) => {}
            Err(err) => tracing::error!(%err, offset, length, "delete abandoned"),
        }

        self
    }

    /// Reverts the latest edit still in history.
    pub fn undo(&mut self) -> &mut Self {
        if let Some(snapshot) = self.history.undo() {
            self.table.restore(snapshot);

            tracing::debug!(cursor = self.history.cursor(), "undo");
        }

        self
    }

    /// Re-applies the latest undone edit, unless an edit happened since.
    pub fn redo(&mut self) -> &mut Self {
        if let Some(snapshot) = self.history.redo() {
            self.table.restore(snapshot);

            tracing::debug!(cursor = self.history.cursor(), "redo");
        }

        self
    }

    fn commit(&mut self) {
        debug_assert_eq!(self.table.validate(), Ok(()));

        self.history.commit(self.table.snapshot());
    }
}

/*

==================================
============ READING =============
==================================

*/

impl Editor {
    /// The full document.
    ///
    /// Byte offsets may cut through multi-byte characters; such sequences
    /// come out as U+FFFD.
    ///
    /// # Panics
    ///
    /// Panics if the piece table is corrupt, which only a bug in this crate
    /// can cause. Use [`Editor::try_text`] to get the error instead.
    #[must_use]
    pub fn text(&self) -> String {
        self.try_text()
            .unwrap_or_else(|err| panic!("piece table corrupt: {err}"))
    }

    /// Like [`Editor::text`], returning internal errors instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::TableError`] if a piece points outside its store.
    pub fn try_text(&self) -> crate::errors::TableResult<String> {
        Ok(into_string(self.table.to_bytes()?))
    }

    /// Up to `len` bytes of the document starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::TableError`] if a piece points outside its store.
    pub fn text_range(&self, offset: usize, len: usize) -> crate::errors::TableResult<String> {
        Ok(into_string(self.table.get_bytes_at(offset, len)?))
    }

    /// The bytes of each piece, in document order.
    pub fn chunks(&self) -> impl Iterator<Item = crate::errors::TableResult<&[u8]>> + '_ {
        self.table.iter_bytes()
    }

    /// Document length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self) -> &[crate::piece_table::piece::Piece] {
        self.table.pieces()
    }

    #[inline]
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.table.pieces().len()
    }

    #[inline]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[inline]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of snapshots held, the initial one and any redo branch included.
    #[inline]
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Checks the piece table's invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> crate::errors::TableResult<()> {
        self.table.validate()
    }
}

impl std::fmt::Display for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self.try_text().map_err(|_| std::fmt::Error)?;

        f.write_str(&text)
    }
}

fn into_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
