use store::Store;

#[derive(Debug)]
pub struct PieceTable {
    /// Text the document was created with. Never written to.
    original: store::OriginStore,
    /// Append-only buffer storing every inserted run.
    add: store::AddStore,
    /// Ordered list of pieces describing the visible document.
    pieces: Vec<crate::piece_table::piece::Piece>,
    /// Tracked document length, checked against the pieces by `validate`.
    len: usize,
    coalesce_inserts: bool,
}

/// Where a new piece goes, decided before anything is mutated.
enum Placement {
    /// Between two pieces (or at either end); `idx` is the slot it takes.
    Boundary { idx: usize },
    /// Inside the piece at `idx`, `at` bytes from its start.
    Split { idx: usize, at: usize },
}

/*

====================================
========= CREATION METHOD ==========
====================================

*/

impl PieceTable {
    #[must_use]
    pub fn new(text: impl Into<String>, options: &crate::options::EditorOptions) -> Self {
        let original = store::OriginStore::new(text);
        let len = original.len();
        let mut pieces = Vec::new();

        if len > 0 {
            pieces.push(crate::piece_table::piece::Piece::new(
                crate::enums::BufferKind::Original,
                0..len,
            ));
        }

        Self {
            original,
            add: store::AddStore::with_capacity(options.add_capacity),
            pieces,
            len,
            coalesce_inserts: options.coalesce_inserts,
        }
    }
}

/*

====================================
========= INLINE METHODS  ==========
====================================

*/

impl PieceTable {
    /// Total document length in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self) -> &[crate::piece_table::piece::Piece] {
        &self.pieces
    }

    /// Finds the piece containing absolute byte `pos`.
    ///
    /// Returns the piece index and the absolute position of its first byte,
    /// or `None` when `pos` is at or past the end of the document.
    #[inline]
    #[must_use]
    pub fn locate(&self, pos: usize) -> Option<(usize, usize)> {
        let mut running = 0;

        for (idx, piece) in self.pieces.iter().enumerate() {
            let piece_end = running + piece.len();

            if pos < piece_end {
                return Some((idx, running));
            }

            running = piece_end;
        }

        None
    }

    /// The bytes `piece` refers to.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::TableError::Store`] if the piece reaches
    /// outside its store.
    #[inline]
    pub fn slice_of(
        &self,
        piece: &crate::piece_table::piece::Piece,
    ) -> crate::errors::TableResult<&[u8]> {
        let bytes = match piece.buf_kind {
            crate::enums::BufferKind::Original => {
                self.original.read(piece.offset(), piece.len())?
            }
            crate::enums::BufferKind::Add => self.add.read(piece.offset(), piece.len())?,
        };

        Ok(bytes)
    }
}

/*

=====================================
========= INSERT / DELETE  ==========
=====================================

*/

impl PieceTable {
    fn placement(&self, pos: usize) -> crate::errors::TableResult<Placement> {
        if pos == 0 {
            return Ok(Placement::Boundary { idx: 0 });
        }

        if pos >= self.len {
            return Ok(Placement::Boundary {
                idx: self.pieces.len(),
            });
        }

        let (idx, piece_start) = self
            .locate(pos)
            .ok_or(crate::errors::TableError::Unlocatable { pos })?;
        let at = pos - piece_start;

        if at == 0 {
            Ok(Placement::Boundary { idx })
        } else {
            Ok(Placement::Split { idx, at })
        }
    }

    /// Puts `new_piece` into slot `idx`, or grows the piece before that slot
    /// when the new bytes continue it.
    fn insert_at_boundary(&mut self, idx: usize, new_piece: crate::piece_table::piece::Piece) {
        if self.coalesce_inserts
            && let Some(prev) = idx.checked_sub(1).and_then(|i| self.pieces.get_mut(i))
            && prev.is_followed_by(&new_piece)
        {
            prev.range.end = new_piece.range.end;

            return;
        }

        self.pieces.insert(idx, new_piece);
    }

    /// Inserts `bytes` at absolute `pos`. Positions past the end append.
    ///
    /// Returns `false` without touching anything when `bytes` is empty.
    ///
    /// # Errors
    ///
    /// Fails only on internal inconsistencies or length overflow; the table
    /// is left unchanged in that case.
    pub fn insert(&mut self, pos: usize, bytes: &[u8]) -> crate::errors::TableResult<bool> {
        if bytes.is_empty() {
            tracing::trace!(pos, "empty insert ignored");

            return Ok(false);
        }

        let new_len = self
            .len
            .checked_add(bytes.len())
            .ok_or(crate::errors::TableError::Overflow)?;
        let placement = self.placement(pos)?;
        let range = self.add.append(bytes)?;
        let new_piece =
            crate::piece_table::piece::Piece::new(crate::enums::BufferKind::Add, range);

        match placement {
            Placement::Boundary { idx } => self.insert_at_boundary(idx, new_piece),
            Placement::Split { idx, at } => {
                let (left, right) = self.pieces[idx].split_at(at);

                self.pieces.splice(idx..=idx, [left, new_piece, right]);
            }
        }

        self.len = new_len;

        tracing::trace!(
            pos,
            len = bytes.len(),
            pieces = self.pieces.len(),
            "inserted"
        );

        Ok(true)
    }

    /// Deletes `len` bytes starting at absolute `pos`.
    ///
    /// A `pos` at or past the end, or a zero `len`, changes nothing and
    /// returns `false`. A `len` running past the end is clamped.
    ///
    /// # Errors
    ///
    /// Fails only on internal inconsistencies; the table is left unchanged
    /// in that case.
    pub fn delete(&mut self, pos: usize, len: usize) -> crate::errors::TableResult<bool> {
        if pos >= self.len || len == 0 {
            tracing::trace!(pos, len, doc_len = self.len, "delete out of range ignored");

            return Ok(false);
        }

        let len = len.min(self.len - pos);
        let last = pos + len - 1;
        let (start_idx, start_piece_pos) = self
            .locate(pos)
            .ok_or(crate::errors::TableError::Unlocatable { pos })?;
        let (end_idx, end_piece_pos) = self
            .locate(last)
            .ok_or(crate::errors::TableError::Unlocatable { pos: last })?;

        let start_piece = &self.pieces[start_idx];
        let end_piece = &self.pieces[end_idx];
        // Bytes kept at the front of the start piece and removed from the
        // front of the end piece.
        let prefix = pos - start_piece_pos;
        let cut = last - end_piece_pos + 1;

        let mut survivors = Vec::with_capacity(2);

        if prefix > 0 {
            survivors.push(start_piece.slice(0..prefix));
        }

        if cut < end_piece.len() {
            survivors.push(end_piece.slice(cut..end_piece.len()));
        }

        self.pieces.splice(start_idx..=end_idx, survivors);
        self.len -= len;

        tracing::trace!(
            pos,
            len,
            removed_pieces = end_idx - start_idx + 1,
            pieces = self.pieces.len(),
            "deleted"
        );

        Ok(true)
    }
}

/*

====================================
========= SNAPSHOT / RESTORE =======
====================================

*/

impl PieceTable {
    #[must_use]
    pub fn snapshot(&self) -> crate::history::Snapshot {
        crate::history::Snapshot {
            pieces: self.pieces.clone(),
            len: self.len,
        }
    }

    /// Replaces the piece list with a previously committed one.
    ///
    /// Both stores only ever grow, so every snapshot taken from this table
    /// still points at valid bytes.
    pub fn restore(&mut self, snapshot: &crate::history::Snapshot) {
        self.pieces.clone_from(&snapshot.pieces);
        self.len = snapshot.len;
    }

    /// Checks that no piece is empty, every piece lies inside its store and
    /// the pieces add up to the tracked length.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> crate::errors::TableResult<()> {
        let mut actual = 0usize;

        for (index, piece) in self.pieces.iter().enumerate() {
            if piece.is_empty() {
                return Err(crate::errors::TableError::EmptyPiece { index });
            }

            self.slice_of(piece)?;
            actual += piece.len();
        }

        if actual != self.len {
            return Err(crate::errors::TableError::LengthMismatch {
                tracked: self.len,
                actual,
            });
        }

        Ok(())
    }
}

/*

====================================
========== MATERIALIZE =============
====================================

*/

impl PieceTable {
    /// Yields the bytes of each piece in document order.
    pub fn iter_bytes(&self) -> impl Iterator<Item = crate::errors::TableResult<&[u8]>> + '_ {
        self.pieces.iter().map(move |piece| self.slice_of(piece))
    }

    /// The whole document as one byte vector.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::TableError::Store`] if a piece is corrupt.
    pub fn to_bytes(&self) -> crate::errors::TableResult<Vec<u8>> {
        let mut res = Vec::with_capacity(self.len);

        for chunk in self.iter_bytes() {
            res.extend_from_slice(chunk?);
        }

        Ok(res)
    }

    /// Up to `len` bytes starting at absolute `pos`; clamped to the document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::TableError::Store`] if a piece is corrupt.
    pub fn get_bytes_at(
        &self,
        mut pos: usize,
        mut len: usize,
    ) -> crate::errors::TableResult<Vec<u8>> {
        let mut res = Vec::with_capacity(len.min(self.len.saturating_sub(pos)));

        for piece in &self.pieces {
            if len == 0 {
                break;
            }

            let piece_len = piece.len();

            if pos >= piece_len {
                pos -= piece_len;

                continue;
            }

            let take = (piece_len - pos).min(len);

            res.extend_from_slice(self.slice_of(&piece.slice(pos..pos + take))?);

            len -= take;
            pos = 0;
        }

        Ok(res)
    }
}
