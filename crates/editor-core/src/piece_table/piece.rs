/// A contiguous run of bytes in one of the two stores.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub buf_kind: crate::enums::BufferKind,
    pub range: std::ops::Range<usize>,
}

impl Piece {
    #[inline]
    #[must_use]
    pub fn new(buf_kind: crate::enums::BufferKind, range: std::ops::Range<usize>) -> Self {
        Self { buf_kind, range }
    }

    /// Offset of the first byte inside its store.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.range.start
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.end - self.range.start
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.start == self.range.end
    }

    /// Sub-piece covering `within`, given relative to this piece's first byte.
    #[inline]
    #[must_use]
    pub fn slice(&self, within: std::ops::Range<usize>) -> Self {
        Self {
            buf_kind: self.buf_kind,
            range: self.range.start + within.start..self.range.start + within.end,
        }
    }

    /// Left fragment and right residue around the relative offset `at`.
    #[inline]
    #[must_use]
    pub fn split_at(&self, at: usize) -> (Self, Self) {
        (self.slice(0..at), self.slice(at..self.len()))
    }

    /// True if `next` continues this piece in the same store.
    #[inline]
    #[must_use]
    pub fn is_followed_by(&self, next: &Self) -> bool {
        self.buf_kind == next.buf_kind && self.range.end == next.range.start
    }
}

#[cfg(test)]
mod tests {
    use crate::enums::BufferKind;

    #[test]
    fn split_keeps_source_and_offsets() {
        let piece = super::Piece::new(BufferKind::Original, 4..10);
        let (left, right) = piece.split_at(2);

        assert_eq!(left, super::Piece::new(BufferKind::Original, 4..6));
        assert_eq!(right, super::Piece::new(BufferKind::Original, 6..10));
        assert_eq!(left.len() + right.len(), piece.len());
    }

    #[test]
    fn followed_by_requires_same_store() {
        let add = super::Piece::new(BufferKind::Add, 0..3);

        assert!(add.is_followed_by(&super::Piece::new(BufferKind::Add, 3..5)));
        assert!(!add.is_followed_by(&super::Piece::new(BufferKind::Original, 3..5)));
        assert!(!add.is_followed_by(&super::Piece::new(BufferKind::Add, 4..5)));
    }
}
