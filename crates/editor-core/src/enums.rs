/// Which store a [`crate::piece_table::piece::Piece`] reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferKind {
    Original,
    Add,
}
