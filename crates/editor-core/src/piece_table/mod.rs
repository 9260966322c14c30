/// # Piece Table Module.
///
/// An ordered list of [`piece::Piece`]s over two stores: the origin text and
/// the append-only add buffer. Reading the pieces in order yields the document.
pub mod piece;
pub mod table;

/// Initial capacity reserved for the add store.
pub const BASELINE_CAPACITY: usize = 4096;
