pub type TableResult<T> = Result<T, TableError>;

/// Failures of the piece table's own bookkeeping.
///
/// None of these are caused by caller input: positions and lengths are
/// clamped before they reach the table. Seeing one means a bug in the core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error(transparent)]
    Store(#[from] store::StoreError),
    #[error("piece {index} is empty")]
    EmptyPiece { index: usize },
    #[error("pieces sum to {actual} bytes but the table tracks {tracked}")]
    LengthMismatch { tracked: usize, actual: usize },
    #[error("no piece covers position {pos}")]
    Unlocatable { pos: usize },
    #[error("arithmetic overflow")]
    Overflow,
}
