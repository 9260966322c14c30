#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("read of {len} bytes at offset {offset} is outside the store (len={store_len})")]
    OutOfRange {
        offset: usize,
        len: usize,
        store_len: usize,
    },
    #[error("arithmetic overflow computing store range")]
    Overflow,
}
