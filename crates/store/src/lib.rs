//! # Buffer stores backing a piece table.
//!
//! - [`origin::OriginStore`] holds the text a document was created with and is
//!   never written to again.
//! - [`add::AddStore`] accumulates every inserted run of bytes, append-only.
//!
//! Both hand out byte slices through the [`Store`] trait. Offsets returned by
//! [`add::AddStore::append`] stay valid for the lifetime of the store, even
//! when the backing `Vec` reallocates.
pub mod add;
pub mod errors;
pub mod origin;

pub use add::AddStore;
pub use errors::StoreError;
pub use origin::OriginStore;

pub trait Store {
    /// Every byte currently held by the store.
    fn as_slice(&self) -> &[u8];

    /// Store length in bytes.
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// STRICT: Gets exactly `len` bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Overflow`] if `offset + len` does not fit in `usize`.
    /// - [`StoreError::OutOfRange`] if the range ends past the store.
    #[inline]
    fn read(&self, offset: usize, len: usize) -> Result<&[u8], StoreError> {
        let end = offset.checked_add(len).ok_or(StoreError::Overflow)?;

        self.as_slice()
            .get(offset..end)
            .ok_or(StoreError::OutOfRange {
                offset,
                len,
                store_len: self.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Store;

    #[test]
    fn read_inside_bounds() {
        let origin = crate::OriginStore::new("foobar");

        assert_eq!(origin.read(0, 3).unwrap(), b"foo");
        assert_eq!(origin.read(3, 3).unwrap(), b"bar");
        assert_eq!(origin.read(6, 0).unwrap(), b"");
    }

    #[test]
    fn read_past_end_is_out_of_range() {
        let origin = crate::OriginStore::new("foobar");

        assert_eq!(
            origin.read(4, 3),
            Err(crate::StoreError::OutOfRange {
                offset: 4,
                len: 3,
                store_len: 6
            })
        );
    }

    #[test]
    fn read_overflowing_range() {
        let origin = crate::OriginStore::new("x");

        assert_eq!(origin.read(1, usize::MAX), Err(crate::StoreError::Overflow));
    }
}
