/// Append-only buffer storing every run of inserted bytes, in insertion order.
///
/// Nothing is ever removed or overwritten, so a range handed out by
/// [`AddStore::append`] keeps pointing at the same bytes forever.
#[derive(Debug, Clone, Default)]
pub struct AddStore {
    buf: Vec<u8>,
}

impl AddStore {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Appends `bytes` and returns the range they now occupy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError::Overflow`] if the store would grow past
    /// `usize::MAX` bytes.
    pub fn append(&mut self, bytes: &[u8]) -> Result<std::ops::Range<usize>, crate::StoreError> {
        let start = self.buf.len();
        let end = start
            .checked_add(bytes.len())
            .ok_or(crate::StoreError::Overflow)?;

        self.buf.extend_from_slice(bytes);

        Ok(start..end)
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }
}

impl crate::Store for AddStore {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use crate::Store;

    #[test]
    fn append_returns_consecutive_ranges() {
        let mut add = super::AddStore::default();

        assert_eq!(add.append(b"Hello").unwrap(), 0..5);
        assert_eq!(add.append(b"World").unwrap(), 5..10);
        assert_eq!(add.append(b"").unwrap(), 10..10);
        assert_eq!(add.len(), 10);
    }

    #[test]
    fn earlier_ranges_survive_reallocation() {
        let mut add = super::AddStore::with_capacity(1);
        let first = add.append(b"abc").unwrap();

        for _ in 0..64 {
            add.append(&[b'z'; 128]).unwrap();
        }

        assert_eq!(add.read(first.start, first.len()).unwrap(), b"abc");
    }
}
