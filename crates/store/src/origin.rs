/// The text a document was created with.
///
/// Filled once at construction; there is no mutating method.
#[derive(Debug, Clone, Default)]
pub struct OriginStore {
    bytes: Box<[u8]>,
}

impl OriginStore {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            bytes: text.into().into_bytes().into_boxed_slice(),
        }
    }
}

impl crate::Store for OriginStore {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<&str> for OriginStore {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
