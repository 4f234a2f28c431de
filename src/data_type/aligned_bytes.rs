use core::ops::{Deref, DerefMut};

use elain::{Align, Alignment};

/// A length `N` byte array that guarantees an alignment of `ALIGN`.
///
/// Useful as backing storage for overlaying naturally aligned
/// [`Ordered`](super::Ordered) values with
/// [`Plain::ref_from_bytes`](crate::traits::Plain::ref_from_bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct AlignedBytes<const ALIGN: usize, const N: usize>
where
    Align<ALIGN>: Alignment,
{
    _alignment: Align<ALIGN>,
    value: [u8; N],
}

impl<const ALIGN: usize, const N: usize> AlignedBytes<ALIGN, N>
where
    Align<ALIGN>: Alignment,
{
    pub const fn new() -> Self {
        Self::from_bytes([0; N])
    }

    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        AlignedBytes {
            _alignment: Align::NEW,
            value: bytes,
        }
    }

    pub fn into_bytes(self) -> [u8; N] {
        self.value
    }
}

impl<const ALIGN: usize, const N: usize> Default for AlignedBytes<ALIGN, N>
where
    Align<ALIGN>: Alignment,
{
    fn default() -> Self {
        Self::new()
    }
}

// -------------------------
// Deref Impls
// -------------------------
impl<const ALIGN: usize, const N: usize> Deref for AlignedBytes<ALIGN, N>
where
    Align<ALIGN>: Alignment,
{
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<const ALIGN: usize, const N: usize> DerefMut for AlignedBytes<ALIGN, N>
where
    Align<ALIGN>: Alignment,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}
