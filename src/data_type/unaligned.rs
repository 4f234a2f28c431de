use core::fmt::{self, Debug};

use super::{ByteOrder, Ordered, Scalar};
use crate::traits::Plain;

/// An unaligned version of the given type `T`.
/// Note that `T` must:
/// - Implement [`Plain`]
/// - Must be [`Copy`]
///
/// `Unaligned<Ordered<T, O>>` is the 1-byte packed form of an ordered scalar,
/// for wire formats that place fields at arbitrary offsets.
#[repr(C, packed)] // Using repr(packed) (unsafe in general) here is fine because T:Copy
pub struct Unaligned<T: Plain>(T);

impl<T: Plain> Unaligned<T> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub fn value(self) -> T {
        self.0
    }

    pub fn set(&mut self, value: T) {
        self.0 = value;
    }
}

impl<T: Scalar, O: ByteOrder> Unaligned<Ordered<T, O>> {
    /// Decodes the wrapped value.
    pub fn to_native(self) -> T {
        self.value().to_native()
    }

    /// Encodes a native value into a packed slot.
    pub fn from_native(value: T) -> Self {
        Self::new(Ordered::from_native(value))
    }
}

impl<T: Plain> Clone for Unaligned<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Plain> Copy for Unaligned<T> {}

impl<T: Plain + Debug> Debug for Unaligned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        f.debug_tuple("Unaligned").field(&value).finish()
    }
}

impl<T: Plain + PartialEq> PartialEq for Unaligned<T> {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = (self.0, other.0);
        lhs == rhs
    }
}

impl<T: Plain + Eq> Eq for Unaligned<T> {}

impl<T: Plain> From<T> for Unaligned<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::{u16_be, u64_le};

    #[test]
    fn test_packed_layout() {
        assert_eq!(core::mem::size_of::<Unaligned<u64_le>>(), 8);
        assert_eq!(core::mem::align_of::<Unaligned<u64_le>>(), 1);
    }

    #[test]
    fn test_overlay_at_odd_offset() {
        let buf = [0u8, 0x12, 0x34];
        let value = Unaligned::<u16_be>::ref_from_bytes(&buf[1..]).unwrap();
        assert_eq!(value.to_native(), 0x1234);
        assert_eq!(format!("{value:?}"), "Unaligned(BE(4660))");
    }

    #[test]
    fn test_native_round_trip() {
        let mut slot = Unaligned::<u64_le>::from_native(0x0102_0304_0506_0708);
        assert_eq!(slot.as_bytes(), &[8, 7, 6, 5, 4, 3, 2, 1]);
        slot.set(u64_le::new(9));
        assert_eq!(slot, Unaligned::from(u64_le::new(9)));
    }
}
