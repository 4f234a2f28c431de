use core::{mem, ptr, slice};

use crate::data_type::{ByteOrder, Ordered, Scalar, Unaligned};
use crate::error::LayoutError;

pub use tagged_endian_macro::Plain;

/// A type that can be viewed as, and rebuilt from, its raw bytes.
///
/// This is what lets [`Ordered`] values (and structs made of them) be laid
/// directly over wire or file buffers: no conversion logic runs when the
/// bytes are reinterpreted.
///
/// # Safety
/// Conditions to be safely implemented:
/// - Every bit pattern of `size_of::<Self>()` bytes is a valid `Self`.
/// - `Self` has no padding bytes.
/// - `Self` has no interior mutability and no drop glue.
///
/// The [derive macro](tagged_endian_macro::Plain) checks these requirements
/// for `#[repr(C)]` structs whose fields are all `Plain`, so you should
/// prefer using that.
pub unsafe trait Plain: Copy + 'static {
    fn as_bytes(&self) -> &[u8] {
        // SAFETY: `Self` has no padding, so all of its bytes are initialized.
        unsafe { slice::from_raw_parts(self as *const Self as *const u8, mem::size_of::<Self>()) }
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        // SAFETY: as above, and any bytes written back form a valid `Self`.
        unsafe { slice::from_raw_parts_mut(self as *mut Self as *mut u8, mem::size_of::<Self>()) }
    }

    /// Views `bytes` as a `Self`. The buffer must have exactly the size and
    /// at least the alignment of `Self`.
    fn ref_from_bytes(bytes: &[u8]) -> Result<&Self, LayoutError> {
        LayoutError::check_size::<Self>(bytes.len())?;
        LayoutError::check_alignment::<Self>(bytes.as_ptr())?;
        // SAFETY: size and alignment were checked, and any bytes are valid.
        Ok(unsafe { &*(bytes.as_ptr() as *const Self) })
    }

    /// Mutable counterpart of [`ref_from_bytes`](Self::ref_from_bytes).
    fn mut_from_bytes(bytes: &mut [u8]) -> Result<&mut Self, LayoutError> {
        LayoutError::check_size::<Self>(bytes.len())?;
        LayoutError::check_alignment::<Self>(bytes.as_ptr())?;
        // SAFETY: size and alignment were checked, and any bytes are valid.
        Ok(unsafe { &mut *(bytes.as_mut_ptr() as *mut Self) })
    }

    /// Copies a `Self` out of `bytes`, which may be unaligned.
    fn read_from(bytes: &[u8]) -> Result<Self, LayoutError> {
        LayoutError::check_size::<Self>(bytes.len())?;
        // SAFETY: the size was checked and any bytes are valid.
        Ok(unsafe { ptr::read_unaligned(bytes.as_ptr() as *const Self) })
    }

    /// Copies the bytes of `self` into `dst`, which must have exactly the
    /// size of `Self`.
    fn write_to(&self, dst: &mut [u8]) -> Result<(), LayoutError> {
        LayoutError::check_size::<Self>(dst.len())?;
        dst.copy_from_slice(self.as_bytes());
        Ok(())
    }
}

/// Automates boilerplate for implementing Plain on built-in number types
macro_rules! impl_plain {
    ($($ty:ty),*) => {
        $(
            unsafe impl Plain for $ty {}
        )*
    };
}

impl_plain!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

unsafe impl<const N: usize, T: Plain> Plain for [T; N] {}

unsafe impl<T: Scalar, O: ByteOrder> Plain for Ordered<T, O> {}

unsafe impl<T: Plain> Plain for Unaligned<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::{AlignedBytes, Big, Little, u16_be, u32_be, u32_le};

    #[test]
    fn test_ordered_bytes_view() {
        let mut value = u32_be::new(0x0102_0304);
        assert_eq!(value.as_bytes(), &[1, 2, 3, 4]);
        value.as_bytes_mut()[3] = 0x05;
        assert_eq!(value.to_native(), 0x0102_0305);
    }

    #[test]
    fn test_overlay_on_aligned_buffer() {
        let mut buf = AlignedBytes::<4, 4>::from_bytes([0xDE, 0xAD, 0xBE, 0xEF]);
        let value = u32_be::ref_from_bytes(&buf[..]).unwrap();
        assert_eq!(value.to_native(), 0xDEAD_BEEF);

        let value = u32_le::mut_from_bytes(&mut buf[..]).unwrap();
        value.set(1);
        assert_eq!(*buf, [1, 0, 0, 0]);
    }

    #[test]
    fn test_overlay_rejects_bad_buffers() {
        let buf = AlignedBytes::<8, 8>::new();
        assert_eq!(
            u32_be::ref_from_bytes(&buf[..3]),
            Err(LayoutError::Size {
                expected: 4,
                actual: 3
            })
        );
        assert!(matches!(
            u32_be::ref_from_bytes(&buf[1..5]),
            Err(LayoutError::Alignment { required: 4, .. })
        ));
    }

    #[test]
    fn test_unaligned_read_and_write() {
        let buf = [0xFFu8, 0x12, 0x34, 0x56, 0x78];
        let value = u32_be::read_from(&buf[1..]).unwrap();
        assert_eq!(value.to_native(), 0x1234_5678);

        let mut out = [0u8; 2];
        u16_be::new(0xABCD).write_to(&mut out).unwrap();
        assert_eq!(out, [0xAB, 0xCD]);
        assert!(u16_be::new(1).write_to(&mut [0u8; 3]).is_err());
    }

    #[test]
    fn test_arrays_are_plain() {
        let values = [Ordered::<u16, Big>::new(1), Ordered::<u16, Big>::new(2)];
        assert_eq!(values.as_bytes(), &[0, 1, 0, 2]);

        let unaligned = [Unaligned::new(Ordered::<u32, Little>::new(7)); 2];
        assert_eq!(unaligned.as_bytes().len(), 8);
        assert_eq!(core::mem::align_of_val(&unaligned), 1);
    }
}
