//! Byte reversal of fixed-width bit patterns.
//!
//! Byte `k` of the input (counting from the least significant byte) ends up
//! at position `width - 1 - k`. The `bswap*` functions spell this out without
//! loops so they fold away when the argument is a constant.

/// Reverses the two bytes of `x`.
#[inline]
pub const fn bswap16(x: u16) -> u16 {
    (x << 8) | (x >> 8)
}

/// Reverses the four bytes of `x`.
#[inline]
pub const fn bswap32(x: u32) -> u32 {
    ((x & 0x0000_00FF) << 24)
        | ((x & 0x0000_FF00) << 8)
        | ((x & 0x00FF_0000) >> 8)
        | ((x & 0xFF00_0000) >> 24)
}

/// Reverses the eight bytes of `x`.
#[inline]
pub const fn bswap64(x: u64) -> u64 {
    ((x & 0x0000_0000_0000_00FF) << 56)
        | ((x & 0x0000_0000_0000_FF00) << 40)
        | ((x & 0x0000_0000_00FF_0000) << 24)
        | ((x & 0x0000_0000_FF00_0000) << 8)
        | ((x & 0x0000_00FF_0000_0000) >> 8)
        | ((x & 0x0000_FF00_0000_0000) >> 24)
        | ((x & 0x00FF_0000_0000_0000) >> 40)
        | ((x & 0xFF00_0000_0000_0000) >> 56)
}

/// Reverses a byte sequence in place.
///
/// Runtime counterpart of the `bswap*` functions for patterns that are
/// already laid out as bytes. Produces the same result for widths 1, 2, 4
/// and 8.
#[inline]
pub fn reverse_in_place(bytes: &mut [u8]) {
    let len = bytes.len();
    for i in 0..len / 2 {
        bytes.swap(i, len - 1 - i);
    }
}

/// A fixed-width value whose bit pattern can be byte-reversed.
///
/// Floating point values are swapped through their bit pattern, never
/// through their numeric value.
pub trait ByteSwap: Copy {
    /// Returns `self` with its bytes in reverse order.
    fn byte_swap(self) -> Self;
}

impl ByteSwap for u8 {
    #[inline]
    fn byte_swap(self) -> Self {
        self
    }
}

impl ByteSwap for i8 {
    #[inline]
    fn byte_swap(self) -> Self {
        self
    }
}

macro_rules! impl_byte_swap {
    ($($unsigned:ty, $signed:ty => $swap:ident),*) => {
        $(
            impl ByteSwap for $unsigned {
                #[inline]
                fn byte_swap(self) -> Self {
                    $swap(self)
                }
            }

            impl ByteSwap for $signed {
                #[inline]
                fn byte_swap(self) -> Self {
                    $swap(self as $unsigned) as $signed
                }
            }
        )*
    };
}

impl_byte_swap!(u16, i16 => bswap16, u32, i32 => bswap32, u64, i64 => bswap64);

impl ByteSwap for f32 {
    #[inline]
    fn byte_swap(self) -> Self {
        f32::from_bits(bswap32(self.to_bits()))
    }
}

impl ByteSwap for f64 {
    #[inline]
    fn byte_swap(self) -> Self {
        f64::from_bits(bswap64(self.to_bits()))
    }
}
