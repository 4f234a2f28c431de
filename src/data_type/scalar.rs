//! Scalar types that can be stored in an [`Ordered`](super::Ordered) value.
//!
//! Both traits are sealed: only the built-in integers and IEEE-754 floats of
//! width 1, 2, 4 or 8 bytes qualify, so any other payload type is rejected at
//! compile time.

use core::{
    fmt::{Binary, Debug, Display, LowerHex, Octal, UpperHex},
    hash::Hash,
    ops::{BitAnd, BitOr, BitXor, Not},
};

use crate::swap::ByteSwap;

mod sealed {
    pub trait SealedScalar {}
    pub trait SealedBits {}
}

/// An unsigned bit pattern with the width of some [`Scalar`].
///
/// This is the storage type of an `Ordered` value: the pattern held in memory
/// is already laid out in the declared byte order.
pub trait Bits:
    sealed::SealedBits
    + ByteSwap
    + Copy
    + Eq
    + Hash
    + Debug
    + Default
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// `[u8; N]` where `N` is the width of the pattern.
    type Bytes: Copy + Default + Debug + Eq + Hash + AsRef<[u8]> + AsMut<[u8]>;

    /// The pattern's bytes, in memory order.
    fn to_ne_bytes(self) -> Self::Bytes;

    /// Rebuilds a pattern from bytes in memory order.
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_bits {
    ($($ty:ty),*) => {
        $(
            impl sealed::SealedBits for $ty {}

            impl Bits for $ty {
                type Bytes = [u8; core::mem::size_of::<$ty>()];

                #[inline]
                fn to_ne_bytes(self) -> Self::Bytes {
                    <$ty>::to_ne_bytes(self)
                }

                #[inline]
                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_bits!(u8, u16, u32, u64);

/// A fixed-width, trivially copyable number.
///
/// The arithmetic hooks carry the native semantics an `Ordered` value
/// promises: integers wrap modulo `2^(8 * SIZE)`, floats follow IEEE-754.
pub trait Scalar:
    sealed::SealedScalar
    + Copy
    + PartialEq
    + PartialOrd
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// The unsigned pattern of the same width.
    type Bits: Bits;

    /// Width in bytes.
    const SIZE: usize = core::mem::size_of::<Self>();

    /// `false` for floats.
    const IS_INTEGER: bool;

    const ONE: Self;

    /// Reinterprets the value as its bit pattern.
    fn to_bits(self) -> Self::Bits;

    /// Reinterprets a bit pattern as a value.
    fn from_bits(bits: Self::Bits) -> Self;

    fn add_native(self, rhs: Self) -> Self;
    fn sub_native(self, rhs: Self) -> Self;
    fn mul_native(self, rhs: Self) -> Self;

    /// Integer division panics on a zero divisor, like the primitive.
    fn div_native(self, rhs: Self) -> Self;

    /// Integer remainder panics on a zero divisor, like the primitive.
    fn rem_native(self, rhs: Self) -> Self;
}

/// A [`Scalar`] whose bits may be manipulated directly.
pub trait Integer: Scalar + Eq + Ord + Hash + LowerHex + UpperHex + Binary + Octal {
    /// Left shift; the shift amount is taken modulo the bit width.
    fn shl_native(self, n: usize) -> Self;

    /// Right shift (arithmetic for signed types); the shift amount is taken
    /// modulo the bit width.
    fn shr_native(self, n: usize) -> Self;
}

/// A [`Scalar`] with a negation.
pub trait SignedScalar: Scalar {
    /// Wraps for `MIN` of signed integers.
    fn neg_native(self) -> Self;
}

macro_rules! impl_integer {
    ($($ty:ty => $bits:ty),*) => {
        $(
            impl sealed::SealedScalar for $ty {}

            impl Scalar for $ty {
                type Bits = $bits;

                const IS_INTEGER: bool = true;

                const ONE: Self = 1;

                #[inline]
                fn to_bits(self) -> $bits {
                    self as $bits
                }

                #[inline]
                fn from_bits(bits: $bits) -> Self {
                    bits as $ty
                }

                #[inline]
                fn add_native(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn sub_native(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn mul_native(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn div_native(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }

                #[inline]
                fn rem_native(self, rhs: Self) -> Self {
                    self.wrapping_rem(rhs)
                }
            }

            impl Integer for $ty {
                #[inline]
                fn shl_native(self, n: usize) -> Self {
                    self.wrapping_shl(n as u32)
                }

                #[inline]
                fn shr_native(self, n: usize) -> Self {
                    self.wrapping_shr(n as u32)
                }
            }
        )*
    };
}

impl_integer!(
    u8 => u8, u16 => u16, u32 => u32, u64 => u64,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64
);

macro_rules! impl_signed_integer {
    ($($ty:ty),*) => {
        $(
            impl SignedScalar for $ty {
                #[inline]
                fn neg_native(self) -> Self {
                    self.wrapping_neg()
                }
            }
        )*
    };
}

impl_signed_integer!(i8, i16, i32, i64);

macro_rules! impl_float {
    ($($ty:ty => $bits:ty),*) => {
        $(
            impl sealed::SealedScalar for $ty {}

            impl Scalar for $ty {
                type Bits = $bits;

                const IS_INTEGER: bool = false;

                const ONE: Self = 1.0;

                #[inline]
                fn to_bits(self) -> $bits {
                    <$ty>::to_bits(self)
                }

                #[inline]
                fn from_bits(bits: $bits) -> Self {
                    <$ty>::from_bits(bits)
                }

                #[inline]
                fn add_native(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn sub_native(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn mul_native(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn div_native(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn rem_native(self, rhs: Self) -> Self {
                    self % rhs
                }
            }

            impl SignedScalar for $ty {
                #[inline]
                fn neg_native(self) -> Self {
                    -self
                }
            }
        )*
    };
}

impl_float!(f32 => u32, f64 => u64);
