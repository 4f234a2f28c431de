//! Scalars tagged with a declared byte order
//!
//! [`Ordered<T, O>`] stores one scalar `T` with its bytes laid out in the
//! order `O` (either [`Big`], [`Little`] or [`Native`]), while reading and
//! computing like a plain `T`.
//!
//! # Examples
//!
//! ```
//! use tagged_endian::prelude::*;
//!
//! // Create a big-endian u32
//! let be_value: U32<Big> = U32::new(0x01020304);
//! assert_eq!(be_value.to_bytes(), [1, 2, 3, 4]);
//!
//! // Convert into a little-endian i16 (the cast behaves like `as`)
//! let le_value: i16_le = be_value.cast();
//! assert_eq!(le_value.to_native(), 0x0304);
//!
//! // Convert back to native representation
//! let native_value: u32 = be_value.into();
//! assert_eq!(native_value, 0x01020304);
//! ```

mod aliases;
mod conversions;
mod num_traits_impl;
mod ops;
mod order;

pub use aliases::*;
pub use order::*;

use core::{
    any::{Any, TypeId},
    cmp::Ordering,
    fmt::{self, Binary, Debug, Display, LowerHex, Octal, UpperHex},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use num_traits::AsPrimitive;

use super::scalar::{Bits, Integer, Scalar};
use crate::swap::ByteSwap;

/// A scalar `T` whose storage is laid out in byte order `O`.
///
/// The struct is `#[repr(transparent)]` over the same-width unsigned pattern
/// of `T`, so it has exactly the size and alignment of `T` and can sit inside
/// `#[repr(C)]` wire structs. Wrap it in
/// [`Unaligned`](crate::data_type::Unaligned) for 1-byte packing.
#[repr(transparent)]
pub struct Ordered<T: Scalar, O: ByteOrder> {
    bits: T::Bits,
    _order: PhantomData<O>,
}

/// Moves a pattern laid out in `Src` into the layout of `Dst`.
///
/// Every conversion of an [`Ordered`] value goes through here, so at most
/// one swap happens per transition.
#[inline]
fn relayout<T: Scalar, Src: ByteOrder, Dst: ByteOrder>(bits: T::Bits) -> T::Bits {
    if T::SIZE > 1 && Src::IS_BIG_ENDIAN != Dst::IS_BIG_ENDIAN {
        bits.byte_swap()
    } else {
        bits
    }
}

/// Adds or subtracts one across bytes laid out in `O`, starting at the least
/// significant byte and carrying toward the most significant one. A carry
/// out of the last byte is dropped, which wraps the value.
fn step_bytes<O: ByteOrder>(bytes: &mut [u8], down: bool) {
    let step = |byte: &mut u8| {
        let (value, carried) = if down {
            byte.overflowing_sub(1)
        } else {
            byte.overflowing_add(1)
        };
        *byte = value;
        carried
    };

    if O::IS_BIG_ENDIAN {
        for byte in bytes.iter_mut().rev() {
            if !step(byte) {
                return;
            }
        }
    } else {
        for byte in bytes.iter_mut() {
            if !step(byte) {
                return;
            }
        }
    }
}

impl<T: Scalar, O: ByteOrder> Ordered<T, O> {
    const SWAPS: bool = O::NEEDS_SWAP && T::SIZE > 1;

    /// Encodes a native value in `O`.
    #[inline]
    pub fn from_native(value: T) -> Self {
        Self::from_raw(relayout::<T, Native, O>(value.to_bits()))
    }

    /// Decodes the stored value.
    #[inline]
    pub fn to_native(self) -> T {
        T::from_bits(relayout::<T, O, Native>(self.bits))
    }

    #[inline]
    pub fn new(value: T) -> Self {
        Self::from_native(value)
    }

    #[inline]
    pub fn get(&self) -> T {
        self.to_native()
    }

    #[inline]
    pub fn set(&mut self, value: T) {
        *self = Self::from_native(value);
    }

    /// Wraps a stored pattern as-is. `bits` must already be in `O`.
    #[inline]
    pub const fn from_raw(bits: T::Bits) -> Self {
        Self {
            bits,
            _order: PhantomData,
        }
    }

    /// The stored pattern, without decoding.
    #[inline]
    pub fn to_raw(self) -> T::Bits {
        self.bits
    }

    /// Rebuilds a value from its stored bytes without decoding them.
    #[inline]
    pub fn from_bytes(bytes: <T::Bits as Bits>::Bytes) -> Self {
        Self::from_raw(Bits::from_ne_bytes(bytes))
    }

    /// The stored bytes, in memory order.
    #[inline]
    pub fn to_bytes(self) -> <T::Bits as Bits>::Bytes {
        self.bits.to_ne_bytes()
    }

    /// The same value laid out in `P`.
    #[inline]
    pub fn reorder<P: ByteOrder>(self) -> Ordered<T, P> {
        Ordered::from_raw(relayout::<T, O, P>(self.bits))
    }

    /// Builds a value from another scalar type and order.
    ///
    /// The source is decoded to its native value, cast with `as` semantics
    /// and encoded in `O`. A source of the same scalar type is relaid out
    /// like [`reorder`](Self::reorder), with at most one swap.
    #[inline]
    pub fn convert<U, P>(other: Ordered<U, P>) -> Self
    where
        U: Scalar + AsPrimitive<T>,
        P: ByteOrder,
    {
        if TypeId::of::<T>() == TypeId::of::<U>() {
            let bits = relayout::<U, P, O>(other.to_raw());
            if let Some(bits) = (&bits as &dyn Any).downcast_ref::<T::Bits>() {
                return Self::from_raw(*bits);
            }
        }
        Self::from_native(other.to_native().as_())
    }

    /// Like [`convert`](Self::convert), but fails instead of truncating.
    #[inline]
    pub fn try_convert<U, P>(other: Ordered<U, P>) -> Result<Self, <T as TryFrom<U>>::Error>
    where
        U: Scalar,
        P: ByteOrder,
        T: TryFrom<U>,
    {
        T::try_from(other.to_native()).map(Self::from_native)
    }

    /// Converts `self` into another scalar type and order, see
    /// [`convert`](Self::convert).
    #[inline]
    pub fn cast<U, P>(self) -> Ordered<U, P>
    where
        U: Scalar,
        P: ByteOrder,
        T: AsPrimitive<U>,
    {
        Ordered::convert(self)
    }

    /// Overwrites `self` with `other` converted to `T` and `O`.
    #[inline]
    pub fn assign_from<U, P>(&mut self, other: Ordered<U, P>)
    where
        U: Scalar + AsPrimitive<T>,
        P: ByteOrder,
    {
        *self = Self::convert(other);
    }

    /// Compares with a value of another scalar type.
    ///
    /// Both sides are decoded and widened to a common type, `i128` when both
    /// are integers (exact) and `f64` otherwise, so operand order does not
    /// change the answer.
    #[inline]
    pub fn eq_converted<U, P>(&self, other: Ordered<U, P>) -> bool
    where
        T: AsPrimitive<i128> + AsPrimitive<f64>,
        U: Scalar + AsPrimitive<i128> + AsPrimitive<f64>,
        P: ByteOrder,
    {
        self.partial_cmp_converted(other) == Some(Ordering::Equal)
    }

    /// Ordering counterpart of [`eq_converted`](Self::eq_converted).
    /// `None` when either side is NaN.
    #[inline]
    pub fn partial_cmp_converted<U, P>(&self, other: Ordered<U, P>) -> Option<Ordering>
    where
        T: AsPrimitive<i128> + AsPrimitive<f64>,
        U: Scalar + AsPrimitive<i128> + AsPrimitive<f64>,
        P: ByteOrder,
    {
        let (lhs, rhs) = (self.to_native(), other.to_native());
        if T::IS_INTEGER && U::IS_INTEGER {
            let lhs = <T as AsPrimitive<i128>>::as_(lhs);
            let rhs = <U as AsPrimitive<i128>>::as_(rhs);
            Some(lhs.cmp(&rhs))
        } else {
            let lhs = <T as AsPrimitive<f64>>::as_(lhs);
            let rhs = <U as AsPrimitive<f64>>::as_(rhs);
            lhs.partial_cmp(&rhs)
        }
    }

    /// Adds one and returns the new value.
    #[inline]
    pub fn increment(&mut self) -> Self {
        self.step(false);
        *self
    }

    /// Subtracts one and returns the new value.
    #[inline]
    pub fn decrement(&mut self) -> Self {
        self.step(true);
        *self
    }

    /// Adds one and returns the previous value.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.step(false);
        previous
    }

    /// Subtracts one and returns the previous value.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.step(true);
        previous
    }

    fn step(&mut self, down: bool) {
        // Integers in a foreign order are stepped in place, floats and
        // platform-ordered values in native space.
        if T::IS_INTEGER && Self::SWAPS {
            self.step_stored(down);
        } else {
            self.step_native(down);
        }
    }

    fn step_stored(&mut self, down: bool) {
        let mut bytes = self.to_bytes();
        step_bytes::<O>(bytes.as_mut(), down);
        *self = Self::from_bytes(bytes);
    }

    fn step_native(&mut self, down: bool) {
        let value = self.to_native();
        self.set(if down {
            value.sub_native(T::ONE)
        } else {
            value.add_native(T::ONE)
        });
    }
}

impl<T: Scalar, O: ByteOrder> Clone for Ordered<T, O> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Scalar, O: ByteOrder> Copy for Ordered<T, O> {}

impl<T: Scalar, O: ByteOrder> Default for Ordered<T, O> {
    fn default() -> Self {
        Self::from_native(T::default())
    }
}

impl<T: Scalar, O: ByteOrder> Debug for Ordered<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(O::TAG).field(&self.to_native()).finish()
    }
}

impl<T: Scalar, O: ByteOrder> Display for Ordered<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_native(), f)
    }
}

macro_rules! impl_radix_fmt {
    ($($fmt:ident),*) => {
        $(
            impl<T: Integer, O: ByteOrder> $fmt for Ordered<T, O> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    $fmt::fmt(&self.to_native(), f)
                }
            }
        )*
    };
}

impl_radix_fmt!(LowerHex, UpperHex, Binary, Octal);

// Same-layout integers compare their stored patterns; everything else is
// compared after decoding, which keeps float semantics (NaN, signed zero).
impl<T: Scalar, O: ByteOrder, P: ByteOrder> PartialEq<Ordered<T, P>> for Ordered<T, O> {
    #[inline]
    fn eq(&self, other: &Ordered<T, P>) -> bool {
        if T::IS_INTEGER && O::IS_BIG_ENDIAN == P::IS_BIG_ENDIAN {
            self.bits == other.bits
        } else {
            self.to_native() == other.to_native()
        }
    }
}

impl<T: Integer, O: ByteOrder> Eq for Ordered<T, O> {}

impl<T: Scalar, O: ByteOrder> PartialEq<T> for Ordered<T, O> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.to_native() == *other
    }
}

impl<T: Scalar, O: ByteOrder, P: ByteOrder> PartialOrd<Ordered<T, P>> for Ordered<T, O> {
    #[inline]
    fn partial_cmp(&self, other: &Ordered<T, P>) -> Option<Ordering> {
        self.to_native().partial_cmp(&other.to_native())
    }
}

impl<T: Integer, O: ByteOrder> Ord for Ordered<T, O> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_native().cmp(&other.to_native())
    }
}

impl<T: Scalar, O: ByteOrder> PartialOrd<T> for Ordered<T, O> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.to_native().partial_cmp(other)
    }
}

/// Hashes the native value, so keys of any order agree with each other and
/// with plain `T` keys.
impl<T: Integer, O: ByteOrder> Hash for Ordered<T, O> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_native().hash(state);
    }
}

macro_rules! assert_layout {
    ($($ty:ty),*) => {
        const _: () = {
            $(
                assert!(core::mem::size_of::<Ordered<$ty, Big>>() == core::mem::size_of::<$ty>());
                assert!(core::mem::size_of::<Ordered<$ty, Little>>() == core::mem::size_of::<$ty>());
                assert!(core::mem::size_of::<Ordered<$ty, Native>>() == core::mem::size_of::<$ty>());
                assert!(core::mem::align_of::<Ordered<$ty, Big>>() == core::mem::align_of::<$ty>());
                assert!(core::mem::align_of::<Ordered<$ty, Little>>() == core::mem::align_of::<$ty>());
            )*
        };
    };
}

assert_layout!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);
