//! Conversion implementations for ordered scalars to/from primitive types

use super::*;

use core::num::TryFromIntError;

impl<T: Scalar, O: ByteOrder> From<T> for Ordered<T, O> {
    #[inline]
    fn from(value: T) -> Self {
        Self::from_native(value)
    }
}

// Macro to implement the decoding From for each primitive
macro_rules! impl_into_native {
    ($($primitive:ty),*) => {
        $(
            impl<O: ByteOrder> From<Ordered<$primitive, O>> for $primitive {
                #[inline]
                fn from(value: Ordered<$primitive, O>) -> Self {
                    value.to_native()
                }
            }

            impl<O: ByteOrder> PartialEq<Ordered<$primitive, O>> for $primitive {
                #[inline]
                fn eq(&self, other: &Ordered<$primitive, O>) -> bool {
                    *self == other.to_native()
                }
            }

            impl<O: ByteOrder> PartialOrd<Ordered<$primitive, O>> for $primitive {
                #[inline]
                fn partial_cmp(&self, other: &Ordered<$primitive, O>) -> Option<Ordering> {
                    self.partial_cmp(&other.to_native())
                }
            }
        )*
    };
}

impl_into_native!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

// Macro to implement From between the named orders of the same scalar
macro_rules! impl_reorder_from {
    ($($from:ident => $to:ident),*) => {
        $(
            impl<T: Scalar> From<Ordered<T, $from>> for Ordered<T, $to> {
                #[inline]
                fn from(value: Ordered<T, $from>) -> Self {
                    value.reorder()
                }
            }
        )*
    };
}

impl_reorder_from!(
    Big => Little, Little => Big,
    Native => Big, Native => Little,
    Big => Native, Little => Native
);

// Macro to implement From for smaller types that convert losslessly
macro_rules! impl_from_smaller {
    ($from:ty => $($to:ty),*) => {
        $(
            impl<O: ByteOrder> From<$from> for Ordered<$to, O> {
                #[inline]
                fn from(value: $from) -> Self {
                    Self::from_native(<$to>::from(value))
                }
            }
        )*
    };
}

impl_from_smaller!(u8 => u16, u32, u64, i16, i32, i64, f32, f64);
impl_from_smaller!(u16 => u32, u64, i32, i64, f32, f64);
impl_from_smaller!(u32 => u64, i64, f64);
impl_from_smaller!(i8 => i16, i32, i64, f32, f64);
impl_from_smaller!(i16 => i32, i64, f32, f64);
impl_from_smaller!(i32 => i64, f64);
impl_from_smaller!(f32 => f64);

// Macro to implement TryFrom for potentially overflowing conversions
macro_rules! impl_try_from {
    ($from:ty => $($to:ty),*) => {
        $(
            impl<O: ByteOrder> TryFrom<$from> for Ordered<$to, O> {
                type Error = TryFromIntError;

                #[inline]
                fn try_from(value: $from) -> Result<Self, Self::Error> {
                    <$to>::try_from(value).map(Self::from_native)
                }
            }
        )*
    };
}

// Narrowing, same signedness
impl_try_from!(u16 => u8);
impl_try_from!(u32 => u8, u16);
impl_try_from!(u64 => u8, u16, u32);
impl_try_from!(i16 => i8);
impl_try_from!(i32 => i8, i16);
impl_try_from!(i64 => i8, i16, i32);

// Signed to unsigned
impl_try_from!(i8 => u8, u16, u32, u64);
impl_try_from!(i16 => u8, u16, u32, u64);
impl_try_from!(i32 => u8, u16, u32, u64);
impl_try_from!(i64 => u8, u16, u32, u64);

// Unsigned to signed of equal or smaller width
impl_try_from!(u8 => i8);
impl_try_from!(u16 => i8, i16);
impl_try_from!(u32 => i8, i16, i32);
impl_try_from!(u64 => i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_round_trip_through_from() {
        let value: U32<Big> = 0xDEADBEEFu32.into();
        let native: u32 = value.into();
        assert_eq!(native, 0xDEADBEEF);
        assert!(0xDEADBEEFu32 == value);
        assert!(1.0f64 < F64::<Little>::new(2.0));
    }

    #[test]
    fn test_reorder_from() {
        let big: i32_be = i32_be::new(-123456);
        let little: i32_le = big.into();
        assert_eq!(little.to_native(), -123456);
        let native: I32<Native> = little.into();
        assert_eq!(native.to_raw() as i32, -123456);
    }

    #[test]
    fn test_from_smaller_types() {
        // From u8 to U32
        let value: U32<Big> = U32::from(255u8);
        assert_eq!(value.to_native(), 255);

        // From u16 to I64
        let value: I64<Little> = I64::from(65535u16);
        assert_eq!(value.to_native(), 65535);

        // From i16 to F64
        let value: F64<Big> = F64::from(-32768i16);
        assert_eq!(value.to_native(), -32768.0);
    }

    #[test]
    fn test_try_from_overflow() {
        // Try to convert u32 to U16 (might overflow)
        let result: Result<U16<Big>, _> = 70000u32.try_into();
        assert!(result.is_err());

        // Successful conversion
        let result: Result<U16<Big>, _> = 1000u32.try_into();
        assert_eq!(result.unwrap().to_native(), 1000);
    }

    #[test]
    fn test_signed_to_unsigned_try_from() {
        // Try to convert negative i8 to U8 (should fail)
        let result: Result<U8<Big>, _> = (-1i8).try_into();
        assert!(result.is_err());

        // Try to convert large u32 to I16 (should fail)
        let result: Result<I16<Little>, _> = 40000u32.try_into();
        assert!(result.is_err());

        let result: Result<I16<Little>, _> = 1000u32.try_into();
        assert_eq!(result.unwrap().to_native(), 1000);
    }
}
