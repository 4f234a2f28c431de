use core::str::FromStr;

use num_traits::{
    Bounded, CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, FromPrimitive, Num, NumCast, One,
    PrimInt, Saturating, ToPrimitive, WrappingAdd, WrappingMul, WrappingSub, Zero,
};

use super::*;

// NumOps is automatically implemented through the operator impls in `ops`.
// NumAssignOps likewise comes from the `*Assign` impls.

impl<T: Scalar + Num, O: ByteOrder> Num for Ordered<T, O> {
    type FromStrRadixErr = T::FromStrRadixErr;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        T::from_str_radix(str, radix).map(Self::from_native)
    }
}

impl<T: Scalar + Zero, O: ByteOrder> Zero for Ordered<T, O> {
    fn zero() -> Self {
        Self::from_native(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.to_native().is_zero()
    }
}

impl<T: Scalar + One, O: ByteOrder> One for Ordered<T, O> {
    fn one() -> Self {
        Self::from_native(T::one())
    }
}

impl<T: Scalar + Bounded, O: ByteOrder> Bounded for Ordered<T, O> {
    fn min_value() -> Self {
        Self::from_native(T::min_value())
    }

    fn max_value() -> Self {
        Self::from_native(T::max_value())
    }
}

impl<T: Scalar + FromStr, O: ByteOrder> FromStr for Ordered<T, O> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        T::from_str(s).map(Self::from_native)
    }
}

impl<T: Scalar + ToPrimitive, O: ByteOrder> ToPrimitive for Ordered<T, O> {
    fn to_i64(&self) -> Option<i64> {
        self.to_native().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_native().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        self.to_native().to_f64()
    }
}

impl<T: Scalar + FromPrimitive, O: ByteOrder> FromPrimitive for Ordered<T, O> {
    fn from_i64(n: i64) -> Option<Self> {
        T::from_i64(n).map(Self::from_native)
    }

    fn from_u64(n: u64) -> Option<Self> {
        T::from_u64(n).map(Self::from_native)
    }

    fn from_f64(n: f64) -> Option<Self> {
        T::from_f64(n).map(Self::from_native)
    }
}

impl<T: Scalar + NumCast, O: ByteOrder> NumCast for Ordered<T, O> {
    fn from<N: ToPrimitive>(n: N) -> Option<Self> {
        <T as NumCast>::from(n).map(Self::from_native)
    }
}

// Macro to implement checked arithmetic operations
macro_rules! impl_checked_ops {
    ($($trait:ident, $method:ident);*) => {
        $(
            impl<T: Scalar + $trait, O: ByteOrder> $trait for Ordered<T, O> {
                fn $method(&self, v: &Self) -> Option<Self> {
                    self.to_native().$method(&v.to_native()).map(Self::from_native)
                }
            }
        )*
    };
}

impl_checked_ops!(
    CheckedAdd, checked_add;
    CheckedSub, checked_sub;
    CheckedMul, checked_mul;
    CheckedDiv, checked_div
);

// Macro to implement wrapping operations
macro_rules! impl_wrapping_ops {
    ($($trait:ident, $method:ident);*) => {
        $(
            impl<T: Scalar + $trait, O: ByteOrder> $trait for Ordered<T, O> {
                fn $method(&self, v: &Self) -> Self {
                    Self::from_native(self.to_native().$method(&v.to_native()))
                }
            }
        )*
    };
}

impl_wrapping_ops!(
    WrappingAdd, wrapping_add;
    WrappingSub, wrapping_sub;
    WrappingMul, wrapping_mul
);

impl<T: Scalar + Saturating, O: ByteOrder> Saturating for Ordered<T, O> {
    fn saturating_add(self, v: Self) -> Self {
        Self::from_native(self.to_native().saturating_add(v.to_native()))
    }

    fn saturating_sub(self, v: Self) -> Self {
        Self::from_native(self.to_native().saturating_sub(v.to_native()))
    }
}

impl<T: Integer + PrimInt, O: ByteOrder> PrimInt for Ordered<T, O> {
    fn count_ones(self) -> u32 {
        self.to_native().count_ones()
    }

    fn count_zeros(self) -> u32 {
        self.to_native().count_zeros()
    }

    fn leading_zeros(self) -> u32 {
        self.to_native().leading_zeros()
    }

    fn trailing_zeros(self) -> u32 {
        self.to_native().trailing_zeros()
    }

    fn rotate_left(self, n: u32) -> Self {
        Self::from_native(self.to_native().rotate_left(n))
    }

    fn rotate_right(self, n: u32) -> Self {
        Self::from_native(self.to_native().rotate_right(n))
    }

    fn signed_shl(self, n: u32) -> Self {
        Self::from_native(self.to_native().signed_shl(n))
    }

    fn signed_shr(self, n: u32) -> Self {
        Self::from_native(self.to_native().signed_shr(n))
    }

    fn unsigned_shl(self, n: u32) -> Self {
        Self::from_native(self.to_native().unsigned_shl(n))
    }

    fn unsigned_shr(self, n: u32) -> Self {
        Self::from_native(self.to_native().unsigned_shr(n))
    }

    fn swap_bytes(self) -> Self {
        Self::from_native(PrimInt::swap_bytes(self.to_native()))
    }

    fn from_be(x: Self) -> Self {
        Self::from_native(T::from_be(x.to_native()))
    }

    fn from_le(x: Self) -> Self {
        Self::from_native(T::from_le(x.to_native()))
    }

    fn to_be(self) -> Self {
        Self::from_native(self.to_native().to_be())
    }

    fn to_le(self) -> Self {
        Self::from_native(self.to_native().to_le())
    }

    fn pow(self, exp: u32) -> Self {
        Self::from_native(PrimInt::pow(self.to_native(), exp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_all<N: Num + Copy>(values: &[N]) -> N {
        values.iter().fold(N::zero(), |acc, &v| acc + v)
    }

    #[test]
    fn test_generic_numeric_code() {
        let values = [u32_be::new(1), u32_be::new(2), u32_be::new(39)];
        assert_eq!(sum_all(&values).to_native(), 42);
        assert!(u32_be::zero().is_zero());
        assert_eq!(i16_le::one().to_native(), 1);
    }

    #[test]
    fn test_bounded_and_checked() {
        assert_eq!(u16_be::max_value().to_native(), u16::MAX);
        assert_eq!(i64_le::min_value().to_native(), i64::MIN);
        assert!(u16_be::max_value().checked_add(&u16_be::one()).is_none());
        assert_eq!(
            u16_be::max_value().saturating_add(u16_be::one()).to_native(),
            u16::MAX
        );
        assert_eq!(
            WrappingAdd::wrapping_add(&u16_be::max_value(), &u16_be::one()).to_native(),
            0
        );
    }

    #[test]
    fn test_parsing() {
        let value: i32_be = "-1234".parse().unwrap();
        assert_eq!(value.to_native(), -1234);
        let value = u32_le::from_str_radix("ff", 16).unwrap();
        assert_eq!(value.to_bytes(), [0xFF, 0, 0, 0]);
        assert!("nope".parse::<u16_be>().is_err());
    }

    #[test]
    fn test_casts() {
        let value: Option<U8<Big>> = NumCast::from(300u32);
        assert!(value.is_none());
        assert_eq!(u64_be::new(7).to_f64(), Some(7.0));
        assert_eq!(
            <i16_le as FromPrimitive>::from_i64(-2).map(|v| v.to_native()),
            Some(-2)
        );
    }

    #[test]
    fn test_prim_int() {
        let value = u32_be::new(0x0000_00F0);
        assert_eq!(value.count_ones(), 4);
        assert_eq!(value.trailing_zeros(), 4);
        assert_eq!(value.rotate_left(28).to_native(), 0x0000_000F);
        assert_eq!(PrimInt::swap_bytes(value).to_native(), 0xF000_0000);
        assert_eq!(PrimInt::pow(u32_be::new(3), 4).to_native(), 81);
    }
}
