//! Operator impls for [`Ordered`] values.
//!
//! Bitwise operators work on the stored pattern directly: relabelling the
//! byte order of both operands commutes with `|`, `&`, `^` and `!`.
//! Arithmetic and shifts decode, compute natively and re-encode. The
//! right-hand side may be in any order, or a plain native scalar; results
//! keep the order of the left-hand side.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use paste::paste;

use super::{ByteOrder, Ordered};
use crate::data_type::scalar::{Integer, Scalar, SignedScalar};

// Macro to implement bitwise operations on the stored pattern
macro_rules! impl_bitwise_ops {
    ($($trait:ident, $method:ident, $op:tt);*) => {
        $(
            paste! {
                impl<T: Integer, O: ByteOrder, P: ByteOrder> $trait<Ordered<T, P>> for Ordered<T, O> {
                    type Output = Self;

                    #[inline]
                    fn $method(self, rhs: Ordered<T, P>) -> Self::Output {
                        Self::from_raw(self.to_raw() $op rhs.reorder::<O>().to_raw())
                    }
                }

                impl<T: Integer, O: ByteOrder> $trait<T> for Ordered<T, O> {
                    type Output = Self;

                    #[inline]
                    fn $method(self, rhs: T) -> Self::Output {
                        Self::from_raw(self.to_raw() $op Self::from_native(rhs).to_raw())
                    }
                }

                impl<T: Integer, O: ByteOrder, P: ByteOrder> [<$trait Assign>]<Ordered<T, P>> for Ordered<T, O> {
                    #[inline]
                    fn [<$method _assign>](&mut self, rhs: Ordered<T, P>) {
                        *self = Self::from_raw(self.to_raw() $op rhs.reorder::<O>().to_raw());
                    }
                }

                impl<T: Integer, O: ByteOrder> [<$trait Assign>]<T> for Ordered<T, O> {
                    #[inline]
                    fn [<$method _assign>](&mut self, rhs: T) {
                        *self = Self::from_raw(self.to_raw() $op Self::from_native(rhs).to_raw());
                    }
                }
            }
        )*
    };
}

impl_bitwise_ops!(BitAnd, bitand, &; BitOr, bitor, |; BitXor, bitxor, ^);

impl<T: Integer, O: ByteOrder> Not for Ordered<T, O> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self::from_raw(!self.to_raw())
    }
}

// Macro to implement arithmetic operations in native space
macro_rules! impl_binop {
    ($($trait:ident, $method:ident, $native:ident);*) => {
        $(
            paste! {
                impl<T: Scalar, O: ByteOrder, P: ByteOrder> $trait<Ordered<T, P>> for Ordered<T, O> {
                    type Output = Self;

                    #[inline]
                    fn $method(self, rhs: Ordered<T, P>) -> Self::Output {
                        Self::from_native(self.to_native().$native(rhs.to_native()))
                    }
                }

                impl<T: Scalar, O: ByteOrder> $trait<T> for Ordered<T, O> {
                    type Output = Self;

                    #[inline]
                    fn $method(self, rhs: T) -> Self::Output {
                        Self::from_native(self.to_native().$native(rhs))
                    }
                }

                impl<T: Scalar, O: ByteOrder, P: ByteOrder> [<$trait Assign>]<Ordered<T, P>> for Ordered<T, O> {
                    #[inline]
                    fn [<$method _assign>](&mut self, rhs: Ordered<T, P>) {
                        *self = Self::from_native(self.to_native().$native(rhs.to_native()));
                    }
                }

                impl<T: Scalar, O: ByteOrder> [<$trait Assign>]<T> for Ordered<T, O> {
                    #[inline]
                    fn [<$method _assign>](&mut self, rhs: T) {
                        *self = Self::from_native(self.to_native().$native(rhs));
                    }
                }
            }
        )*
    };
}

impl_binop!(
    Add, add, add_native;
    Sub, sub, sub_native;
    Mul, mul, mul_native;
    Div, div, div_native;
    Rem, rem, rem_native
);

impl<T: SignedScalar, O: ByteOrder> Neg for Ordered<T, O> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_native(self.to_native().neg_native())
    }
}

impl<T: Integer, O: ByteOrder> Shl<usize> for Ordered<T, O> {
    type Output = Self;

    #[inline]
    fn shl(self, rhs: usize) -> Self::Output {
        Self::from_native(self.to_native().shl_native(rhs))
    }
}

impl<T: Integer, O: ByteOrder> Shr<usize> for Ordered<T, O> {
    type Output = Self;

    #[inline]
    fn shr(self, rhs: usize) -> Self::Output {
        Self::from_native(self.to_native().shr_native(rhs))
    }
}

impl<T: Integer, O: ByteOrder> ShlAssign<usize> for Ordered<T, O> {
    #[inline]
    fn shl_assign(&mut self, rhs: usize) {
        *self = *self << rhs;
    }
}

impl<T: Integer, O: ByteOrder> ShrAssign<usize> for Ordered<T, O> {
    #[inline]
    fn shr_assign(&mut self, rhs: usize) {
        *self = *self >> rhs;
    }
}
