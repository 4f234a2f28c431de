//! Type aliases for byte-order-aware scalars
//!
//! `U32<O>` and friends name an [`Ordered`] of a given width with the order
//! left open. The snake case shorthands fix the order as well: big-endian
//! (`_be`) and little-endian (`_le`).
#![allow(non_camel_case_types)]

use paste::paste;

use super::{Big, Little, Ordered};

pub type U8<O> = Ordered<u8, O>;
pub type U16<O> = Ordered<u16, O>;
pub type U32<O> = Ordered<u32, O>;
pub type U64<O> = Ordered<u64, O>;

pub type I8<O> = Ordered<i8, O>;
pub type I16<O> = Ordered<i16, O>;
pub type I32<O> = Ordered<i32, O>;
pub type I64<O> = Ordered<i64, O>;

pub type F32<O> = Ordered<f32, O>;
pub type F64<O> = Ordered<f64, O>;

macro_rules! shorthand_aliases {
    ($($primitive:ident),*) => {
        paste! {
            $(
                pub type [<$primitive _be>] = Ordered<$primitive, Big>;
                pub type [<$primitive _le>] = Ordered<$primitive, Little>;
            )*
        }
    };
}

shorthand_aliases!(u16, u32, u64, i16, i32, i64, f32, f64);
