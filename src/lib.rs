//! Scalars tagged with a declared byte order.
//!
//! An [`Ordered<T, O>`](data_type::Ordered) keeps the bytes of a `u16`, `i64`,
//! `f32`, ... in the order `O` at all times, while converting, comparing and
//! computing like a plain native number. Values can be embedded in
//! `#[repr(C)]` structs and laid directly over wire or file buffers through
//! the [`Plain`](traits::Plain) trait.
//!
//! ```
//! use tagged_endian::prelude::*;
//!
//! #[derive(Plain, Clone, Copy)]
//! #[repr(C)]
//! struct Header {
//!     magic: u32_be,
//!     length: u16_le,
//!     flags: u16_le,
//! }
//!
//! let bytes = [0xCA, 0xFE, 0xBA, 0xBE, 0x10, 0x00, 0x01, 0x80];
//! let header = Header::read_from(&bytes).unwrap();
//! assert_eq!(header.magic.to_native(), 0xCAFE_BABE);
//! assert_eq!(header.length, 16u16);
//! assert!(header.flags & 0x8000u16 != 0u16);
//! ```

extern crate self as tagged_endian;

// Forwards to `log::debug!` when the `log` feature is enabled.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    };
}

pub mod data_type;
pub mod error;
pub mod swap;
pub mod traits;

pub mod prelude {
    pub use crate::data_type::*;
    pub use crate::error::LayoutError;
    pub use crate::swap::ByteSwap;
    pub use crate::traits::Plain;
}
