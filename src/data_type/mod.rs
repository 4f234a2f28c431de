mod aligned_bytes;
mod endian;
mod scalar;
mod unaligned;
pub use aligned_bytes::*;
pub use endian::*;
pub use scalar::*;
pub use unaligned::*;
