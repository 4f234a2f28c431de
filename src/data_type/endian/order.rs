//! Byte order markers and platform order detection.

use core::fmt::{self, Debug, Display};

#[cfg(not(any(target_endian = "little", target_endian = "big")))]
compile_error!("only little and big endian targets are supported");

/// A physical byte order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endian {
    Big,
    Little,
}

impl Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_big() { "BE" } else { "LE" })
    }
}

impl Endian {
    pub const fn is_big(self) -> bool {
        matches!(self, Self::Big)
    }

    pub const fn is_little(self) -> bool {
        matches!(self, Self::Little)
    }
}

/// Byte order of the compilation target.
pub const PLATFORM: Endian = if cfg!(target_endian = "big") {
    Endian::Big
} else {
    Endian::Little
};

// Marker types for byte order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Big;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Little;

/// Whatever order the platform uses. Physically identical to either
/// [`Little`] or [`Big`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Native;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Big {}
    impl Sealed for super::Little {}
    impl Sealed for super::Native {}
}

/// A declared byte order. Implemented by [`Big`], [`Little`] and [`Native`].
pub trait ByteOrder:
    sealed::Sealed + Copy + Default + Eq + Debug + Send + Sync + 'static
{
    /// Physical layout this marker stands for.
    const ENDIAN: Endian;

    /// True for big-endian, false for little-endian.
    const IS_BIG_ENDIAN: bool = Self::ENDIAN.is_big();

    /// Whether values in this order differ from the platform layout.
    const NEEDS_SWAP: bool = Self::IS_BIG_ENDIAN != PLATFORM.is_big();

    /// Short tag used in `Debug` output.
    const TAG: &'static str;
}

impl ByteOrder for Big {
    const ENDIAN: Endian = Endian::Big;
    const TAG: &'static str = "BE";
}

impl ByteOrder for Little {
    const ENDIAN: Endian = Endian::Little;
    const TAG: &'static str = "LE";
}

impl ByteOrder for Native {
    const ENDIAN: Endian = PLATFORM;
    const TAG: &'static str = "NE";
}
