use thiserror::Error;

/// A byte buffer that cannot hold the requested [`Plain`](crate::traits::Plain)
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("expected {expected} bytes, got {actual}")]
    Size { expected: usize, actual: usize },

    #[error("address {address:#x} is not aligned to {required} bytes")]
    Alignment { required: usize, address: usize },
}

impl LayoutError {
    /// Checks that a buffer of `actual` bytes holds exactly one `T`.
    pub(crate) fn check_size<T>(actual: usize) -> Result<(), LayoutError> {
        let expected = core::mem::size_of::<T>();
        if actual != expected {
            debug_log!(
                "rejecting {actual} byte buffer for {} ({expected} bytes)",
                core::any::type_name::<T>()
            );
            return Err(LayoutError::Size { expected, actual });
        }
        Ok(())
    }

    /// Checks that `ptr` satisfies the alignment of `T`.
    pub(crate) fn check_alignment<T>(ptr: *const u8) -> Result<(), LayoutError> {
        let required = core::mem::align_of::<T>();
        let address = ptr as usize;
        if address % required != 0 {
            debug_log!(
                "rejecting buffer at {address:#x} for {} (align {required})",
                core::any::type_name::<T>()
            );
            return Err(LayoutError::Alignment { required, address });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = LayoutError::Size {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "expected 4 bytes, got 3");

        let err = LayoutError::Alignment {
            required: 8,
            address: 0x1003,
        };
        assert_eq!(err.to_string(), "address 0x1003 is not aligned to 8 bytes");
    }

    #[test]
    fn test_checks() {
        assert!(LayoutError::check_size::<u32>(4).is_ok());
        assert_eq!(
            LayoutError::check_size::<u64>(2),
            Err(LayoutError::Size {
                expected: 8,
                actual: 2
            })
        );
        assert!(LayoutError::check_alignment::<u8>(3usize as *const u8).is_ok());
        assert!(LayoutError::check_alignment::<u32>(4usize as *const u8).is_ok());
        assert!(LayoutError::check_alignment::<u32>(6usize as *const u8).is_err());
    }
}
