use thiserror::Error;

/// Errors reported by [`BitSet`](crate::BitSet) operations.
///
/// `InvalidBase` means the caller passed something that can never be valid.
/// `InvalidRange` is returned by the range operations when `from > to`; the
/// set is left untouched in that case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitSetError {
    /// The radix passed to [`to_string_radix`](crate::BitSet::to_string_radix)
    /// is outside `2..=36`.
    #[error("invalid base {0}, expected a value in 2..=36")]
    InvalidBase(u32),

    /// The range start lies after the range end.
    #[error("invalid range {from}..={to}")]
    InvalidRange {
        /// Inclusive start of the rejected range.
        from: usize,
        /// Inclusive end of the rejected range.
        to: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, BitSetError>;
