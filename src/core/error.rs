use thiserror::Error;

/// Errors that can occur while building or mutating a [`Nif`](super::Nif).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NifError {
    /// A digit assignment targeted positions outside the base.
    #[error("nif: only the first {base_length} digits can be assigned (start {start}, {len} digits)")]
    OutOfRange {
        /// Requested start index, as given by the caller.
        start: isize,
        /// Number of digits the caller tried to write.
        len: usize,
        /// Length of the assignable base.
        base_length: usize,
    },

    /// A character in the input is not a decimal digit.
    #[error("nif: invalid character {value:?} at position {position}")]
    InvalidCharacter {
        /// Zero-based position of the offending character.
        position: usize,
        /// The offending character.
        value: char,
    },

    /// A numeric digit value above 9.
    #[error("nif: digit value {value} at position {position} is not in 0..=9")]
    InvalidDigit {
        /// Zero-based position of the offending value.
        position: usize,
        /// The offending value.
        value: u8,
    },

    /// A checksum was requested before all base digits were present.
    #[error("nif: base is incomplete ({len} of 8 digits)")]
    IncompleteBase {
        /// Number of digits currently present.
        len: usize,
    },
}

/// The first validation rule a NIF breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidityError {
    /// A complete NIF has exactly 9 digits.
    #[error("expected 9 digits, got {0}")]
    Length(usize),

    /// The NIF does not start with any known combination.
    #[error("does not start with a known combination")]
    Prefix,

    /// The check digit does not match the base.
    #[error("check digit is {found}, expected {expected}")]
    Checksum {
        /// Check digit computed from the base.
        expected: u8,
        /// Check digit stored in the NIF.
        found: u8,
    },
}
