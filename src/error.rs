//! Decode errors.

/// Error returned by every decoder in this crate.
///
/// Each variant also has a stable negative code (see [`ParseError::code`]) for callers that
/// still speak the sentinel convention of `(value, n)` with `n < 0` meaning failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// Fewer bytes remain than the grammar requires.
    /// Not fatal for a streaming caller - it may buffer more data and retry.
    #[error("unexpected end of input")]
    Truncated,

    /// Field number is not positive after splitting the tag.
    #[error("invalid field number")]
    InvalidFieldNumber,

    /// Varint does not fit in 64 bits.
    #[error("variable length integer overflow")]
    VarintOverflow,

    /// Wire type is one of the unassigned values 5, 6 or 7.
    #[error("cannot parse reserved wire type")]
    ReservedWireType,

    /// End-group marker found where a value was expected.
    #[error("mismatching end group marker")]
    MismatchedEndGroup,

    /// Any other failure.
    #[error("parse error")]
    Other,
}

impl ParseError {
    /// Returns true if this error indicates more data is needed.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        matches!(self, ParseError::Truncated)
    }

    /// Negative sentinel code for this error.
    pub const fn code(&self) -> i32 {
        match self {
            ParseError::Truncated => -1,
            ParseError::InvalidFieldNumber => -2,
            ParseError::VarintOverflow => -3,
            ParseError::ReservedWireType => -4,
            ParseError::MismatchedEndGroup => -5,
            ParseError::Other => -6,
        }
    }

    /// Map a sentinel code back to an error.
    ///
    /// Non-negative codes are byte counts and yield `None`. Negative codes that are not
    /// assigned to a specific error map to [`ParseError::Other`].
    pub const fn from_code(n: i32) -> Option<Self> {
        if n >= 0 {
            return None;
        }
        Some(match n {
            -1 => ParseError::Truncated,
            -2 => ParseError::InvalidFieldNumber,
            -3 => ParseError::VarintOverflow,
            -4 => ParseError::ReservedWireType,
            -5 => ParseError::MismatchedEndGroup,
            _ => ParseError::Other,
        })
    }
}
