//! Field numbers, wire types and tags.

use std::fmt;

/// Field number of a protocol buffer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldNumber(pub i32);

impl FieldNumber {
    /// Smallest valid field number.
    pub const MIN_VALID: FieldNumber = FieldNumber(1);
    /// First number of the reserved range.
    pub const FIRST_RESERVED: FieldNumber = FieldNumber(19000);
    /// Last number of the reserved range.
    pub const LAST_RESERVED: FieldNumber = FieldNumber(19999);
    /// Largest valid field number, 2^29 - 1.
    pub const MAX_VALID: FieldNumber = FieldNumber((1 << 29) - 1);

    /// Marker produced when a tag's field number does not fit in an `i32`.
    pub(crate) const OVERFLOW: FieldNumber = FieldNumber(-1);

    /// Raw value.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether the number is usable in a schema: in `[1, 18999]` or `[20000, 2^29 - 1]`.
    ///
    /// Tag decoding only rejects non-positive numbers; call this when the reserved range and
    /// the upper bound matter.
    pub const fn is_valid(self) -> bool {
        let n = self.0;
        (Self::MIN_VALID.0 <= n && n < Self::FIRST_RESERVED.0)
            || (Self::LAST_RESERVED.0 < n && n <= Self::MAX_VALID.0)
    }
}

impl From<i32> for FieldNumber {
    fn from(value: i32) -> Self {
        FieldNumber(value)
    }
}

impl fmt::Display for FieldNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Wire types.
#[derive(Debug, PartialEq, Clone, Eq, Copy, Hash)]
pub enum WireType {
    /// Varint (0)
    Varint,

    /// 32-bit (1)
    Fixed32,

    /// 64-bit (2)
    Fixed64,

    /// Length-delimited (3)
    Bytes,

    /// End of group (4)
    EndGroup,

    /// Unassigned wire type (5, 6 or 7)
    Reserved(u8),
}

impl WireType {
    /// Numeric value as it appears in the low 3 bits of a tag.
    pub const fn as_u8(self) -> u8 {
        match self {
            WireType::Varint => 0,
            WireType::Fixed32 => 1,
            WireType::Fixed64 => 2,
            WireType::Bytes => 3,
            WireType::EndGroup => 4,
            WireType::Reserved(wt) => wt,
        }
    }
}

impl From<u8> for WireType {
    /// Only the low 3 bits are considered.
    fn from(value: u8) -> Self {
        match value & 0x07 {
            0 => WireType::Varint,
            1 => WireType::Fixed32,
            2 => WireType::Fixed64,
            3 => WireType::Bytes,
            4 => WireType::EndGroup,
            other => WireType::Reserved(other),
        }
    }
}

/// Split a decoded tag varint into field number and wire type.
///
/// A field number that does not fit in an `i32` becomes `-1`.
pub fn split_tag(tag: u64) -> (FieldNumber, WireType) {
    let wire_type = WireType::from((tag & 0x07) as u8);
    let number = i32::try_from(tag >> 3)
        .map(FieldNumber)
        .unwrap_or(FieldNumber::OVERFLOW);
    (number, wire_type)
}
