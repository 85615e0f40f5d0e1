//! Fixed-width, length-delimited, tag and field decoders.
//!
//! Every decoder takes the remaining bytes and returns the decoded value together with the
//! number of bytes consumed from the front. The caller re-slices between calls.

use crate::{FieldNumber, ParseError, WireType, consume_varint, wire::split_tag};

/// Decoded field value.
///
/// Length-delimited payloads borrow from the input buffer.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub enum FieldValue<'a> {
    /// Varint (wire type = 0).
    Varint(u64),

    /// 32-bit value (wire type = 1).
    Fixed32(u32),

    /// 64-bit value (wire type = 2).
    Fixed64(u64),

    /// Length-delimited value (wire type = 3).
    Bytes(&'a [u8]),
}

impl FieldValue<'_> {
    /// Wire type this value was decoded from.
    pub fn wire_type(&self) -> WireType {
        match self {
            FieldValue::Varint(_) => WireType::Varint,
            FieldValue::Fixed32(_) => WireType::Fixed32,
            FieldValue::Fixed64(_) => WireType::Fixed64,
            FieldValue::Bytes(_) => WireType::Bytes,
        }
    }
}

/// Decode a little-endian `u32`. Always consumes 4 bytes.
pub fn consume_fixed32(data: &[u8]) -> Result<(u32, usize), ParseError> {
    let Some(num_bytes) = data.first_chunk::<4>() else {
        return Err(ParseError::Truncated);
    };
    Ok((u32::from_le_bytes(*num_bytes), 4))
}

/// Decode a little-endian `u64`. Always consumes 8 bytes.
pub fn consume_fixed64(data: &[u8]) -> Result<(u64, usize), ParseError> {
    let Some(num_bytes) = data.first_chunk::<8>() else {
        return Err(ParseError::Truncated);
    };
    Ok((u64::from_le_bytes(*num_bytes), 8))
}

/// Decode a varint length prefix and the payload that follows it.
///
/// The returned slice borrows from `data`; the count includes the prefix.
pub fn consume_bytes(data: &[u8]) -> Result<(&[u8], usize), ParseError> {
    let (len, n) = consume_varint(data)?;
    let rest = &data[n..];
    let len = match usize::try_from(len) {
        Ok(len) if len <= rest.len() => len,
        _ => return Err(ParseError::Truncated),
    };
    Ok((&rest[..len], n + len))
}

/// Decode a tag into field number and wire type.
///
/// Only non-positive field numbers are rejected here. Numbers in the reserved range or above
/// [`FieldNumber::MAX_VALID`] pass; see [`FieldNumber::is_valid`].
pub fn consume_tag(data: &[u8]) -> Result<((FieldNumber, WireType), usize), ParseError> {
    let (tag, n) = consume_varint(data)?;
    let (number, wire_type) = split_tag(tag);
    if number < FieldNumber::MIN_VALID {
        return Err(ParseError::InvalidFieldNumber);
    }
    Ok(((number, wire_type), n))
}

/// Decode one value of the shape given by `wire_type`.
pub fn decode_field_value(
    wire_type: WireType,
    data: &[u8],
) -> Result<(FieldValue<'_>, usize), ParseError> {
    match wire_type {
        WireType::Varint => consume_varint(data).map(|(v, n)| (FieldValue::Varint(v), n)),
        WireType::Fixed32 => consume_fixed32(data).map(|(v, n)| (FieldValue::Fixed32(v), n)),
        WireType::Fixed64 => consume_fixed64(data).map(|(v, n)| (FieldValue::Fixed64(v), n)),
        WireType::Bytes => consume_bytes(data).map(|(v, n)| (FieldValue::Bytes(v), n)),
        WireType::EndGroup => Err(ParseError::MismatchedEndGroup),
        WireType::Reserved(_) => Err(ParseError::ReservedWireType),
    }
}

/// Measure the value of a field whose tag has already been decoded.
///
/// `data` starts right after the tag. The field number is not inspected.
pub fn consume_field_value(
    _number: FieldNumber,
    wire_type: WireType,
    data: &[u8],
) -> Result<usize, ParseError> {
    decode_field_value(wire_type, data).map(|(_, n)| n)
}

/// Decode a tag and skip over its value.
///
/// Returns the field number, wire type and the total length of the field, tag included.
pub fn consume_field(data: &[u8]) -> Result<(FieldNumber, WireType, usize), ParseError> {
    let ((number, wire_type), tag_len) = consume_tag(data)?;
    let value_len = consume_field_value(number, wire_type, &data[tag_len..])?;
    Ok((number, wire_type, tag_len + value_len))
}
