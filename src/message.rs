use crate::{FieldNumber, FieldValue, ParseError, WireType};

/// Fields scanned from one message buffer.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Message<'a> {
    /// Decoded fields, in wire order.
    pub fields: Vec<Field<'a>>,

    /// Bytes left unscanned.
    ///
    /// On error this starts at the tag of the field that failed to decode. It is also non-empty
    /// when the scan stopped at the configured field limit.
    pub remainder: &'a [u8],

    /// Error that stopped the scan, if any.
    pub error: Option<ParseError>,
}

impl<'a> Message<'a> {
    /// Whether every byte of the input was decoded into a field.
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.remainder.is_empty()
    }

    /// Iterate the fields with the given number.
    pub fn fields_by_number(&self, number: FieldNumber) -> impl Iterator<Item = &Field<'a>> {
        self.fields.iter().filter(move |f| f.number == number)
    }
}

/// One decoded field occurrence.
///
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub struct Field<'a> {
    /// Field number.
    pub number: FieldNumber,

    /// Decoded value.
    pub value: FieldValue<'a>,
}

impl Field<'_> {
    /// Wire type the field was encoded with.
    pub fn wire_type(&self) -> WireType {
        self.value.wire_type()
    }
}
