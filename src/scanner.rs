//! Message-level field scanning.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{Field, Message, ParseError, consume_tag, decode_field_value};

/// Walks the fields of a message buffer one tag at a time.
#[derive(Debug, Default, Clone)]
pub struct Scanner {
    /// Reject field numbers outside the valid schema ranges, including the reserved range.
    ///
    /// Tag decoding on its own only rejects non-positive numbers.
    pub strict_field_numbers: bool,

    /// Stop after this many fields.
    pub max_fields: Option<usize>,
}

impl Scanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict field number validation.
    pub fn with_strict_field_numbers(mut self, strict: bool) -> Self {
        self.strict_field_numbers = strict;
        self
    }

    /// Limit the number of fields decoded.
    pub fn with_max_fields(mut self, max_fields: usize) -> Self {
        self.max_fields = Some(max_fields);
        self
    }

    /// Iterate over the fields in `data`.
    ///
    /// The iterator ends after the first error.
    pub fn fields<'a>(&self, data: &'a [u8]) -> Fields<'a> {
        Fields {
            data,
            offset: 0,
            remaining: self.max_fields,
            strict: self.strict_field_numbers,
            failed: false,
        }
    }

    /// Scan all fields in `data` into a [`Message`].
    pub fn scan<'a>(&self, data: &'a [u8]) -> Message<'a> {
        let mut fields = self.fields(data);
        let mut msg = Message::default();

        for field in fields.by_ref() {
            match field {
                Ok(field) => msg.fields.push(field),
                Err(err) => msg.error = Some(err),
            }
        }

        msg.remainder = fields.remainder();
        msg
    }
}

/// Iterator over the fields of a message buffer.
///
/// Created by [`Scanner::fields`].
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    data: &'a [u8],
    offset: usize,
    remaining: Option<usize>,
    strict: bool,
    failed: bool,
}

impl<'a> Fields<'a> {
    /// Bytes not consumed so far.
    pub fn remainder(&self) -> &'a [u8] {
        self.data
    }

    /// Offset of the next field from the start of the scanned buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn read_field(&self) -> Result<(Field<'a>, usize), ParseError> {
        let data = self.data;
        let ((number, wire_type), tag_len) = consume_tag(data)?;
        if self.strict && !number.is_valid() {
            return Err(ParseError::InvalidFieldNumber);
        }

        let (value, value_len) = decode_field_value(wire_type, &data[tag_len..])?;
        Ok((Field { number, value }, tag_len + value_len))
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = Result<Field<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.data.is_empty() {
            return None;
        }

        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                trace!(offset = self.offset, "field limit reached");
                return None;
            }
            *remaining -= 1;
        }

        match self.read_field() {
            Ok((field, len)) => {
                self.data = &self.data[len..];
                self.offset += len;
                Some(Ok(field))
            }
            Err(err) => {
                debug!(offset = self.offset, error = %err, "field scan stopped");
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Fields<'_> {}
