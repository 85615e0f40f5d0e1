//! # protowire-decode
//!
//! Allocation-free decoder for the tag/varint wire grammar of protobuf-style messages
//!
//! ## Features
//! * Pure functions over byte slices, no decoder state
//! * Every decoder reports the value and the number of bytes consumed, or a [`ParseError`]
//! * Length-delimited payloads are borrowed from the input, never copied
//! * Varint overflow and truncation are detected exactly
//! * [`Scanner`] walks all fields of a message buffer
//!
//! ## Wire types
//! | value | type | payload |
//! |---|---|---|
//! | 0 | varint | base-128 varint |
//! | 1 | fixed32 | 4 bytes, little-endian |
//! | 2 | fixed64 | 8 bytes, little-endian |
//! | 3 | bytes | varint length, then payload |
//! | 4 | end group | rejected |
//!
//! ## Limitations
//! * Groups are not supported; an end-group marker where a value is expected is an error.
//! * Tag decoding only rejects non-positive field numbers. Use [`FieldNumber::is_valid`]
//!   or [`Scanner::with_strict_field_numbers`] to also reject the reserved range.
//!
//! ## Examples
//!
//! ``` rust
//! use protowire_decode::{consume_field, FieldNumber, FieldValue, Scanner, WireType};
//! use hex_literal::hex;
//!
//! let data = hex!("089601 1303596f75");
//!
//! let (number, wire_type, n) = consume_field(&data).unwrap();
//! assert_eq!(number, FieldNumber(1));
//! assert_eq!(wire_type, WireType::Varint);
//! assert_eq!(n, 3);
//!
//! let msg = Scanner::new().scan(&data);
//! assert!(msg.is_complete());
//! assert_eq!(msg.fields[0].value, FieldValue::Varint(150));
//! assert_eq!(msg.fields[1].value, FieldValue::Bytes(b"You"));
//! ```
//!

mod error;
mod field;
mod message;
mod scanner;
mod varint;
mod wire;

pub use error::ParseError;
pub use field::{
    FieldValue, consume_bytes, consume_field, consume_field_value, consume_fixed32,
    consume_fixed64, consume_tag, decode_field_value,
};
pub use message::{Field, Message};
pub use scanner::{Fields, Scanner};
pub use varint::{MAX_VARINT_LEN, consume_varint, decode_zigzag};
pub use wire::{FieldNumber, WireType, split_tag};
