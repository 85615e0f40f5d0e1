//! Variable-length integer decoding.
//!

use crate::ParseError;

/// Most-significant byte, == 0x80
pub const MSB: u8 = 0b1000_0000;
/// All bits except for the most significant. Can be used as bitmask to drop the most-signficant
/// bit using `&` (binary-and).
const DROP_MSB: u8 = 0b0111_1111;

/// Maximum encoded length of a 64-bit varint.
pub const MAX_VARINT_LEN: usize = 10;

/// Decode a variable-length integer from the front of a byte slice.
///
/// Returns the value and the number of bytes consumed (1 to 10).
///
/// The 10th byte carries only bit 63, so any value other than `0x00` or `0x01` there is
/// reported as [`ParseError::VarintOverflow`]. That includes a set continuation bit.
pub fn consume_varint(data: &[u8]) -> Result<(u64, usize), ParseError> {
    let mut result: u64 = 0;

    for (i, &b) in data.iter().take(MAX_VARINT_LEN).enumerate() {
        if i == MAX_VARINT_LEN - 1 {
            if b >= 2 {
                return Err(ParseError::VarintOverflow);
            }
            return Ok((result | (u64::from(b) << 63), MAX_VARINT_LEN));
        }

        result |= u64::from(b & DROP_MSB) << (7 * i);
        if b & MSB == 0 {
            return Ok((result, i + 1));
        }
    }

    Err(ParseError::Truncated)
}

/// Decode a zig-zag encoded signed integer from a varint payload.
#[inline]
pub const fn decode_zigzag(v: u64) -> i64 {
    ((v >> 1) as i64) ^ -((v & 1) as i64)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use proptest::prelude::*;

    use super::*;

    fn encode(mut v: u64) -> Vec<u8> {
        let mut out = Vec::with_capacity(MAX_VARINT_LEN);
        while v >= u64::from(MSB) {
            out.push((v as u8) | MSB);
            v >>= 7;
        }
        out.push(v as u8);
        out
    }

    fn canonical_len(v: u64) -> usize {
        let bits = 64 - v.leading_zeros() as usize;
        bits.div_ceil(7).max(1)
    }

    #[test]
    fn test_decode_max_u64() {
        let max_encoded = hex!("ffffffffffffffffff01");
        assert_eq!(consume_varint(&max_encoded), Ok((u64::MAX, 10)));
    }

    #[test]
    fn test_decode_zero() {
        assert_eq!(consume_varint(&[0x00]), Ok((0, 1)));
    }

    #[test]
    fn test_decode_one() {
        assert_eq!(consume_varint(&[0x01]), Ok((1, 1)));
    }

    #[test]
    fn test_decode_large_number() {
        assert_eq!(consume_varint(&hex!("ac02")), Ok((300, 2)));
        assert_eq!(consume_varint(&hex!("9601")), Ok((150, 2)));
    }

    #[test]
    fn test_decode_stops_at_terminator() {
        assert_eq!(consume_varint(&hex!("ac02ff")), Ok((300, 2)));
    }

    #[test]
    fn test_decode_incomplete_sequence() {
        assert_eq!(
            consume_varint(&hex!("ffffff")),
            Err(ParseError::Truncated)
        );
    }

    #[test]
    fn test_decode_single_byte_with_msb() {
        assert_eq!(consume_varint(&[0x80]), Err(ParseError::Truncated));
    }

    #[test]
    fn test_decode_empty_input() {
        assert_eq!(consume_varint(&[]), Err(ParseError::Truncated));
    }

    #[test]
    fn test_decode_nine_continuation_bytes_is_truncated() {
        assert_eq!(
            consume_varint(&hex!("ffffffffffffffffff")),
            Err(ParseError::Truncated)
        );
    }

    #[test]
    fn test_decode_tenth_byte_overflow() {
        assert_eq!(
            consume_varint(&hex!("ffffffffffffffffff02")),
            Err(ParseError::VarintOverflow)
        );
        assert_eq!(
            consume_varint(&hex!("ffffffffffffffffff81")),
            Err(ParseError::VarintOverflow)
        );
    }

    #[test]
    fn test_decode_non_minimal_encoding() {
        assert_eq!(consume_varint(&hex!("8000")), Ok((0, 2)));
        assert_eq!(consume_varint(&hex!("80808080808080808000")), Ok((0, 10)));
    }

    #[test]
    fn test_zigzag() {
        assert_eq!(decode_zigzag(0), 0);
        assert_eq!(decode_zigzag(1), -1);
        assert_eq!(decode_zigzag(2), 1);
        assert_eq!(decode_zigzag(3), -2);
        assert_eq!(decode_zigzag(u64::MAX - 1), i64::MAX);
        assert_eq!(decode_zigzag(u64::MAX), i64::MIN);
    }

    proptest! {
        #[test]
        fn prop_roundtrip(v in any::<u64>()) {
            let encoded = encode(v);
            prop_assert_eq!(encoded.len(), canonical_len(v));
            prop_assert_eq!(consume_varint(&encoded), Ok((v, encoded.len())));
        }

        #[test]
        fn prop_truncated_prefix(v in any::<u64>()) {
            let encoded = encode(v);
            for len in 0..encoded.len() {
                prop_assert_eq!(consume_varint(&encoded[..len]), Err(ParseError::Truncated));
            }
        }

        #[test]
        fn prop_tenth_byte_overflow(
            prefix in proptest::collection::vec(0x80u8..=0xff, 9),
            last in 2u8..=0xff,
        ) {
            let mut data = prefix;
            data.push(last);
            prop_assert_eq!(consume_varint(&data), Err(ParseError::VarintOverflow));
        }

        #[test]
        fn prop_never_overconsumes(data in proptest::collection::vec(any::<u8>(), 0..16)) {
            if let Ok((_, n)) = consume_varint(&data) {
                prop_assert!(n >= 1 && n <= data.len() && n <= MAX_VARINT_LEN);
            }
        }
    }
}
