//! Property-based tests for the little-endian codec.

use proptest::prelude::*;

use byte_convert::{Char16, ConvertError, FromByteArray, ToByteArray, codec, decode};

/// Encodes, checks the width, decodes, and compares.
fn round_trip<T>(value: T) -> Result<(), TestCaseError>
where
    T: ToByteArray + FromByteArray + PartialEq + std::fmt::Debug,
{
    let bytes = value.to_byte_array();
    prop_assert_eq!(bytes.as_ref().len(), T::WIDTH);
    prop_assert_eq!(T::from_byte_array(bytes.as_ref()).unwrap(), value);
    Ok(())
}

//
// -----------------------------------------------------------------------------
// Round trips
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_integer_round_trip(a: i16, b: u16, c: i32, d: u32, e: i64, f: u64) {
        round_trip(a)?;
        round_trip(b)?;
        round_trip(c)?;
        round_trip(d)?;
        round_trip(e)?;
        round_trip(f)?;
    }

    #[test]
    fn prop_bool_and_char_round_trip(flag: bool, code: u16) {
        round_trip(flag)?;
        round_trip(Char16(code))?;
    }

    // compared by bits: NaN != NaN numerically
    #[test]
    fn prop_float_bits_survive(single in any::<u32>(), double in any::<u64>()) {
        let f = f32::from_bits(single);
        prop_assert_eq!(codec::decode_f32(&codec::encode_f32(f), 0).unwrap().to_bits(), single);

        let d = f64::from_bits(double);
        prop_assert_eq!(codec::decode_f64(&codec::encode_f64(d), 0).unwrap().to_bits(), double);
    }

    #[test]
    fn prop_latin1_text_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let text = codec::decode_text(&bytes);
        prop_assert_eq!(text.chars().count(), bytes.len());
        prop_assert_eq!(codec::encode_text(&text).unwrap(), bytes);
    }
}

//
// -----------------------------------------------------------------------------
// Byte layout
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_byte_i_is_shifted_value(value: u64) {
        let bytes = codec::encode_u64(value);
        for (i, b) in bytes.iter().enumerate() {
            prop_assert_eq!(*b as u64, (value >> (8 * i)) & 0xFF);
        }
    }

    #[test]
    fn prop_signed_matches_unsigned(value: i16, wide: i32, widest: i64) {
        prop_assert_eq!(codec::encode_i16(value), codec::encode_u16(value as u16));
        prop_assert_eq!(codec::encode_i32(wide), codec::encode_u32(wide as u32));
        prop_assert_eq!(codec::encode_i64(widest), codec::encode_u64(widest as u64));
    }

    #[test]
    fn prop_matches_std_le_bytes(value: i32, wide: u64, f: f64) {
        prop_assert_eq!(codec::encode_i32(value), value.to_le_bytes());
        prop_assert_eq!(codec::encode_u64(wide), wide.to_le_bytes());
        prop_assert_eq!(codec::encode_f64(f), f.to_le_bytes());
    }
}

//
// -----------------------------------------------------------------------------
// Offsets and short buffers
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_sequential_values_decode_at_offsets(
        values in prop::collection::vec(any::<i32>(), 1..64),
    ) {
        let buf: Vec<u8> = values.iter().flat_map(|v| v.to_byte_array()).collect();

        for (i, expected) in values.iter().enumerate() {
            prop_assert_eq!(decode::<i32>(&buf, i * i32::WIDTH).unwrap(), *expected);
        }
    }

    #[test]
    fn prop_short_window_zero_pads(value: u64, keep in 1usize..=8) {
        let bytes = codec::encode_u64(value);
        let truncated = &bytes[..keep];

        let mask = if keep == 8 { u64::MAX } else { (1u64 << (8 * keep)) - 1 };
        prop_assert_eq!(codec::decode_u64(truncated, 0).unwrap(), value & mask);
    }

    #[test]
    fn prop_short_window_never_sign_extends(value: i32, keep in 1usize..4) {
        let bytes = codec::encode_i32(value);
        let decoded = codec::decode_i32(&bytes[..keep], 0).unwrap();
        prop_assert!(decoded >= 0);
        prop_assert_eq!(decoded as u32, value as u32 & ((1u32 << (8 * keep)) - 1));
    }

    #[test]
    fn prop_start_at_or_past_end_fails(
        bytes in prop::collection::vec(any::<u8>(), 0..32),
        extra in 0usize..8,
    ) {
        let index = bytes.len() + extra;
        let err = ConvertError::OutOfBounds { index, len: bytes.len() };

        prop_assert_eq!(codec::decode_bool(&bytes, index), Err(err));
        prop_assert_eq!(codec::decode_u16(&bytes, index), Err(err));
        prop_assert_eq!(codec::decode_i64(&bytes, index), Err(err));

        // text only fails once the window itself leaves the buffer
        let past = ConvertError::OutOfBounds { index: index + 1, len: bytes.len() };
        prop_assert_eq!(codec::decode_text_range(&bytes, index + 1, index + 1), Err(past));
    }

    #[test]
    fn prop_full_text_range_matches_whole_buffer(
        bytes in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let len = bytes.len();
        let whole = codec::decode_text(&bytes);
        prop_assert_eq!(codec::decode_text_range(&bytes, 0, len).unwrap(), whole);
        prop_assert_eq!(codec::decode_text_range(&bytes, len, len).unwrap(), "");
    }
}

#[test]
fn literal_layouts() {
    assert_eq!(1i32.to_byte_array(), [0x01, 0x00, 0x00, 0x00]);
    assert_eq!((-1i32).to_byte_array(), [0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(true.to_byte_array(), [0x01]);
    assert_eq!(false.to_byte_array(), [0x00]);
    assert_eq!((-1i16).to_byte_array(), 65535u16.to_byte_array());

    assert_eq!(f32::from_byte_array(&[0x00, 0x00, 0x00, 0x41]).unwrap(), 8.0);
    assert_eq!(
        f64::from_byte_array(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x40]).unwrap(),
        8.0
    );
    assert_eq!(i32::from_byte_array(&[0x01]).unwrap(), 1);
}

#[test]
fn text_round_trip() {
    let text = "test text";
    let bytes = codec::encode_text(text).unwrap();
    assert_eq!(bytes.len(), text.len());
    assert_eq!(codec::decode_text(&bytes), text);
}

#[test]
fn char_round_trip_through_rust_char() {
    for c in ['A', 'ß', 'Ж', '中'] {
        let code = Char16::try_from(c).unwrap();
        let back = Char16::from_byte_array(&code.to_byte_array()).unwrap();
        assert_eq!(char::try_from(back).unwrap(), c);
    }
}
