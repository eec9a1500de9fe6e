//! Little-endian encode/decode for fixed-width primitives.
//!
//! Every rule of the crate lives here; [`crate::convert`] only dispatches to
//! these functions.
//!
//! Decoding reads the window `[start_index, start_index + WIDTH)` clipped to
//! the end of the buffer. High-order bytes missing from a short window read
//! as zero:
//!
//! ```
//! use byte_convert::codec;
//!
//! assert_eq!(codec::decode_i32(&[0x01], 0).unwrap(), 1);
//! assert_eq!(codec::decode_u16(&[0x34, 0x12, 0xFF], 0).unwrap(), 0x1234);
//! assert!(codec::decode_i32(&[0x01], 1).is_err());
//! ```

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use crate::bits;
use crate::{Char16, ConvertError, Result};

const BYTE_SIZE: usize = 8;

pub const BOOL_WIDTH: usize = 1;
pub const CHAR_WIDTH: usize = 2;
pub const I16_WIDTH: usize = 2;
pub const U16_WIDTH: usize = 2;
pub const I32_WIDTH: usize = 4;
pub const U32_WIDTH: usize = 4;
pub const I64_WIDTH: usize = 8;
pub const U64_WIDTH: usize = 8;
pub const F32_WIDTH: usize = 4;
pub const F64_WIDTH: usize = 8;

//  Encoding

/// Byte `i` of the result is `(value >> 8i) & 0xFF`.
#[inline]
fn pack<const W: usize>(value: u64) -> [u8; W] {
    core::array::from_fn(|i| (value >> (BYTE_SIZE * i)) as u8)
}

/// `[1]` for `true`, `[0]` for `false`.
#[inline]
pub fn encode_bool(value: bool) -> [u8; BOOL_WIDTH] {
    [u8::from(value)]
}

#[inline]
pub fn encode_char(value: Char16) -> [u8; CHAR_WIDTH] {
    encode_u16(value.code())
}

#[inline]
pub fn encode_i16(value: i16) -> [u8; I16_WIDTH] {
    encode_u16(value as u16)
}

#[inline]
pub fn encode_u16(value: u16) -> [u8; U16_WIDTH] {
    pack(u64::from(value))
}

#[inline]
pub fn encode_i32(value: i32) -> [u8; I32_WIDTH] {
    encode_u32(value as u32)
}

#[inline]
pub fn encode_u32(value: u32) -> [u8; U32_WIDTH] {
    pack(u64::from(value))
}

#[inline]
pub fn encode_i64(value: i64) -> [u8; I64_WIDTH] {
    encode_u64(value as u64)
}

#[inline]
pub fn encode_u64(value: u64) -> [u8; U64_WIDTH] {
    pack(value)
}

#[inline]
pub fn encode_f32(value: f32) -> [u8; F32_WIDTH] {
    encode_u32(bits::f32_to_bits(value))
}

#[inline]
pub fn encode_f64(value: f64) -> [u8; F64_WIDTH] {
    encode_u64(bits::f64_to_bits(value))
}

/// Encodes `text` as ISO-8859-1, one byte per character.
///
/// # Errors
///
/// [`ConvertError::Unencodable`] for the first character above `U+00FF`.
///
/// ```
/// use byte_convert::codec::encode_text;
///
/// assert_eq!(encode_text("hé").unwrap(), vec![b'h', 0xE9]);
/// assert!(encode_text("€").is_err());
/// ```
pub fn encode_text(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            u8::try_from(ch).map_err(|_| ConvertError::Unencodable { ch, position })
        })
        .collect()
}

//  Decoding

/// Bytes `[start_index, start_index + width)`, clipped to the buffer end.
#[inline]
fn window(bytes: &[u8], start_index: usize, width: usize) -> Result<&[u8]> {
    if start_index >= bytes.len() {
        return Err(ConvertError::out_of_bounds(start_index, bytes.len()));
    }
    let end = start_index.saturating_add(width).min(bytes.len());
    Ok(&bytes[start_index..end])
}

/// ORs each byte into a 32-bit accumulator at `8 * position`.
///
/// Widening a `u8` never sign-extends, so no byte leaks into higher
/// positions. Callers narrow the result afterwards.
#[inline]
pub(crate) fn fold_u32(window: &[u8]) -> u32 {
    debug_assert!(window.len() <= U32_WIDTH);
    window
        .iter()
        .enumerate()
        .fold(0u32, |acc, (i, &b)| (u32::from(b) << (BYTE_SIZE * i)) | acc)
}

#[inline]
fn fold_u64(window: &[u8]) -> u64 {
    debug_assert!(window.len() <= U64_WIDTH);
    window
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &b)| (u64::from(b) << (BYTE_SIZE * i)) | acc)
}

/// `true` only when the byte at `start_index` is exactly `1`.
pub fn decode_bool(bytes: &[u8], start_index: usize) -> Result<bool> {
    bytes
        .get(start_index)
        .map(|&b| b == 1)
        .ok_or_else(|| ConvertError::out_of_bounds(start_index, bytes.len()))
}

pub fn decode_char(bytes: &[u8], start_index: usize) -> Result<Char16> {
    Ok(Char16(fold_u32(window(bytes, start_index, CHAR_WIDTH)?) as u16))
}

pub fn decode_i16(bytes: &[u8], start_index: usize) -> Result<i16> {
    Ok(decode_u16(bytes, start_index)? as i16)
}

pub fn decode_u16(bytes: &[u8], start_index: usize) -> Result<u16> {
    // 32-bit accumulator, truncated last
    Ok(fold_u32(window(bytes, start_index, U16_WIDTH)?) as u16)
}

pub fn decode_i32(bytes: &[u8], start_index: usize) -> Result<i32> {
    Ok(decode_u32(bytes, start_index)? as i32)
}

pub fn decode_u32(bytes: &[u8], start_index: usize) -> Result<u32> {
    Ok(fold_u32(window(bytes, start_index, U32_WIDTH)?))
}

pub fn decode_i64(bytes: &[u8], start_index: usize) -> Result<i64> {
    Ok(decode_u64(bytes, start_index)? as i64)
}

pub fn decode_u64(bytes: &[u8], start_index: usize) -> Result<u64> {
    Ok(fold_u64(window(bytes, start_index, U64_WIDTH)?))
}

pub fn decode_f32(bytes: &[u8], start_index: usize) -> Result<f32> {
    Ok(bits::f32_from_bits(decode_u32(bytes, start_index)?))
}

pub fn decode_f64(bytes: &[u8], start_index: usize) -> Result<f64> {
    Ok(bits::f64_from_bits(decode_u64(bytes, start_index)?))
}

/// Decodes the whole buffer as ISO-8859-1. An empty buffer gives `""`.
pub fn decode_text(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Decodes `bytes[start_index..end_index]` as ISO-8859-1.
///
/// An empty window reads no bytes and gives `""`, also at the buffer end:
/// `decode_text_range(bytes, 0, bytes.len())` always equals `decode_text(bytes)`.
///
/// # Errors
///
/// [`ConvertError::OutOfBounds`] when `start_index` lies past the buffer end,
/// [`ConvertError::InvalidRange`] when `end_index` precedes `start_index` or
/// runs past the end.
pub fn decode_text_range(bytes: &[u8], start_index: usize, end_index: usize) -> Result<String> {
    if start_index > bytes.len() {
        return Err(ConvertError::out_of_bounds(start_index, bytes.len()));
    }
    if end_index < start_index || end_index > bytes.len() {
        return Err(ConvertError::invalid_range(start_index, end_index, bytes.len()));
    }
    Ok(decode_text(&bytes[start_index..end_index]))
}
