//! Float/integer bit reinterpretation.
//!
//! None of these perform numeric conversion: the IEEE-754 pattern is carried
//! over unchanged, so NaN payloads and `-0.0` survive.

use crate::codec;

#[inline]
pub fn f32_to_bits(value: f32) -> u32 {
    bytemuck::cast(value)
}

#[inline]
pub fn f32_from_bits(bits: u32) -> f32 {
    bytemuck::cast(bits)
}

#[inline]
pub fn f64_to_bits(value: f64) -> u64 {
    bytemuck::cast(value)
}

#[inline]
pub fn f64_from_bits(bits: u64) -> f64 {
    bytemuck::cast(bits)
}

/// Reads an `i32` bit pattern as an `f32` by passing it through the codec.
///
/// ```
/// use byte_convert::bits::i32_bits_to_f32;
///
/// assert_eq!(i32_bits_to_f32(0x4100_0000), 8.0);
/// ```
pub fn i32_bits_to_f32(value: i32) -> f32 {
    f32_from_bits(codec::fold_u32(&codec::encode_i32(value)))
}

pub fn f32_bits_to_i32(value: f32) -> i32 {
    bytemuck::cast(value)
}

pub fn f64_bits_to_i64(value: f64) -> i64 {
    bytemuck::cast(value)
}

pub fn i64_bits_to_f64(value: i64) -> f64 {
    bytemuck::cast(value)
}
