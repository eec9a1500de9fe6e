//! Extension traits over the [`codec`](crate::codec) functions.
//!
//! ```
//! use byte_convert::{FromByteArray, ToByteArray};
//!
//! let bytes = 258i32.to_byte_array();
//! assert_eq!(bytes, [2, 1, 0, 0]);
//! assert_eq!(i32::from_byte_array(&bytes)?, 258);
//! # Ok::<(), byte_convert::ConvertError>(())
//! ```

use crate::codec;
use crate::{Char16, Result};

/// Encode a value into its fixed-width little-endian bytes
pub trait ToByteArray: Copy {
    type Bytes: AsRef<[u8]> + Copy;

    fn to_byte_array(self) -> Self::Bytes;
}

/// Decode a value from a byte buffer
pub trait FromByteArray: Sized {
    /// Bytes consumed by one value
    const WIDTH: usize;

    fn from_byte_array_at(bytes: &[u8], start_index: usize) -> Result<Self>;

    fn from_byte_array(bytes: &[u8]) -> Result<Self> {
        Self::from_byte_array_at(bytes, 0)
    }
}

macro_rules! impl_byte_array {
    ($($ty:ty => $width:expr, $encode:path, $decode:path;)*) => {
        $(
            impl ToByteArray for $ty {
                type Bytes = [u8; $width];

                #[inline]
                fn to_byte_array(self) -> Self::Bytes {
                    $encode(self)
                }
            }

            impl FromByteArray for $ty {
                const WIDTH: usize = $width;

                #[inline]
                fn from_byte_array_at(bytes: &[u8], start_index: usize) -> Result<Self> {
                    $decode(bytes, start_index)
                }
            }
        )*
    };
}

impl_byte_array! {
    bool => codec::BOOL_WIDTH, codec::encode_bool, codec::decode_bool;
    Char16 => codec::CHAR_WIDTH, codec::encode_char, codec::decode_char;
    i16 => codec::I16_WIDTH, codec::encode_i16, codec::decode_i16;
    u16 => codec::U16_WIDTH, codec::encode_u16, codec::decode_u16;
    i32 => codec::I32_WIDTH, codec::encode_i32, codec::decode_i32;
    u32 => codec::U32_WIDTH, codec::encode_u32, codec::decode_u32;
    i64 => codec::I64_WIDTH, codec::encode_i64, codec::decode_i64;
    u64 => codec::U64_WIDTH, codec::encode_u64, codec::decode_u64;
    f32 => codec::F32_WIDTH, codec::encode_f32, codec::decode_f32;
    f64 => codec::F64_WIDTH, codec::encode_f64, codec::decode_f64;
}

/// Generic form of the `codec::encode_*` functions.
#[inline]
pub fn encode<T: ToByteArray>(value: T) -> T::Bytes {
    value.to_byte_array()
}

/// Generic form of the `codec::decode_*` functions.
///
/// ```
/// use byte_convert::decode;
///
/// let buf = [0x01, 0x00, 0x02, 0x00];
/// assert_eq!(decode::<u16>(&buf, 2)?, 2);
/// # Ok::<(), byte_convert::ConvertError>(())
/// ```
#[inline]
pub fn decode<T: FromByteArray>(bytes: &[u8], start_index: usize) -> Result<T> {
    T::from_byte_array_at(bytes, start_index)
}
