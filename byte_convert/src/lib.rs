//! # byte_convert
//!
//! A `no_std` compatible little-endian codec for fixed-width primitives.
//!
//! ```rust
//! use byte_convert::{codec, FromByteArray, ToByteArray};
//!
//! let mut buf = Vec::new();
//! buf.extend_from_slice(&1i32.to_byte_array());
//! buf.extend_from_slice(&codec::encode_f64(8.0));
//!
//! assert_eq!(&buf[..4], &[0x01u8, 0x00, 0x00, 0x00]);
//! assert_eq!(i32::from_byte_array(&buf).unwrap(), 1);
//! assert_eq!(f64::from_byte_array_at(&buf, 4).unwrap(), 8.0);
//! ```
//!
//! ## Short buffers
//!
//! A decode that starts inside the buffer but runs off its end treats the
//! missing high-order bytes as zero. Starting at or past the end is an
//! [`ConvertError::OutOfBounds`] error.
//!
//! ```rust
//! use byte_convert::FromByteArray;
//!
//! assert_eq!(u32::from_byte_array(&[0x01]).unwrap(), 1);
//! assert!(u32::from_byte_array(&[]).is_err());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod bits;
pub mod char16;
pub mod codec;
pub mod convert;
pub mod error;

pub use char16::Char16;
pub use convert::{FromByteArray, ToByteArray, decode, encode};
pub use error::{ConvertError, Result};

/// Byte order of every encoding in this crate. Always `true`.
pub const IS_LITTLE_ENDIAN: bool = true;
