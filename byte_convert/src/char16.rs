//! 16-bit character codes.
//!
//! A [`Char16`] holds any 16-bit code, including lone surrogates, so every
//! two-byte pattern decodes to a value and round-trips unchanged. Conversion
//! to a Rust [`char`] is checked.

use crate::ConvertError;

/// A character stored as its 16-bit code.
///
/// ```
/// use byte_convert::Char16;
///
/// let a = Char16::try_from('A').unwrap();
/// assert_eq!(a.code(), 0x41);
/// assert_eq!(char::try_from(a).unwrap(), 'A');
///
/// // characters outside the basic plane need two code units
/// assert!(Char16::try_from('🦀').is_err());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Char16(pub u16);

impl Char16 {
    #[inline]
    pub const fn code(self) -> u16 {
        self.0
    }

    /// `true` when the code is a surrogate half and has no `char` form.
    #[inline]
    pub const fn is_surrogate(self) -> bool {
        matches!(self.0, 0xD800..=0xDFFF)
    }
}

impl From<u16> for Char16 {
    #[inline]
    fn from(code: u16) -> Self {
        Char16(code)
    }
}

impl From<Char16> for u16 {
    #[inline]
    fn from(c: Char16) -> Self {
        c.0
    }
}

impl TryFrom<char> for Char16 {
    type Error = char;

    /// Fails with the original `char` when it lies outside the basic plane.
    #[inline]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        u16::try_from(u32::from(c)).map(Char16).map_err(|_| c)
    }
}

impl TryFrom<Char16> for char {
    type Error = ConvertError;

    #[inline]
    fn try_from(c: Char16) -> Result<Self, Self::Error> {
        char::from_u32(u32::from(c.0)).ok_or(ConvertError::InvalidChar(c.0))
    }
}
