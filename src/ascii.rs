//! ASCII case conversion with a single bit.
//!
//! Upper and lower case ASCII letters differ only in bit 5 (`0x20`): it is
//! clear in `'A'..='Z'` and set in `'a'..='z'`. `b' '` is exactly that bit,
//! and `b'_'` (`0x5F`) is every other bit of a 7-bit character.
//!
//! Only letters are meaningful input. Any other byte goes through the same
//! bit operation unchecked, so `to_uppercase(b'{')` is `b'['`.

const CASE_BIT: u8 = b' ';
const UPPERCASE_MASK: u8 = b'_';

#[inline]
pub fn to_uppercase(x: u8) -> u8 {
    x & UPPERCASE_MASK
}

#[inline]
pub fn to_lowercase(x: u8) -> u8 {
    x | CASE_BIT
}

/// Turns upper case into lower case and the other way around.
#[inline]
pub fn invert_case(x: u8) -> u8 {
    x ^ CASE_BIT
}
