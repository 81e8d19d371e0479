//! Error types for the checked companions of the bit tricks.
//!
//! The tricks themselves never fail. These are only produced by the `try_*`
//! functions, which validate the precondition the trick would otherwise
//! silently violate.

use core::fmt;

/// A bit index is not smaller than the integer's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitIndexOutOfRange {
    /// The offending bit index.
    pub bit: u32,
    /// Width of the integer, in bits.
    pub width: u32,
}

impl fmt::Display for BitIndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bit index {} out of range for a {}-bit integer",
            self.bit, self.width
        )
    }
}

impl core::error::Error for BitIndexOutOfRange {}

/// A value that must have exactly one bit set does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAPowerOfTwo {
    /// The value that was not a power of two.
    pub value: u32,
}

impl fmt::Display for NotAPowerOfTwo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a power of two", self.value)
    }
}

impl core::error::Error for NotAPowerOfTwo {}

/// Two buffers that must have the same length do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    /// Length of the first buffer.
    pub left: usize,
    /// Length of the second buffer.
    pub right: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buffer lengths differ: {} != {}",
            self.left, self.right
        )
    }
}

impl core::error::Error for LengthMismatch {}
