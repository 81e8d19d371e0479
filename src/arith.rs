//! Multiplication and division by constants, with shifts.

use crate::BitsPrimitive;

/// `x * 2`, wrapping.
#[inline]
pub fn multiply_by_2<P: BitsPrimitive>(x: P) -> P {
    x << 1
}

/// `x / 2`.
///
/// On signed types the shift is arithmetic and rounds towards negative
/// infinity, so `divide_by_2(-3) == -2` where `-3 / 2 == -1`.
#[inline]
pub fn divide_by_2<P: BitsPrimitive>(x: P) -> P {
    x >> 1
}

/// `x * 10` as `x * 2 + x * 8`, wrapping.
#[inline]
pub fn multiply_by_10<P: BitsPrimitive>(x: P) -> P {
    x.wrapping_add(x).wrapping_add(x << 3)
}

/// Reciprocal of 10 in 3.32 fixed point, rounded up: `ceil(2^35 / 10)`.
pub const DIVIDE_BY_10_MAGIC: u64 = 0xCCCC_CCCD;

/// Fixed-point position of [`DIVIDE_BY_10_MAGIC`].
pub const DIVIDE_BY_10_SHIFT: u32 = 35;

/// `x / 10` as a multiplication by a fixed-point reciprocal.
///
/// The rounding error of the magic constant is `2 / (10 * 2^35)`; multiplied
/// by any `x < 2^32` it stays below `1 / 10`, so truncating the 64-bit
/// product always yields the exact quotient.
#[inline]
pub fn divide_by_10(x: u32) -> u32 {
    ((x as u64 * DIVIDE_BY_10_MAGIC) >> DIVIDE_BY_10_SHIFT) as u32
}
