//! Zeroing and swapping through XOR.
//!
//! These are idiom demonstrations. `*x = 0`, `slice.fill(0)` and
//! `core::mem::swap` produce the same results and are what real code should
//! use.

use crate::error::LengthMismatch;
use crate::BitsPrimitive;

/// Zeroes `x` the way `xor eax, eax` does.
#[inline]
pub fn set_to_zero<P: BitsPrimitive>(x: &mut P) {
    *x = *x ^ *x;
}

/// Zeroes every byte of `buf` with a self XOR.
#[inline]
pub fn xor_zero_memory(buf: &mut [u8]) {
    for byte in buf {
        *byte ^= *byte;
    }
}

/// Exchanges the contents of `a` and `b` byte by byte, without a temporary.
///
/// Both buffers must have the same length. Only the common prefix is swapped
/// when they don't, and debug builds assert.
#[inline]
pub fn mem_swap(a: &mut [u8], b: &mut [u8]) {
    debug_assert_eq!(a.len(), b.len(), "buffers must have the same length");
    for (a, b) in a.iter_mut().zip(b.iter_mut()) {
        *a ^= *b;
        *b ^= *a;
        *a ^= *b;
    }
}

/// Same as [`mem_swap`], but refuses buffers of different lengths.
#[inline]
pub fn try_mem_swap(a: &mut [u8], b: &mut [u8]) -> Result<(), LengthMismatch> {
    if a.len() != b.len() {
        return Err(LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    mem_swap(a, b);
    Ok(())
}

/// Exchanges `x` and `y` without a temporary.
///
/// ```text
/// x        00101010    y        10101110
/// x ^= y   10000100
///                      y ^= x   00101010
/// x ^= y   10101110
/// ```
///
/// Equal values are left alone.
#[inline]
pub fn xor_swap<P: BitsPrimitive>(x: &mut P, y: &mut P) {
    if *x != *y {
        *x = *x ^ *y;
        *y = *y ^ *x;
        *x = *x ^ *y;
    }
}
