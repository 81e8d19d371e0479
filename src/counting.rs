//! Counting and scanning bits.

use crate::error::NotAPowerOfTwo;
use crate::{is_power_of_2, BitsPrimitive};

/// Multiplier of the 64-bit de Bruijn sequence used by [`logbase2_of_power2`].
///
/// Every 6-bit window of this constant, read from the top after a left shift
/// by `n`, is distinct for `n` in `0..64`.
pub const DE_BRUIJN_64: u64 = 0x022F_DD63_CC95_386D;

/// Maps the top 6 bits of `DE_BRUIJN_64 << n` back to `n`.
static DE_BRUIJN_POSITIONS: [u8; 64] = [
    0, 1, 2, 53, 3, 7, 54, 27, 4, 38, 41, 8, 34, 55, 48, 28, //
    62, 5, 39, 46, 44, 42, 22, 9, 24, 35, 59, 56, 49, 18, 29, 11, //
    63, 52, 6, 26, 37, 40, 33, 47, 61, 45, 43, 21, 23, 58, 17, 10, //
    51, 25, 36, 32, 60, 20, 57, 16, 50, 31, 19, 15, 30, 14, 13, 12, //
];

/// Counts the set bits of `x` (Kernighan's method).
///
/// Each iteration clears the lowest set bit, so the loop runs once per set
/// bit.
///
/// ```text
/// x = 01100100
///     01100000    count 1
///     01000000    count 2
///     00000000    count 3
/// ```
#[inline]
pub fn population_count<P: BitsPrimitive>(mut x: P) -> u32 {
    let mut count = 0;
    while !x.is_zero() {
        x = x & x.wrapping_sub(P::ONE);
        count += 1;
    }
    count
}

/// Counts the runs of consecutive one bits in `x`.
///
/// `x ^ (x >> 1)` has a one at both edges of every island, except for the
/// lower edge of an island touching bit 0, which the shift drops. Adding
/// `x & 1` puts that edge back.
///
/// ```text
/// x                 1111001111001110
/// x >> 1            0111100111100111
/// x ^ (x >> 1)      1000101000101001    6 edges
/// (x & 1) + 6 / 2   3
/// ```
#[inline]
pub fn count_bit_islands(x: u32) -> u32 {
    (x & 1) + (population_count(x ^ (x >> 1)) >> 1)
}

/// Returns the index of the lowest set bit of `x`, or `-1` when `x` is zero.
///
/// The lowest set bit is isolated first, then its index is assembled one
/// binary digit at a time: each mask covers the positions that have that
/// digit set.
#[inline]
pub fn bit_scan_forwards(x: u32) -> i8 {
    if x == 0 {
        return -1;
    }
    let x = x & x.wrapping_neg();
    let mut index = 0;
    if x & 0xFFFF_0000 != 0 {
        index += 16;
    }
    if x & 0xFF00_FF00 != 0 {
        index += 8;
    }
    if x & 0xF0F0_F0F0 != 0 {
        index += 4;
    }
    if x & 0xCCCC_CCCC != 0 {
        index += 2;
    }
    if x & 0xAAAA_AAAA != 0 {
        index += 1;
    }
    index
}

/// Returns `log2(x)` for a power of two `x`, in constant time.
///
/// Multiplying by `x == 1 << n` shifts the de Bruijn constant left by `n`,
/// which brings a unique 6-bit pattern to the top. The table maps that
/// pattern back to `n`.
///
/// The result is meaningless when `x` is not a power of two. Use
/// [`try_logbase2_of_power2`] when that is not known in advance.
#[inline]
pub fn logbase2_of_power2(x: u32) -> u32 {
    debug_assert!(x.is_power_of_two(), "{} is not a power of two", x);
    let index = (x as u64).wrapping_mul(DE_BRUIJN_64) >> 58;
    DE_BRUIJN_POSITIONS[index as usize] as u32
}

#[inline]
pub fn try_logbase2_of_power2(x: u32) -> Result<u32, NotAPowerOfTwo> {
    if x == 0 || !is_power_of_2(x) {
        return Err(NotAPowerOfTwo { value: x });
    }
    Ok(logbase2_of_power2(x))
}

/// Reverses the bit order of `x`.
///
/// Swaps neighbouring bits, then pairs, nibbles, bytes and finally halves.
#[inline]
pub fn reverse_bits(mut x: u32) -> u32 {
    x = ((x & 0xAAAA_AAAA) >> 1) | ((x & 0x5555_5555) << 1);
    x = ((x & 0xCCCC_CCCC) >> 2) | ((x & 0x3333_3333) << 2);
    x = ((x & 0xF0F0_F0F0) >> 4) | ((x & 0x0F0F_0F0F) << 4);
    x = ((x & 0xFF00_FF00) >> 8) | ((x & 0x00FF_00FF) << 8);
    (x >> 16) | (x << 16)
}

/// Rounds `x` up to the next power of two.
///
/// Powers of two are returned unchanged. Both `0` and anything above `2^63`
/// wrap around to `0`.
///
/// ```text
/// x            0010000001010000
/// x - 1        0010000001001111
/// smear        0011111111111111
/// + 1          0100000000000000
/// ```
#[inline]
pub fn round_up_to_pow2(mut x: u64) -> u64 {
    x = x.wrapping_sub(1);
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    x.wrapping_add(1)
}

/// Returns the next larger integer with the same number of set bits.
///
/// When no larger one fits in 32 bits the result is `u32::MAX`.
///
/// # Panics
///
/// Panics if `x` is zero.
#[inline]
pub fn next_lexicographic_permutation(x: u32) -> u32 {
    let t = (x | x.wrapping_sub(1)).wrapping_add(1);
    let lowest_t = t & t.wrapping_neg();
    let lowest_x = x & x.wrapping_neg();
    t | ((lowest_t / lowest_x) >> 1).wrapping_sub(1)
}
