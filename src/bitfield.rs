//! Single-bit and bitfield primitives.
//!
//! Bit indexes count from the least significant bit, so bit `0` of `0b0100`
//! is `0` and bit `2` is `1`. None of the plain functions check their
//! indexes: an index outside `[0, width)` is a caller error, asserted in
//! debug builds only. The `try_*` variants return an error instead.

use crate::bitsprimitive::debug_assert_bit_index;
use crate::error::BitIndexOutOfRange;
use crate::{BitValue, BitsPrimitive};

/// Turns on `bit` in `x`.
///
/// ```text
/// x            10100101
/// 1 << 4       00010000
/// x | 1 << 4   10110101
/// ```
#[inline]
pub fn set_bit<P: BitsPrimitive>(x: P, bit: u32) -> P {
    debug_assert_bit_index::<P>(bit);
    x | (P::ONE << bit)
}

/// Turns off `bit` in `x`.
///
/// ```text
/// x               10110101
/// !(1 << 4)       11101111
/// x & !(1 << 4)   10100101
/// ```
#[inline]
pub fn clear_bit<P: BitsPrimitive>(x: P, bit: u32) -> P {
    debug_assert_bit_index::<P>(bit);
    x & !(P::ONE << bit)
}

/// Toggles `bit` in `x`.
#[inline]
pub fn flip_bit<P: BitsPrimitive>(x: P, bit: u32) -> P {
    debug_assert_bit_index::<P>(bit);
    x ^ (P::ONE << bit)
}

#[inline]
pub fn read_bit<P: BitsPrimitive>(x: P, bit: u32) -> BitValue {
    debug_assert_bit_index::<P>(bit);
    BitValue::from(!((x >> bit) & P::ONE).is_zero())
}

/// Sets `bit` in `x` to `value` without branching on `value`.
///
/// The value is widened to an all-ones or all-zeros mask, and only the bits
/// where that mask and `x` disagree at position `bit` are flipped.
#[inline]
pub fn write_bit<P: BitsPrimitive>(x: P, bit: u32, value: BitValue) -> P {
    debug_assert_bit_index::<P>(bit);
    x ^ ((value.to_mask::<P>() ^ x) & (P::ONE << bit))
}

#[inline]
pub fn try_set_bit<P: BitsPrimitive>(x: P, bit: u32) -> Result<P, BitIndexOutOfRange> {
    check_bit_index::<P>(bit)?;
    Ok(set_bit(x, bit))
}

#[inline]
pub fn try_clear_bit<P: BitsPrimitive>(x: P, bit: u32) -> Result<P, BitIndexOutOfRange> {
    check_bit_index::<P>(bit)?;
    Ok(clear_bit(x, bit))
}

#[inline]
pub fn try_flip_bit<P: BitsPrimitive>(x: P, bit: u32) -> Result<P, BitIndexOutOfRange> {
    check_bit_index::<P>(bit)?;
    Ok(flip_bit(x, bit))
}

#[inline]
fn check_bit_index<P: BitsPrimitive>(bit: u32) -> Result<(), BitIndexOutOfRange> {
    if bit < P::BIT_COUNT {
        Ok(())
    } else {
        Err(BitIndexOutOfRange {
            bit,
            width: P::BIT_COUNT,
        })
    }
}

/// Extracts the field selected by `mask`, moved down by `shift` bits.
///
/// ```text
/// x                     10110101
/// mask                  00011000
/// x & mask              00010000
/// (x & mask) >> 3       00000010
/// ```
///
/// On signed types the shift is arithmetic, so a field that includes the
/// sign bit comes back sign-extended.
#[inline]
pub fn extract_bitfield<P: BitsPrimitive>(x: P, mask: P, shift: u32) -> P {
    (x & mask) >> shift
}

/// Replaces the field selected by `mask` with `value << shift`.
///
/// Bits of `value` that land outside of `mask` are dropped, so the bits of `x`
/// outside the field are never touched.
///
/// ```text
/// x                                    10110101
/// value                                00000110
/// mask                                 00011100
/// x & !mask                            10100001
/// (x & !mask) | (value << 2 & mask)    10111001
/// ```
#[inline]
pub fn insert_bitfield<P: BitsPrimitive>(x: P, value: P, mask: P, shift: u32) -> P {
    (x & !mask) | ((value << shift) & mask)
}

/// Takes the bits of `b` where `mask` is one and the bits of `a` elsewhere.
#[inline]
pub fn masked_copy<P: BitsPrimitive>(a: P, b: P, mask: P) -> P {
    (b & mask) | (a & !mask)
}

/// Exchanges bits `i` and `j` of `x`.
///
/// `p` is one exactly when the two bits differ, in which case flipping both
/// swaps them.
#[inline]
pub fn swap_bits<P: BitsPrimitive>(x: P, i: u32, j: u32) -> P {
    debug_assert_bit_index::<P>(i);
    debug_assert_bit_index::<P>(j);
    let p = ((x >> i) ^ (x >> j)) & P::ONE;
    x ^ (p << i) ^ (p << j)
}

#[inline]
pub fn is_even<P: BitsPrimitive>(x: P) -> bool {
    (x & P::ONE).is_zero()
}

/// Returns whether at most one bit of `x` is set.
///
/// Zero passes the test: the idiom only checks that clearing the lowest set
/// bit leaves nothing behind.
#[inline]
pub fn is_power_of_2<P: BitsPrimitive>(x: P) -> bool {
    (x & x.wrapping_sub(P::ONE)).is_zero()
}

/// Turns on the rightmost zero bit. All ones stay all ones.
///
/// ```text
/// x            10100111
/// x + 1        10101000
/// x | x + 1    10101111
/// ```
#[inline]
pub fn set_rightmost_zero<P: BitsPrimitive>(x: P) -> P {
    x | x.wrapping_add(P::ONE)
}

/// Turns off the rightmost one bit. Zero stays zero.
///
/// ```text
/// x            01011000
/// x - 1        01010111
/// x & x - 1    01010000
/// ```
#[inline]
pub fn clear_rightmost_bit<P: BitsPrimitive>(x: P) -> P {
    x & x.wrapping_sub(P::ONE)
}

/// Turns the trailing zero bits into ones. Zero becomes all ones.
#[inline]
pub fn convert_trailing_0s_to_1s<P: BitsPrimitive>(x: P) -> P {
    x.wrapping_sub(P::ONE) | x
}

/// Isolates the lowest one bit of `x`, or zero when there is none.
///
/// ```text
/// x         01101000
/// -x        10011000
/// x & -x    00001000
/// ```
#[inline]
pub fn least_significant_mask<P: BitsPrimitive>(x: P) -> P {
    x & x.wrapping_neg()
}

pub use self::least_significant_mask as extract_1_lsb;

#[cfg(test)]
mod tests {
    use crate::error::BitIndexOutOfRange;
    use crate::BitValue;

    #[test]
    fn set_bit() {
        use super::set_bit;

        assert_eq!(set_bit(0b10100101u8, 4), 0b10110101);
        assert_eq!(set_bit(0b10110101u8, 4), 0b10110101);
        assert_eq!(set_bit(0u32, 31), 0x8000_0000);
        assert_eq!(set_bit(0i8, 7), i8::MIN);
    }

    #[test]
    fn clear_bit() {
        use super::clear_bit;

        assert_eq!(clear_bit(0b10110101u8, 4), 0b10100101);
        assert_eq!(clear_bit(0b10100101u8, 4), 0b10100101);
        assert_eq!(clear_bit(u64::MAX, 63), u64::MAX >> 1);
    }

    #[test]
    fn flip_bit() {
        use super::flip_bit;

        assert_eq!(flip_bit(0b10110101u8, 4), 0b10100101);
        assert_eq!(flip_bit(0b10100101u8, 4), 0b10110101);
        assert_eq!(flip_bit(-1i32, 0), -2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "bit index 8 out of range for a 8-bit integer")]
    fn set_bit_out_of_range_asserts_in_debug() {
        let _ = super::set_bit(0u8, 8);
    }

    #[test]
    fn read_bit() {
        use super::read_bit;

        assert_eq!(read_bit(0b0100u8, 2), BitValue::One);
        assert_eq!(read_bit(0b0100u8, 1), BitValue::Zero);
        assert_eq!(read_bit(i16::MIN, 15), BitValue::One);
    }

    #[test]
    fn write_bit() {
        use super::write_bit;

        assert_eq!(write_bit(0b0000u8, 2, BitValue::One), 0b0100);
        assert_eq!(write_bit(0b0100u8, 2, BitValue::One), 0b0100);
        assert_eq!(write_bit(0b1111u8, 2, BitValue::Zero), 0b1011);
        assert_eq!(write_bit(0b1011u8, 2, BitValue::Zero), 0b1011);

        let x = 0b0110_1001u8;
        for bit in 0..8 {
            assert_eq!(write_bit(x, bit, !super::read_bit(x, bit)), super::flip_bit(x, bit));
        }
    }

    #[test]
    fn try_variants() {
        use super::{try_clear_bit, try_flip_bit, try_set_bit};

        assert_eq!(try_set_bit(0u8, 7), Ok(0x80));
        assert_eq!(try_clear_bit(0xFFu8, 0), Ok(0xFE));
        assert_eq!(try_flip_bit(0u16, 15), Ok(0x8000));

        let err = BitIndexOutOfRange { bit: 8, width: 8 };
        assert_eq!(try_set_bit(0u8, 8), Err(err));
        assert_eq!(try_clear_bit(0u8, 8), Err(err));
        assert_eq!(try_flip_bit(0u8, 8), Err(err));
        assert_eq!(
            try_set_bit(0u64, 100),
            Err(BitIndexOutOfRange { bit: 100, width: 64 })
        );
    }

    #[test]
    fn extract_bitfield() {
        use super::extract_bitfield;

        assert_eq!(extract_bitfield(0b10110101u8, 0b00011000, 3), 0b10);
        assert_eq!(extract_bitfield(0x12345678u32, 0x0000FF00, 8), 0x56);
        assert_eq!(extract_bitfield(0xABu8, 0, 0), 0);
    }

    #[test]
    fn insert_bitfield() {
        use super::insert_bitfield;

        assert_eq!(insert_bitfield(0b10110101u8, 0b110, 0b00011100, 2), 0b10111001);
        assert_eq!(insert_bitfield(0x12345678u32, 0xAB, 0x0000FF00, 8), 0x1234AB78);
        // Value bits outside the mask are dropped.
        assert_eq!(insert_bitfield(0u8, 0xFF, 0b00011100, 2), 0b00011100);
    }

    #[test]
    fn masked_copy() {
        use super::masked_copy;

        let a = 0b0101010001011110u32;
        let b = 0b1111011011011000u32;
        let mask = 0b0100010110110110u32;
        assert_eq!(masked_copy(a, b, mask), 0b0101010011011000);
        assert_eq!(masked_copy(a, b, 0), a);
        assert_eq!(masked_copy(a, b, u32::MAX), b);
    }

    #[test]
    fn swap_bits() {
        use super::swap_bits;

        assert_eq!(swap_bits(0b01001100u8, 3, 5), 0b01100100);
        assert_eq!(swap_bits(0b00001000u8, 3, 5), 0b00100000);
        assert_eq!(swap_bits(0b00101000u8, 3, 5), 0b00101000);
        assert_eq!(swap_bits(0b1u32, 0, 31), 0x8000_0000);
        assert_eq!(swap_bits(0b1u8, 0, 0), 0b1);
    }

    #[test]
    fn is_even() {
        use super::is_even;

        assert!(is_even(0u8));
        assert!(is_even(42u32));
        assert!(!is_even(7u8));
        assert!(!is_even(-3i32));
    }

    #[test]
    fn is_power_of_2() {
        use super::is_power_of_2;

        assert!(is_power_of_2(1u8));
        assert!(is_power_of_2(64u8));
        assert!(is_power_of_2(1u64 << 63));
        assert!(is_power_of_2(0u8));
        assert!(!is_power_of_2(3u8));
        assert!(!is_power_of_2(0xFFu8));
    }

    #[test]
    fn rightmost_bits() {
        use super::{clear_rightmost_bit, convert_trailing_0s_to_1s, set_rightmost_zero};

        assert_eq!(set_rightmost_zero(0b10100111u8), 0b10101111);
        assert_eq!(set_rightmost_zero(0xFFu8), 0xFF);
        assert_eq!(clear_rightmost_bit(0b01011000u8), 0b01010000);
        assert_eq!(clear_rightmost_bit(0u8), 0);
        assert_eq!(convert_trailing_0s_to_1s(0b01101000u32), 0b01101111);
        assert_eq!(convert_trailing_0s_to_1s(0u32), u32::MAX);
    }

    #[test]
    fn least_significant_mask() {
        use super::{extract_1_lsb, least_significant_mask};

        assert_eq!(least_significant_mask(0b00000101u8), 0b00000001);
        assert_eq!(least_significant_mask(0b01101000u8), 0b00001000);
        assert_eq!(least_significant_mask(0u8), 0);
        assert_eq!(extract_1_lsb(0x8000_0000u32), 0x8000_0000);
    }
}
