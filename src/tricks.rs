//! The evil ones.

use crate::BitsPrimitive;

const INV_SQRT_MAGIC: u32 = 0x5F37_59DF;

/// Approximates `1 / sqrt(x)` for positive `x`.
///
/// Halving the raw IEEE-754 bits roughly halves the exponent, and subtracting
/// that from the magic constant negates it, giving a first guess within a few
/// percent. One Newton-Raphson step brings the relative error under 0.18%;
/// each further step would roughly square it.
///
/// See <https://en.wikipedia.org/wiki/Fast_inverse_square_root>.
#[inline]
pub fn fast_inversed_sqrt(x: f32) -> f32 {
    let half = x * 0.5;
    let y = f32::from_bits(INV_SQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
    y * (1.5 - half * y * y)
}

/// Toggles `x` between `a` and `b`.
///
/// Equivalent to `if x == a { x = b } else if x == b { x = a }`, provided `x`
/// is one of the two. For any other value the result is meaningless.
#[inline]
pub fn if_x_equals_a<P: BitsPrimitive>(x: &mut P, a: P, b: P) {
    *x = a ^ b ^ *x;
}

/// XORs every byte of `buf` with `key`. Applying it twice restores `buf`.
///
/// **Not encryption.** A single-byte key falls to frequency analysis, and any
/// known plaintext byte reveals it outright. This is a bitwise idiom, never a
/// way to protect data.
#[inline]
pub fn encrypt_decrypt(buf: &mut [u8], key: u8) {
    for byte in buf {
        *byte ^= key;
    }
}
