//! Branch-free selection.
//!
//! All three functions turn a comparison into a mask with `-(cond as P)`:
//! all ones when the comparison holds, all zeros otherwise. The mask then
//! picks between two precomputed values with `&` and `^`.

use crate::BitsPrimitive;

/// Returns the smaller of `x` and `y`.
///
/// `y ^ ((x ^ y) & -(x < y))` is `y ^ x ^ y == x` when `x < y`, and
/// `y ^ 0 == y` otherwise.
#[inline]
pub fn min<P: BitsPrimitive>(x: P, y: P) -> P {
    y ^ ((x ^ y) & P::mask_from_bool(x < y))
}

/// Returns the larger of `x` and `y`.
#[inline]
pub fn max<P: BitsPrimitive>(x: P, y: P) -> P {
    x ^ ((x ^ y) & P::mask_from_bool(x < y))
}

/// Computes `(x + y) % m` without dividing or branching.
///
/// Requires `0 <= x < m` and `0 <= y < m`, so that the sum is below `2 * m`
/// and a single conditional subtraction is enough. `x + y` wraps when it
/// does not fit in `P`, and the result is then meaningless.
#[inline]
pub fn modular_addition<P: BitsPrimitive>(x: P, y: P, m: P) -> P {
    let t = x.wrapping_add(y);
    t.wrapping_sub(m & P::mask_from_bool(t >= m))
}
