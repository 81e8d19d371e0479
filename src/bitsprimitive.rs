use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

/// Represents a fixed-width integer whose bits can be twiddled.
///
/// It provides the common interface every trick in this crate is written
/// against. All arithmetic goes through the `wrapping_*` methods, so the
/// tricks behave as two's-complement identities in both debug and release
/// builds.
///
/// It has implementations for all primitive integer types, signed and
/// unsigned.
pub trait BitsPrimitive
where
    Self: Sized + Copy + Eq + Ord + Debug,
    Self: BitAnd<Output = Self>,
    Self: BitOr<Output = Self>,
    Self: BitXor<Output = Self>,
    Self: Not<Output = Self>,
    Self: Shl<u32, Output = Self>,
    Self: Shr<u32, Output = Self>,
{
    const BIT_COUNT: u32;
    const ZERO: Self;
    const ONE: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;

    /// `0` for `false`, `1` for `true`.
    fn from_bool(value: bool) -> Self;

    /// All ones when `value` is true, all zeros otherwise.
    #[inline]
    fn mask_from_bool(value: bool) -> Self {
        Self::from_bool(value).wrapping_neg()
    }

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_primitive {
    ($($type:ty),*) => {
        $(
            impl BitsPrimitive for $type {
                const BIT_COUNT: u32 = <$type>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$type>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$type>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_neg(self) -> Self {
                    <$type>::wrapping_neg(self)
                }

                #[inline]
                fn from_bool(value: bool) -> Self {
                    value as $type
                }
            }
        )*
    };
}

impl_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Debug-only check of the `bit < width` precondition shared by the
/// single-bit operations.
#[inline]
pub(crate) fn debug_assert_bit_index<P: BitsPrimitive>(bit: u32) {
    debug_assert!(
        bit < P::BIT_COUNT,
        "bit index {} out of range for a {}-bit integer",
        bit,
        P::BIT_COUNT
    );
}
