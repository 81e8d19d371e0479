use core::ops::Not;

use crate::BitsPrimitive;

/// The value of a single bit, as read by [`read_bit`](crate::read_bit) and
/// written by [`write_bit`](crate::write_bit).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum BitValue {
    Zero = 0,
    One = 1,
}

impl BitValue {
    #[inline]
    pub fn to_bool(self) -> bool {
        self == BitValue::One
    }

    /// Widens the bit to a whole integer: all ones for [`BitValue::One`], all
    /// zeros for [`BitValue::Zero`].
    #[inline]
    pub fn to_mask<P: BitsPrimitive>(self) -> P {
        P::mask_from_bool(self.to_bool())
    }
}

impl From<bool> for BitValue {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            BitValue::One
        } else {
            BitValue::Zero
        }
    }
}

impl From<BitValue> for bool {
    #[inline]
    fn from(value: BitValue) -> Self {
        value.to_bool()
    }
}

impl Not for BitValue {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        BitValue::from(!self.to_bool())
    }
}
