//! Bithax
//!
//! A collection of bitwise hacks for integers, ASCII characters and one for
//! floats, from the common (`x & (x - 1)`) to the evil (the fast inverse
//! square root).
//!
//! Every function is an independent leaf. Most of them are generic over
//! [`BitsPrimitive`], implemented for all primitive integer types, and rely
//! on two's-complement wrapping arithmetic; a few are tied to the width the
//! trick was designed for (`u32` for [`reverse_bits`], `u64` for
//! [`round_up_to_pow2`]).
//!
//! # Preconditions
//!
//! The tricks do not validate their input. A bit index outside the integer,
//! a non-power of two passed to [`logbase2_of_power2`] or a non-letter passed
//! to [`to_uppercase`] gives a deterministic but meaningless result, exactly
//! like the underlying idiom. Debug builds assert the index and power-of-two
//! preconditions. Where checking is wanted, the `try_*` companions return a
//! [`Result`] instead.
//!
//! The only sentinel is the `-1` returned by [`bit_scan_forwards`] for zero.
//!
//! # Example
//!
//! ```
//! use bithax::{count_bit_islands, min, population_count, round_up_to_pow2, set_bit};
//!
//! assert_eq!(set_bit(0b0001u8, 3), 0b1001);
//! assert_eq!(population_count(0b01100100u8), 3);
//! assert_eq!(count_bit_islands(0b1111001111001110), 3);
//! assert_eq!(min(7u8, 3), 3);
//! assert_eq!(round_up_to_pow2(17), 32);
//! ```

#![cfg_attr(not(test), no_std)]

mod arith;
mod ascii;
mod bitfield;
mod bitsprimitive;
mod bitvalue;
mod counting;
pub mod error;
mod memory;
mod select;
mod tricks;

pub use arith::*;
pub use ascii::*;
pub use bitfield::*;
pub use bitsprimitive::*;
pub use bitvalue::*;
pub use counting::*;
pub use memory::*;
pub use select::*;
pub use tricks::*;
