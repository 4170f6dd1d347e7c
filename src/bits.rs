//! # Bit Primitives
//!
//! Stateless bit-test/set/clear operations on 8-bit values.
//!
//! Every operation that takes a raw `u8` bit index rejects indices outside
//! `0..=7` with [`BitIndexOutOfRange`], in debug and release builds alike.
//! Callers that have already validated an index can hold it as a [`BitIndex`]
//! and use the infallible [`BitField`] methods instead.
//!
//! ```
//! use z80disasm::bits::{self, BitField, BitIndex};
//!
//! assert_eq!(bits::set_bit(0b0000_0000, 3), Ok(0b0000_1000));
//! assert!(bits::set_bit(0x00, 8).is_err());
//!
//! let b7 = BitIndex::B7;
//! assert!(0x80u8.is_bit_set(b7));
//! assert_eq!(0xFFu8.clear_bit(b7), 0x7F);
//! ```

use thiserror::Error;

/// A bit index outside `0..=7` was passed to a bit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bit index {index} is out of range (expected 0-7)")]
pub struct BitIndexOutOfRange {
    /// The rejected index.
    pub index: u8,
}

/// A validated bit position within a byte (`0..=7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitIndex(u8);

impl BitIndex {
    pub const B0: BitIndex = BitIndex(0);
    pub const B1: BitIndex = BitIndex(1);
    pub const B2: BitIndex = BitIndex(2);
    pub const B3: BitIndex = BitIndex(3);
    pub const B4: BitIndex = BitIndex(4);
    pub const B5: BitIndex = BitIndex(5);
    pub const B6: BitIndex = BitIndex(6);
    pub const B7: BitIndex = BitIndex(7);

    /// Validates `index`, failing for anything above 7.
    pub const fn new(index: u8) -> Result<Self, BitIndexOutOfRange> {
        if index <= 7 {
            Ok(BitIndex(index))
        } else {
            Err(BitIndexOutOfRange { index })
        }
    }

    /// The raw position, always in `0..=7`.
    pub const fn get(self) -> u8 {
        self.0
    }

    const fn mask(self) -> u8 {
        1 << self.0
    }
}

impl TryFrom<u8> for BitIndex {
    type Error = BitIndexOutOfRange;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        BitIndex::new(index)
    }
}

/// Bit access on a byte through a validated [`BitIndex`].
pub trait BitField: Copy {
    /// Returns true if bit `index` is 1.
    fn is_bit_set(self, index: BitIndex) -> bool;

    /// Returns a copy with bit `index` forced to 1.
    fn set_bit(self, index: BitIndex) -> Self;

    /// Returns a copy with bit `index` forced to 0.
    fn clear_bit(self, index: BitIndex) -> Self;
}

impl BitField for u8 {
    fn is_bit_set(self, index: BitIndex) -> bool {
        self & index.mask() != 0
    }

    fn set_bit(self, index: BitIndex) -> Self {
        self | index.mask()
    }

    fn clear_bit(self, index: BitIndex) -> Self {
        self & !index.mask()
    }
}

/// Tests bit `index` of `value`.
pub fn is_set(value: u8, index: u8) -> Result<bool, BitIndexOutOfRange> {
    Ok(value.is_bit_set(BitIndex::new(index)?))
}

/// Returns `value` with bit `index` set to 1.
pub fn set_bit(value: u8, index: u8) -> Result<u8, BitIndexOutOfRange> {
    Ok(BitField::set_bit(value, BitIndex::new(index)?))
}

/// Returns `value` with bit `index` set to 0.
pub fn clear_bit(value: u8, index: u8) -> Result<u8, BitIndexOutOfRange> {
    Ok(BitField::clear_bit(value, BitIndex::new(index)?))
}

/// Interprets `value` as a two's-complement signed byte (-128..=127).
///
/// Bit 7 is the sign bit.
pub fn from_twos_complement(value: u8) -> i16 {
    if value.is_bit_set(BitIndex::B7) {
        value as i16 - 0x100
    } else {
        value as i16
    }
}
