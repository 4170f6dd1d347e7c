//! # Memory Image Abstraction
//!
//! This module provides the `MemoryImage` trait that decouples the disassembler from
//! whatever owns the machine's memory. The disassembler only ever reads; writing,
//! banking and ROM protection belong to the memory owner.
//!
//! ## Design Principles
//!
//! - Reads always succeed: `peek` never fails or panics for any 16-bit address
//! - Addresses wrap at 0xFFFF when a multi-byte read runs off the top of memory
//! - `&self` only, so a decode can borrow a snapshot for the duration of one call

use std::fmt::Write as _;

/// Read-only byte store consumed by the disassembler.
///
/// # Examples
///
/// ```
/// use z80disasm::{FlatMemory, MemoryImage};
///
/// let mem = FlatMemory::from_bytes(0x8000, &[0x21, 0x34, 0x12]);
///
/// assert_eq!(mem.peek(0x8001), 0x34);
/// assert_eq!(mem.read_hex_string(0x8000, 3), "213412");
/// assert_eq!(mem.read_hex_spaced(0x8000, 3), "21 34 12");
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use z80disasm::MemoryImage;
///
/// struct RomOnly {
///     rom: [u8; 0x4000],
/// }
///
/// impl MemoryImage for RomOnly {
///     fn peek(&self, addr: u16) -> u8 {
///         // Unmapped space floats high
///         self.rom.get(addr as usize).copied().unwrap_or(0xFF)
///     }
/// }
///
/// let rom = RomOnly { rom: [0; 0x4000] };
/// assert_eq!(rom.peek(0x4000), 0xFF);
/// ```
pub trait MemoryImage {
    /// Reads the byte at `addr`.
    ///
    /// This method must never panic.
    fn peek(&self, addr: u16) -> u8;

    /// Reads `count` bytes starting at `addr`, each rendered as two uppercase hex
    /// digits, concatenated without a separator.
    fn read_hex_string(&self, addr: u16, count: usize) -> String {
        let mut out = String::with_capacity(count * 2);
        for i in 0..count {
            let _ = write!(out, "{:02X}", self.peek(addr.wrapping_add(i as u16)));
        }
        out
    }

    /// Like [`read_hex_string`](Self::read_hex_string) but with a single space
    /// between byte pairs (no trailing space).
    fn read_hex_spaced(&self, addr: u16, count: usize) -> String {
        let mut out = String::with_capacity(count * 3);
        for i in 0..count {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{:02X}", self.peek(addr.wrapping_add(i as u16)));
        }
        out
    }
}

impl<T: MemoryImage + ?Sized> MemoryImage for &T {
    fn peek(&self, addr: u16) -> u8 {
        (**self).peek(addr)
    }
}

/// Simple 64KB flat memory image.
///
/// All 65536 addresses (0x0000-0xFFFF) map to a single contiguous array,
/// initialized to 0x00.
///
/// # Examples
///
/// ```
/// use z80disasm::{FlatMemory, MemoryImage};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x4000, &[0xCD, 0x00, 0x80]);
///
/// assert_eq!(mem.peek(0x4000), 0xCD);
/// assert_eq!(mem.peek_word(0x4001), 0x8000);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Creates an image holding `bytes` at `origin`, zero elsewhere.
    pub fn from_bytes(origin: u16, bytes: &[u8]) -> Self {
        let mut mem = Self::new();
        mem.load(origin, bytes);
        mem
    }

    /// Copies `bytes` into memory starting at `origin`, wrapping past 0xFFFF.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) {
        for (i, &b) in bytes.iter().enumerate() {
            self.poke(origin.wrapping_add(i as u16), b);
        }
    }

    /// Writes a single byte.
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Reads a little-endian 16-bit word.
    pub fn peek_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.peek(addr), self.peek(addr.wrapping_add(1))])
    }

    /// The whole image as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory").finish_non_exhaustive()
    }
}

impl MemoryImage for FlatMemory {
    fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        // Initially all zeros
        assert_eq!(mem.peek(0x0000), 0x00);
        assert_eq!(mem.peek(0xFFFF), 0x00);

        mem.poke(0x1234, 0x42);
        assert_eq!(mem.peek(0x1234), 0x42);
    }

    #[test]
    fn test_hex_string_is_uppercase_and_unseparated() {
        let mem = FlatMemory::from_bytes(0x0100, &[0xab, 0x0c, 0xff]);
        assert_eq!(mem.read_hex_string(0x0100, 3), "AB0CFF");
        assert_eq!(mem.read_hex_string(0x0100, 0), "");
    }

    #[test]
    fn test_hex_spaced_has_no_trailing_space() {
        let mem = FlatMemory::from_bytes(0x0100, &[0x01, 0x02]);
        assert_eq!(mem.read_hex_spaced(0x0100, 2), "01 02");
        assert_eq!(mem.read_hex_spaced(0x0100, 1), "01");
    }

    #[test]
    fn test_reads_wrap_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.load(0xFFFE, &[0x11, 0x22, 0x33]);

        assert_eq!(mem.peek(0x0000), 0x33);
        assert_eq!(mem.read_hex_string(0xFFFE, 4), "11223300");
        assert_eq!(mem.peek_word(0xFFFF), 0x3322);
    }

    #[test]
    fn test_borrowed_image_delegates() {
        let mem = FlatMemory::from_bytes(0x0000, &[0x99]);
        let borrowed: &FlatMemory = &mem;
        assert_eq!(MemoryImage::peek(&borrowed, 0x0000), 0x99);
        assert_eq!(borrowed.read_hex_string(0x0000, 1), "99");
    }

    #[test]
    fn test_slice_view_matches_peek() {
        let mem = FlatMemory::from_bytes(0x8000, &[0xC9]);
        assert_eq!(mem.as_slice().len(), 65536);
        assert_eq!(mem.as_slice()[0x8000], mem.peek(0x8000));
    }
}
