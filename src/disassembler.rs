//! Z80 Disassembler Module
//!
//! Converts machine code in a memory image into human-readable mnemonics, one
//! instruction at a time or as a multi-line listing.

pub mod formatter;
pub mod matcher;

use std::fmt;

use crate::catalog::InstructionCatalog;
use crate::memory::MemoryImage;

/// Mnemonic reported for byte sequences no catalog entry matches.
pub const UNKNOWN_MNEMONIC: &str = "??";

/// Appended to the raw-byte preview of an unknown instruction.
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Number of bytes shown in the preview of an unknown instruction.
pub const UNKNOWN_PREVIEW_LEN: usize = 4;

/// The decoded form of one instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    /// Bytes consumed; 0 when nothing matched
    pub length: usize,

    /// Instruction bytes as space-separated hex pairs (e.g. "21 34 12"),
    /// or an unseparated 4-byte preview plus "..." when nothing matched
    pub hex_bytes: String,

    /// Substituted mnemonic (e.g. "LD HL,1234"), or "??" when nothing matched
    pub mnemonic: String,
}

impl DecodeResult {
    /// The fallback for an undefined opcode sequence at `address`.
    pub fn unknown<M>(memory: &M, address: u16) -> Self
    where
        M: MemoryImage + ?Sized,
    {
        let mut hex_bytes = memory.read_hex_string(address, UNKNOWN_PREVIEW_LEN);
        hex_bytes.push_str(PREVIEW_ELLIPSIS);

        Self {
            length: 0,
            hex_bytes,
            mnemonic: UNKNOWN_MNEMONIC.to_string(),
        }
    }

    /// True if no catalog entry matched.
    pub fn is_unknown(&self) -> bool {
        self.length == 0
    }
}

/// Disassemble the single instruction at `address`
///
/// Never fails: an undefined opcode yields [`DecodeResult::unknown`]. A caller
/// walking a listing should step one byte forward to resynchronize.
///
/// # Examples
///
/// ```
/// use z80disasm::{disassemble, FlatMemory, InstructionCatalog};
///
/// let mem = FlatMemory::from_bytes(0x8000, &[0x21, 0x34, 0x12]);
/// let result = disassemble(InstructionCatalog::z80(), &mem, 0x8000);
///
/// assert_eq!(result.length, 3);
/// assert_eq!(result.hex_bytes, "21 34 12");
/// assert_eq!(result.mnemonic, "LD HL,1234");
/// ```
pub fn disassemble<M>(catalog: &InstructionCatalog, memory: &M, address: u16) -> DecodeResult
where
    M: MemoryImage + ?Sized,
{
    let Some(def) = matcher::find_instruction(catalog, memory, address) else {
        let result = DecodeResult::unknown(memory, address);
        tracing::trace!(
            address = format_args!("{:04X}", address),
            preview = %result.hex_bytes,
            "unknown opcode"
        );
        return result;
    };

    let hex_bytes = (0..def.len())
        .map(|i| memory.read_hex_string(address.wrapping_add(i as u16), 1))
        .collect::<Vec<_>>()
        .join(" ");

    DecodeResult {
        length: def.len(),
        hex_bytes,
        mnemonic: formatter::render_mnemonic(def, memory, address),
    }
}

/// What a listing does when it reaches an undefined opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownPolicy {
    /// Emit the unknown line and end the listing
    #[default]
    Stop,

    /// Emit the unknown line and continue one byte further on
    Resync,
}

/// Options controlling listing output
#[derive(Debug, Clone, Copy)]
pub struct ListingOptions {
    /// Maximum number of lines to produce
    pub max_lines: usize,

    /// Behavior on an undefined opcode
    pub on_unknown: UnknownPolicy,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            max_lines: 6,
            on_unknown: UnknownPolicy::Stop,
        }
    }
}

/// One line of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLine {
    /// Address of the instruction's first byte
    pub address: u16,

    /// The decoded instruction
    pub result: DecodeResult,
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!(
            "{:04X}: {:<14}  {:<11}",
            self.address, self.result.mnemonic, self.result.hex_bytes
        );
        f.write_str(line.trim_end())
    }
}

/// Disassemble consecutive instructions starting at `start`
///
/// # Examples
///
/// ```
/// use z80disasm::{disassemble_listing, FlatMemory, InstructionCatalog, ListingOptions};
///
/// let mem = FlatMemory::from_bytes(0x8000, &[0x3E, 0x01, 0xC9]);
/// let options = ListingOptions { max_lines: 2, ..Default::default() };
/// let lines = disassemble_listing(InstructionCatalog::z80(), &mem, 0x8000, options);
///
/// assert_eq!(lines[0].to_string(), "8000: LD A,01         3E 01");
/// assert_eq!(lines[1].to_string(), "8002: RET             C9");
/// ```
pub fn disassemble_listing<M>(
    catalog: &InstructionCatalog,
    memory: &M,
    start: u16,
    options: ListingOptions,
) -> Vec<ListingLine>
where
    M: MemoryImage + ?Sized,
{
    let mut lines = Vec::new();
    let mut address = start;

    while lines.len() < options.max_lines {
        let result = disassemble(catalog, memory, address);
        let step = match (result.length, options.on_unknown) {
            (0, UnknownPolicy::Stop) => None,
            (0, UnknownPolicy::Resync) => Some(1),
            (length, _) => Some(length as u16),
        };

        lines.push(ListingLine { address, result });

        match step {
            Some(step) => address = address.wrapping_add(step),
            None => break,
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    #[test]
    fn test_listing_empty_when_no_lines_requested() {
        let mem = FlatMemory::new();
        let options = ListingOptions {
            max_lines: 0,
            ..Default::default()
        };
        assert!(disassemble_listing(InstructionCatalog::z80(), &mem, 0, options).is_empty());
    }

    #[test]
    fn test_unknown_line_format() {
        let mem = FlatMemory::from_bytes(0x1000, &[0xED, 0x00, 0x11, 0x22]);
        let lines = disassemble_listing(
            InstructionCatalog::z80(),
            &mem,
            0x1000,
            ListingOptions::default(),
        );

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_string(), "1000: ??              ED001122...");
    }

    #[test]
    fn test_unbounded_line_count_stops_at_unknown() {
        let mem = FlatMemory::from_bytes(0x0000, &[0xED, 0x00]);
        let options = ListingOptions {
            max_lines: usize::MAX,
            on_unknown: UnknownPolicy::Stop,
        };

        let lines = disassemble_listing(InstructionCatalog::z80(), &mem, 0x0000, options);

        assert_eq!(lines.len(), 1);
        assert!(lines[0].result.is_unknown());
    }

    #[test]
    fn test_default_options() {
        let options = ListingOptions::default();
        assert_eq!(options.max_lines, 6);
        assert_eq!(options.on_unknown, UnknownPolicy::Stop);
    }
}
