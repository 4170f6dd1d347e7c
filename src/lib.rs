//! # Z80 Disassembler Core
//!
//! A table-driven disassembler for the Zilog Z80, designed for debugger views that
//! need the text and length of the instruction at an arbitrary address.
//!
//! Given a memory image, an address and an instruction catalog, the disassembler
//! finds the first catalog entry whose byte pattern matches, decodes its operand
//! bytes, and renders them into the entry's mnemonic template.
//!
//! ## Quick Start
//!
//! ```rust
//! use z80disasm::{disassemble, FlatMemory, InstructionCatalog};
//!
//! // LD HL,1234h ; JR -2
//! let memory = FlatMemory::from_bytes(0x8000, &[0x21, 0x34, 0x12, 0x18, 0xFE]);
//! let catalog = InstructionCatalog::z80();
//!
//! let first = disassemble(catalog, &memory, 0x8000);
//! assert_eq!(first.mnemonic, "LD HL,1234");
//! assert_eq!(first.hex_bytes, "21 34 12");
//!
//! let second = disassemble(catalog, &memory, 0x8003);
//! assert_eq!(second.mnemonic, "JR -2");
//! assert_eq!(second.length, 2);
//! ```
//!
//! ## Architecture
//!
//! Data flows one way: memory image → matcher → formatter → [`DecodeResult`].
//! Nothing holds state between calls, so any number of threads may decode against
//! the same catalog and the same (unchanging) memory image.
//!
//! - **Read-only memory**: the disassembler sees memory through the `MemoryImage` trait
//! - **Priority-ordered catalog**: first matching entry wins
//! - **No failure path for bad input**: undefined opcodes produce `"??"` and length 0
//!
//! ## Modules
//!
//! - `bits` - Bit test/set/clear primitives with checked indices
//! - `memory` - MemoryImage trait and a flat 64KB implementation
//! - `catalog` - Instruction definitions, hex-template loader and catalog lint
//! - `opcodes` - The built-in Z80 instruction table
//! - `disassembler` - Matching, operand rendering, single decode and listings

pub mod bits;
pub mod catalog;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod wasm;

// Re-export public API
pub use bits::{BitField, BitIndex, BitIndexOutOfRange};
pub use catalog::{CatalogError, CatalogIssue, InstructionCatalog, InstructionDef, PatternToken};
pub use disassembler::{
    disassemble, disassemble_listing, DecodeResult, ListingLine, ListingOptions, UnknownPolicy,
};
pub use memory::{FlatMemory, MemoryImage};
pub use opcodes::Z80_INSTRUCTIONS;
