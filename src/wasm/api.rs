//! WASM API for the Z80 disassembler.
//!
//! Provides JavaScript-callable interfaces for loading a memory image and
//! disassembling single instructions or listings out of it.

use crate::{
    disassemble, disassemble_listing, FlatMemory, InstructionCatalog, ListingOptions, MemoryImage,
    UnknownPolicy,
};
use wasm_bindgen::prelude::*;

/// Result of disassembling one instruction
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DecodedLine {
    address: u16,
    length: usize,
    hex_bytes: String,
    mnemonic: String,
}

#[wasm_bindgen]
impl DecodedLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    /// Bytes consumed; 0 for an unknown opcode.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.length
    }

    #[wasm_bindgen(getter)]
    pub fn hex_bytes(&self) -> String {
        self.hex_bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mnemonic(&self) -> String {
        self.mnemonic.clone()
    }
}

/// Disassembler over a 64KB memory image owned by the WASM side
#[wasm_bindgen]
pub struct WasmDisassembler {
    memory: FlatMemory,
}

#[wasm_bindgen]
impl WasmDisassembler {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            memory: FlatMemory::new(),
        }
    }

    /// Copy `bytes` into memory starting at `origin`.
    pub fn load(&mut self, bytes: &[u8], origin: u16) {
        self.memory.load(origin, bytes);
    }

    pub fn peek(&self, addr: u16) -> u8 {
        self.memory.peek(addr)
    }

    /// Hex dump row with spaces between bytes, as shown by a memory view.
    pub fn hex_row(&self, addr: u16, count: usize) -> String {
        self.memory.read_hex_spaced(addr, count)
    }

    /// Disassemble the instruction at `addr`.
    pub fn disassemble_at(&self, addr: u16) -> DecodedLine {
        let result = disassemble(InstructionCatalog::z80(), &self.memory, addr);
        DecodedLine {
            address: addr,
            length: result.length,
            hex_bytes: result.hex_bytes,
            mnemonic: result.mnemonic,
        }
    }

    /// Formatted listing lines starting at `addr`.
    pub fn listing(&self, addr: u16, max_lines: usize, resync: bool) -> js_sys::Array {
        self.listing_lines(addr, max_lines, resync)
            .iter()
            .map(|line| JsValue::from_str(line))
            .collect()
    }
}

impl WasmDisassembler {
    /// The lines behind [`listing`](Self::listing), as Rust strings.
    pub fn listing_lines(&self, addr: u16, max_lines: usize, resync: bool) -> Vec<String> {
        let options = ListingOptions {
            max_lines,
            on_unknown: if resync {
                UnknownPolicy::Resync
            } else {
                UnknownPolicy::Stop
            },
        };

        disassemble_listing(InstructionCatalog::z80(), &self.memory, addr, options)
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

impl Default for WasmDisassembler {
    fn default() -> Self {
        Self::new()
    }
}
