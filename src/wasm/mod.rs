//! WebAssembly bindings for the Z80 disassembler.
//!
//! This module provides JavaScript-callable interfaces so a browser-based debugger
//! can disassemble a memory image it owns.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::WasmDisassembler;
