//! Fuzz target for the disassembler.
//!
//! This target loads arbitrary bytes into a memory image and disassembles a
//! listing from an arbitrary address to find edge cases and crashes in
//! instruction matching and operand rendering.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use z80disasm::{
    disassemble, disassemble_listing, FlatMemory, InstructionCatalog, ListingOptions,
    UnknownPolicy,
};

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    origin: u16,
    start: u16,
    max_lines: u8,
    resync: bool,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to the address space
    if input.bytes.len() > 65536 {
        return;
    }

    let memory = FlatMemory::from_bytes(input.origin, &input.bytes);
    let catalog = InstructionCatalog::z80();

    // Single decodes are deterministic
    let first = disassemble(catalog, &memory, input.start);
    assert_eq!(first, disassemble(catalog, &memory, input.start));

    let options = ListingOptions {
        max_lines: input.max_lines as usize,
        on_unknown: if input.resync {
            UnknownPolicy::Resync
        } else {
            UnknownPolicy::Stop
        },
    };

    let lines = disassemble_listing(catalog, &memory, input.start, options);
    assert!(lines.len() <= options.max_lines);

    let mut expected_address = input.start;
    for line in &lines {
        // Each line starts where the previous one ended
        assert_eq!(line.address, expected_address);

        let result = &line.result;
        if result.is_unknown() {
            assert_eq!(result.mnemonic, "??");
            assert!(result.hex_bytes.ends_with("..."));
            expected_address = expected_address.wrapping_add(1);
        } else {
            // Z80 instructions are 1-4 bytes, one hex pair per byte
            assert!(result.length >= 1 && result.length <= 4);
            assert_eq!(result.hex_bytes.split(' ').count(), result.length);
            expected_address = expected_address.wrapping_add(result.length as u16);
        }
    }
});
