//! Basic disassembler usage example

use z80disasm::{disassemble, disassemble_listing, FlatMemory, InstructionCatalog, ListingOptions};

fn main() {
    // Example machine code bytes
    let code = &[
        0x21, 0x00, 0x40, // LD HL,4000
        0x06, 0x10, //       LD B,10
        0x36, 0xFF, //       LD (HL),FF
        0x23, //             INC HL
        0x10, 0xFB, //       DJNZ -5
        0xC9, //             RET
    ];

    let memory = FlatMemory::from_bytes(0x8000, code);
    let catalog = InstructionCatalog::z80();

    // Single instruction
    let first = disassemble(catalog, &memory, 0x8000);
    println!(
        "First instruction: {} ({} bytes: {})",
        first.mnemonic, first.length, first.hex_bytes
    );

    // Debugger-style listing
    let options = ListingOptions {
        max_lines: 6,
        ..Default::default()
    };

    println!("Disassembled code:");
    for line in disassemble_listing(catalog, &memory, 0x8000, options) {
        println!("{}", line);
    }
}
