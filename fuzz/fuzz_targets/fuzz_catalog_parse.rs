//! Fuzz target for the hex template loader.
//!
//! Feeds arbitrary mnemonic and hex template text to the parser; anything it
//! accepts must round-trip through `hex_template` and lint without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use z80disasm::{InstructionCatalog, InstructionDef};

fuzz_target!(|input: (String, String)| {
    let (mnemonic, hex) = input;

    if let Ok(def) = InstructionDef::parse(&mnemonic, &hex) {
        assert!(!def.is_empty());
        assert_eq!(def.len(), hex.split_whitespace().count());

        let reparsed = InstructionDef::parse(&mnemonic, &def.hex_template()).unwrap();
        assert_eq!(reparsed, def);

        let _ = InstructionCatalog::new(vec![def]).lint();
    }
});
