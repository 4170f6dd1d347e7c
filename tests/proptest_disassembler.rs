//! Property-based tests for the disassembler.
//!
//! These tests verify that:
//! - Decoding is deterministic and never panics for any memory contents
//! - Reported length and hex text agree with each other
//! - Every catalog entry decodes back to itself with any operand bytes
//! - Displacements always render in -128..=127
//! - Bit primitives only touch the bit they are asked to

use proptest::prelude::*;
use z80disasm::bits::{self, from_twos_complement};
use z80disasm::{
    disassemble, disassemble_listing, BitField, BitIndex, FlatMemory, InstructionCatalog,
    ListingOptions, MemoryImage, PatternToken, UnknownPolicy, Z80_INSTRUCTIONS,
};

/// Fill a definition's placeholders with the given operand bytes.
fn instance_bytes(index: usize, operands: &[u8; 2]) -> Vec<u8> {
    let mut next = operands.iter().copied();
    Z80_INSTRUCTIONS[index]
        .tokens()
        .iter()
        .map(|token| match token {
            PatternToken::Literal(byte) => *byte,
            _ => next.next().unwrap_or(0),
        })
        .collect()
}

fn hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

// ========== Decoding Properties ==========

proptest! {
    #[test]
    fn prop_decode_is_deterministic(
        bytes in prop::collection::vec(any::<u8>(), 4),
        address in any::<u16>(),
    ) {
        let mut mem = FlatMemory::new();
        mem.load(address, &bytes);
        let catalog = InstructionCatalog::z80();

        let first = disassemble(catalog, &mem, address);
        let second = disassemble(catalog, &mem, address);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_length_matches_hex_text(
        bytes in prop::collection::vec(any::<u8>(), 4),
        address in any::<u16>(),
    ) {
        let mut mem = FlatMemory::new();
        mem.load(address, &bytes);

        let result = disassemble(InstructionCatalog::z80(), &mem, address);

        if result.is_unknown() {
            prop_assert_eq!(result.mnemonic.as_str(), "??");
            prop_assert_eq!(result.hex_bytes, format!("{}...", mem.read_hex_string(address, 4)));
        } else {
            prop_assert!((1..=4).contains(&result.length));
            prop_assert_eq!(result.hex_bytes, mem.read_hex_spaced(address, result.length));
            prop_assert!(!result.mnemonic.contains("??"));
        }
    }

    #[test]
    fn prop_every_entry_decodes_to_itself(
        index in 0..Z80_INSTRUCTIONS.len(),
        operands in any::<[u8; 2]>(),
        trailing in any::<[u8; 4]>(),
        address in any::<u16>(),
    ) {
        let def = &Z80_INSTRUCTIONS[index];
        let mut bytes = instance_bytes(index, &operands);
        bytes.extend_from_slice(&trailing);

        let mut mem = FlatMemory::new();
        mem.load(address, &bytes);
        let result = disassemble(InstructionCatalog::z80(), &mem, address);

        prop_assert_eq!(result.length, def.len());
        prop_assert_eq!(result.hex_bytes, hex_spaced(&bytes[..def.len()]));
        if def.placeholder_count() == 0 {
            prop_assert_eq!(result.mnemonic.as_str(), def.template());
        }
    }

    #[test]
    fn prop_relative_jump_target_in_range(offset in any::<u8>()) {
        let mem = FlatMemory::from_bytes(0x0000, &[0x18, offset]);
        let result = disassemble(InstructionCatalog::z80(), &mem, 0x0000);

        let rendered = result.mnemonic.strip_prefix("JR ").unwrap_or_default();
        let value: i16 = rendered.parse().unwrap_or(i16::MIN);
        prop_assert!((-128..=127).contains(&value));
        prop_assert_eq!(value, from_twos_complement(offset));
    }

    #[test]
    fn prop_immediate_renders_as_two_hex_digits(value in any::<u8>()) {
        let mem = FlatMemory::from_bytes(0x0000, &[0x06, value]);
        let result = disassemble(InstructionCatalog::z80(), &mem, 0x0000);
        prop_assert_eq!(result.mnemonic, format!("LD B,{:02X}", value));
    }

    #[test]
    fn prop_listing_addresses_advance_by_length(
        bytes in prop::collection::vec(any::<u8>(), 32),
        start in any::<u16>(),
    ) {
        let mut mem = FlatMemory::new();
        mem.load(start, &bytes);
        let options = ListingOptions { max_lines: 8, on_unknown: UnknownPolicy::Resync };

        let lines = disassemble_listing(InstructionCatalog::z80(), &mem, start, options);

        prop_assert_eq!(lines.len(), 8);
        prop_assert_eq!(lines[0].address, start);
        for pair in lines.windows(2) {
            let step = pair[0].result.length.max(1) as u16;
            prop_assert_eq!(pair[1].address, pair[0].address.wrapping_add(step));
        }
    }
}

// ========== Bit Primitive Properties ==========

proptest! {
    #[test]
    fn prop_set_bit_only_touches_target(value in any::<u8>(), index in 0u8..8) {
        let set = bits::set_bit(value, index).unwrap();
        prop_assert!(bits::is_set(set, index).unwrap());
        prop_assert_eq!(set & !(1 << index), value & !(1 << index));
    }

    #[test]
    fn prop_clear_bit_only_touches_target(value in any::<u8>(), index in 0u8..8) {
        let cleared = bits::clear_bit(value, index).unwrap();
        prop_assert!(!bits::is_set(cleared, index).unwrap());
        prop_assert_eq!(cleared & !(1 << index), value & !(1 << index));
    }

    #[test]
    fn prop_is_set_matches_shift(value in any::<u8>(), index in 0u8..8) {
        let bit = BitIndex::new(index).unwrap();
        prop_assert_eq!(value.is_bit_set(bit), (value >> index) & 1 == 1);
    }

    #[test]
    fn prop_out_of_range_index_rejected(value in any::<u8>(), index in 8u8..=255) {
        prop_assert!(bits::is_set(value, index).is_err());
        prop_assert!(bits::set_bit(value, index).is_err());
        prop_assert!(bits::clear_bit(value, index).is_err());
    }

    #[test]
    fn prop_twos_complement_matches_i8(value in any::<u8>()) {
        prop_assert_eq!(from_twos_complement(value), value as i8 as i16);
    }
}
