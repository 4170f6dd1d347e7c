//! Instruction matching against the catalog

use crate::catalog::{InstructionCatalog, InstructionDef, PatternToken};
use crate::memory::MemoryImage;

/// Find the first catalog entry whose pattern matches the bytes at `address`
///
/// Literal pattern bytes must equal the memory byte at the same offset;
/// placeholder positions always match. The catalog's order decides between
/// overlapping patterns.
///
/// # Returns
///
/// Some(definition) on a match, None for undefined opcode sequences
pub fn find_instruction<'c, M>(
    catalog: &'c InstructionCatalog,
    memory: &M,
    address: u16,
) -> Option<&'c InstructionDef>
where
    M: MemoryImage + ?Sized,
{
    catalog.iter().find(|def| matches_at(def, memory, address))
}

/// True if every literal byte of `def` equals the memory byte at its offset from `address`
pub fn matches_at<M>(def: &InstructionDef, memory: &M, address: u16) -> bool
where
    M: MemoryImage + ?Sized,
{
    def.tokens().iter().enumerate().all(|(offset, token)| match *token {
        PatternToken::Literal(byte) => memory.peek(address.wrapping_add(offset as u16)) == byte,
        PatternToken::Immediate | PatternToken::Displacement => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    fn catalog(entries: &[(&str, &str)]) -> InstructionCatalog {
        InstructionCatalog::from_templates(entries.iter().copied()).unwrap()
    }

    #[test]
    fn test_placeholders_match_any_byte() {
        let def = InstructionDef::parse("LD A,n", "3E n").unwrap();

        for operand in [0x00, 0x7F, 0xFF] {
            let mem = FlatMemory::from_bytes(0x8000, &[0x3E, operand]);
            assert!(matches_at(&def, &mem, 0x8000));
        }
    }

    #[test]
    fn test_literal_mismatch_rejects() {
        let def = InstructionDef::parse("BIT 0,(IX+d)", "DD CB d 46").unwrap();
        let mem = FlatMemory::from_bytes(0x0000, &[0xDD, 0xCB, 0x05, 0x4E]);
        assert!(!matches_at(&def, &mem, 0x0000));
    }

    #[test]
    fn test_first_match_wins() {
        let cat = catalog(&[("FIRST n", "DD n"), ("SECOND", "DD 21")]);
        let mem = FlatMemory::from_bytes(0x0000, &[0xDD, 0x21]);

        let def = find_instruction(&cat, &mem, 0x0000).unwrap();
        assert_eq!(def.template(), "FIRST n");
    }

    #[test]
    fn test_no_match_returns_none() {
        let cat = catalog(&[("NOP", "00")]);
        let mem = FlatMemory::from_bytes(0x0000, &[0xFD]);
        assert!(find_instruction(&cat, &mem, 0x0000).is_none());
    }

    #[test]
    fn test_pattern_wraps_past_top_of_memory() {
        let cat = catalog(&[("LD BC,nn", "01 n n"), ("NEG", "ED 44")]);
        let mut mem = FlatMemory::new();
        mem.load(0xFFFF, &[0xED, 0x44]);

        let def = find_instruction(&cat, &mem, 0xFFFF).unwrap();
        assert_eq!(def.template(), "NEG");
    }
}
