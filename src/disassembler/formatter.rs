//! Operand extraction and mnemonic template substitution

use crate::bits::from_twos_complement;
use crate::catalog::{InstructionDef, PatternToken};
use crate::memory::MemoryImage;

/// Render the mnemonic of a matched instruction
///
/// Operand bytes are decoded in ascending offset order and substituted into the
/// template's markers from the right: the first operand byte fills the rightmost
/// marker, the second the next one to its left, and so on. A little-endian
/// 16-bit immediate written `nn` in the template therefore prints high byte first.
///
/// # Examples
///
/// ```
/// use z80disasm::catalog::InstructionDef;
/// use z80disasm::disassembler::formatter::render_mnemonic;
/// use z80disasm::FlatMemory;
///
/// let def = InstructionDef::parse("LD HL,nn", "21 n n").unwrap();
/// let mem = FlatMemory::from_bytes(0x8000, &[0x21, 0x34, 0x12]);
///
/// assert_eq!(render_mnemonic(&def, &mem, 0x8000), "LD HL,1234");
/// ```
pub fn render_mnemonic<M>(def: &InstructionDef, memory: &M, address: u16) -> String
where
    M: MemoryImage + ?Sized,
{
    let values = operand_values(def, memory, address);
    substitute_markers(def.template(), &values)
}

/// Decode the operand bytes of `def` at `address`, in ascending offset order
///
/// Immediates render as two uppercase hex digits, displacements as signed decimal.
pub fn operand_values<M>(def: &InstructionDef, memory: &M, address: u16) -> Vec<String>
where
    M: MemoryImage + ?Sized,
{
    def.placeholders()
        .map(|(offset, token)| {
            let byte = memory.peek(address.wrapping_add(offset as u16));
            format_operand(token, byte)
        })
        .collect()
}

fn format_operand(token: PatternToken, byte: u8) -> String {
    match token {
        PatternToken::Displacement => from_twos_complement(byte).to_string(),
        PatternToken::Immediate | PatternToken::Literal(_) => format!("{:02X}", byte),
    }
}

/// Substitute `values` into the `n`/`d` markers of `template`, rightmost marker first
///
/// Values beyond the number of markers are dropped; markers beyond the number of
/// values are left as they are.
pub fn substitute_markers(template: &str, values: &[String]) -> String {
    let marker_count = template
        .chars()
        .filter(|&c| PatternToken::from_marker(c).is_some())
        .count();

    // slots[j] is the value for the j-th marker counting from the left.
    let mut slots: Vec<Option<&str>> = vec![None; marker_count];
    for (k, value) in values.iter().take(marker_count).enumerate() {
        slots[marker_count - 1 - k] = Some(value.as_str());
    }

    let extra: usize = values.iter().take(marker_count).map(|v| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut marker = 0;
    for c in template.chars() {
        if PatternToken::from_marker(c).is_none() {
            out.push(c);
            continue;
        }

        match slots[marker] {
            Some(value) => out.push_str(value),
            None => out.push(c),
        }
        marker += 1;
    }

    out
}
