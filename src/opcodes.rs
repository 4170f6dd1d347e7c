//! # Z80 Instruction Table
//!
//! The built-in catalog of Z80 instructions, in matching priority order.
//!
//! The table covers:
//! - **Unprefixed** opcodes (252 entries; `CB`, `DD`, `ED` and `FD` are prefixes)
//! - **CB** rotates, shifts and bit operations, including the undocumented `SLL`
//! - **ED** extended instructions: 16-bit arithmetic, port I/O, block transfers
//! - **DD/FD** IX and IY forms, including the undocumented `IXH/IXL/IYH/IYL` halves
//! - **DD CB / FD CB** indexed bit operations (`DD CB d op`)
//!
//! Prefixed sections come first so that longer patterns are always tried before
//! anything that shares their leading byte.
//!
//! Entries are written with the `op!` macro: the mnemonic template, a colon,
//! then one token per byte, either a literal opcode byte or a placeholder
//! (`n` immediate, `d` displacement). A 16-bit immediate is two `n` bytes, low
//! byte first, paired with `nn` in the template.
//!
//! # Examples
//!
//! ```
//! use z80disasm::opcodes::Z80_INSTRUCTIONS;
//!
//! let ld_hl = Z80_INSTRUCTIONS
//!     .iter()
//!     .find(|def| def.template() == "LD HL,nn")
//!     .unwrap();
//! assert_eq!(ld_hl.hex_template(), "21 n n");
//! ```

use crate::catalog::{InstructionDef, PatternToken};

/// Builds an [`InstructionDef`] from a template and byte tokens at compile time.
macro_rules! op {
    (@tok n) => {
        PatternToken::Immediate
    };
    (@tok d) => {
        PatternToken::Displacement
    };
    (@tok $byte:literal) => {
        PatternToken::Literal($byte)
    };
    ($template:literal: $($tok:tt)+) => {
        InstructionDef::new($template, {
            const PATTERN: &[PatternToken] = &[$(op!(@tok $tok)),+];
            PATTERN
        })
    };
}

/// Every Z80 instruction known to the disassembler, most specific patterns first.
///
/// `LD (IX+d),n` and `LD (IY+d),n` carry their operand bytes in the opposite
/// order to their template markers; [`crate::InstructionCatalog::lint`] reports
/// them as marker-kind mismatches.
pub static Z80_INSTRUCTIONS: &[InstructionDef] = &[
    // ========== DD CB prefix: IX bit operations ==========
    op!("RLC (IX+d)": 0xDD 0xCB d 0x06),
    op!("RRC (IX+d)": 0xDD 0xCB d 0x0E),
    op!("RL (IX+d)": 0xDD 0xCB d 0x16),
    op!("RR (IX+d)": 0xDD 0xCB d 0x1E),
    op!("SLA (IX+d)": 0xDD 0xCB d 0x26),
    op!("SRA (IX+d)": 0xDD 0xCB d 0x2E),
    op!("SLL (IX+d)": 0xDD 0xCB d 0x36),
    op!("SRL (IX+d)": 0xDD 0xCB d 0x3E),
    op!("BIT 0,(IX+d)": 0xDD 0xCB d 0x46),
    op!("BIT 1,(IX+d)": 0xDD 0xCB d 0x4E),
    op!("BIT 2,(IX+d)": 0xDD 0xCB d 0x56),
    op!("BIT 3,(IX+d)": 0xDD 0xCB d 0x5E),
    op!("BIT 4,(IX+d)": 0xDD 0xCB d 0x66),
    op!("BIT 5,(IX+d)": 0xDD 0xCB d 0x6E),
    op!("BIT 6,(IX+d)": 0xDD 0xCB d 0x76),
    op!("BIT 7,(IX+d)": 0xDD 0xCB d 0x7E),
    op!("RES 0,(IX+d)": 0xDD 0xCB d 0x86),
    op!("RES 1,(IX+d)": 0xDD 0xCB d 0x8E),
    op!("RES 2,(IX+d)": 0xDD 0xCB d 0x96),
    op!("RES 3,(IX+d)": 0xDD 0xCB d 0x9E),
    op!("RES 4,(IX+d)": 0xDD 0xCB d 0xA6),
    op!("RES 5,(IX+d)": 0xDD 0xCB d 0xAE),
    op!("RES 6,(IX+d)": 0xDD 0xCB d 0xB6),
    op!("RES 7,(IX+d)": 0xDD 0xCB d 0xBE),
    op!("SET 0,(IX+d)": 0xDD 0xCB d 0xC6),
    op!("SET 1,(IX+d)": 0xDD 0xCB d 0xCE),
    op!("SET 2,(IX+d)": 0xDD 0xCB d 0xD6),
    op!("SET 3,(IX+d)": 0xDD 0xCB d 0xDE),
    op!("SET 4,(IX+d)": 0xDD 0xCB d 0xE6),
    op!("SET 5,(IX+d)": 0xDD 0xCB d 0xEE),
    op!("SET 6,(IX+d)": 0xDD 0xCB d 0xF6),
    op!("SET 7,(IX+d)": 0xDD 0xCB d 0xFE),
    // ========== FD CB prefix: IY bit operations ==========
    op!("RLC (IY+d)": 0xFD 0xCB d 0x06),
    op!("RRC (IY+d)": 0xFD 0xCB d 0x0E),
    op!("RL (IY+d)": 0xFD 0xCB d 0x16),
    op!("RR (IY+d)": 0xFD 0xCB d 0x1E),
    op!("SLA (IY+d)": 0xFD 0xCB d 0x26),
    op!("SRA (IY+d)": 0xFD 0xCB d 0x2E),
    op!("SLL (IY+d)": 0xFD 0xCB d 0x36),
    op!("SRL (IY+d)": 0xFD 0xCB d 0x3E),
    op!("BIT 0,(IY+d)": 0xFD 0xCB d 0x46),
    op!("BIT 1,(IY+d)": 0xFD 0xCB d 0x4E),
    op!("BIT 2,(IY+d)": 0xFD 0xCB d 0x56),
    op!("BIT 3,(IY+d)": 0xFD 0xCB d 0x5E),
    op!("BIT 4,(IY+d)": 0xFD 0xCB d 0x66),
    op!("BIT 5,(IY+d)": 0xFD 0xCB d 0x6E),
    op!("BIT 6,(IY+d)": 0xFD 0xCB d 0x76),
    op!("BIT 7,(IY+d)": 0xFD 0xCB d 0x7E),
    op!("RES 0,(IY+d)": 0xFD 0xCB d 0x86),
    op!("RES 1,(IY+d)": 0xFD 0xCB d 0x8E),
    op!("RES 2,(IY+d)": 0xFD 0xCB d 0x96),
    op!("RES 3,(IY+d)": 0xFD 0xCB d 0x9E),
    op!("RES 4,(IY+d)": 0xFD 0xCB d 0xA6),
    op!("RES 5,(IY+d)": 0xFD 0xCB d 0xAE),
    op!("RES 6,(IY+d)": 0xFD 0xCB d 0xB6),
    op!("RES 7,(IY+d)": 0xFD 0xCB d 0xBE),
    op!("SET 0,(IY+d)": 0xFD 0xCB d 0xC6),
    op!("SET 1,(IY+d)": 0xFD 0xCB d 0xCE),
    op!("SET 2,(IY+d)": 0xFD 0xCB d 0xD6),
    op!("SET 3,(IY+d)": 0xFD 0xCB d 0xDE),
    op!("SET 4,(IY+d)": 0xFD 0xCB d 0xE6),
    op!("SET 5,(IY+d)": 0xFD 0xCB d 0xEE),
    op!("SET 6,(IY+d)": 0xFD 0xCB d 0xF6),
    op!("SET 7,(IY+d)": 0xFD 0xCB d 0xFE),
    // ========== DD prefix: IX instructions ==========
    op!("ADD IX,BC": 0xDD 0x09),
    op!("ADD IX,DE": 0xDD 0x19),
    op!("LD IX,nn": 0xDD 0x21 n n),
    op!("LD (nn),IX": 0xDD 0x22 n n),
    op!("INC IX": 0xDD 0x23),
    op!("INC IXH": 0xDD 0x24),
    op!("DEC IXH": 0xDD 0x25),
    op!("LD IXH,n": 0xDD 0x26 n),
    op!("ADD IX,IX": 0xDD 0x29),
    op!("LD IX,(nn)": 0xDD 0x2A n n),
    op!("DEC IX": 0xDD 0x2B),
    op!("INC IXL": 0xDD 0x2C),
    op!("DEC IXL": 0xDD 0x2D),
    op!("LD IXL,n": 0xDD 0x2E n),
    op!("INC (IX+d)": 0xDD 0x34 d),
    op!("DEC (IX+d)": 0xDD 0x35 d),
    op!("LD (IX+d),n": 0xDD 0x36 d n),
    op!("ADD IX,SP": 0xDD 0x39),
    op!("LD B,IXH": 0xDD 0x44),
    op!("LD B,IXL": 0xDD 0x45),
    op!("LD B,(IX+d)": 0xDD 0x46 d),
    op!("LD C,IXH": 0xDD 0x4C),
    op!("LD C,IXL": 0xDD 0x4D),
    op!("LD C,(IX+d)": 0xDD 0x4E d),
    op!("LD D,IXH": 0xDD 0x54),
    op!("LD D,IXL": 0xDD 0x55),
    op!("LD D,(IX+d)": 0xDD 0x56 d),
    op!("LD E,IXH": 0xDD 0x5C),
    op!("LD E,IXL": 0xDD 0x5D),
    op!("LD E,(IX+d)": 0xDD 0x5E d),
    op!("LD IXH,B": 0xDD 0x60),
    op!("LD IXH,C": 0xDD 0x61),
    op!("LD IXH,D": 0xDD 0x62),
    op!("LD IXH,E": 0xDD 0x63),
    op!("LD IXH,IXH": 0xDD 0x64),
    op!("LD IXH,IXL": 0xDD 0x65),
    op!("LD H,(IX+d)": 0xDD 0x66 d),
    op!("LD IXH,A": 0xDD 0x67),
    op!("LD IXL,B": 0xDD 0x68),
    op!("LD IXL,C": 0xDD 0x69),
    op!("LD IXL,D": 0xDD 0x6A),
    op!("LD IXL,E": 0xDD 0x6B),
    op!("LD IXL,IXH": 0xDD 0x6C),
    op!("LD IXL,IXL": 0xDD 0x6D),
    op!("LD L,(IX+d)": 0xDD 0x6E d),
    op!("LD IXL,A": 0xDD 0x6F),
    op!("LD (IX+d),B": 0xDD 0x70 d),
    op!("LD (IX+d),C": 0xDD 0x71 d),
    op!("LD (IX+d),D": 0xDD 0x72 d),
    op!("LD (IX+d),E": 0xDD 0x73 d),
    op!("LD (IX+d),H": 0xDD 0x74 d),
    op!("LD (IX+d),L": 0xDD 0x75 d),
    op!("LD (IX+d),A": 0xDD 0x77 d),
    op!("LD A,IXH": 0xDD 0x7C),
    op!("LD A,IXL": 0xDD 0x7D),
    op!("LD A,(IX+d)": 0xDD 0x7E d),
    op!("ADD A,IXH": 0xDD 0x84),
    op!("ADD A,IXL": 0xDD 0x85),
    op!("ADD A,(IX+d)": 0xDD 0x86 d),
    op!("ADC A,IXH": 0xDD 0x8C),
    op!("ADC A,IXL": 0xDD 0x8D),
    op!("ADC A,(IX+d)": 0xDD 0x8E d),
    op!("SUB IXH": 0xDD 0x94),
    op!("SUB IXL": 0xDD 0x95),
    op!("SUB (IX+d)": 0xDD 0x96 d),
    op!("SBC A,IXH": 0xDD 0x9C),
    op!("SBC A,IXL": 0xDD 0x9D),
    op!("SBC A,(IX+d)": 0xDD 0x9E d),
    op!("AND IXH": 0xDD 0xA4),
    op!("AND IXL": 0xDD 0xA5),
    op!("AND (IX+d)": 0xDD 0xA6 d),
    op!("XOR IXH": 0xDD 0xAC),
    op!("XOR IXL": 0xDD 0xAD),
    op!("XOR (IX+d)": 0xDD 0xAE d),
    op!("OR IXH": 0xDD 0xB4),
    op!("OR IXL": 0xDD 0xB5),
    op!("OR (IX+d)": 0xDD 0xB6 d),
    op!("CP IXH": 0xDD 0xBC),
    op!("CP IXL": 0xDD 0xBD),
    op!("CP (IX+d)": 0xDD 0xBE d),
    op!("POP IX": 0xDD 0xE1),
    op!("EX (SP),IX": 0xDD 0xE3),
    op!("PUSH IX": 0xDD 0xE5),
    op!("JP (IX)": 0xDD 0xE9),
    op!("LD SP,IX": 0xDD 0xF9),
    // ========== FD prefix: IY instructions ==========
    op!("ADD IY,BC": 0xFD 0x09),
    op!("ADD IY,DE": 0xFD 0x19),
    op!("LD IY,nn": 0xFD 0x21 n n),
    op!("LD (nn),IY": 0xFD 0x22 n n),
    op!("INC IY": 0xFD 0x23),
    op!("INC IYH": 0xFD 0x24),
    op!("DEC IYH": 0xFD 0x25),
    op!("LD IYH,n": 0xFD 0x26 n),
    op!("ADD IY,IY": 0xFD 0x29),
    op!("LD IY,(nn)": 0xFD 0x2A n n),
    op!("DEC IY": 0xFD 0x2B),
    op!("INC IYL": 0xFD 0x2C),
    op!("DEC IYL": 0xFD 0x2D),
    op!("LD IYL,n": 0xFD 0x2E n),
    op!("INC (IY+d)": 0xFD 0x34 d),
    op!("DEC (IY+d)": 0xFD 0x35 d),
    op!("LD (IY+d),n": 0xFD 0x36 d n),
    op!("ADD IY,SP": 0xFD 0x39),
    op!("LD B,IYH": 0xFD 0x44),
    op!("LD B,IYL": 0xFD 0x45),
    op!("LD B,(IY+d)": 0xFD 0x46 d),
    op!("LD C,IYH": 0xFD 0x4C),
    op!("LD C,IYL": 0xFD 0x4D),
    op!("LD C,(IY+d)": 0xFD 0x4E d),
    op!("LD D,IYH": 0xFD 0x54),
    op!("LD D,IYL": 0xFD 0x55),
    op!("LD D,(IY+d)": 0xFD 0x56 d),
    op!("LD E,IYH": 0xFD 0x5C),
    op!("LD E,IYL": 0xFD 0x5D),
    op!("LD E,(IY+d)": 0xFD 0x5E d),
    op!("LD IYH,B": 0xFD 0x60),
    op!("LD IYH,C": 0xFD 0x61),
    op!("LD IYH,D": 0xFD 0x62),
    op!("LD IYH,E": 0xFD 0x63),
    op!("LD IYH,IYH": 0xFD 0x64),
    op!("LD IYH,IYL": 0xFD 0x65),
    op!("LD H,(IY+d)": 0xFD 0x66 d),
    op!("LD IYH,A": 0xFD 0x67),
    op!("LD IYL,B": 0xFD 0x68),
    op!("LD IYL,C": 0xFD 0x69),
    op!("LD IYL,D": 0xFD 0x6A),
    op!("LD IYL,E": 0xFD 0x6B),
    op!("LD IYL,IYH": 0xFD 0x6C),
    op!("LD IYL,IYL": 0xFD 0x6D),
    op!("LD L,(IY+d)": 0xFD 0x6E d),
    op!("LD IYL,A": 0xFD 0x6F),
    op!("LD (IY+d),B": 0xFD 0x70 d),
    op!("LD (IY+d),C": 0xFD 0x71 d),
    op!("LD (IY+d),D": 0xFD 0x72 d),
    op!("LD (IY+d),E": 0xFD 0x73 d),
    op!("LD (IY+d),H": 0xFD 0x74 d),
    op!("LD (IY+d),L": 0xFD 0x75 d),
    op!("LD (IY+d),A": 0xFD 0x77 d),
    op!("LD A,IYH": 0xFD 0x7C),
    op!("LD A,IYL": 0xFD 0x7D),
    op!("LD A,(IY+d)": 0xFD 0x7E d),
    op!("ADD A,IYH": 0xFD 0x84),
    op!("ADD A,IYL": 0xFD 0x85),
    op!("ADD A,(IY+d)": 0xFD 0x86 d),
    op!("ADC A,IYH": 0xFD 0x8C),
    op!("ADC A,IYL": 0xFD 0x8D),
    op!("ADC A,(IY+d)": 0xFD 0x8E d),
    op!("SUB IYH": 0xFD 0x94),
    op!("SUB IYL": 0xFD 0x95),
    op!("SUB (IY+d)": 0xFD 0x96 d),
    op!("SBC A,IYH": 0xFD 0x9C),
    op!("SBC A,IYL": 0xFD 0x9D),
    op!("SBC A,(IY+d)": 0xFD 0x9E d),
    op!("AND IYH": 0xFD 0xA4),
    op!("AND IYL": 0xFD 0xA5),
    op!("AND (IY+d)": 0xFD 0xA6 d),
    op!("XOR IYH": 0xFD 0xAC),
    op!("XOR IYL": 0xFD 0xAD),
    op!("XOR (IY+d)": 0xFD 0xAE d),
    op!("OR IYH": 0xFD 0xB4),
    op!("OR IYL": 0xFD 0xB5),
    op!("OR (IY+d)": 0xFD 0xB6 d),
    op!("CP IYH": 0xFD 0xBC),
    op!("CP IYL": 0xFD 0xBD),
    op!("CP (IY+d)": 0xFD 0xBE d),
    op!("POP IY": 0xFD 0xE1),
    op!("EX (SP),IY": 0xFD 0xE3),
    op!("PUSH IY": 0xFD 0xE5),
    op!("JP (IY)": 0xFD 0xE9),
    op!("LD SP,IY": 0xFD 0xF9),
    // ========== ED prefix: extended instructions ==========
    op!("IN B,(C)": 0xED 0x40),
    op!("OUT (C),B": 0xED 0x41),
    op!("SBC HL,BC": 0xED 0x42),
    op!("LD (nn),BC": 0xED 0x43 n n),
    op!("NEG": 0xED 0x44),
    op!("RETN": 0xED 0x45),
    op!("IM 0": 0xED 0x46),
    op!("LD I,A": 0xED 0x47),
    op!("IN C,(C)": 0xED 0x48),
    op!("OUT (C),C": 0xED 0x49),
    op!("ADC HL,BC": 0xED 0x4A),
    op!("LD BC,(nn)": 0xED 0x4B n n),
    op!("RETI": 0xED 0x4D),
    op!("LD R,A": 0xED 0x4F),
    op!("IN D,(C)": 0xED 0x50),
    op!("OUT (C),D": 0xED 0x51),
    op!("SBC HL,DE": 0xED 0x52),
    op!("LD (nn),DE": 0xED 0x53 n n),
    op!("IM 1": 0xED 0x56),
    op!("LD A,I": 0xED 0x57),
    op!("IN E,(C)": 0xED 0x58),
    op!("OUT (C),E": 0xED 0x59),
    op!("ADC HL,DE": 0xED 0x5A),
    op!("LD DE,(nn)": 0xED 0x5B n n),
    op!("IM 2": 0xED 0x5E),
    op!("LD A,R": 0xED 0x5F),
    op!("IN H,(C)": 0xED 0x60),
    op!("OUT (C),H": 0xED 0x61),
    op!("SBC HL,HL": 0xED 0x62),
    op!("LD (nn),HL": 0xED 0x63 n n),
    op!("RRD": 0xED 0x67),
    op!("IN L,(C)": 0xED 0x68),
    op!("OUT (C),L": 0xED 0x69),
    op!("ADC HL,HL": 0xED 0x6A),
    op!("LD HL,(nn)": 0xED 0x6B n n),
    op!("RLD": 0xED 0x6F),
    op!("IN F,(C)": 0xED 0x70),
    op!("OUT (C),0": 0xED 0x71),
    op!("SBC HL,SP": 0xED 0x72),
    op!("LD (nn),SP": 0xED 0x73 n n),
    op!("IN A,(C)": 0xED 0x78),
    op!("OUT (C),A": 0xED 0x79),
    op!("ADC HL,SP": 0xED 0x7A),
    op!("LD SP,(nn)": 0xED 0x7B n n),
    op!("LDI": 0xED 0xA0),
    op!("CPI": 0xED 0xA1),
    op!("INI": 0xED 0xA2),
    op!("OUTI": 0xED 0xA3),
    op!("LDD": 0xED 0xA8),
    op!("CPD": 0xED 0xA9),
    op!("IND": 0xED 0xAA),
    op!("OUTD": 0xED 0xAB),
    op!("LDIR": 0xED 0xB0),
    op!("CPIR": 0xED 0xB1),
    op!("INIR": 0xED 0xB2),
    op!("OTIR": 0xED 0xB3),
    op!("LDDR": 0xED 0xB8),
    op!("CPDR": 0xED 0xB9),
    op!("INDR": 0xED 0xBA),
    op!("OTDR": 0xED 0xBB),
    // ========== CB prefix: rotates, shifts and bit operations ==========
    op!("RLC B": 0xCB 0x00),
    op!("RLC C": 0xCB 0x01),
    op!("RLC D": 0xCB 0x02),
    op!("RLC E": 0xCB 0x03),
    op!("RLC H": 0xCB 0x04),
    op!("RLC L": 0xCB 0x05),
    op!("RLC (HL)": 0xCB 0x06),
    op!("RLC A": 0xCB 0x07),
    op!("RRC B": 0xCB 0x08),
    op!("RRC C": 0xCB 0x09),
    op!("RRC D": 0xCB 0x0A),
    op!("RRC E": 0xCB 0x0B),
    op!("RRC H": 0xCB 0x0C),
    op!("RRC L": 0xCB 0x0D),
    op!("RRC (HL)": 0xCB 0x0E),
    op!("RRC A": 0xCB 0x0F),
    op!("RL B": 0xCB 0x10),
    op!("RL C": 0xCB 0x11),
    op!("RL D": 0xCB 0x12),
    op!("RL E": 0xCB 0x13),
    op!("RL H": 0xCB 0x14),
    op!("RL L": 0xCB 0x15),
    op!("RL (HL)": 0xCB 0x16),
    op!("RL A": 0xCB 0x17),
    op!("RR B": 0xCB 0x18),
    op!("RR C": 0xCB 0x19),
    op!("RR D": 0xCB 0x1A),
    op!("RR E": 0xCB 0x1B),
    op!("RR H": 0xCB 0x1C),
    op!("RR L": 0xCB 0x1D),
    op!("RR (HL)": 0xCB 0x1E),
    op!("RR A": 0xCB 0x1F),
    op!("SLA B": 0xCB 0x20),
    op!("SLA C": 0xCB 0x21),
    op!("SLA D": 0xCB 0x22),
    op!("SLA E": 0xCB 0x23),
    op!("SLA H": 0xCB 0x24),
    op!("SLA L": 0xCB 0x25),
    op!("SLA (HL)": 0xCB 0x26),
    op!("SLA A": 0xCB 0x27),
    op!("SRA B": 0xCB 0x28),
    op!("SRA C": 0xCB 0x29),
    op!("SRA D": 0xCB 0x2A),
    op!("SRA E": 0xCB 0x2B),
    op!("SRA H": 0xCB 0x2C),
    op!("SRA L": 0xCB 0x2D),
    op!("SRA (HL)": 0xCB 0x2E),
    op!("SRA A": 0xCB 0x2F),
    op!("SLL B": 0xCB 0x30),
    op!("SLL C": 0xCB 0x31),
    op!("SLL D": 0xCB 0x32),
    op!("SLL E": 0xCB 0x33),
    op!("SLL H": 0xCB 0x34),
    op!("SLL L": 0xCB 0x35),
    op!("SLL (HL)": 0xCB 0x36),
    op!("SLL A": 0xCB 0x37),
    op!("SRL B": 0xCB 0x38),
    op!("SRL C": 0xCB 0x39),
    op!("SRL D": 0xCB 0x3A),
    op!("SRL E": 0xCB 0x3B),
    op!("SRL H": 0xCB 0x3C),
    op!("SRL L": 0xCB 0x3D),
    op!("SRL (HL)": 0xCB 0x3E),
    op!("SRL A": 0xCB 0x3F),
    op!("BIT 0,B": 0xCB 0x40),
    op!("BIT 0,C": 0xCB 0x41),
    op!("BIT 0,D": 0xCB 0x42),
    op!("BIT 0,E": 0xCB 0x43),
    op!("BIT 0,H": 0xCB 0x44),
    op!("BIT 0,L": 0xCB 0x45),
    op!("BIT 0,(HL)": 0xCB 0x46),
    op!("BIT 0,A": 0xCB 0x47),
    op!("BIT 1,B": 0xCB 0x48),
    op!("BIT 1,C": 0xCB 0x49),
    op!("BIT 1,D": 0xCB 0x4A),
    op!("BIT 1,E": 0xCB 0x4B),
    op!("BIT 1,H": 0xCB 0x4C),
    op!("BIT 1,L": 0xCB 0x4D),
    op!("BIT 1,(HL)": 0xCB 0x4E),
    op!("BIT 1,A": 0xCB 0x4F),
    op!("BIT 2,B": 0xCB 0x50),
    op!("BIT 2,C": 0xCB 0x51),
    op!("BIT 2,D": 0xCB 0x52),
    op!("BIT 2,E": 0xCB 0x53),
    op!("BIT 2,H": 0xCB 0x54),
    op!("BIT 2,L": 0xCB 0x55),
    op!("BIT 2,(HL)": 0xCB 0x56),
    op!("BIT 2,A": 0xCB 0x57),
    op!("BIT 3,B": 0xCB 0x58),
    op!("BIT 3,C": 0xCB 0x59),
    op!("BIT 3,D": 0xCB 0x5A),
    op!("BIT 3,E": 0xCB 0x5B),
    op!("BIT 3,H": 0xCB 0x5C),
    op!("BIT 3,L": 0xCB 0x5D),
    op!("BIT 3,(HL)": 0xCB 0x5E),
    op!("BIT 3,A": 0xCB 0x5F),
    op!("BIT 4,B": 0xCB 0x60),
    op!("BIT 4,C": 0xCB 0x61),
    op!("BIT 4,D": 0xCB 0x62),
    op!("BIT 4,E": 0xCB 0x63),
    op!("BIT 4,H": 0xCB 0x64),
    op!("BIT 4,L": 0xCB 0x65),
    op!("BIT 4,(HL)": 0xCB 0x66),
    op!("BIT 4,A": 0xCB 0x67),
    op!("BIT 5,B": 0xCB 0x68),
    op!("BIT 5,C": 0xCB 0x69),
    op!("BIT 5,D": 0xCB 0x6A),
    op!("BIT 5,E": 0xCB 0x6B),
    op!("BIT 5,H": 0xCB 0x6C),
    op!("BIT 5,L": 0xCB 0x6D),
    op!("BIT 5,(HL)": 0xCB 0x6E),
    op!("BIT 5,A": 0xCB 0x6F),
    op!("BIT 6,B": 0xCB 0x70),
    op!("BIT 6,C": 0xCB 0x71),
    op!("BIT 6,D": 0xCB 0x72),
    op!("BIT 6,E": 0xCB 0x73),
    op!("BIT 6,H": 0xCB 0x74),
    op!("BIT 6,L": 0xCB 0x75),
    op!("BIT 6,(HL)": 0xCB 0x76),
    op!("BIT 6,A": 0xCB 0x77),
    op!("BIT 7,B": 0xCB 0x78),
    op!("BIT 7,C": 0xCB 0x79),
    op!("BIT 7,D": 0xCB 0x7A),
    op!("BIT 7,E": 0xCB 0x7B),
    op!("BIT 7,H": 0xCB 0x7C),
    op!("BIT 7,L": 0xCB 0x7D),
    op!("BIT 7,(HL)": 0xCB 0x7E),
    op!("BIT 7,A": 0xCB 0x7F),
    op!("RES 0,B": 0xCB 0x80),
    op!("RES 0,C": 0xCB 0x81),
    op!("RES 0,D": 0xCB 0x82),
    op!("RES 0,E": 0xCB 0x83),
    op!("RES 0,H": 0xCB 0x84),
    op!("RES 0,L": 0xCB 0x85),
    op!("RES 0,(HL)": 0xCB 0x86),
    op!("RES 0,A": 0xCB 0x87),
    op!("RES 1,B": 0xCB 0x88),
    op!("RES 1,C": 0xCB 0x89),
    op!("RES 1,D": 0xCB 0x8A),
    op!("RES 1,E": 0xCB 0x8B),
    op!("RES 1,H": 0xCB 0x8C),
    op!("RES 1,L": 0xCB 0x8D),
    op!("RES 1,(HL)": 0xCB 0x8E),
    op!("RES 1,A": 0xCB 0x8F),
    op!("RES 2,B": 0xCB 0x90),
    op!("RES 2,C": 0xCB 0x91),
    op!("RES 2,D": 0xCB 0x92),
    op!("RES 2,E": 0xCB 0x93),
    op!("RES 2,H": 0xCB 0x94),
    op!("RES 2,L": 0xCB 0x95),
    op!("RES 2,(HL)": 0xCB 0x96),
    op!("RES 2,A": 0xCB 0x97),
    op!("RES 3,B": 0xCB 0x98),
    op!("RES 3,C": 0xCB 0x99),
    op!("RES 3,D": 0xCB 0x9A),
    op!("RES 3,E": 0xCB 0x9B),
    op!("RES 3,H": 0xCB 0x9C),
    op!("RES 3,L": 0xCB 0x9D),
    op!("RES 3,(HL)": 0xCB 0x9E),
    op!("RES 3,A": 0xCB 0x9F),
    op!("RES 4,B": 0xCB 0xA0),
    op!("RES 4,C": 0xCB 0xA1),
    op!("RES 4,D": 0xCB 0xA2),
    op!("RES 4,E": 0xCB 0xA3),
    op!("RES 4,H": 0xCB 0xA4),
    op!("RES 4,L": 0xCB 0xA5),
    op!("RES 4,(HL)": 0xCB 0xA6),
    op!("RES 4,A": 0xCB 0xA7),
    op!("RES 5,B": 0xCB 0xA8),
    op!("RES 5,C": 0xCB 0xA9),
    op!("RES 5,D": 0xCB 0xAA),
    op!("RES 5,E": 0xCB 0xAB),
    op!("RES 5,H": 0xCB 0xAC),
    op!("RES 5,L": 0xCB 0xAD),
    op!("RES 5,(HL)": 0xCB 0xAE),
    op!("RES 5,A": 0xCB 0xAF),
    op!("RES 6,B": 0xCB 0xB0),
    op!("RES 6,C": 0xCB 0xB1),
    op!("RES 6,D": 0xCB 0xB2),
    op!("RES 6,E": 0xCB 0xB3),
    op!("RES 6,H": 0xCB 0xB4),
    op!("RES 6,L": 0xCB 0xB5),
    op!("RES 6,(HL)": 0xCB 0xB6),
    op!("RES 6,A": 0xCB 0xB7),
    op!("RES 7,B": 0xCB 0xB8),
    op!("RES 7,C": 0xCB 0xB9),
    op!("RES 7,D": 0xCB 0xBA),
    op!("RES 7,E": 0xCB 0xBB),
    op!("RES 7,H": 0xCB 0xBC),
    op!("RES 7,L": 0xCB 0xBD),
    op!("RES 7,(HL)": 0xCB 0xBE),
    op!("RES 7,A": 0xCB 0xBF),
    op!("SET 0,B": 0xCB 0xC0),
    op!("SET 0,C": 0xCB 0xC1),
    op!("SET 0,D": 0xCB 0xC2),
    op!("SET 0,E": 0xCB 0xC3),
    op!("SET 0,H": 0xCB 0xC4),
    op!("SET 0,L": 0xCB 0xC5),
    op!("SET 0,(HL)": 0xCB 0xC6),
    op!("SET 0,A": 0xCB 0xC7),
    op!("SET 1,B": 0xCB 0xC8),
    op!("SET 1,C": 0xCB 0xC9),
    op!("SET 1,D": 0xCB 0xCA),
    op!("SET 1,E": 0xCB 0xCB),
    op!("SET 1,H": 0xCB 0xCC),
    op!("SET 1,L": 0xCB 0xCD),
    op!("SET 1,(HL)": 0xCB 0xCE),
    op!("SET 1,A": 0xCB 0xCF),
    op!("SET 2,B": 0xCB 0xD0),
    op!("SET 2,C": 0xCB 0xD1),
    op!("SET 2,D": 0xCB 0xD2),
    op!("SET 2,E": 0xCB 0xD3),
    op!("SET 2,H": 0xCB 0xD4),
    op!("SET 2,L": 0xCB 0xD5),
    op!("SET 2,(HL)": 0xCB 0xD6),
    op!("SET 2,A": 0xCB 0xD7),
    op!("SET 3,B": 0xCB 0xD8),
    op!("SET 3,C": 0xCB 0xD9),
    op!("SET 3,D": 0xCB 0xDA),
    op!("SET 3,E": 0xCB 0xDB),
    op!("SET 3,H": 0xCB 0xDC),
    op!("SET 3,L": 0xCB 0xDD),
    op!("SET 3,(HL)": 0xCB 0xDE),
    op!("SET 3,A": 0xCB 0xDF),
    op!("SET 4,B": 0xCB 0xE0),
    op!("SET 4,C": 0xCB 0xE1),
    op!("SET 4,D": 0xCB 0xE2),
    op!("SET 4,E": 0xCB 0xE3),
    op!("SET 4,H": 0xCB 0xE4),
    op!("SET 4,L": 0xCB 0xE5),
    op!("SET 4,(HL)": 0xCB 0xE6),
    op!("SET 4,A": 0xCB 0xE7),
    op!("SET 5,B": 0xCB 0xE8),
    op!("SET 5,C": 0xCB 0xE9),
    op!("SET 5,D": 0xCB 0xEA),
    op!("SET 5,E": 0xCB 0xEB),
    op!("SET 5,H": 0xCB 0xEC),
    op!("SET 5,L": 0xCB 0xED),
    op!("SET 5,(HL)": 0xCB 0xEE),
    op!("SET 5,A": 0xCB 0xEF),
    op!("SET 6,B": 0xCB 0xF0),
    op!("SET 6,C": 0xCB 0xF1),
    op!("SET 6,D": 0xCB 0xF2),
    op!("SET 6,E": 0xCB 0xF3),
    op!("SET 6,H": 0xCB 0xF4),
    op!("SET 6,L": 0xCB 0xF5),
    op!("SET 6,(HL)": 0xCB 0xF6),
    op!("SET 6,A": 0xCB 0xF7),
    op!("SET 7,B": 0xCB 0xF8),
    op!("SET 7,C": 0xCB 0xF9),
    op!("SET 7,D": 0xCB 0xFA),
    op!("SET 7,E": 0xCB 0xFB),
    op!("SET 7,H": 0xCB 0xFC),
    op!("SET 7,L": 0xCB 0xFD),
    op!("SET 7,(HL)": 0xCB 0xFE),
    op!("SET 7,A": 0xCB 0xFF),
    // ========== Unprefixed instructions ==========
    op!("NOP": 0x00),
    op!("LD BC,nn": 0x01 n n),
    op!("LD (BC),A": 0x02),
    op!("INC BC": 0x03),
    op!("INC B": 0x04),
    op!("DEC B": 0x05),
    op!("LD B,n": 0x06 n),
    op!("RLCA": 0x07),
    op!("EX AF,AF'": 0x08),
    op!("ADD HL,BC": 0x09),
    op!("LD A,(BC)": 0x0A),
    op!("DEC BC": 0x0B),
    op!("INC C": 0x0C),
    op!("DEC C": 0x0D),
    op!("LD C,n": 0x0E n),
    op!("RRCA": 0x0F),
    op!("DJNZ d": 0x10 d),
    op!("LD DE,nn": 0x11 n n),
    op!("LD (DE),A": 0x12),
    op!("INC DE": 0x13),
    op!("INC D": 0x14),
    op!("DEC D": 0x15),
    op!("LD D,n": 0x16 n),
    op!("RLA": 0x17),
    op!("JR d": 0x18 d),
    op!("ADD HL,DE": 0x19),
    op!("LD A,(DE)": 0x1A),
    op!("DEC DE": 0x1B),
    op!("INC E": 0x1C),
    op!("DEC E": 0x1D),
    op!("LD E,n": 0x1E n),
    op!("RRA": 0x1F),
    op!("JR NZ,d": 0x20 d),
    op!("LD HL,nn": 0x21 n n),
    op!("LD (nn),HL": 0x22 n n),
    op!("INC HL": 0x23),
    op!("INC H": 0x24),
    op!("DEC H": 0x25),
    op!("LD H,n": 0x26 n),
    op!("DAA": 0x27),
    op!("JR Z,d": 0x28 d),
    op!("ADD HL,HL": 0x29),
    op!("LD HL,(nn)": 0x2A n n),
    op!("DEC HL": 0x2B),
    op!("INC L": 0x2C),
    op!("DEC L": 0x2D),
    op!("LD L,n": 0x2E n),
    op!("CPL": 0x2F),
    op!("JR NC,d": 0x30 d),
    op!("LD SP,nn": 0x31 n n),
    op!("LD (nn),A": 0x32 n n),
    op!("INC SP": 0x33),
    op!("INC (HL)": 0x34),
    op!("DEC (HL)": 0x35),
    op!("LD (HL),n": 0x36 n),
    op!("SCF": 0x37),
    op!("JR C,d": 0x38 d),
    op!("ADD HL,SP": 0x39),
    op!("LD A,(nn)": 0x3A n n),
    op!("DEC SP": 0x3B),
    op!("INC A": 0x3C),
    op!("DEC A": 0x3D),
    op!("LD A,n": 0x3E n),
    op!("CCF": 0x3F),
    op!("LD B,B": 0x40),
    op!("LD B,C": 0x41),
    op!("LD B,D": 0x42),
    op!("LD B,E": 0x43),
    op!("LD B,H": 0x44),
    op!("LD B,L": 0x45),
    op!("LD B,(HL)": 0x46),
    op!("LD B,A": 0x47),
    op!("LD C,B": 0x48),
    op!("LD C,C": 0x49),
    op!("LD C,D": 0x4A),
    op!("LD C,E": 0x4B),
    op!("LD C,H": 0x4C),
    op!("LD C,L": 0x4D),
    op!("LD C,(HL)": 0x4E),
    op!("LD C,A": 0x4F),
    op!("LD D,B": 0x50),
    op!("LD D,C": 0x51),
    op!("LD D,D": 0x52),
    op!("LD D,E": 0x53),
    op!("LD D,H": 0x54),
    op!("LD D,L": 0x55),
    op!("LD D,(HL)": 0x56),
    op!("LD D,A": 0x57),
    op!("LD E,B": 0x58),
    op!("LD E,C": 0x59),
    op!("LD E,D": 0x5A),
    op!("LD E,E": 0x5B),
    op!("LD E,H": 0x5C),
    op!("LD E,L": 0x5D),
    op!("LD E,(HL)": 0x5E),
    op!("LD E,A": 0x5F),
    op!("LD H,B": 0x60),
    op!("LD H,C": 0x61),
    op!("LD H,D": 0x62),
    op!("LD H,E": 0x63),
    op!("LD H,H": 0x64),
    op!("LD H,L": 0x65),
    op!("LD H,(HL)": 0x66),
    op!("LD H,A": 0x67),
    op!("LD L,B": 0x68),
    op!("LD L,C": 0x69),
    op!("LD L,D": 0x6A),
    op!("LD L,E": 0x6B),
    op!("LD L,H": 0x6C),
    op!("LD L,L": 0x6D),
    op!("LD L,(HL)": 0x6E),
    op!("LD L,A": 0x6F),
    op!("LD (HL),B": 0x70),
    op!("LD (HL),C": 0x71),
    op!("LD (HL),D": 0x72),
    op!("LD (HL),E": 0x73),
    op!("LD (HL),H": 0x74),
    op!("LD (HL),L": 0x75),
    op!("HALT": 0x76),
    op!("LD (HL),A": 0x77),
    op!("LD A,B": 0x78),
    op!("LD A,C": 0x79),
    op!("LD A,D": 0x7A),
    op!("LD A,E": 0x7B),
    op!("LD A,H": 0x7C),
    op!("LD A,L": 0x7D),
    op!("LD A,(HL)": 0x7E),
    op!("LD A,A": 0x7F),
    op!("ADD A,B": 0x80),
    op!("ADD A,C": 0x81),
    op!("ADD A,D": 0x82),
    op!("ADD A,E": 0x83),
    op!("ADD A,H": 0x84),
    op!("ADD A,L": 0x85),
    op!("ADD A,(HL)": 0x86),
    op!("ADD A,A": 0x87),
    op!("ADC A,B": 0x88),
    op!("ADC A,C": 0x89),
    op!("ADC A,D": 0x8A),
    op!("ADC A,E": 0x8B),
    op!("ADC A,H": 0x8C),
    op!("ADC A,L": 0x8D),
    op!("ADC A,(HL)": 0x8E),
    op!("ADC A,A": 0x8F),
    op!("SUB B": 0x90),
    op!("SUB C": 0x91),
    op!("SUB D": 0x92),
    op!("SUB E": 0x93),
    op!("SUB H": 0x94),
    op!("SUB L": 0x95),
    op!("SUB (HL)": 0x96),
    op!("SUB A": 0x97),
    op!("SBC A,B": 0x98),
    op!("SBC A,C": 0x99),
    op!("SBC A,D": 0x9A),
    op!("SBC A,E": 0x9B),
    op!("SBC A,H": 0x9C),
    op!("SBC A,L": 0x9D),
    op!("SBC A,(HL)": 0x9E),
    op!("SBC A,A": 0x9F),
    op!("AND B": 0xA0),
    op!("AND C": 0xA1),
    op!("AND D": 0xA2),
    op!("AND E": 0xA3),
    op!("AND H": 0xA4),
    op!("AND L": 0xA5),
    op!("AND (HL)": 0xA6),
    op!("AND A": 0xA7),
    op!("XOR B": 0xA8),
    op!("XOR C": 0xA9),
    op!("XOR D": 0xAA),
    op!("XOR E": 0xAB),
    op!("XOR H": 0xAC),
    op!("XOR L": 0xAD),
    op!("XOR (HL)": 0xAE),
    op!("XOR A": 0xAF),
    op!("OR B": 0xB0),
    op!("OR C": 0xB1),
    op!("OR D": 0xB2),
    op!("OR E": 0xB3),
    op!("OR H": 0xB4),
    op!("OR L": 0xB5),
    op!("OR (HL)": 0xB6),
    op!("OR A": 0xB7),
    op!("CP B": 0xB8),
    op!("CP C": 0xB9),
    op!("CP D": 0xBA),
    op!("CP E": 0xBB),
    op!("CP H": 0xBC),
    op!("CP L": 0xBD),
    op!("CP (HL)": 0xBE),
    op!("CP A": 0xBF),
    op!("RET NZ": 0xC0),
    op!("POP BC": 0xC1),
    op!("JP NZ,nn": 0xC2 n n),
    op!("JP nn": 0xC3 n n),
    op!("CALL NZ,nn": 0xC4 n n),
    op!("PUSH BC": 0xC5),
    op!("ADD A,n": 0xC6 n),
    op!("RST 00": 0xC7),
    op!("RET Z": 0xC8),
    op!("RET": 0xC9),
    op!("JP Z,nn": 0xCA n n),
    op!("CALL Z,nn": 0xCC n n),
    op!("CALL nn": 0xCD n n),
    op!("ADC A,n": 0xCE n),
    op!("RST 08": 0xCF),
    op!("RET NC": 0xD0),
    op!("POP DE": 0xD1),
    op!("JP NC,nn": 0xD2 n n),
    op!("OUT (n),A": 0xD3 n),
    op!("CALL NC,nn": 0xD4 n n),
    op!("PUSH DE": 0xD5),
    op!("SUB n": 0xD6 n),
    op!("RST 10": 0xD7),
    op!("RET C": 0xD8),
    op!("EXX": 0xD9),
    op!("JP C,nn": 0xDA n n),
    op!("IN A,(n)": 0xDB n),
    op!("CALL C,nn": 0xDC n n),
    op!("SBC A,n": 0xDE n),
    op!("RST 18": 0xDF),
    op!("RET PO": 0xE0),
    op!("POP HL": 0xE1),
    op!("JP PO,nn": 0xE2 n n),
    op!("EX (SP),HL": 0xE3),
    op!("CALL PO,nn": 0xE4 n n),
    op!("PUSH HL": 0xE5),
    op!("AND n": 0xE6 n),
    op!("RST 20": 0xE7),
    op!("RET PE": 0xE8),
    op!("JP (HL)": 0xE9),
    op!("JP PE,nn": 0xEA n n),
    op!("EX DE,HL": 0xEB),
    op!("CALL PE,nn": 0xEC n n),
    op!("XOR n": 0xEE n),
    op!("RST 28": 0xEF),
    op!("RET P": 0xF0),
    op!("POP AF": 0xF1),
    op!("JP P,nn": 0xF2 n n),
    op!("DI": 0xF3),
    op!("CALL P,nn": 0xF4 n n),
    op!("PUSH AF": 0xF5),
    op!("OR n": 0xF6 n),
    op!("RST 30": 0xF7),
    op!("RET M": 0xF8),
    op!("LD SP,HL": 0xF9),
    op!("JP M,nn": 0xFA n n),
    op!("EI": 0xFB),
    op!("CALL M,nn": 0xFC n n),
    op!("CP n": 0xFE n),
    op!("RST 38": 0xFF),
];
