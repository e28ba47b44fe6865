//! The static instruction table: for every opcode byte, which semantic to
//! run, under which addressing mode, how many bytes it occupies, its base
//! cycle cost, and whether it pays the page-crossing cycle penalty.
//!
//! A single [`Mode`] enum plus a per-entry `pays_page_penalty` flag models
//! the "no-page-penalty" addressing used by store and read-modify-write
//! instructions, rather than duplicating mode variants.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    IndirectX,
    IndirectY,
    Indirect,
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny,
    Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror,
    Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    // Undocumented / illegal opcodes.
    Slo, Rla, Sre, Rra, Sax, Lax, Dcp, Isb, Anc, Alr, Arr, Xaa, Ahx, Tas,
    Shy, Shx, Las, Axs, Kil,
}

impl Mnemonic {
    /// Three-letter mnemonic as it appears in a disassembly/trace line.
    pub fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC", And => "AND", Asl => "ASL", Bcc => "BCC", Bcs => "BCS",
            Beq => "BEQ", Bit => "BIT", Bmi => "BMI", Bne => "BNE", Bpl => "BPL",
            Brk => "BRK", Bvc => "BVC", Bvs => "BVS", Clc => "CLC", Cld => "CLD",
            Cli => "CLI", Clv => "CLV", Cmp => "CMP", Cpx => "CPX", Cpy => "CPY",
            Dec => "DEC", Dex => "DEX", Dey => "DEY", Eor => "EOR", Inc => "INC",
            Inx => "INX", Iny => "INY", Jmp => "JMP", Jsr => "JSR", Lda => "LDA",
            Ldx => "LDX", Ldy => "LDY", Lsr => "LSR", Nop => "NOP", Ora => "ORA",
            Pha => "PHA", Php => "PHP", Pla => "PLA", Plp => "PLP", Rol => "ROL",
            Ror => "ROR", Rti => "RTI", Rts => "RTS", Sbc => "SBC", Sec => "SEC",
            Sed => "SED", Sei => "SEI", Sta => "STA", Stx => "STX", Sty => "STY",
            Tax => "TAX", Tay => "TAY", Tsx => "TSX", Txa => "TXA", Txs => "TXS",
            Tya => "TYA", Slo => "SLO", Rla => "RLA", Sre => "SRE", Rra => "RRA",
            Sax => "SAX", Lax => "LAX", Dcp => "DCP", Isb => "ISB", Anc => "ANC",
            Alr => "ALR", Arr => "ARR", Xaa => "XAA", Ahx => "AHX", Tas => "TAS",
            Shy => "SHY", Shx => "SHX", Las => "LAS", Axs => "AXS", Kil => "KIL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub mnemonic: Mnemonic,
    pub mode: Mode,
    pub len: u8,
    pub cycles: u8,
    pub pays_page_penalty: bool,
}

const fn e(mnemonic: Mnemonic, mode: Mode, len: u8, cycles: u8, pays_page_penalty: bool) -> OpcodeEntry {
    OpcodeEntry { mnemonic, mode, len, cycles, pays_page_penalty }
}

use Mnemonic::*;
use Mode::*;

/// The full 256-entry opcode table, documented and undocumented alike.
/// Every entry is populated; `UnknownOpcode` exists in the error taxonomy
/// for API completeness but is structurally unreachable against this table
/// (see the exhaustiveness test in this module).
pub const TABLE: [OpcodeEntry; 256] = [
    /* 0x00 */ e(Brk, Implied, 1, 7, false),
    /* 0x01 */ e(Ora, IndirectX, 2, 6, false),
    /* 0x02 */ e(Kil, Implied, 1, 2, false),
    /* 0x03 */ e(Slo, IndirectX, 2, 8, false),
    /* 0x04 */ e(Nop, ZeroPage, 2, 3, false),
    /* 0x05 */ e(Ora, ZeroPage, 2, 3, false),
    /* 0x06 */ e(Asl, ZeroPage, 2, 5, false),
    /* 0x07 */ e(Slo, ZeroPage, 2, 5, false),
    /* 0x08 */ e(Php, Implied, 1, 3, false),
    /* 0x09 */ e(Ora, Immediate, 2, 2, false),
    /* 0x0A */ e(Asl, Accumulator, 1, 2, false),
    /* 0x0B */ e(Anc, Immediate, 2, 2, false),
    /* 0x0C */ e(Nop, Absolute, 3, 4, false),
    /* 0x0D */ e(Ora, Absolute, 3, 4, false),
    /* 0x0E */ e(Asl, Absolute, 3, 6, false),
    /* 0x0F */ e(Slo, Absolute, 3, 6, false),
    /* 0x10 */ e(Bpl, Relative, 2, 2, false),
    /* 0x11 */ e(Ora, IndirectY, 2, 5, true),
    /* 0x12 */ e(Kil, Implied, 1, 2, false),
    /* 0x13 */ e(Slo, IndirectY, 2, 8, false),
    /* 0x14 */ e(Nop, ZeroPageX, 2, 4, false),
    /* 0x15 */ e(Ora, ZeroPageX, 2, 4, false),
    /* 0x16 */ e(Asl, ZeroPageX, 2, 6, false),
    /* 0x17 */ e(Slo, ZeroPageX, 2, 6, false),
    /* 0x18 */ e(Clc, Implied, 1, 2, false),
    /* 0x19 */ e(Ora, AbsoluteY, 3, 4, true),
    /* 0x1A */ e(Nop, Implied, 1, 2, false),
    /* 0x1B */ e(Slo, AbsoluteY, 3, 7, false),
    /* 0x1C */ e(Nop, AbsoluteX, 3, 4, true),
    /* 0x1D */ e(Ora, AbsoluteX, 3, 4, true),
    /* 0x1E */ e(Asl, AbsoluteX, 3, 7, false),
    /* 0x1F */ e(Slo, AbsoluteX, 3, 7, false),
    /* 0x20 */ e(Jsr, Absolute, 3, 6, false),
    /* 0x21 */ e(And, IndirectX, 2, 6, false),
    /* 0x22 */ e(Kil, Implied, 1, 2, false),
    /* 0x23 */ e(Rla, IndirectX, 2, 8, false),
    /* 0x24 */ e(Bit, ZeroPage, 2, 3, false),
    /* 0x25 */ e(And, ZeroPage, 2, 3, false),
    /* 0x26 */ e(Rol, ZeroPage, 2, 5, false),
    /* 0x27 */ e(Rla, ZeroPage, 2, 5, false),
    /* 0x28 */ e(Plp, Implied, 1, 4, false),
    /* 0x29 */ e(And, Immediate, 2, 2, false),
    /* 0x2A */ e(Rol, Accumulator, 1, 2, false),
    /* 0x2B */ e(Anc, Immediate, 2, 2, false),
    /* 0x2C */ e(Bit, Absolute, 3, 4, false),
    /* 0x2D */ e(And, Absolute, 3, 4, false),
    /* 0x2E */ e(Rol, Absolute, 3, 6, false),
    /* 0x2F */ e(Rla, Absolute, 3, 6, false),
    /* 0x30 */ e(Bmi, Relative, 2, 2, false),
    /* 0x31 */ e(And, IndirectY, 2, 5, true),
    /* 0x32 */ e(Kil, Implied, 1, 2, false),
    /* 0x33 */ e(Rla, IndirectY, 2, 8, false),
    /* 0x34 */ e(Nop, ZeroPageX, 2, 4, false),
    /* 0x35 */ e(And, ZeroPageX, 2, 4, false),
    /* 0x36 */ e(Rol, ZeroPageX, 2, 6, false),
    /* 0x37 */ e(Rla, ZeroPageX, 2, 6, false),
    /* 0x38 */ e(Sec, Implied, 1, 2, false),
    /* 0x39 */ e(And, AbsoluteY, 3, 4, true),
    /* 0x3A */ e(Nop, Implied, 1, 2, false),
    /* 0x3B */ e(Rla, AbsoluteY, 3, 7, false),
    /* 0x3C */ e(Nop, AbsoluteX, 3, 4, true),
    /* 0x3D */ e(And, AbsoluteX, 3, 4, true),
    /* 0x3E */ e(Rol, AbsoluteX, 3, 7, false),
    /* 0x3F */ e(Rla, AbsoluteX, 3, 7, false),
    /* 0x40 */ e(Rti, Implied, 1, 6, false),
    /* 0x41 */ e(Eor, IndirectX, 2, 6, false),
    /* 0x42 */ e(Kil, Implied, 1, 2, false),
    /* 0x43 */ e(Sre, IndirectX, 2, 8, false),
    /* 0x44 */ e(Nop, ZeroPage, 2, 3, false),
    /* 0x45 */ e(Eor, ZeroPage, 2, 3, false),
    /* 0x46 */ e(Lsr, ZeroPage, 2, 5, false),
    /* 0x47 */ e(Sre, ZeroPage, 2, 5, false),
    /* 0x48 */ e(Pha, Implied, 1, 3, false),
    /* 0x49 */ e(Eor, Immediate, 2, 2, false),
    /* 0x4A */ e(Lsr, Accumulator, 1, 2, false),
    /* 0x4B */ e(Alr, Immediate, 2, 2, false),
    /* 0x4C */ e(Jmp, Absolute, 3, 3, false),
    /* 0x4D */ e(Eor, Absolute, 3, 4, false),
    /* 0x4E */ e(Lsr, Absolute, 3, 6, false),
    /* 0x4F */ e(Sre, Absolute, 3, 6, false),
    /* 0x50 */ e(Bvc, Relative, 2, 2, false),
    /* 0x51 */ e(Eor, IndirectY, 2, 5, true),
    /* 0x52 */ e(Kil, Implied, 1, 2, false),
    /* 0x53 */ e(Sre, IndirectY, 2, 8, false),
    /* 0x54 */ e(Nop, ZeroPageX, 2, 4, false),
    /* 0x55 */ e(Eor, ZeroPageX, 2, 4, false),
    /* 0x56 */ e(Lsr, ZeroPageX, 2, 6, false),
    /* 0x57 */ e(Sre, ZeroPageX, 2, 6, false),
    /* 0x58 */ e(Cli, Implied, 1, 2, false),
    /* 0x59 */ e(Eor, AbsoluteY, 3, 4, true),
    /* 0x5A */ e(Nop, Implied, 1, 2, false),
    /* 0x5B */ e(Sre, AbsoluteY, 3, 7, false),
    /* 0x5C */ e(Nop, AbsoluteX, 3, 4, true),
    /* 0x5D */ e(Eor, AbsoluteX, 3, 4, true),
    /* 0x5E */ e(Lsr, AbsoluteX, 3, 7, false),
    /* 0x5F */ e(Sre, AbsoluteX, 3, 7, false),
    /* 0x60 */ e(Rts, Implied, 1, 6, false),
    /* 0x61 */ e(Adc, IndirectX, 2, 6, false),
    /* 0x62 */ e(Kil, Implied, 1, 2, false),
    /* 0x63 */ e(Rra, IndirectX, 2, 8, false),
    /* 0x64 */ e(Nop, ZeroPage, 2, 3, false),
    /* 0x65 */ e(Adc, ZeroPage, 2, 3, false),
    /* 0x66 */ e(Ror, ZeroPage, 2, 5, false),
    /* 0x67 */ e(Rra, ZeroPage, 2, 5, false),
    /* 0x68 */ e(Pla, Implied, 1, 4, false),
    /* 0x69 */ e(Adc, Immediate, 2, 2, false),
    /* 0x6A */ e(Ror, Accumulator, 1, 2, false),
    /* 0x6B */ e(Arr, Immediate, 2, 2, false),
    /* 0x6C */ e(Jmp, Indirect, 3, 5, false),
    /* 0x6D */ e(Adc, Absolute, 3, 4, false),
    /* 0x6E */ e(Ror, Absolute, 3, 6, false),
    /* 0x6F */ e(Rra, Absolute, 3, 6, false),
    /* 0x70 */ e(Bvs, Relative, 2, 2, false),
    /* 0x71 */ e(Adc, IndirectY, 2, 5, true),
    /* 0x72 */ e(Kil, Implied, 1, 2, false),
    /* 0x73 */ e(Rra, IndirectY, 2, 8, false),
    /* 0x74 */ e(Nop, ZeroPageX, 2, 4, false),
    /* 0x75 */ e(Adc, ZeroPageX, 2, 4, false),
    /* 0x76 */ e(Ror, ZeroPageX, 2, 6, false),
    /* 0x77 */ e(Rra, ZeroPageX, 2, 6, false),
    /* 0x78 */ e(Sei, Implied, 1, 2, false),
    /* 0x79 */ e(Adc, AbsoluteY, 3, 4, true),
    /* 0x7A */ e(Nop, Implied, 1, 2, false),
    /* 0x7B */ e(Rra, AbsoluteY, 3, 7, false),
    /* 0x7C */ e(Nop, AbsoluteX, 3, 4, true),
    /* 0x7D */ e(Adc, AbsoluteX, 3, 4, true),
    /* 0x7E */ e(Ror, AbsoluteX, 3, 7, false),
    /* 0x7F */ e(Rra, AbsoluteX, 3, 7, false),
    /* 0x80 */ e(Nop, Immediate, 2, 2, false),
    /* 0x81 */ e(Sta, IndirectX, 2, 6, false),
    /* 0x82 */ e(Nop, Immediate, 2, 2, false),
    /* 0x83 */ e(Sax, IndirectX, 2, 6, false),
    /* 0x84 */ e(Sty, ZeroPage, 2, 3, false),
    /* 0x85 */ e(Sta, ZeroPage, 2, 3, false),
    /* 0x86 */ e(Stx, ZeroPage, 2, 3, false),
    /* 0x87 */ e(Sax, ZeroPage, 2, 3, false),
    /* 0x88 */ e(Dey, Implied, 1, 2, false),
    /* 0x89 */ e(Nop, Immediate, 2, 2, false),
    /* 0x8A */ e(Txa, Implied, 1, 2, false),
    /* 0x8B */ e(Xaa, Immediate, 2, 2, false),
    /* 0x8C */ e(Sty, Absolute, 3, 4, false),
    /* 0x8D */ e(Sta, Absolute, 3, 4, false),
    /* 0x8E */ e(Stx, Absolute, 3, 4, false),
    /* 0x8F */ e(Sax, Absolute, 3, 4, false),
    /* 0x90 */ e(Bcc, Relative, 2, 2, false),
    /* 0x91 */ e(Sta, IndirectY, 2, 6, false),
    /* 0x92 */ e(Kil, Implied, 1, 2, false),
    /* 0x93 */ e(Ahx, IndirectY, 2, 6, false),
    /* 0x94 */ e(Sty, ZeroPageX, 2, 4, false),
    /* 0x95 */ e(Sta, ZeroPageX, 2, 4, false),
    /* 0x96 */ e(Stx, ZeroPageY, 2, 4, false),
    /* 0x97 */ e(Sax, ZeroPageY, 2, 4, false),
    /* 0x98 */ e(Tya, Implied, 1, 2, false),
    /* 0x99 */ e(Sta, AbsoluteY, 3, 5, false),
    /* 0x9A */ e(Txs, Implied, 1, 2, false),
    /* 0x9B */ e(Tas, AbsoluteY, 3, 5, false),
    /* 0x9C */ e(Shy, AbsoluteX, 3, 5, false),
    /* 0x9D */ e(Sta, AbsoluteX, 3, 5, false),
    /* 0x9E */ e(Shx, AbsoluteY, 3, 5, false),
    /* 0x9F */ e(Ahx, AbsoluteY, 3, 5, false),
    /* 0xA0 */ e(Ldy, Immediate, 2, 2, false),
    /* 0xA1 */ e(Lda, IndirectX, 2, 6, false),
    /* 0xA2 */ e(Ldx, Immediate, 2, 2, false),
    /* 0xA3 */ e(Lax, IndirectX, 2, 6, false),
    /* 0xA4 */ e(Ldy, ZeroPage, 2, 3, false),
    /* 0xA5 */ e(Lda, ZeroPage, 2, 3, false),
    /* 0xA6 */ e(Ldx, ZeroPage, 2, 3, false),
    /* 0xA7 */ e(Lax, ZeroPage, 2, 3, false),
    /* 0xA8 */ e(Tay, Implied, 1, 2, false),
    /* 0xA9 */ e(Lda, Immediate, 2, 2, false),
    /* 0xAA */ e(Tax, Implied, 1, 2, false),
    /* 0xAB */ e(Lax, Immediate, 2, 2, false),
    /* 0xAC */ e(Ldy, Absolute, 3, 4, false),
    /* 0xAD */ e(Lda, Absolute, 3, 4, false),
    /* 0xAE */ e(Ldx, Absolute, 3, 4, false),
    /* 0xAF */ e(Lax, Absolute, 3, 4, false),
    /* 0xB0 */ e(Bcs, Relative, 2, 2, false),
    /* 0xB1 */ e(Lda, IndirectY, 2, 5, true),
    /* 0xB2 */ e(Kil, Implied, 1, 2, false),
    /* 0xB3 */ e(Lax, IndirectY, 2, 5, true),
    /* 0xB4 */ e(Ldy, ZeroPageX, 2, 4, false),
    /* 0xB5 */ e(Lda, ZeroPageX, 2, 4, false),
    /* 0xB6 */ e(Ldx, ZeroPageY, 2, 4, false),
    /* 0xB7 */ e(Lax, ZeroPageY, 2, 4, false),
    /* 0xB8 */ e(Clv, Implied, 1, 2, false),
    /* 0xB9 */ e(Lda, AbsoluteY, 3, 4, true),
    /* 0xBA */ e(Tsx, Implied, 1, 2, false),
    /* 0xBB */ e(Las, AbsoluteY, 3, 4, true),
    /* 0xBC */ e(Ldy, AbsoluteX, 3, 4, true),
    /* 0xBD */ e(Lda, AbsoluteX, 3, 4, true),
    /* 0xBE */ e(Ldx, AbsoluteY, 3, 4, true),
    /* 0xBF */ e(Lax, AbsoluteY, 3, 4, true),
    /* 0xC0 */ e(Cpy, Immediate, 2, 2, false),
    /* 0xC1 */ e(Cmp, IndirectX, 2, 6, false),
    /* 0xC2 */ e(Nop, Immediate, 2, 2, false),
    /* 0xC3 */ e(Dcp, IndirectX, 2, 8, false),
    /* 0xC4 */ e(Cpy, ZeroPage, 2, 3, false),
    /* 0xC5 */ e(Cmp, ZeroPage, 2, 3, false),
    /* 0xC6 */ e(Dec, ZeroPage, 2, 5, false),
    /* 0xC7 */ e(Dcp, ZeroPage, 2, 5, false),
    /* 0xC8 */ e(Iny, Implied, 1, 2, false),
    /* 0xC9 */ e(Cmp, Immediate, 2, 2, false),
    /* 0xCA */ e(Dex, Implied, 1, 2, false),
    /* 0xCB */ e(Axs, Immediate, 2, 2, false),
    /* 0xCC */ e(Cpy, Absolute, 3, 4, false),
    /* 0xCD */ e(Cmp, Absolute, 3, 4, false),
    /* 0xCE */ e(Dec, Absolute, 3, 6, false),
    /* 0xCF */ e(Dcp, Absolute, 3, 6, false),
    /* 0xD0 */ e(Bne, Relative, 2, 2, false),
    /* 0xD1 */ e(Cmp, IndirectY, 2, 5, true),
    /* 0xD2 */ e(Kil, Implied, 1, 2, false),
    /* 0xD3 */ e(Dcp, IndirectY, 2, 8, false),
    /* 0xD4 */ e(Nop, ZeroPageX, 2, 4, false),
    /* 0xD5 */ e(Cmp, ZeroPageX, 2, 4, false),
    /* 0xD6 */ e(Dec, ZeroPageX, 2, 6, false),
    /* 0xD7 */ e(Dcp, ZeroPageX, 2, 6, false),
    /* 0xD8 */ e(Cld, Implied, 1, 2, false),
    /* 0xD9 */ e(Cmp, AbsoluteY, 3, 4, true),
    /* 0xDA */ e(Nop, Implied, 1, 2, false),
    /* 0xDB */ e(Dcp, AbsoluteY, 3, 7, false),
    /* 0xDC */ e(Nop, AbsoluteX, 3, 4, true),
    /* 0xDD */ e(Cmp, AbsoluteX, 3, 4, true),
    /* 0xDE */ e(Dec, AbsoluteX, 3, 7, false),
    /* 0xDF */ e(Dcp, AbsoluteX, 3, 7, false),
    /* 0xE0 */ e(Cpx, Immediate, 2, 2, false),
    /* 0xE1 */ e(Sbc, IndirectX, 2, 6, false),
    /* 0xE2 */ e(Nop, Immediate, 2, 2, false),
    /* 0xE3 */ e(Isb, IndirectX, 2, 8, false),
    /* 0xE4 */ e(Cpx, ZeroPage, 2, 3, false),
    /* 0xE5 */ e(Sbc, ZeroPage, 2, 3, false),
    /* 0xE6 */ e(Inc, ZeroPage, 2, 5, false),
    /* 0xE7 */ e(Isb, ZeroPage, 2, 5, false),
    /* 0xE8 */ e(Inx, Implied, 1, 2, false),
    /* 0xE9 */ e(Sbc, Immediate, 2, 2, false),
    /* 0xEA */ e(Nop, Implied, 1, 2, false),
    /* 0xEB */ e(Sbc, Immediate, 2, 2, false),
    /* 0xEC */ e(Cpx, Absolute, 3, 4, false),
    /* 0xED */ e(Sbc, Absolute, 3, 4, false),
    /* 0xEE */ e(Inc, Absolute, 3, 6, false),
    /* 0xEF */ e(Isb, Absolute, 3, 6, false),
    /* 0xF0 */ e(Beq, Relative, 2, 2, false),
    /* 0xF1 */ e(Sbc, IndirectY, 2, 5, true),
    /* 0xF2 */ e(Kil, Implied, 1, 2, false),
    /* 0xF3 */ e(Isb, IndirectY, 2, 8, false),
    /* 0xF4 */ e(Nop, ZeroPageX, 2, 4, false),
    /* 0xF5 */ e(Sbc, ZeroPageX, 2, 4, false),
    /* 0xF6 */ e(Inc, ZeroPageX, 2, 6, false),
    /* 0xF7 */ e(Isb, ZeroPageX, 2, 6, false),
    /* 0xF8 */ e(Sed, Implied, 1, 2, false),
    /* 0xF9 */ e(Sbc, AbsoluteY, 3, 4, true),
    /* 0xFA */ e(Nop, Implied, 1, 2, false),
    /* 0xFB */ e(Isb, AbsoluteY, 3, 7, false),
    /* 0xFC */ e(Nop, AbsoluteX, 3, 4, true),
    /* 0xFD */ e(Sbc, AbsoluteX, 3, 4, true),
    /* 0xFE */ e(Inc, AbsoluteX, 3, 7, false),
    /* 0xFF */ e(Isb, AbsoluteX, 3, 7, false),
];

pub fn decode(opcode: u8) -> OpcodeEntry {
    TABLE[opcode as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_fully_populated() {
        // A compile-time array of 256 literal entries is exhaustive by
        // construction; this guards against an accidental edit shrinking it.
        assert_eq!(TABLE.len(), 256);
    }

    #[test]
    fn brk_is_seven_cycles_one_byte() {
        let entry = decode(0x00);
        assert_eq!(entry.mnemonic, Mnemonic::Brk);
        assert_eq!(entry.len, 1);
        assert_eq!(entry.cycles, 7);
    }

    #[test]
    fn store_indirect_y_does_not_pay_page_penalty() {
        let entry = decode(0x91);
        assert_eq!(entry.mnemonic, Mnemonic::Sta);
        assert!(!entry.pays_page_penalty);
        assert_eq!(entry.cycles, 6);
    }

    #[test]
    fn load_indirect_y_pays_page_penalty() {
        let entry = decode(0xB1);
        assert_eq!(entry.mnemonic, Mnemonic::Lda);
        assert!(entry.pays_page_penalty);
    }
}
