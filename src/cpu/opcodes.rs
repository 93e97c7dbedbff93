// Opcode decode table for the 6502
//
// A flat, const-initialised table of all 256 opcodes. Each entry carries the
// mnemonic, addressing mode, instruction size in bytes, base cycle count and
// whether the instruction pays a one-cycle penalty when its effective address
// crosses a page boundary. Dispatch happens with a `match` on the opcode byte
// in `execute.rs`; the table is only consulted for decode metadata.
//
// Reference: https://www.masswerk.at/6502/6502_instruction_set.html

use crate::cpu::addressing::AddressingMode;

/// Decode metadata for a single opcode
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    /// Three-letter mnemonic ("LDA", "BRK", ...)
    pub mnemonic: &'static str,

    /// Addressing mode used to resolve the operand
    pub mode: AddressingMode,

    /// Instruction size in bytes (opcode + operands)
    ///
    /// Unofficial opcodes carry size 0; the executor treats them as
    /// one-byte NOPs.
    pub bytes: u8,

    /// Base cycle count, before page-cross and branch penalties
    pub cycles: u8,

    /// Whether a crossed page boundary adds one cycle
    pub page_cycle: bool,
}

/// Shorthand constructor, keeps the table rows readable
const fn op(
    mnemonic: &'static str,
    mode: AddressingMode,
    bytes: u8,
    cycles: u8,
    page_cycle: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        bytes,
        cycles,
        page_cycle,
    }
}

/// Entry used for every unofficial/unused opcode
///
/// Size 0 marks the slot as unofficial; the executor advances PC by one
/// byte and charges two cycles, so stray bytes never derail execution.
const XXX: OpcodeInfo = op("NOP", AddressingMode::Implied, 0, 0, false);

use crate::cpu::addressing::AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implied, IndexedIndirect, Indirect,
    IndirectIndexed, Relative, ZeroPage, ZeroPageX, ZeroPageY,
};

/// The full 256-entry decode table, indexed by opcode byte
#[rustfmt::skip]
pub static OPCODE_TABLE: [OpcodeInfo; 256] = [
    // 0x00
    op("BRK", Implied, 1, 7, false),
    op("ORA", IndexedIndirect, 2, 6, false),
    XXX,
    XXX,
    XXX,
    op("ORA", ZeroPage, 2, 3, false),
    op("ASL", ZeroPage, 2, 5, false),
    XXX,
    op("PHP", Implied, 1, 3, false),
    op("ORA", Immediate, 2, 2, false),
    op("ASL", Accumulator, 1, 2, false),
    XXX,
    XXX,
    op("ORA", Absolute, 3, 4, false),
    op("ASL", Absolute, 3, 6, false),
    XXX,
    // 0x10
    op("BPL", Relative, 2, 2, false),
    op("ORA", IndirectIndexed, 2, 5, true),
    XXX,
    XXX,
    XXX,
    op("ORA", ZeroPageX, 2, 4, false),
    op("ASL", ZeroPageX, 2, 6, false),
    XXX,
    op("CLC", Implied, 1, 2, false),
    op("ORA", AbsoluteY, 3, 4, true),
    XXX,
    XXX,
    XXX,
    op("ORA", AbsoluteX, 3, 4, true),
    op("ASL", AbsoluteX, 3, 7, false),
    XXX,
    // 0x20
    op("JSR", Absolute, 3, 6, false),
    op("AND", IndexedIndirect, 2, 6, false),
    XXX,
    XXX,
    op("BIT", ZeroPage, 2, 3, false),
    op("AND", ZeroPage, 2, 3, false),
    op("ROL", ZeroPage, 2, 5, false),
    XXX,
    op("PLP", Implied, 1, 4, false),
    op("AND", Immediate, 2, 2, false),
    op("ROL", Accumulator, 1, 2, false),
    XXX,
    op("BIT", Absolute, 3, 4, false),
    op("AND", Absolute, 3, 4, false),
    op("ROL", Absolute, 3, 6, false),
    XXX,
    // 0x30
    op("BMI", Relative, 2, 2, false),
    op("AND", IndirectIndexed, 2, 5, true),
    XXX,
    XXX,
    XXX,
    op("AND", ZeroPageX, 2, 4, false),
    op("ROL", ZeroPageX, 2, 6, false),
    XXX,
    op("SEC", Implied, 1, 2, false),
    op("AND", AbsoluteY, 3, 4, true),
    XXX,
    XXX,
    XXX,
    op("AND", AbsoluteX, 3, 4, true),
    op("ROL", AbsoluteX, 3, 7, false),
    XXX,
    // 0x40
    op("RTI", Implied, 1, 6, false),
    op("EOR", IndexedIndirect, 2, 6, false),
    XXX,
    XXX,
    XXX,
    op("EOR", ZeroPage, 2, 3, false),
    op("LSR", ZeroPage, 2, 5, false),
    XXX,
    op("PHA", Implied, 1, 3, false),
    op("EOR", Immediate, 2, 2, false),
    op("LSR", Accumulator, 1, 2, false),
    XXX,
    op("JMP", Absolute, 3, 3, false),
    op("EOR", Absolute, 3, 4, false),
    op("LSR", Absolute, 3, 6, false),
    XXX,
    // 0x50
    op("BVC", Relative, 2, 2, false),
    op("EOR", IndirectIndexed, 2, 5, true),
    XXX,
    XXX,
    XXX,
    op("EOR", ZeroPageX, 2, 4, false),
    op("LSR", ZeroPageX, 2, 6, false),
    XXX,
    op("CLI", Implied, 1, 2, false),
    op("EOR", AbsoluteY, 3, 4, true),
    XXX,
    XXX,
    XXX,
    op("EOR", AbsoluteX, 3, 4, true),
    op("LSR", AbsoluteX, 3, 7, false),
    XXX,
    // 0x60
    op("RTS", Implied, 1, 6, false),
    op("ADC", IndexedIndirect, 2, 6, false),
    XXX,
    XXX,
    XXX,
    op("ADC", ZeroPage, 2, 3, false),
    op("ROR", ZeroPage, 2, 5, false),
    XXX,
    op("PLA", Implied, 1, 4, false),
    op("ADC", Immediate, 2, 2, false),
    op("ROR", Accumulator, 1, 2, false),
    XXX,
    op("JMP", Indirect, 3, 5, false),
    op("ADC", Absolute, 3, 4, false),
    op("ROR", Absolute, 3, 6, false),
    XXX,
    // 0x70
    op("BVS", Relative, 2, 2, false),
    op("ADC", IndirectIndexed, 2, 5, true),
    XXX,
    XXX,
    XXX,
    op("ADC", ZeroPageX, 2, 4, false),
    op("ROR", ZeroPageX, 2, 6, false),
    XXX,
    op("SEI", Implied, 1, 2, false),
    op("ADC", AbsoluteY, 3, 4, true),
    XXX,
    XXX,
    XXX,
    op("ADC", AbsoluteX, 3, 4, true),
    op("ROR", AbsoluteX, 3, 7, false),
    XXX,
    // 0x80
    XXX,
    op("STA", IndexedIndirect, 2, 6, false),
    XXX,
    XXX,
    op("STY", ZeroPage, 2, 3, false),
    op("STA", ZeroPage, 2, 3, false),
    op("STX", ZeroPage, 2, 3, false),
    XXX,
    op("DEY", Implied, 1, 2, false),
    XXX,
    op("TXA", Implied, 1, 2, false),
    XXX,
    op("STY", Absolute, 3, 4, false),
    op("STA", Absolute, 3, 4, false),
    op("STX", Absolute, 3, 4, false),
    XXX,
    // 0x90
    op("BCC", Relative, 2, 2, false),
    op("STA", IndirectIndexed, 2, 6, false),
    XXX,
    XXX,
    op("STY", ZeroPageX, 2, 4, false),
    op("STA", ZeroPageX, 2, 4, false),
    op("STX", ZeroPageY, 2, 4, false),
    XXX,
    op("TYA", Implied, 1, 2, false),
    op("STA", AbsoluteY, 3, 5, false),
    op("TXS", Implied, 1, 2, false),
    XXX,
    XXX,
    op("STA", AbsoluteX, 3, 5, false),
    XXX,
    XXX,
    // 0xA0
    op("LDY", Immediate, 2, 2, false),
    op("LDA", IndexedIndirect, 2, 6, false),
    op("LDX", Immediate, 2, 2, false),
    XXX,
    op("LDY", ZeroPage, 2, 3, false),
    op("LDA", ZeroPage, 2, 3, false),
    op("LDX", ZeroPage, 2, 3, false),
    XXX,
    op("TAY", Implied, 1, 2, false),
    op("LDA", Immediate, 2, 2, false),
    op("TAX", Implied, 1, 2, false),
    XXX,
    op("LDY", Absolute, 3, 4, false),
    op("LDA", Absolute, 3, 4, false),
    op("LDX", Absolute, 3, 4, false),
    XXX,
    // 0xB0
    op("BCS", Relative, 2, 2, false),
    op("LDA", IndirectIndexed, 2, 5, true),
    XXX,
    XXX,
    op("LDY", ZeroPageX, 2, 4, false),
    op("LDA", ZeroPageX, 2, 4, false),
    op("LDX", ZeroPageY, 2, 4, false),
    XXX,
    op("CLV", Implied, 1, 2, false),
    op("LDA", AbsoluteY, 3, 4, true),
    op("TSX", Implied, 1, 2, false),
    XXX,
    op("LDY", AbsoluteX, 3, 4, true),
    op("LDA", AbsoluteX, 3, 4, true),
    op("LDX", AbsoluteY, 3, 4, true),
    XXX,
    // 0xC0
    op("CPY", Immediate, 2, 2, false),
    op("CMP", IndexedIndirect, 2, 6, false),
    XXX,
    XXX,
    op("CPY", ZeroPage, 2, 3, false),
    op("CMP", ZeroPage, 2, 3, false),
    op("DEC", ZeroPage, 2, 5, false),
    XXX,
    op("INY", Implied, 1, 2, false),
    op("CMP", Immediate, 2, 2, false),
    op("DEX", Implied, 1, 2, false),
    XXX,
    op("CPY", Absolute, 3, 4, false),
    op("CMP", Absolute, 3, 4, false),
    op("DEC", Absolute, 3, 6, false),
    XXX,
    // 0xD0
    op("BNE", Relative, 2, 2, false),
    op("CMP", IndirectIndexed, 2, 5, true),
    XXX,
    XXX,
    XXX,
    op("CMP", ZeroPageX, 2, 4, false),
    op("DEC", ZeroPageX, 2, 6, false),
    XXX,
    op("CLD", Implied, 1, 2, false),
    op("CMP", AbsoluteY, 3, 4, true),
    XXX,
    XXX,
    XXX,
    op("CMP", AbsoluteX, 3, 4, true),
    op("DEC", AbsoluteX, 3, 7, false),
    XXX,
    // 0xE0
    op("CPX", Immediate, 2, 2, false),
    op("SBC", IndexedIndirect, 2, 6, false),
    XXX,
    XXX,
    op("CPX", ZeroPage, 2, 3, false),
    op("SBC", ZeroPage, 2, 3, false),
    op("INC", ZeroPage, 2, 5, false),
    XXX,
    op("INX", Implied, 1, 2, false),
    op("SBC", Immediate, 2, 2, false),
    op("NOP", Implied, 1, 2, false),
    XXX,
    op("CPX", Absolute, 3, 4, false),
    op("SBC", Absolute, 3, 4, false),
    op("INC", Absolute, 3, 6, false),
    XXX,
    // 0xF0
    op("BEQ", Relative, 2, 2, false),
    op("SBC", IndirectIndexed, 2, 5, true),
    XXX,
    XXX,
    XXX,
    op("SBC", ZeroPageX, 2, 4, false),
    op("INC", ZeroPageX, 2, 6, false),
    XXX,
    op("SED", Implied, 1, 2, false),
    op("SBC", AbsoluteY, 3, 4, true),
    XXX,
    XXX,
    XXX,
    op("SBC", AbsoluteX, 3, 4, true),
    op("INC", AbsoluteX, 3, 7, false),
    XXX,
];
