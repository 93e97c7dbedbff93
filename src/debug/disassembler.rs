// 6502 disassembler
//
// Linear sweep over a CPU address range, decoding each opcode through
// the same table the executor uses. Unofficial opcodes decode as
// one-byte NOPs, mirroring how the CPU treats them, so the sweep never
// desynchronises on stray data bytes.

use std::collections::BTreeMap;

use crate::bus::Bus;
use crate::cpu::opcodes::OPCODE_TABLE;

/// One decoded instruction
#[derive(Debug, Clone)]
pub struct DisassembledInstruction {
    /// Address of the opcode byte
    pub address: u16,
    /// The opcode byte itself
    pub opcode: u8,
    /// Mnemonic from the decode table
    pub mnemonic: &'static str,
    /// Addressing-mode tag ("zpg", "abs,X", "#", ...)
    pub mode_tag: &'static str,
    /// Raw operand bytes following the opcode
    pub operands: Vec<u8>,
}

impl DisassembledInstruction {
    /// Render as `MNEMONIC <operand bytes in hex> (<mode tag>)`,
    /// e.g. `LDA 34 12 (abs)` or `RTS (impl)`
    pub fn format(&self) -> String {
        let mut line = String::from(self.mnemonic);
        for byte in &self.operands {
            line.push_str(&format!(" {:02X}", byte));
        }
        line.push_str(&format!(" ({})", self.mode_tag));
        line
    }
}

impl std::fmt::Display for DisassembledInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:04X}  {}", self.address, self.format())
    }
}

/// Decode the instruction at `addr`
pub fn disassemble_at(bus: &mut Bus, addr: u16) -> DisassembledInstruction {
    let opcode = bus.cpu_read(addr);
    let info = &OPCODE_TABLE[opcode as usize];

    // Unofficial opcodes occupy one byte
    let size = info.bytes.max(1);
    let operands = (1..size)
        .map(|i| bus.cpu_read(addr.wrapping_add(i as u16)))
        .collect();

    DisassembledInstruction {
        address: addr,
        opcode,
        mnemonic: info.mnemonic,
        mode_tag: info.mode.tag(),
        operands,
    }
}

/// Disassemble `start..=end` into a map keyed by instruction address
pub fn disassemble_range(bus: &mut Bus, start: u16, end: u16) -> BTreeMap<u16, String> {
    let mut map = BTreeMap::new();
    let mut addr = start as u32;

    while addr <= end as u32 {
        let instruction = disassemble_at(bus, addr as u16);
        let size = instruction.operands.len() as u32 + 1;
        map.insert(addr as u16, instruction.format());
        addr += size;
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus_with_program(bytes: &[u8], start: u16) -> Bus {
        let mut bus = Bus::new();
        for (i, &b) in bytes.iter().enumerate() {
            bus.cpu_write(start + i as u16, b);
        }
        bus
    }

    #[test]
    fn test_single_instruction_formats() {
        let mut bus = bus_with_program(&[0xA9, 0x42], 0x0200);
        let inst = disassemble_at(&mut bus, 0x0200);

        assert_eq!(inst.mnemonic, "LDA");
        assert_eq!(inst.format(), "LDA 42 (#)");
        assert_eq!(inst.to_string(), "$0200  LDA 42 (#)");
    }

    #[test]
    fn test_implied_instruction_has_no_operands() {
        let mut bus = bus_with_program(&[0xEA], 0x0200);
        let inst = disassemble_at(&mut bus, 0x0200);
        assert_eq!(inst.format(), "NOP (impl)");
    }

    #[test]
    fn test_range_walks_instruction_sizes() {
        // LDX #$0A; STX $0000; JMP $0200
        let mut bus = bus_with_program(&[0xA2, 0x0A, 0x8E, 0x00, 0x00, 0x4C, 0x00, 0x02], 0x0200);
        let map = disassemble_range(&mut bus, 0x0200, 0x0207);

        assert_eq!(map.len(), 3);
        assert_eq!(map[&0x0200], "LDX 0A (#)");
        assert_eq!(map[&0x0202], "STX 00 00 (abs)");
        assert_eq!(map[&0x0205], "JMP 00 02 (abs)");
    }

    #[test]
    fn test_unofficial_bytes_decode_as_one_byte_nops() {
        let mut bus = bus_with_program(&[0x02, 0xA9, 0x01], 0x0200);
        let map = disassemble_range(&mut bus, 0x0200, 0x0202);

        assert_eq!(map[&0x0200], "NOP (impl)");
        // The sweep stays aligned with the executor
        assert_eq!(map[&0x0201], "LDA 01 (#)");
    }

    #[test]
    fn test_range_is_inclusive_and_bounded() {
        let mut bus = bus_with_program(&[0xEA, 0xEA, 0xEA], 0x0200);
        let map = disassemble_range(&mut bus, 0x0200, 0x0201);
        assert_eq!(map.len(), 2);
    }
}
