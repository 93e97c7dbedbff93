// VM facade
//
// The one type front-ends talk to. Owns the CPU and the bus (which in
// turn owns the PPU and cartridge), exposes the lifecycle operations
// (load, reset, step, step-frame) and a read-mostly query surface for
// rendering and debugging.

use std::collections::BTreeMap;

use crate::bus::Bus;
use crate::cartridge::{Cartridge, CartridgeError};
use crate::cpu::Cpu;
use crate::debug::disassembler;

/// Snapshot of the CPU register file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub p: u8,
    pub cycles: u64,
}

/// The emulated machine
pub struct Vm {
    cpu: Cpu,
    bus: Bus,
}

impl Vm {
    pub fn new() -> Self {
        Vm {
            cpu: Cpu::new(),
            bus: Bus::new(),
        }
    }

    // ========================================
    // Lifecycle
    // ========================================

    /// Parse an iNES image, attach the cartridge and reset.
    ///
    /// On error nothing is attached and the previous state is untouched.
    pub fn load_rom(&mut self, bytes: &[u8]) -> Result<(), CartridgeError> {
        let cartridge = Cartridge::from_bytes(bytes)?;
        self.bus.insert_cartridge(cartridge);
        self.reset();
        Ok(())
    }

    /// Load a raw program into CPU memory, point the reset vector at it
    /// and reset. Deterministic harness entry for vector-less programs.
    pub fn load_program(&mut self, program: &[u8], start: u16) {
        let mut addr = start;
        for &byte in program {
            self.bus.cpu_write(addr, byte);
            addr = addr.wrapping_add(1);
        }
        self.bus.set_reset_override(start);
        self.reset();
    }

    /// Rewrite the reset vector and reset. With a cartridge attached the
    /// two vector bytes are patched into PRG ROM; without one, the bus
    /// serves the override directly (ROM-less RAM programs).
    pub fn force_set_reset_vector(&mut self, vector: u16) {
        match self.bus.cartridge_mut() {
            Some(cart) => {
                cart.overwrite_prg(0xFFFC, vector as u8);
                cart.overwrite_prg(0xFFFD, (vector >> 8) as u8);
            }
            None => self.bus.set_reset_override(vector),
        }
        self.reset();
    }

    /// Reset bus-side state and the CPU (PC from the reset vector)
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.reset(&mut self.bus);
    }

    /// One bus tick: three PPU ticks, then one CPU instruction
    pub fn step(&mut self) {
        self.bus.clock(&mut self.cpu);
    }

    /// Tick until the PPU finishes the frame in progress, then
    /// acknowledge the boundary. Bounded by one frame's worth of ticks.
    pub fn step_frame(&mut self) {
        while !self.bus.ppu().frame_complete() {
            self.step();
        }
        self.bus.ppu_mut().clear_frame_complete();
    }

    /// Latch the port-1 controller byte (MSB-first: A, B, Select, Start,
    /// Up, Down, Left, Right)
    pub fn set_controller(&mut self, state: u8) {
        self.bus.set_controller(0, state);
    }

    /// Latch the port-2 controller byte
    pub fn set_controller2(&mut self, state: u8) {
        self.bus.set_controller(1, state);
    }

    // ========================================
    // Query surface
    // ========================================

    /// CPU register snapshot
    pub fn peek_cpu(&self) -> CpuSnapshot {
        CpuSnapshot {
            a: self.cpu.a,
            x: self.cpu.x,
            y: self.cpu.y,
            sp: self.cpu.sp,
            pc: self.cpu.pc,
            p: self.cpu.status,
            cycles: self.cpu.cycles,
        }
    }

    /// Read `start..=end` through the CPU bus. Intended for RAM and
    /// cartridge ranges; PPU registers have read side effects.
    pub fn peek_ram(&mut self, start: u16, end: u16) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((end as usize).saturating_sub(start as usize) + 1);
        let mut addr = start as u32;
        while addr <= end as u32 {
            bytes.push(self.bus.cpu_read(addr as u16));
            addr += 1;
        }
        bytes
    }

    /// The rendered frame: 256x240 pixels, three RGB bytes each
    pub fn framebuffer(&self) -> &[u8] {
        self.bus.ppu().frame()
    }

    /// Render pattern table 0 or 1 through one of the eight palettes as
    /// a 128x128 RGB image
    pub fn pattern_table(&self, table: usize, palette_id: u8) -> Vec<u8> {
        self.bus
            .ppu()
            .pattern_table_rgb(table, palette_id, self.bus.cartridge())
    }

    /// The 32 palette RAM entries resolved to RGB
    pub fn palette_colors(&self) -> [[u8; 3]; 32] {
        self.bus.ppu().palette_rgb()
    }

    /// Snapshot of one internal nametable bank (0 or 1)
    pub fn nametable(&self, index: usize) -> [u8; 1024] {
        self.bus.ppu().nametable(index)
    }

    /// Disassemble the cartridge program space ($8000-$FFFF) into a map
    /// keyed by instruction address
    pub fn peek_disassembly(&mut self) -> BTreeMap<u16, String> {
        disassembler::disassemble_range(&mut self.bus, 0x8000, 0xFFFF)
    }

    /// Nestest-format trace line for the instruction at PC
    pub fn trace_line(&mut self) -> String {
        self.cpu.trace(&mut self.bus)
    }

    // ========================================
    // Component access (tests, benches, tooling)
    // ========================================

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}
