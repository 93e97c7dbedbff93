// System bus
//
// Owns everything the CPU can address: work RAM, the PPU, the optional
// cartridge and the controller latches. Also owns the master clock
// ratio: every bus tick runs three PPU ticks, then one CPU instruction,
// then moves the PPU's NMI request into the CPU so the interrupt lands
// on the next instruction boundary.
//
// CPU address map:
//
// | Range       | Device                                         |
// |-------------|------------------------------------------------|
// | $0000-$1FFF | 2KB work RAM, mirrored every $0800             |
// | $2000-$3FFF | PPU registers, mirrored every 8 bytes          |
// | $4014       | OAM DMA                                        |
// | $4016-$4017 | Controller shift registers                     |
// | $8000-$FFFF | Cartridge PRG via mapper                       |
//
// The cartridge is offered every access first; unclaimed, unmapped
// addresses read as 0 and swallow writes.

use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use crate::ppu::Ppu;
use crate::ram::Ram;

/// OAM DMA register
const OAM_DMA_ADDR: u16 = 0x4014;

/// Controller ports
const CONTROLLER_1_ADDR: u16 = 0x4016;
const CONTROLLER_2_ADDR: u16 = 0x4017;

/// Base DMA stall; one more is added when the CPU sits on an odd cycle
const OAM_DMA_STALL_CYCLES: u64 = 513;

pub struct Bus {
    ram: Ram,
    ppu: Ppu,
    cartridge: Option<Cartridge>,

    /// Live controller bytes, MSB-first: A, B, Select, Start, Up, Down,
    /// Left, Right
    controllers: [u8; 2],
    /// Shift registers loaded from the live bytes on a $4016 write
    controller_shift: [u8; 2],

    /// Set by a $4014 write; the clock applies the CPU stall afterwards
    dma_stall_pending: bool,

    /// Reset-vector override used by deterministic test harnesses; takes
    /// precedence over $FFFC/$FFFD reads when set
    reset_override: Option<u16>,

    /// Bus ticks since the last reset
    clock_counter: u64,
}

impl Bus {
    pub fn new() -> Self {
        Bus {
            ram: Ram::new(),
            ppu: Ppu::new(),
            cartridge: None,
            controllers: [0; 2],
            controller_shift: [0; 2],
            dma_stall_pending: false,
            reset_override: None,
            clock_counter: 0,
        }
    }

    /// Attach a cartridge; the PPU adopts its mirroring arrangement
    pub fn insert_cartridge(&mut self, cartridge: Cartridge) {
        self.ppu.set_mirroring(cartridge.mirroring());
        self.cartridge = Some(cartridge);
        self.reset_override = None;
    }

    /// Whether a cartridge is attached
    pub fn has_cartridge(&self) -> bool {
        self.cartridge.is_some()
    }

    /// Reset the bus-side state (the VM resets the CPU)
    pub fn reset(&mut self) {
        self.ppu.reset();
        self.controller_shift = [0; 2];
        self.dma_stall_pending = false;
        self.clock_counter = 0;
    }

    // ========================================
    // Master clock
    // ========================================

    /// One bus tick: three PPU ticks, one CPU instruction, interrupt
    /// handoff, then any pending DMA stall.
    ///
    /// An NMI the PPU raises here is handed to the CPU after its
    /// instruction completed, so the CPU enters the handler on its next
    /// step; interrupts never split an instruction.
    pub fn clock(&mut self, cpu: &mut Cpu) {
        for _ in 0..3 {
            self.ppu.clock(self.cartridge.as_ref());
        }

        cpu.step(self);

        if self.ppu.take_nmi() {
            cpu.signal_nmi();
        }

        if self.dma_stall_pending {
            self.dma_stall_pending = false;
            // 513 cycles, 514 when the write landed on an odd CPU cycle
            let parity = cpu.cycles & 1;
            cpu.cycles = cpu.cycles.wrapping_add(OAM_DMA_STALL_CYCLES + parity);
        }

        self.clock_counter += 1;
    }

    /// Bus ticks since reset
    pub fn clock_counter(&self) -> u64 {
        self.clock_counter
    }

    // ========================================
    // CPU-visible address space
    // ========================================

    /// Read a byte from the CPU address space
    pub fn cpu_read(&mut self, addr: u16) -> u8 {
        // Reset-vector override for harness-forced entry points
        if let Some(vector) = self.reset_override {
            match addr {
                0xFFFC => return vector as u8,
                0xFFFD => return (vector >> 8) as u8,
                _ => {}
            }
        }

        if let Some(cart) = &self.cartridge {
            if let Some(value) = cart.cpu_read(addr) {
                return value;
            }
        }

        match addr {
            0x0000..=0x1FFF => self.ram.read(addr),
            0x2000..=0x3FFF => self.ppu.cpu_read(addr, self.cartridge.as_ref()),
            CONTROLLER_1_ADDR | CONTROLLER_2_ADDR => {
                let port = (addr - CONTROLLER_1_ADDR) as usize;
                let bit = self.controller_shift[port] >> 7;
                self.controller_shift[port] <<= 1;
                bit
            }
            _ => 0,
        }
    }

    /// Write a byte to the CPU address space
    pub fn cpu_write(&mut self, addr: u16, data: u8) {
        if let Some(cart) = &mut self.cartridge {
            if cart.cpu_write(addr, data) {
                return;
            }
            // Cartridge space claims but drops ROM writes
            if addr >= 0x8000 {
                return;
            }
        }

        match addr {
            0x0000..=0x1FFF => self.ram.write(addr, data),
            0x2000..=0x3FFF => {
                let Bus { ppu, cartridge, .. } = self;
                ppu.cpu_write(addr, data, cartridge.as_mut());
            }
            OAM_DMA_ADDR => self.oam_dma(data),
            CONTROLLER_1_ADDR | CONTROLLER_2_ADDR => {
                // Any write re-latches both shift registers from the
                // live controller state
                self.controller_shift = self.controllers;
            }
            _ => {}
        }
    }

    /// OAM DMA: copy one CPU page into OAM starting at the current
    /// OAMADDR. The CPU stall is applied by `clock` once the writing
    /// instruction has finished.
    fn oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        let start = self.ppu.oam_address();
        for i in 0..256u16 {
            let value = self.cpu_read(base + i);
            self.ppu.write_oam(start.wrapping_add(i as u8), value);
        }
        self.dma_stall_pending = true;
    }

    // ========================================
    // Front-end hooks
    // ========================================

    /// Latch the live state of a controller port
    pub fn set_controller(&mut self, port: usize, state: u8) {
        self.controllers[port & 1] = state;
    }

    /// Force the reset vector seen by the CPU, without touching ROM
    pub fn set_reset_override(&mut self, vector: u16) {
        self.reset_override = Some(vector);
    }

    /// Access the PPU (query surface)
    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    /// Mutable PPU access (frame acknowledgement)
    pub fn ppu_mut(&mut self) -> &mut Ppu {
        &mut self.ppu
    }

    /// Access the cartridge, if any
    pub fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_ref()
    }

    /// Mutable cartridge access (reset-vector patching)
    pub fn cartridge_mut(&mut self) -> Option<&mut Cartridge> {
        self.cartridge.as_mut()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
