// NES emulation core
//
// A deterministic, cycle-oriented NES core: 6502 CPU, 2C02 PPU, shared
// memory bus with cartridge mapping, and the interleaving clock that
// couples them. Front-ends drive the `Vm` facade; everything else is
// internal machinery.

pub mod bus;
pub mod cartridge;
pub mod controller;
pub mod cpu;
pub mod debug;
pub mod emulator;
pub mod ppu;
pub mod ram;
pub mod vm;

// Re-export the main types for convenience
pub use bus::Bus;
pub use cartridge::{Cartridge, CartridgeError, Mirroring};
pub use controller::Controller;
pub use cpu::Cpu;
pub use ppu::Ppu;
pub use ram::Ram;
pub use vm::{CpuSnapshot, Vm};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        // All components can be instantiated independently
        let _cpu = Cpu::new();
        let _ppu = Ppu::new();
        let _bus = Bus::new();
        let _ram = Ram::new();
        let _controller = Controller::new();
        let _vm = Vm::new();
    }
}
