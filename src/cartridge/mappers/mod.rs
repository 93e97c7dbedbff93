// Cartridge mappers
//
// The mapper set is closed and tiny, so mappers are a tagged enum rather
// than a trait object: dispatch is a `match`, the compiler checks
// exhaustiveness, and the hot path has no indirect calls.
//
// Each operation translates a bus address into an offset within the
// cartridge's PRG or CHR memory, or declines the address entirely
// (`None`), in which case the bus falls through to its own devices.

mod mapper0;

pub use mapper0::Nrom;

/// All supported mapper kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mapper {
    /// Mapper 0 (NROM): straight PRG/CHR mapping, no banking
    Nrom(Nrom),
}

impl Mapper {
    /// Map a CPU read to a PRG ROM offset
    pub fn cpu_map_read(&self, addr: u16) -> Option<usize> {
        match self {
            Mapper::Nrom(m) => m.cpu_map_read(addr),
        }
    }

    /// Map a CPU write to a PRG offset. NROM has no PRG RAM or mapper
    /// registers, so ROM writes are silently dropped.
    pub fn cpu_map_write(&self, addr: u16) -> Option<usize> {
        match self {
            Mapper::Nrom(m) => m.cpu_map_write(addr),
        }
    }

    /// Map a PPU read to a CHR offset
    pub fn ppu_map_read(&self, addr: u16) -> Option<usize> {
        match self {
            Mapper::Nrom(m) => m.ppu_map_read(addr),
        }
    }

    /// Map a PPU write to a CHR offset; only legal when the board carries
    /// CHR RAM
    pub fn ppu_map_write(&self, addr: u16) -> Option<usize> {
        match self {
            Mapper::Nrom(m) => m.ppu_map_write(addr),
        }
    }
}
