// PPU memory space ($0000-$3FFF)
//
// The cartridge gets first claim on every access; pattern-table
// addresses it declines fall back to the internal shadow (exercised
// when no cartridge is attached). Nametables go through the board's
// mirroring arrangement, palette RAM through its hardwired mirrors.

use super::constants::{NAMETABLE_SIZE, PATTERN_TABLE_SIZE};
use super::Ppu;
use crate::cartridge::{Cartridge, Mirroring};

impl Ppu {
    /// Read a byte of PPU memory
    pub(super) fn ppu_read(&self, addr: u16, cart: Option<&Cartridge>) -> u8 {
        let addr = addr & 0x3FFF;

        if let Some(cart) = cart {
            if let Some(value) = cart.ppu_read(addr) {
                return value;
            }
        }

        match addr {
            0x0000..=0x1FFF => {
                let table = (addr as usize) / PATTERN_TABLE_SIZE;
                self.pattern_shadow[table][addr as usize % PATTERN_TABLE_SIZE]
            }
            0x2000..=0x3EFF => {
                let (table, offset) = self.mirror_nametable(addr);
                self.nametables[table][offset]
            }
            0x3F00..=0x3FFF => self.palette_ram[Self::mirror_palette(addr)],
            _ => unreachable!(),
        }
    }

    /// Write a byte of PPU memory
    pub(super) fn ppu_write(&mut self, addr: u16, data: u8, cart: Option<&mut Cartridge>) {
        let addr = addr & 0x3FFF;

        if let Some(cart) = cart {
            if cart.ppu_write(addr, data) {
                return;
            }
            // CHR ROM swallows the write; only cartridge-less pattern
            // accesses reach the shadow below
            if addr <= 0x1FFF && !cart.has_chr_ram() {
                return;
            }
        }

        match addr {
            0x0000..=0x1FFF => {
                let table = (addr as usize) / PATTERN_TABLE_SIZE;
                self.pattern_shadow[table][addr as usize % PATTERN_TABLE_SIZE] = data;
            }
            0x2000..=0x3EFF => {
                let (table, offset) = self.mirror_nametable(addr);
                self.nametables[table][offset] = data;
            }
            0x3F00..=0x3FFF => {
                self.palette_ram[Self::mirror_palette(addr)] = data;
            }
            _ => unreachable!(),
        }
    }

    /// Map a $2000-$3EFF address onto one of the two physical nametable
    /// banks.
    ///
    /// Vertical:   $2000/$2800 -> bank 0, $2400/$2C00 -> bank 1
    /// Horizontal: $2000/$2400 -> bank 0, $2800/$2C00 -> bank 1
    fn mirror_nametable(&self, addr: u16) -> (usize, usize) {
        let addr = (addr & 0x0FFF) as usize;
        let table = addr / NAMETABLE_SIZE;
        let offset = addr % NAMETABLE_SIZE;

        let bank = match self.mirroring {
            Mirroring::Horizontal => table / 2,
            Mirroring::Vertical => table % 2,
        };
        (bank, offset)
    }

    /// Fold a palette address onto the 32-byte palette RAM. Entries $10,
    /// $14, $18 and $1C are hardwired mirrors of $00, $04, $08 and $0C.
    fn mirror_palette(addr: u16) -> usize {
        let index = (addr & 0x001F) as usize;
        match index {
            0x10 | 0x14 | 0x18 | 0x1C => index - 0x10,
            _ => index,
        }
    }

    /// Palette RAM lookup for the compositor: palette-space offset in,
    /// 6-bit colour index out
    pub(super) fn palette_entry(&self, offset: u16) -> u8 {
        self.palette_ram[Self::mirror_palette(offset)] & 0x3F
    }
}
