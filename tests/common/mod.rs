// Shared helpers for integration tests
//
// Builds synthetic iNES images in memory so the suites run without any
// binary ROM assets checked in.

#![allow(dead_code)]

/// iNES header size
pub const HEADER_SIZE: usize = 16;

/// One PRG bank
pub const PRG_BANK_SIZE: usize = 16 * 1024;

/// One CHR bank
pub const CHR_BANK_SIZE: usize = 8 * 1024;

/// Build a mapper-0 iNES image from raw PRG/CHR contents.
///
/// `prg` is padded to one bank (or two if longer than one); an empty
/// `chr` produces a CHR RAM board (zero CHR banks in the header).
pub fn build_nrom(prg: &[u8], chr: &[u8], vertical_mirroring: bool) -> Vec<u8> {
    let prg_banks: u8 = if prg.len() > PRG_BANK_SIZE { 2 } else { 1 };
    let chr_banks: u8 = if chr.is_empty() { 0 } else { 1 };
    let flags6 = if vertical_mirroring { 0x01 } else { 0x00 };

    let mut rom = vec![0x4E, 0x45, 0x53, 0x1A, prg_banks, chr_banks, flags6, 0x00];
    rom.resize(HEADER_SIZE, 0);

    let mut prg_data = prg.to_vec();
    prg_data.resize(prg_banks as usize * PRG_BANK_SIZE, 0);
    rom.extend_from_slice(&prg_data);

    if chr_banks > 0 {
        let mut chr_data = chr.to_vec();
        chr_data.resize(CHR_BANK_SIZE, 0);
        rom.extend_from_slice(&chr_data);
    }

    rom
}

/// Build a single-bank NROM image with `code` at the reset target and
/// the NMI vector pointing at `nmi_handler` (PRG offset relative).
///
/// With one bank, $C000-$FFFF mirrors $8000-$BFFF, so PRG offset 0 is
/// reachable as $C000 and offset $2000 as $E000.
pub fn build_nrom_with_vectors(
    code: &[u8],
    reset: u16,
    nmi_code: &[u8],
    nmi: u16,
) -> Vec<u8> {
    let mut prg = vec![0u8; PRG_BANK_SIZE];

    let reset_offset = (reset as usize) & 0x3FFF;
    prg[reset_offset..reset_offset + code.len()].copy_from_slice(code);

    let nmi_offset = (nmi as usize) & 0x3FFF;
    prg[nmi_offset..nmi_offset + nmi_code.len()].copy_from_slice(nmi_code);

    prg[0x3FFA] = nmi as u8;
    prg[0x3FFB] = (nmi >> 8) as u8;
    prg[0x3FFC] = reset as u8;
    prg[0x3FFD] = (reset >> 8) as u8;

    build_nrom(&prg, &[0xAA; CHR_BANK_SIZE], false)
}
