// PPU constants

/// PPU registers repeat every 8 bytes throughout $2000-$3FFF
pub(super) const PPU_REGISTER_MASK: u16 = 0x0007;

/// One nametable: 32x30 tile bytes plus 64 attribute bytes
pub(super) const NAMETABLE_SIZE: usize = 1024;

/// One pattern table: 256 tiles x 16 bytes
pub(super) const PATTERN_TABLE_SIZE: usize = 4096;

/// Palette RAM size
pub(super) const PALETTE_SIZE: usize = 32;

/// OAM size: 64 sprites x 4 bytes
pub(super) const OAM_SIZE: usize = 256;

/// Visible frame width in pixels
pub const SCREEN_WIDTH: usize = 256;

/// Visible frame height in pixels
pub const SCREEN_HEIGHT: usize = 240;

// ========================================
// Timing (NTSC)
// ========================================

/// PPU cycles per scanline
pub(super) const CYCLES_PER_SCANLINE: u16 = 341;

/// Scanlines per frame
pub(super) const SCANLINES_PER_FRAME: u16 = 262;

/// Total PPU ticks in one frame: 262 x 341 = 89342
pub const TICKS_PER_FRAME: u64 = SCANLINES_PER_FRAME as u64 * CYCLES_PER_SCANLINE as u64;

/// Last visible scanline
pub(super) const LAST_VISIBLE_SCANLINE: u16 = 239;

/// Scanline on which vblank begins (at cycle 1)
pub(super) const VBLANK_SCANLINE: u16 = 241;

/// Pre-render scanline (equivalently -1)
pub(super) const PRERENDER_SCANLINE: u16 = 261;

// ========================================
// Status register bits
// ========================================

pub(super) const STATUS_SPRITE_OVERFLOW: u8 = 0x20;
pub(super) const STATUS_SPRITE_ZERO_HIT: u8 = 0x40;
pub(super) const STATUS_VBLANK: u8 = 0x80;

// ========================================
// Control register bits
// ========================================

pub(super) const CTRL_NAMETABLE: u8 = 0x03;
pub(super) const CTRL_INCREMENT_32: u8 = 0x04;
pub(super) const CTRL_SPRITE_PATTERN: u8 = 0x08;
pub(super) const CTRL_BACKGROUND_PATTERN: u8 = 0x10;
pub(super) const CTRL_SPRITE_8X16: u8 = 0x20;
pub(super) const CTRL_NMI_ENABLE: u8 = 0x80;

// ========================================
// Mask register bits
// ========================================

pub(super) const MASK_BACKGROUND_LEFT: u8 = 0x02;
pub(super) const MASK_SPRITES_LEFT: u8 = 0x04;
pub(super) const MASK_SHOW_BACKGROUND: u8 = 0x08;
pub(super) const MASK_SHOW_SPRITES: u8 = 0x10;
