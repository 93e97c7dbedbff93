// CPU-level end-to-end regressions: straight-line programs executed
// through the full VM, checked against known-good register and memory
// outcomes.

mod common;

use nes_vm::Vm;

/// Multiply 10 by 3 with an ADC loop and store the result.
///
/// LDX #$0A; STX $00; LDX #$03; STX $01; LDY $00; LDA #$00; CLC;
/// loop: ADC $01; DEY; BNE loop; STA $02; NOP; NOP; NOP
const MULTIPLY_PROGRAM: [u8; 28] = [
    0xA2, 0x0A, 0x8E, 0x00, 0x00, 0xA2, 0x03, 0x8E, 0x01, 0x00, 0xAC, 0x00, 0x00, 0xA9, 0x00,
    0x18, 0x6D, 0x01, 0x00, 0x88, 0xD0, 0xFA, 0x8D, 0x02, 0x00, 0xEA, 0xEA, 0xEA,
];

#[test]
fn multiply_loop_regression() {
    let mut vm = Vm::new();
    vm.load_program(&MULTIPLY_PROGRAM, 0x0000);

    // 7 setup instructions, 10 loop iterations of 3, then the store
    for _ in 0..38 {
        vm.step();
    }

    let cpu = vm.peek_cpu();
    assert_eq!(cpu.pc, 0x0019);
    assert_eq!(cpu.a, 0x1E);
    assert_eq!(cpu.x, 0x03);
    assert_eq!(cpu.y, 0x00);
    assert_eq!(cpu.sp, 0xFD);
    assert_eq!(cpu.p, 0x26); // Z, I, U

    let ram = vm.peek_ram(0x0000, 0x001F);
    assert_eq!(ram[0x00], 0x0A);
    assert_eq!(ram[0x01], 0x03);
    assert_eq!(ram[0x02], 0x1E);

    // The untouched tail of the program is still in place
    assert_eq!(ram[0x05], 0xA2);
    assert_eq!(ram[0x06], 0x03);
    assert_eq!(ram[0x16], 0x8D);
    assert_eq!(ram[0x19], 0xEA);
    assert_eq!(ram[0x1C], 0x00);
}

#[test]
fn reset_determinism() {
    let mut vm = Vm::new();
    let mut prg = vec![0u8; common::PRG_BANK_SIZE];
    prg[0x3FFC] = 0x00;
    prg[0x3FFD] = 0xC0;
    let rom = common::build_nrom(&prg, &[0; common::CHR_BANK_SIZE], false);

    vm.load_rom(&rom).unwrap();

    let cpu = vm.peek_cpu();
    assert_eq!(cpu.pc, 0xC000);
    assert_eq!(cpu.sp, 0xFD);
    assert_eq!(cpu.p, 0x24);
    assert_eq!(cpu.a, 0);
    assert_eq!(cpu.x, 0);
    assert_eq!(cpu.y, 0);
    assert_eq!(cpu.cycles, 7);

    // Resetting again lands in exactly the same state
    vm.step();
    vm.reset();
    assert_eq!(vm.peek_cpu(), cpu);
}

#[test]
fn indirect_jmp_page_wrap_bug() {
    let mut vm = Vm::new();
    // JMP ($02FF): low byte from $02FF, high byte from $0200 (not $0300)
    vm.load_program(&[0x6C, 0xFF, 0x02], 0x0000);
    vm.bus_mut().cpu_write(0x02FF, 0x34);
    vm.bus_mut().cpu_write(0x0200, 0x06);
    vm.bus_mut().cpu_write(0x0300, 0x99);

    vm.step();
    assert_eq!(vm.peek_cpu().pc, 0x0634);
}

#[test]
fn php_plp_preserves_flags() {
    let mut vm = Vm::new();
    // SEC; SED; PHP; CLC; CLD; PLP
    vm.load_program(&[0x38, 0xF8, 0x08, 0x18, 0xD8, 0x28], 0x0000);

    for _ in 0..3 {
        vm.step();
    }
    let pushed_p = vm.peek_cpu().p;

    for _ in 0..3 {
        vm.step();
    }
    // Restored exactly; B stays 0 and U stays 1 in the live register
    assert_eq!(vm.peek_cpu().p, pushed_p);
    assert_eq!(vm.peek_cpu().p & 0x30, 0x20);
}

#[test]
fn pha_pla_roundtrip_updates_nz() {
    let mut vm = Vm::new();
    // LDA #$80; PHA; LDA #$01; PLA
    vm.load_program(&[0xA9, 0x80, 0x48, 0xA9, 0x01, 0x68], 0x0000);

    for _ in 0..4 {
        vm.step();
    }

    let cpu = vm.peek_cpu();
    assert_eq!(cpu.a, 0x80);
    assert_ne!(cpu.p & 0x80, 0); // N from the pulled value
    assert_eq!(cpu.p & 0x02, 0); // Z clear
}

#[test]
fn brk_vectors_through_fffe() {
    let mut vm = Vm::new();
    // Reset code: BRK (plus padding); IRQ handler parked at $C100
    let mut prg = vec![0u8; common::PRG_BANK_SIZE];
    prg[0x0000] = 0x00; // BRK at $C000
    prg[0x0100] = 0x4C; // JMP $C100
    prg[0x0101] = 0x00;
    prg[0x0102] = 0xC1;
    prg[0x3FFC] = 0x00;
    prg[0x3FFD] = 0xC0;
    prg[0x3FFE] = 0x00; // IRQ/BRK vector -> $C100
    prg[0x3FFF] = 0xC1;
    let rom = common::build_nrom(&prg, &[0; common::CHR_BANK_SIZE], false);

    vm.load_rom(&rom).unwrap();
    vm.step();

    let cpu = vm.peek_cpu();
    assert_eq!(cpu.pc, 0xC100);
    assert_ne!(cpu.p & 0x04, 0); // I set

    // Return address on the stack is BRK + 2
    let stack = vm.peek_ram(0x01FB, 0x01FD);
    assert_ne!(stack[0] & 0x10, 0); // pushed copy carries B
    assert_eq!(stack[1], 0x02);
    assert_eq!(stack[2], 0xC0);
}
