// nesvm - headless runner for the NES core
//
// Loads an iNES image, runs a number of frames (optionally tracing every
// instruction in nestest format) and prints the resulting machine state.
// Useful for regression runs and for eyeballing ROM behaviour without a
// front-end.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use colored::Colorize;

use nes_vm::emulator::{Emulator, RunnerConfig};
use nes_vm::Vm;

#[derive(Parser)]
#[command(name = "nesvm", version, about = "Headless NES core runner")]
struct Args {
    /// Path to an iNES ROM image
    rom: PathBuf,

    /// Number of frames to run
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Force the reset vector (hex, e.g. C000) before running
    #[arg(long, value_parser = parse_hex_u16)]
    reset_vector: Option<u16>,

    /// Print a nestest-format trace line per instruction
    #[arg(long)]
    trace: bool,

    /// Stop tracing after this many instructions (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    trace_limit: u64,

    /// Dump the PRG-space disassembly instead of running
    #[arg(long)]
    disassemble: bool,
}

fn parse_hex_u16(value: &str) -> Result<u16, String> {
    let trimmed = value.trim_start_matches("0x").trim_start_matches('$');
    u16::from_str_radix(trimmed, 16).map_err(|e| format!("invalid hex address: {}", e))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut emulator = Emulator::with_config(RunnerConfig::load_or_default());
    emulator
        .load_rom_file(&args.rom)
        .map_err(|e| anyhow!("{}", e))
        .with_context(|| format!("failed to load {}", args.rom.display()))?;

    if let Some(vector) = args.reset_vector {
        emulator.vm_mut().force_set_reset_vector(vector);
    }

    if args.disassemble {
        for (addr, line) in emulator.vm_mut().peek_disassembly() {
            println!("${:04X}  {}", addr, line);
        }
        return Ok(());
    }

    let config = emulator.config();
    let trace = args.trace || config.trace.enabled;
    let trace_limit = if args.trace_limit > 0 {
        args.trace_limit
    } else {
        config.trace.limit
    };

    if trace {
        run_traced(emulator.vm_mut(), args.frames, trace_limit);
    } else {
        emulator.run_frames(args.frames);
    }

    print_summary(emulator.vm(), args.frames);
    Ok(())
}

/// Step instruction by instruction so every executed opcode gets a line
fn run_traced(vm: &mut Vm, frames: u32, limit: u64) {
    let mut printed = 0u64;
    for _ in 0..frames {
        loop {
            if limit == 0 || printed < limit {
                println!("{}", vm.trace_line());
                printed += 1;
            }
            vm.step();
            if !vm.bus().ppu().frame_complete() {
                continue;
            }
            vm.bus_mut().ppu_mut().clear_frame_complete();
            break;
        }
    }
}

fn print_summary(vm: &Vm, frames: u32) {
    let cpu = vm.peek_cpu();

    println!("{}", format!("ran {} frame(s)", frames).green().bold());
    println!("  PC: ${:04X}", cpu.pc);
    println!("   A: ${:02X}  X: ${:02X}  Y: ${:02X}", cpu.a, cpu.x, cpu.y);
    println!("  SP: ${:02X}   P: ${:02X}", cpu.sp, cpu.p);
    println!("  cycles: {}", cpu.cycles);
    println!("  ppu ticks: {}", vm.bus().ppu().ticks());
}
