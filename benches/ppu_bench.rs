// PPU benchmarks: raw tick throughput and whole frames through the VM.

use criterion::{criterion_group, criterion_main, Criterion};
use nes_vm::ppu::constants::TICKS_PER_FRAME;
use nes_vm::{Ppu, Vm};
use std::hint::black_box;

fn bench_ppu_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_rendering");
    group.sample_size(20);

    group.bench_function("full_frame_rendering_enabled", |b| {
        let mut ppu = Ppu::new();
        // Show background and sprites, including the left columns
        ppu.cpu_write(0x2001, 0b0001_1110, None);

        b.iter(|| {
            for _ in 0..TICKS_PER_FRAME {
                ppu.clock(None);
            }
            black_box(ppu.frame());
        });
    });

    group.bench_function("full_frame_rendering_disabled", |b| {
        let mut ppu = Ppu::new();

        b.iter(|| {
            for _ in 0..TICKS_PER_FRAME {
                ppu.clock(None);
            }
            black_box(ppu.frame());
        });
    });

    group.finish();
}

fn bench_vm_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("vm_frames");
    group.sample_size(20);

    group.bench_function("step_frame_idle_loop", |b| {
        let mut vm = Vm::new();
        vm.load_program(&[0x4C, 0x00, 0x00], 0x0000);

        b.iter(|| {
            vm.step_frame();
            black_box(vm.framebuffer());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ppu_ticks, bench_vm_frames);
criterion_main!(benches);
