// Emulator runner
//
// Thin host-side coordinator around the `Vm`: file loading, pause state
// and configuration. Front-ends that need more than the CLI offers can
// embed this instead of wiring the facade themselves.

mod config;

pub use config::{RunnerConfig, TraceConfig, VideoConfig};

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::vm::Vm;

/// A `Vm` plus the host-side odds and ends around it
pub struct Emulator {
    vm: Vm,
    config: RunnerConfig,
    rom_path: Option<PathBuf>,
    paused: bool,
}

impl Emulator {
    pub fn new() -> Self {
        Emulator {
            vm: Vm::new(),
            config: RunnerConfig::load_or_default(),
            rom_path: None,
            paused: false,
        }
    }

    pub fn with_config(config: RunnerConfig) -> Self {
        Emulator {
            vm: Vm::new(),
            config,
            rom_path: None,
            paused: false,
        }
    }

    /// Read an iNES file from disk and load it into the VM
    pub fn load_rom_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Box<dyn Error>> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        self.vm.load_rom(&bytes)?;
        self.rom_path = Some(path.to_path_buf());
        self.paused = false;
        Ok(())
    }

    /// Run whole frames, unless paused
    pub fn run_frames(&mut self, frames: u32) {
        if self.paused {
            return;
        }
        for _ in 0..frames {
            self.vm.step_frame();
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn vm(&self) -> &Vm {
        &self.vm
    }

    pub fn vm_mut(&mut self) -> &mut Vm {
        &mut self.vm
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
