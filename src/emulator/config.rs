// Runner configuration
//
// Host-side settings persisted as TOML next to the binary. None of this
// reaches the core: the VM stays deterministic regardless of what the
// runner is configured to display.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Default configuration file name
const CONFIG_FILE: &str = "nesvm.toml";

/// Settings for the `nesvm` runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Video hints passed on to front-ends
    pub video: VideoConfig,

    /// Trace output defaults
    pub trace: TraceConfig,
}

/// Video hints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Integer window scale (1-4)
    pub scale: u32,

    /// Target frame rate; NTSC is 60
    pub fps: u32,
}

/// Trace output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Print a trace line per instruction
    pub enabled: bool,

    /// Stop tracing after this many lines (0 = unlimited)
    pub limit: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            video: VideoConfig { scale: 3, fps: 60 },
            trace: TraceConfig {
                enabled: false,
                limit: 0,
            },
        }
    }
}

impl RunnerConfig {
    /// Load the configuration from the default path; a missing or
    /// malformed file yields the defaults
    pub fn load_or_default() -> Self {
        Self::load_from(Path::new(CONFIG_FILE)).unwrap_or_default()
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Option<Self> {
        let text = fs::read_to_string(path).ok()?;
        toml::from_str(&text).ok()
    }

    /// Persist to the default path
    pub fn save(&self) -> io::Result<()> {
        let text = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::default();
        assert_eq!(config.video.scale, 3);
        assert_eq!(config.video.fps, 60);
        assert!(!config.trace.enabled);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = RunnerConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: RunnerConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.video.scale, config.video.scale);
        assert_eq!(parsed.trace.limit, config.trace.limit);
    }

    #[test]
    fn test_missing_file_yields_none() {
        assert!(RunnerConfig::load_from(Path::new("does-not-exist.toml")).is_none());
    }
}
