use serde::Deserialize;
use std::path::{Path, PathBuf};

use hilo_types::ui::UiOptions;

/// User configuration, loaded from `~/.hilo/config.toml`.
///
/// Every section is optional; a missing file or section means defaults.
#[derive(Debug, Default, Deserialize)]
pub struct HiloConfig {
    pub app: Option<UiOptions>,
    pub timing: Option<TimingConfig>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Real-time tunables, in milliseconds, plus the tick frequency that turns
/// them into tick counts.
///
/// ```toml
/// [timing]
/// tick_hz = 1000
/// debounce_ms = 20
/// show_result_ms = 2000
/// win_anim_ms = 4000
/// win_stats_ms = 3000
/// digit_dwell_ms = 1
/// anim_frame_ms = 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Controller ticks per second.
    pub tick_hz: u32,
    /// How long a raw level must hold before the debounced level follows.
    pub debounce_ms: u32,
    /// Low/high/win readout hold time.
    pub show_result_ms: u32,
    /// Victory sweep duration.
    pub win_anim_ms: u32,
    /// Attempts/target readout duration after the sweep.
    pub win_stats_ms: u32,
    /// Dwell per digit position of the multiplexer.
    pub digit_dwell_ms: u32,
    /// Duration of one sweep animation frame.
    pub anim_frame_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_hz: 1000,
            debounce_ms: 20,
            show_result_ms: 2000,
            win_anim_ms: 4000,
            win_stats_ms: 3000,
            digit_dwell_ms: 1,
            anim_frame_ms: 250,
        }
    }
}

/// Tick-count thresholds derived once at startup from [`TimingConfig`].
///
/// Each count is `round(ms * tick_hz / 1000)`, clamped to at least one tick
/// so a threshold can never be unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub debounce_ticks: u32,
    pub show_result_ticks: u32,
    pub win_anim_ticks: u32,
    pub win_stats_ticks: u32,
    pub dwell_ticks: u32,
    pub anim_frame_ticks: u32,
}

impl Timings {
    #[must_use]
    pub fn derive(config: &TimingConfig) -> Self {
        let hz = config.tick_hz;
        Self {
            debounce_ticks: ticks_for(config.debounce_ms, hz),
            show_result_ticks: ticks_for(config.show_result_ms, hz),
            win_anim_ticks: ticks_for(config.win_anim_ms, hz),
            win_stats_ticks: ticks_for(config.win_stats_ms, hz),
            dwell_ticks: ticks_for(config.digit_dwell_ms, hz),
            anim_frame_ticks: ticks_for(config.anim_frame_ms, hz),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::derive(&TimingConfig::default())
    }
}

fn ticks_for(duration_ms: u32, tick_hz: u32) -> u32 {
    let ticks = (u64::from(duration_ms) * u64::from(tick_hz) + 500) / 1000;
    (ticks as u32).max(1)
}

impl HiloConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        Self::load_path(&path)
    }

    /// Loads a config file at an explicit location; `Ok(None)` if absent.
    pub fn load_path(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app.unwrap_or_default()
    }

    #[must_use]
    pub fn timing(&self) -> TimingConfig {
        self.timing.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".hilo").join("config.toml"))
}
