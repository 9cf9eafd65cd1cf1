use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tracksplit/config.toml` or `~/.config/tracksplit/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKSPLIT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tools: ToolSettings,
    pub split: SplitSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Explicit ffmpeg binary. When unset or missing, ffmpeg is looked up on `PATH`.
    pub ffmpeg_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SplitSettings {
    /// Copy streams instead of re-encoding (`-c copy`).
    pub copy_codec: bool,
    /// Overwrite existing output files (`-y`); when false ffmpeg refuses (`-n`).
    pub overwrite: bool,
    /// Write title/artist/album tags into each extracted track.
    pub write_tags: bool,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            copy_codec: true,
            overwrite: true,
            write_tags: true,
        }
    }
}
