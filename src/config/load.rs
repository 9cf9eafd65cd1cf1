use std::{env, path::Path, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `TRACKSPLIT__`), and falls back to struct defaults.
impl Settings {
    /// Load settings, reading `explicit` instead of the default location when given.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let config_path = explicit.map(Path::to_path_buf).or_else(resolve_config_path);

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            // A file named on the command line must exist; the default one is optional.
            builder = builder
                .add_source(::config::File::from(path.as_path()).required(explicit.is_some()));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TRACKSPLIT")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.tools.ffmpeg_path {
            if path.as_os_str().is_empty() {
                return Err("tools.ffmpeg_path must not be empty".to_string());
            }
            if path.is_dir() {
                return Err(format!(
                    "tools.ffmpeg_path '{}' is a directory, not an executable",
                    path.display()
                ));
            }
        }
        Ok(())
    }
}

/// Resolve the config path from `TRACKSPLIT_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TRACKSPLIT_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/tracksplit/config.toml`
/// or `~/.config/tracksplit/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("tracksplit").join("config.toml"))
}
