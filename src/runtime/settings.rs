use std::path::Path;

use tracing::warn;

use crate::config;

pub fn load_settings(explicit: Option<&Path>) -> config::Settings {
    match config::Settings::load(explicit) {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not stop a split.
            warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
