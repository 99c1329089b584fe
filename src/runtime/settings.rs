use tracing::warn;

use crate::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid preferences, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Preferences are optional; failures should not prevent the run.
            warn!("failed to load preferences, using defaults: {e}");
            config::Settings::default()
        }
    }
}
