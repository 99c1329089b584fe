use std::{env, path::PathBuf};

use super::schema::Settings;

/// Preference loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `CMUS_NOTIFY__`),
/// then the optional JSON preferences file and falls back to struct defaults.
impl Settings {
    /// Load preferences from environment and the optional preferences file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(
                ::config::File::from(path.as_path())
                    .format(::config::FileFormat::Json)
                    .required(false),
            );
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("CMUS_NOTIFY")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded preferences.
    pub fn validate(&self) -> Result<(), String> {
        if self.notify.timeout_ms < -1 {
            return Err("notify.timeout_ms must be >= -1".to_string());
        }
        Ok(())
    }
}

/// Resolve the preferences path from `CMUS_NOTIFY_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("CMUS_NOTIFY_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default path under `$XDG_CONFIG_HOME/cmus/cmus-notify.json`
/// or `~/.config/cmus/cmus-notify.json` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("cmus").join("cmus-notify.json"))
}
