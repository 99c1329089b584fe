use std::path::PathBuf;

use serde::Deserialize;

/// Top-level preferences loaded from `cmus-notify.json`.
///
/// File format: JSON
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cmus/cmus-notify.json` or
/// `~/.config/cmus/cmus-notify.json`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CMUS_NOTIFY__`, `__` as nested separator)
/// 2) Preferences file (if present)
/// 3) Struct defaults
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub notify: NotifySettings,
    pub icons: IconSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notify: NotifySettings::default(),
            icons: IconSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotifySettings {
    /// Notification verbosity/replacement policy.
    pub mode: DisplayMode,
    /// Expire timeout handed to the notification server (milliseconds).
    /// `-1` keeps the server default, `0` never expires.
    pub timeout_ms: i32,
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            mode: DisplayMode::ClearThenShow,
            timeout_ms: -1,
        }
    }
}

/// Display mode controlling the notification verbosity:
/// `0` shows nothing, `1` replaces the previous notification, `2` clears the
/// old notification before showing the new one, `3` shows a new notification
/// for every status change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum DisplayMode {
    Disabled,
    Replace,
    ClearThenShow,
    Accumulate,
}

impl TryFrom<u8> for DisplayMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::Replace),
            2 => Ok(Self::ClearThenShow),
            3 => Ok(Self::Accumulate),
            other => Err(format!("notify.mode must be between 0 and 3, got {other}")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconSettings {
    /// Identity icon attached to every notification, when the file exists.
    pub app: PathBuf,
    /// Icon (theme name or path) shown when a track has no embedded cover.
    pub local_fallback: String,
    /// Icon (theme name or path) shown for network streams.
    pub stream_fallback: String,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            app: PathBuf::from("/usr/local/share/cmus-notify/cmus-icon.png"),
            local_fallback: "audio-x-generic".to_string(),
            stream_fallback: "network-server".to_string(),
        }
    }
}
