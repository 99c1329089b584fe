use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_cmus_notify_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("CMUS_NOTIFY_CONFIG_PATH", "/tmp/cmus-notify-test.json");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/cmus-notify-test.json")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("cmus")
            .join("cmus-notify.json")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("cmus")
            .join("cmus-notify.json")
    );
}

#[test]
fn defaults_match_the_documented_behavior() {
    let s = Settings::default();
    assert_eq!(s.notify.mode, DisplayMode::ClearThenShow);
    assert_eq!(s.notify.timeout_ms, -1);
    assert_eq!(s.icons.local_fallback, "audio-x-generic");
    assert_eq!(s.icons.stream_fallback, "network-server");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_preferences_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("cmus-notify.json");
    std::fs::write(
        &cfg_path,
        r#"
{
    "notify": { "mode": 3, "timeout_ms": 5000 },
    "icons": { "stream_fallback": "network-wireless" },
    "unknown_section": { "ignored": true }
}
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CMUS_NOTIFY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("CMUS_NOTIFY__NOTIFY__MODE");

    let s = Settings::load().unwrap();
    assert_eq!(s.notify.mode, DisplayMode::Accumulate);
    assert_eq!(s.notify.timeout_ms, 5000);
    assert_eq!(s.icons.stream_fallback, "network-wireless");
    // Untouched sections keep their defaults.
    assert_eq!(s.icons.local_fallback, "audio-x-generic");
}

#[test]
fn settings_load_uses_defaults_when_the_file_is_missing() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set(
        "CMUS_NOTIFY_CONFIG_PATH",
        "/tmp/definitely-missing-cmus-notify.json",
    );
    let _g2 = EnvGuard::remove("CMUS_NOTIFY__NOTIFY__MODE");

    let s = Settings::load().unwrap();
    assert_eq!(s.notify.mode, DisplayMode::ClearThenShow);
    assert_eq!(s.notify.timeout_ms, -1);
}

#[test]
fn settings_env_overrides_preferences_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("cmus-notify.json");
    std::fs::write(&cfg_path, r#"{ "notify": { "mode": 2 } }"#).unwrap();

    let _g1 = EnvGuard::set("CMUS_NOTIFY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("CMUS_NOTIFY__NOTIFY__MODE", "1");

    let s = Settings::load().unwrap();
    assert_eq!(s.notify.mode, DisplayMode::Replace);
}

#[test]
fn settings_load_reports_out_of_range_mode() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("cmus-notify.json");
    std::fs::write(&cfg_path, r#"{ "notify": { "mode": 7 } }"#).unwrap();

    let _g1 = EnvGuard::set("CMUS_NOTIFY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("CMUS_NOTIFY__NOTIFY__MODE");

    assert!(Settings::load().is_err());
}

#[test]
fn settings_load_reports_malformed_json() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("cmus-notify.json");
    std::fs::write(&cfg_path, "{ not json").unwrap();

    let _g1 = EnvGuard::set("CMUS_NOTIFY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("CMUS_NOTIFY__NOTIFY__MODE");

    assert!(Settings::load().is_err());
}

#[test]
fn validate_rejects_timeout_below_minus_one() {
    let mut s = Settings::default();
    s.notify.timeout_ms = -2;
    assert!(s.validate().is_err());
}

#[test]
fn display_mode_try_from_covers_the_full_range() {
    assert_eq!(DisplayMode::try_from(0u8), Ok(DisplayMode::Disabled));
    assert_eq!(DisplayMode::try_from(1u8), Ok(DisplayMode::Replace));
    assert_eq!(DisplayMode::try_from(2u8), Ok(DisplayMode::ClearThenShow));
    assert_eq!(DisplayMode::try_from(3u8), Ok(DisplayMode::Accumulate));
    assert!(DisplayMode::try_from(4u8).is_err());
}
