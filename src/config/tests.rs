use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
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
fn resolve_config_path_prefers_mixdesk_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MIXDESK_CONFIG_PATH", "/tmp/mixdesk-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/mixdesk-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("mixdesk")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("mixdesk")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file_and_parse_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[project]
default_file = "session"
load_policy = "update"
pretty_json = false

[display]
track_fields = ["duration", "title"]
separator = " | "
duration_style = "mm:ss"

[ui]
color = false

[log]
level = "debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MIXDESK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MIXDESK__PROJECT__LOAD_POLICY");

    let s = Settings::load().unwrap();
    assert_eq!(s.project.default_file, "session");
    assert_eq!(s.project.load_policy, LoadPolicy::Merge);
    assert!(!s.project.pretty_json);
    assert_eq!(
        s.display.track_fields,
        vec![TrackField::Duration, TrackField::Title]
    );
    assert_eq!(s.display.separator, " | ");
    assert_eq!(s.display.duration_style, DurationStyle::Clock);
    assert!(!s.ui.color);
    assert_eq!(s.log.level, "debug");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[project]
load_policy = "replace"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MIXDESK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("MIXDESK__PROJECT__LOAD_POLICY", "merge");

    let s = Settings::load().unwrap();
    assert_eq!(s.project.load_policy, LoadPolicy::Merge);
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let _g1 = EnvGuard::set(
        "MIXDESK_CONFIG_PATH",
        dir.path().join("absent.toml").to_str().unwrap(),
    );

    let s = Settings::load().unwrap();
    assert_eq!(s.project.load_policy, LoadPolicy::Replace);
    assert_eq!(s.project.default_file, "project");
    assert!(s.ui.color);
}

#[test]
fn validate_rejects_empty_track_fields_and_blank_default_file() {
    let mut s = Settings::default();
    s.display.track_fields.clear();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.project.default_file = "  ".to_string();
    assert!(s.validate().is_err());
}

#[test]
fn to_toml_round_trips_through_the_schema() {
    let mut s = Settings::default();
    s.display.duration_style = DurationStyle::Clock;
    let text = s.to_toml().unwrap();

    let parsed: Settings = toml::from_str(&text).unwrap();
    assert_eq!(parsed.display.duration_style, DurationStyle::Clock);
    assert_eq!(parsed.project.load_policy, LoadPolicy::Replace);
}
