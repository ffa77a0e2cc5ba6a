use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/mixdesk/config.toml` or `~/.config/mixdesk/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MIXDESK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub project: ProjectSettings,
    pub display: DisplaySettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectSettings {
    /// Path stem used when a save/load filename prompt is left blank.
    /// The format's extension is appended (`project` -> `project.json`).
    pub default_file: String,
    /// What loading a project does to the tracks already in the catalog.
    pub load_policy: LoadPolicy,
    /// Indent JSON output.
    pub pretty_json: bool,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            default_file: "project".to_string(),
            load_policy: LoadPolicy::Replace,
            pretty_json: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadPolicy {
    /// Loaded tracks replace the whole catalog.
    Replace,
    /// Loaded tracks are inserted over the existing catalog; matching ids are overwritten.
    #[serde(alias = "update")]
    Merge,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Which track fields follow the `Track <id>:` prefix, and in what order.
    ///
    /// Example: ["title", "duration"] -> "Track 1: Intro - 10s"
    pub track_fields: Vec<TrackField>,
    /// Separator used to join `track_fields`.
    pub separator: String,
    /// How durations are written.
    pub duration_style: DurationStyle,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            track_fields: vec![TrackField::Title, TrackField::Duration],
            separator: " - ".to_string(),
            duration_style: DurationStyle::Seconds,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackField {
    Title,
    Duration,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationStyle {
    /// Raw seconds, e.g. `20.5s`.
    #[serde(alias = "secs")]
    Seconds,
    /// Minutes and seconds, e.g. `00:20`.
    #[serde(alias = "mmss", alias = "mm:ss")]
    Clock,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Color prompts, confirmations and errors.
    pub color: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Tracing filter used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
