use crate::config::Settings;

/// The settings this run uses, plus why the configured ones were set aside.
pub struct StartupSettings {
    pub settings: Settings,
    pub fallback: Option<String>,
}

/// Load the layered config. Unreadable or invalid settings never stop
/// startup: the defaults are used and `fallback` says why.
pub fn load_settings() -> StartupSettings {
    settle(Settings::load())
}

pub(super) fn settle(loaded: Result<Settings, ::config::ConfigError>) -> StartupSettings {
    let reason = match loaded {
        Ok(settings) => match settings.validate() {
            Ok(()) => {
                return StartupSettings {
                    settings,
                    fallback: None,
                };
            }
            Err(msg) => format!("invalid config: {msg}"),
        },
        Err(e) => format!("failed to load config: {e}"),
    };

    StartupSettings {
        settings: Settings::default(),
        fallback: Some(reason),
    }
}
