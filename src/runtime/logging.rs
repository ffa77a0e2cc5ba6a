use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Install the stderr subscriber. `RUST_LOG` wins over `log.level`.
pub fn init(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    // Only fails when a global subscriber already exists; that one stays.
    if let Err(e) = installed {
        tracing::debug!(error = %e, "log subscriber already installed");
    }
}
