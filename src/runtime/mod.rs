use std::env;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::app::Project;

mod console;
mod event_loop;
mod logging;
mod settings;
mod startup;

pub use console::{Console, PromptError};
pub use event_loop::MenuChoice;

/// Entry point: `mixdesk [--print-config] [PROJECT_FILE]`.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings::StartupSettings { settings, fallback } = settings::load_settings();

    let mut print_config = false;
    let mut project_file = None;
    for arg in env::args().skip(1) {
        if arg == "--print-config" {
            print_config = true;
        } else if project_file.is_none() {
            project_file = Some(arg);
        }
    }

    logging::init(&settings.log);
    if let Some(reason) = fallback {
        warn!(%reason, "using default settings");
    }

    if print_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    let mut project = Project::new(settings.project.clone());
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), settings.ui.color);

    if let Some(file) = project_file {
        startup::open_project(&mut project, Path::new(&file), &mut console)?;
    }

    event_loop::run(&mut console, &mut project, &settings.display)
}
