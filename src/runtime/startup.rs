use std::io::{BufRead, Write};
use std::path::Path;

use crate::app::Project;
use crate::persist::Format;

use super::console::Console;

/// Load the project file named on the command line, if any.
///
/// A file that cannot be loaded is reported and the session starts with an
/// empty catalog.
pub fn open_project<R: BufRead, W: Write>(
    project: &mut Project,
    path: &Path,
    console: &mut Console<R, W>,
) -> std::io::Result<()> {
    let result = Format::from_path(path).and_then(|format| project.load(format, path));
    match result {
        Ok(summary) => console.success(format!(
            "Loaded {} track(s) from {}.",
            summary.loaded,
            path.display()
        )),
        Err(e) => console.error(e),
    }
}
