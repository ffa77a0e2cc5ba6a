use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::app::Project;
use crate::config::DisplaySettings;
use crate::error::EditorError;
use crate::library::{MIX_TRACK_ID, track_line};
use crate::persist::Format;

use super::console::{Console, PromptError};

/// Menu entries, in the order they are listed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddTrack,
    RemoveTrack,
    ApplyEffects,
    Save(Format),
    Load(Format),
    ListTracks,
    CreatePlaylist,
    AddToPlaylist,
    RemoveFromPlaylist,
    ViewPlaylist,
    CreateMix,
    Exit,
}

const MENU: [(MenuChoice, &str); 14] = [
    (MenuChoice::AddTrack, "Add track"),
    (MenuChoice::RemoveTrack, "Remove track"),
    (MenuChoice::ApplyEffects, "Apply effects to a track"),
    (MenuChoice::Save(Format::Json), "Save project (JSON)"),
    (MenuChoice::Save(Format::Xml), "Save project (XML)"),
    (MenuChoice::Load(Format::Json), "Load project (JSON)"),
    (MenuChoice::Load(Format::Xml), "Load project (XML)"),
    (MenuChoice::ListTracks, "List all tracks"),
    (MenuChoice::CreatePlaylist, "Create playlist"),
    (MenuChoice::AddToPlaylist, "Add track to playlist"),
    (MenuChoice::RemoveFromPlaylist, "Remove track from playlist"),
    (MenuChoice::ViewPlaylist, "View playlist"),
    (MenuChoice::CreateMix, "Create mix"),
    (MenuChoice::Exit, "Exit"),
];

impl MenuChoice {
    /// Parse the 1-based menu number typed by the user.
    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        MENU.get(n.checked_sub(1)?).map(|(choice, _)| *choice)
    }
}

fn menu_text() -> String {
    let mut lines = vec![String::new(), "Audio editor menu:".to_string()];
    lines.extend(
        MENU.iter()
            .enumerate()
            .map(|(i, (_, label))| format!("{}. {label}", i + 1)),
    );
    lines.join("\n")
}

/// Why a menu action stopped early.
#[derive(Error, Debug)]
enum ActionError {
    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("{field} must be {expected}, got {input:?}")]
    InvalidInput {
        field: &'static str,
        expected: &'static str,
        input: String,
    },

    #[error("input must be valid UTF-8, got {input:?}")]
    NotUtf8 { input: String },

    #[error("input closed")]
    Eof,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<PromptError> for ActionError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::NotUtf8(input) => Self::NotUtf8 { input },
            PromptError::Io(e) => Self::Io(e),
        }
    }
}

type ActionResult = Result<(), ActionError>;

fn ask<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    text: &str,
) -> Result<String, ActionError> {
    console.prompt(text)?.ok_or(ActionError::Eof)
}

fn ask_parsed<T: FromStr, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    text: &str,
    field: &'static str,
    expected: &'static str,
) -> Result<T, ActionError> {
    let input = ask(console, text)?;
    input
        .trim()
        .parse()
        .map_err(|_| ActionError::InvalidInput {
            field,
            expected,
            input,
        })
}

fn ask_track_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    text: &str,
) -> Result<i64, ActionError> {
    ask_parsed(console, text, "track ID", "a whole number")
}

/// Run the menu until the user exits or input ends.
///
/// Editor errors and bad input are reported and the loop carries on; only a
/// failure to write to the terminal ends it with an error.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    project: &mut Project,
    display: &DisplaySettings,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        console.say(menu_text())?;
        let input = match console.prompt("Enter your choice: ") {
            Ok(Some(input)) => input,
            Ok(None) => break,
            Err(PromptError::NotUtf8(_)) => {
                console.notice("Invalid choice. Please try again.")?;
                continue;
            }
            Err(PromptError::Io(e)) => return Err(e.into()),
        };

        let Some(choice) = MenuChoice::parse(&input) else {
            console.notice("Invalid choice. Please try again.")?;
            continue;
        };
        if choice == MenuChoice::Exit {
            console.say("Exiting.")?;
            break;
        }

        match handle_choice(choice, console, project, display) {
            Ok(()) => {}
            Err(ActionError::Eof) => break,
            Err(ActionError::Io(e)) => return Err(e.into()),
            Err(e) => console.error(e)?,
        }
    }

    Ok(())
}

fn handle_choice<R: BufRead, W: Write>(
    choice: MenuChoice,
    console: &mut Console<R, W>,
    project: &mut Project,
    display: &DisplaySettings,
) -> ActionResult {
    match choice {
        MenuChoice::AddTrack => add_track(console, project, display),
        MenuChoice::RemoveTrack => {
            let id = ask_track_id(console, "Track ID to remove: ")?;
            project.remove_track(id)?;
            console.success(format!("Track {id} removed."))?;
            Ok(())
        }
        MenuChoice::ApplyEffects => apply_effects(console, project),
        MenuChoice::Save(format) => {
            let path = ask_path(console, project, format, "save")?;
            project.save(format, &path)?;
            console.success(format!("Project saved to {format} file: {}", path.display()))?;
            Ok(())
        }
        MenuChoice::Load(format) => {
            let path = ask_path(console, project, format, "load")?;
            let summary = project.load(format, &path)?;
            console.success(format!(
                "Loaded {} track(s) from {}; catalog now holds {}.",
                summary.loaded,
                path.display(),
                summary.total
            ))?;
            Ok(())
        }
        MenuChoice::ListTracks => {
            if project.catalog.is_empty() {
                console.say("No saved tracks.")?;
            } else {
                console.say("All tracks:")?;
                for track in project.catalog.iter() {
                    console.say(track_line(track, display))?;
                }
            }
            Ok(())
        }
        MenuChoice::CreatePlaylist => {
            let name = ask(console, "New playlist name: ")?;
            project.create_playlist(&name)?;
            console.success(format!("Playlist '{name}' created."))?;
            Ok(())
        }
        MenuChoice::AddToPlaylist => {
            let name = ask(console, "Playlist name: ")?;
            project.playlist(&name)?;
            let id = ask_track_id(console, "Track ID to add: ")?;
            if project.add_to_playlist(&name, id)? {
                console.success(format!("Track {id} added to playlist '{name}'."))?;
            } else {
                console.notice(format!("Track {id} is already in playlist '{name}'."))?;
            }
            Ok(())
        }
        MenuChoice::RemoveFromPlaylist => {
            let name = ask(console, "Playlist name: ")?;
            project.playlist(&name)?;
            let id = ask_track_id(console, "Track ID to remove from the playlist: ")?;
            project.remove_from_playlist(&name, id)?;
            console.success(format!("Track {id} removed from playlist '{name}'."))?;
            Ok(())
        }
        MenuChoice::ViewPlaylist => {
            let name = ask(console, "Playlist name: ")?;
            let text = project.playlist(&name)?.render(display);
            console.say(text)?;
            Ok(())
        }
        MenuChoice::CreateMix => create_mix(console, project, display),
        MenuChoice::Exit => Ok(()),
    }
}

fn add_track<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    project: &mut Project,
    display: &DisplaySettings,
) -> ActionResult {
    let id = ask_track_id(console, "Track ID: ")?;
    let title = ask(console, "Track title: ")?;
    let duration: f64 = ask_parsed(
        console,
        "Track duration (seconds): ",
        "duration",
        "a number of seconds",
    )?;
    let line = track_line(project.add_track(id, &title, duration)?, display);
    console.success(format!("Added {line}"))?;
    Ok(())
}

fn apply_effects<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    project: &Project,
) -> ActionResult {
    let mut names = Vec::new();
    loop {
        let name = ask(console, "Effect name (or 'end' to finish): ")?;
        let name = name.trim();
        if name.eq_ignore_ascii_case("end") {
            break;
        }
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }

    let id = ask_track_id(console, "Track ID to apply the effect chain to: ")?;
    for ack in project.apply_effects(names.as_slice(), id)? {
        console.say(format!("Applied '{}' to track {}.", ack.effect, ack.track_id))?;
    }
    console.success(format!("All effects applied to track {id}."))?;
    Ok(())
}

/// Ask for a file name; a blank answer picks the configured default.
fn ask_path<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    project: &Project,
    format: Format,
    verb: &str,
) -> Result<PathBuf, ActionError> {
    let default = project.default_path(format);
    let answer = ask(
        console,
        &format!(
            "File name to {verb} ({format}, blank for {}): ",
            default.display()
        ),
    )?;
    let answer = answer.trim();
    Ok(if answer.is_empty() {
        default
    } else {
        PathBuf::from(answer)
    })
}

fn create_mix<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    project: &mut Project,
    display: &DisplaySettings,
) -> ActionResult {
    project.mixer.clear();
    loop {
        let id = ask_track_id(
            console,
            &format!("Track ID to add to the mix (or {MIX_TRACK_ID} to finish): "),
        )?;
        if id == MIX_TRACK_ID {
            break;
        }
        project.queue_for_mix(id)?;
    }

    let title = ask(console, "Title for the new mix: ")?;
    let mixed = project.mix(&title)?;
    console.success(format!("Created new mix: {}", track_line(&mixed, display)))?;

    let answer = ask(console, "Catalog ID to store the mix under (blank to skip): ")?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(());
    }
    let id: i64 = answer.parse().map_err(|_| ActionError::InvalidInput {
        field: "track ID",
        expected: "a whole number",
        input: answer.to_string(),
    })?;
    project.store_mix(mixed, id)?;
    console.success(format!("Mix stored as track {id}."))?;
    Ok(())
}
