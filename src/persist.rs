//! Saving and loading the catalog as JSON or XML project files.
//!
//! Loading parses the whole file into a list of tracks before the caller
//! touches its catalog, so a failed load never leaves a half-applied state.
//! Saving overwrites the target in place: if the write fails partway the file
//! on disk is left in an unspecified state.

mod json;
mod xml;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::config::ProjectSettings;
use crate::error::{BoxedCause, EditorError, FileOperation, Result};
use crate::library::{Catalog, Track};

/// On-disk project file format.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    /// Pick the format matching `path`'s extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        ext.parse()
    }
}

impl FromStr for Format {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            _ => Err(EditorError::InvalidFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Xml => f.write_str("XML"),
        }
    }
}

/// Structural problems found while decoding a project file.
#[derive(Error, Debug, PartialEq)]
pub enum MalformedProject {
    #[error("expected <{expected}> but found <{found}>")]
    UnexpectedElement { expected: &'static str, found: String },

    #[error("<track> is missing the '{attribute}' attribute")]
    MissingAttribute { attribute: &'static str },

    #[error("attribute '{attribute}' is not a valid number: {value:?}")]
    InvalidNumber { attribute: &'static str, value: String },

    #[error("entry keyed '{key}' carries track_id {track_id}")]
    KeyMismatch { key: String, track_id: i64 },

    #[error("track {id} has invalid duration {duration}")]
    InvalidDuration { id: i64, duration: f64 },

    #[error("document has no <project> root element")]
    MissingRoot,

    #[error("document has more than one root element (second is <{found}>)")]
    MultipleRoots { found: String },

    #[error("document ends inside <{element}>")]
    UnclosedElement { element: String },
}

/// Build a track from decoded fields, reporting a bad duration as malformed.
fn decoded_track(
    id: i64,
    title: String,
    duration: f64,
) -> std::result::Result<Track, MalformedProject> {
    Track::new(id, title, duration).map_err(|_| MalformedProject::InvalidDuration { id, duration })
}

/// Write every track in `catalog` to `path` in `format`, replacing the file.
pub fn save(
    catalog: &Catalog,
    format: Format,
    path: &Path,
    settings: &ProjectSettings,
) -> Result<()> {
    let fail = |e: BoxedCause| EditorError::file_operation(FileOperation::Saving, path, e);

    let body = match format {
        Format::Json => json::encode(catalog, settings.pretty_json).map_err(|e| fail(e.into()))?,
        Format::Xml => xml::encode(catalog).map_err(fail)?,
    };
    fs::write(path, body).map_err(|e| fail(e.into()))?;

    debug!(path = %path.display(), %format, tracks = catalog.len(), "project file written");
    Ok(())
}

/// Read the tracks stored in the `format` project file at `path`.
pub fn load(format: Format, path: &Path) -> Result<Vec<Track>> {
    let fail = |e: BoxedCause| EditorError::file_operation(FileOperation::Loading, path, e);

    let content = fs::read_to_string(path).map_err(|e| fail(e.into()))?;
    let tracks = match format {
        Format::Json => json::decode(&content).map_err(fail)?,
        Format::Xml => xml::decode(&content).map_err(fail)?,
    };

    debug!(path = %path.display(), %format, tracks = tracks.len(), "project file parsed");
    Ok(tracks)
}

#[cfg(test)]
mod tests;
