use indexmap::IndexMap;
use tracing::info;

use crate::config::DisplaySettings;
use crate::error::{EditorError, Result};

use super::display::track_line;
use super::model::Track;

/// A named, ordered list of catalog tracks.
///
/// Membership is decided by track id. The playlist keeps its own copies of the
/// tracks, so removing a track from the catalog does not touch playlists.
#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    name: String,
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains(&self, track_id: i64) -> bool {
        self.tracks.iter().any(|t| t.id() == track_id)
    }

    /// Append `track` unless a track with the same id is already present.
    ///
    /// Returns `false` (and logs) for the duplicate case; this is not an error.
    pub fn add(&mut self, track: Track) -> bool {
        if self.contains(track.id()) {
            info!(playlist = %self.name, id = track.id(), "track already in playlist");
            return false;
        }
        info!(playlist = %self.name, id = track.id(), "track added to playlist");
        self.tracks.push(track);
        true
    }

    /// Remove the member with `track_id`.
    pub fn remove(&mut self, track_id: i64) -> Result<Track> {
        let pos = self
            .tracks
            .iter()
            .position(|t| t.id() == track_id)
            .ok_or(EditorError::TrackNotFound { id: track_id })?;
        info!(playlist = %self.name, id = track_id, "track removed from playlist");
        Ok(self.tracks.remove(pos))
    }

    /// Header line followed by one line per track, in playlist order.
    pub fn render(&self, settings: &DisplaySettings) -> String {
        let mut lines = Vec::with_capacity(self.tracks.len() + 1);
        lines.push(format!("Playlist: {}", self.name));
        lines.extend(self.tracks.iter().map(|t| track_line(t, settings)));
        lines.join("\n")
    }
}

/// Registry of playlists by name, in creation order.
#[derive(Debug, Clone, Default)]
pub struct Playlists {
    by_name: IndexMap<String, Playlist>,
}

impl Playlists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist called `name`.
    pub fn create(&mut self, name: &str) -> Result<&mut Playlist> {
        if self.by_name.contains_key(name) {
            return Err(EditorError::PlaylistExists {
                name: name.to_string(),
            });
        }
        info!(playlist = name, "playlist created");
        let entry = self
            .by_name
            .entry(name.to_string())
            .or_insert_with(|| Playlist::new(name));
        Ok(entry)
    }

    pub fn get(&self, name: &str) -> Result<&Playlist> {
        self.by_name
            .get(name)
            .ok_or_else(|| EditorError::PlaylistNotFound {
                name: name.to_string(),
            })
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        self.by_name
            .get_mut(name)
            .ok_or_else(|| EditorError::PlaylistNotFound {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
