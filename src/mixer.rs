//! Collects tracks and combines them into one derived track.

use tracing::info;

use crate::error::{EditorError, Result};
use crate::library::{MIX_TRACK_ID, Track};

/// Transient collector of tracks waiting to be mixed.
///
/// Unlike a playlist the mixer accepts the same track more than once, and
/// removing an absent track is a no-op rather than an error.
#[derive(Debug, Clone, Default)]
pub struct Mixer {
    tracks: Vec<Track>,
}

impl Mixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, track: Track) {
        info!(id = track.id(), "track queued for mix");
        self.tracks.push(track);
    }

    /// Drop the first queued track with `track_id`; `false` if none was queued.
    pub fn remove(&mut self, track_id: i64) -> bool {
        match self.tracks.iter().position(|t| t.id() == track_id) {
            Some(pos) => {
                self.tracks.remove(pos);
                true
            }
            None => {
                info!(id = track_id, "track not queued for mix");
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
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

    /// Produce a track titled `output_title` lasting as long as every queued
    /// track put together.
    ///
    /// The result carries [`MIX_TRACK_ID`]. The queue is left as it was, so
    /// calling this twice yields the same duration. A total that overflows to
    /// infinity is rejected with [`EditorError::InvalidDuration`].
    pub fn mix(&self, output_title: &str) -> Result<Track> {
        if self.tracks.is_empty() {
            return Err(EditorError::EmptyMix);
        }
        let total: f64 = self.tracks.iter().map(Track::duration).sum();
        let mixed = Track::new(MIX_TRACK_ID, output_title, total)?;
        info!(title = output_title, inputs = self.tracks.len(), duration = total, "mix created");
        Ok(mixed)
    }
}
