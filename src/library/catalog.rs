//! The authoritative `id -> Track` store.

use indexmap::IndexMap;
use tracing::info;

use crate::effects::{Effect, EffectAck};
use crate::error::{EditorError, Result};

use super::model::Track;

/// Owns every track in the project, keyed by id, in insertion order.
///
/// Every mutation either fully applies or leaves the mapping untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tracks: IndexMap<i64, Track>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new track. Fails if `id` is taken or `duration` is invalid.
    pub fn add(&mut self, id: i64, title: impl Into<String>, duration: f64) -> Result<&Track> {
        if self.tracks.contains_key(&id) {
            return Err(EditorError::DuplicateTrack { id });
        }
        let track = Track::new(id, title, duration)?;
        info!(id, title = track.title(), duration, "track added");
        let (index, _) = self.tracks.insert_full(id, track);
        Ok(&self.tracks[index])
    }

    /// Delete the track with `id` and hand it back.
    pub fn remove(&mut self, id: i64) -> Result<Track> {
        let track = self
            .tracks
            .shift_remove(&id)
            .ok_or(EditorError::TrackNotFound { id })?;
        info!(id, "track removed");
        Ok(track)
    }

    /// Record that the effect named `effect_name` was applied to track `id`.
    ///
    /// No audio is processed; the returned acknowledgement is the only trace.
    pub fn apply_effect(&self, effect_name: &str, id: i64) -> Result<EffectAck> {
        let track = self.get(id).ok_or(EditorError::TrackNotFound { id })?;
        Ok(Effect::named(effect_name).apply(track))
    }

    pub fn get(&self, id: i64) -> Option<&Track> {
        self.tracks.get(&id)
    }

    /// Like [`Catalog::get`] but reports a missing id as an error.
    pub fn require(&self, id: i64) -> Result<&Track> {
        self.get(id).ok_or(EditorError::TrackNotFound { id })
    }

    pub fn contains(&self, id: i64) -> bool {
        self.tracks.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Tracks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    /// Snapshot of the current tracks in insertion order.
    pub fn list(&self) -> Vec<&Track> {
        self.iter().collect()
    }

    /// Discard every current track and take `tracks` instead.
    ///
    /// Later entries win when `tracks` repeats an id.
    pub fn replace_all(&mut self, tracks: impl IntoIterator<Item = Track>) {
        self.tracks = tracks.into_iter().map(|t| (t.id(), t)).collect();
    }

    /// Insert `tracks`, overwriting existing entries that share an id.
    ///
    /// Overwritten entries keep their position; new ids are appended.
    pub fn merge(&mut self, tracks: impl IntoIterator<Item = Track>) {
        for track in tracks {
            self.tracks.insert(track.id(), track);
        }
    }
}
