//! The `Project` model: every piece of editor state behind one owner.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{LoadPolicy, ProjectSettings};
use crate::effects::{Effect, EffectAck, EffectChain};
use crate::error::Result;
use crate::library::{Catalog, Playlist, Playlists, Track};
use crate::mixer::Mixer;
use crate::persist::{self, Format};

/// What a load did to the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Tracks read from the file.
    pub loaded: usize,
    /// Tracks in the catalog afterwards.
    pub total: usize,
}

/// The editor state: catalog, playlists and mixer queue.
#[derive(Debug, Default)]
pub struct Project {
    pub catalog: Catalog,
    pub playlists: Playlists,
    pub mixer: Mixer,
    settings: ProjectSettings,
}

impl Project {
    pub fn new(settings: ProjectSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    pub fn add_track(&mut self, id: i64, title: &str, duration: f64) -> Result<&Track> {
        self.catalog.add(id, title, duration)
    }

    pub fn remove_track(&mut self, id: i64) -> Result<Track> {
        self.catalog.remove(id)
    }

    /// Build a chain from `effect_names` and run it over track `id`.
    pub fn apply_effects<S: AsRef<str>>(
        &self,
        effect_names: &[S],
        id: i64,
    ) -> Result<Vec<EffectAck>> {
        let track = self.catalog.require(id)?;
        let mut chain = EffectChain::new();
        for name in effect_names {
            chain.add(Effect::named(name.as_ref()));
        }
        Ok(chain.apply(track))
    }

    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        self.playlists.create(name).map(|_| ())
    }

    /// Add catalog track `id` to playlist `name`.
    ///
    /// Returns `false` when the track was already a member.
    pub fn add_to_playlist(&mut self, name: &str, id: i64) -> Result<bool> {
        let track = self.catalog.require(id)?.clone();
        Ok(self.playlists.get_mut(name)?.add(track))
    }

    pub fn remove_from_playlist(&mut self, name: &str, id: i64) -> Result<Track> {
        self.playlists.get_mut(name)?.remove(id)
    }

    pub fn playlist(&self, name: &str) -> Result<&Playlist> {
        self.playlists.get(name)
    }

    /// Queue catalog track `id` for the next mix.
    pub fn queue_for_mix(&mut self, id: i64) -> Result<()> {
        let track = self.catalog.require(id)?.clone();
        self.mixer.add(track);
        Ok(())
    }

    pub fn mix(&self, title: &str) -> Result<Track> {
        self.mixer.mix(title)
    }

    /// Put a mix result into the catalog under the caller-chosen `id`.
    pub fn store_mix(&mut self, mixed: Track, id: i64) -> Result<&Track> {
        let track = mixed.with_id(id);
        self.catalog.add(track.id(), track.title(), track.duration())
    }

    pub fn save(&self, format: Format, path: &Path) -> Result<()> {
        persist::save(&self.catalog, format, path, &self.settings)?;
        info!(path = %path.display(), %format, "project saved");
        Ok(())
    }

    /// Load `path` and apply it according to the configured load policy.
    ///
    /// The catalog is untouched when reading or parsing fails.
    pub fn load(&mut self, format: Format, path: &Path) -> Result<LoadSummary> {
        let tracks = persist::load(format, path)?;
        let loaded = tracks.len();
        match self.settings.load_policy {
            LoadPolicy::Replace => self.catalog.replace_all(tracks),
            LoadPolicy::Merge => self.catalog.merge(tracks),
        }
        info!(path = %path.display(), %format, loaded, "project loaded");
        Ok(LoadSummary {
            loaded,
            total: self.catalog.len(),
        })
    }

    /// `<default_file>.<ext>` for `format`.
    pub fn default_path(&self, format: Format) -> PathBuf {
        Path::new(&self.settings.default_file).with_extension(format.extension())
    }
}
