use tracing::info;

use crate::library::Track;

/// A named effect and a human-readable description of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    name: String,
    description: String,
}

/// Acknowledgement that `effect` was applied to the track with `track_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectAck {
    pub effect: String,
    pub track_id: i64,
}

impl Effect {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// An effect whose description is derived from its name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let description = format!("{name} effect");
        Self { name, description }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Apply to `track`. The track is only read.
    pub fn apply(&self, track: &Track) -> EffectAck {
        info!(effect = %self.name, id = track.id(), title = track.title(), "effect applied");
        EffectAck {
            effect: self.name.clone(),
            track_id: track.id(),
        }
    }
}
