use std::fmt;

use crate::error::{EditorError, Result};

/// Id given to every track produced by the mixer.
///
/// Mix results are never inserted into the catalog under this id; callers
/// pick a real id with [`Track::with_id`] first.
pub const MIX_TRACK_ID: i64 = -1;

/// A single timed track record. Fields cannot change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    id: i64,
    title: String,
    duration: f64,
}

impl Track {
    /// Build a track, rejecting negative or non-finite durations.
    pub fn new(id: i64, title: impl Into<String>, duration: f64) -> Result<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(EditorError::InvalidDuration { duration });
        }
        Ok(Self {
            id,
            title: title.into(),
            duration,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Same title and duration under a different id.
    pub fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Track {}: {} - {}s", self.id, self.title, self.duration)
    }
}
