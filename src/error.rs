//! Error types shared by the catalog, playlists, mixer and persistence layers.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed root cause carried by [`EditorError::FileOperation`].
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which direction a failed file operation was going.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileOperation {
    Saving,
    Loading,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saving => f.write_str("saving"),
            Self::Loading => f.write_str("loading"),
        }
    }
}

/// Errors produced by editor operations.
///
/// Every variant is recoverable: the interactive loop reports it and moves on
/// to the next prompt.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("track with ID {id} already exists")]
    DuplicateTrack { id: i64 },

    #[error("track with ID {id} not found")]
    TrackNotFound { id: i64 },

    #[error("cannot mix: the mixer holds no tracks")]
    EmptyMix,

    #[error("error while {operation} file '{}': {source}", .filename.display())]
    FileOperation {
        operation: FileOperation,
        filename: PathBuf,
        #[source]
        source: BoxedCause,
    },

    #[error("unsupported project format: {format}")]
    InvalidFormat { format: String },

    #[error("invalid duration {duration}: must be a finite, non-negative number of seconds")]
    InvalidDuration { duration: f64 },

    #[error("playlist '{name}' already exists")]
    PlaylistExists { name: String },

    #[error("playlist '{name}' not found")]
    PlaylistNotFound { name: String },
}

impl EditorError {
    /// Wrap any error as a failed save or load of `filename`.
    pub fn file_operation(
        operation: FileOperation,
        filename: impl Into<PathBuf>,
        source: impl Into<BoxedCause>,
    ) -> Self {
        Self::FileOperation {
            operation,
            filename: filename.into(),
            source: source.into(),
        }
    }
}

pub type Result<T, E = EditorError> = std::result::Result<T, E>;
