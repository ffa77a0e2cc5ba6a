//! `{"tracks": {"<id>": {"track_id": .., "title": .., "duration": ..}}}`

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::BoxedCause;
use crate::library::{Catalog, Track};

use super::{MalformedProject, decoded_track};

#[derive(Serialize, Deserialize)]
struct ProjectFile {
    tracks: IndexMap<String, TrackRecord>,
}

#[derive(Serialize, Deserialize)]
struct TrackRecord {
    track_id: i64,
    title: String,
    duration: f64,
}

impl From<&Track> for TrackRecord {
    fn from(track: &Track) -> Self {
        Self {
            track_id: track.id(),
            title: track.title().to_string(),
            duration: track.duration(),
        }
    }
}

pub(super) fn encode(catalog: &Catalog, pretty: bool) -> Result<String, serde_json::Error> {
    let file = ProjectFile {
        tracks: catalog
            .iter()
            .map(|t| (t.id().to_string(), TrackRecord::from(t)))
            .collect(),
    };
    if pretty {
        serde_json::to_string_pretty(&file)
    } else {
        serde_json::to_string(&file)
    }
}

pub(super) fn decode(content: &str) -> Result<Vec<Track>, BoxedCause> {
    let file: ProjectFile = serde_json::from_str(content)?;

    let mut tracks = Vec::with_capacity(file.tracks.len());
    for (key, record) in file.tracks {
        if key.trim().parse::<i64>().ok() != Some(record.track_id) {
            return Err(MalformedProject::KeyMismatch {
                key,
                track_id: record.track_id,
            }
            .into());
        }
        tracks.push(decoded_track(record.track_id, record.title, record.duration)?);
    }
    Ok(tracks)
}
