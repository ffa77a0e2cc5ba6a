//! Track library: the track record, the catalog that owns every track, and
//! the playlists built from it.

mod catalog;
mod display;
mod model;
mod playlist;

pub use catalog::Catalog;
pub use display::track_line;
pub use model::{MIX_TRACK_ID, Track};
pub use playlist::{Playlist, Playlists};
