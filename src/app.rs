//! Application module: exposes the project model driven by the CLI.
//!
//! The `Project` model lives in `app::model` and owns the catalog, the
//! playlists and the mixer so that every operation can be exercised without
//! a terminal session.

mod model;

pub use model::*;
