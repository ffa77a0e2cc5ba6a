//! mixdesk: an in-memory editor for track catalogs, playlists, mixes and
//! effect chains, with JSON and XML project files.

pub mod app;
pub mod config;
pub mod effects;
pub mod error;
pub mod library;
pub mod mixer;
pub mod persist;
pub mod runtime;
