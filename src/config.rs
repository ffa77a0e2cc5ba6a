//! Configuration loader and schema types.
//!
//! This module exposes the settings that shape project files, track listings
//! and terminal output, plus helpers to load them from disk and environment.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;

#[cfg(test)]
mod tests;
