//! Named effects and ordered effect chains.
//!
//! Applying an effect does not touch audio or the track record; it produces
//! an [`EffectAck`] and a log record, which is all callers can observe.

mod chain;
mod types;

pub use chain::EffectChain;
pub use types::{Effect, EffectAck};
