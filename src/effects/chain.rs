use tracing::info;

use crate::library::Track;

use super::types::{Effect, EffectAck};

/// Effects applied one after another, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectChain {
    effects: Vec<Effect>,
}

impl EffectChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, effect: Effect) {
        info!(effect = effect.name(), "effect added to chain");
        self.effects.push(effect);
    }

    /// Remove the first effect equal to `effect`.
    ///
    /// An absent effect is not an error: this logs and returns `false`.
    pub fn remove(&mut self, effect: &Effect) -> bool {
        match self.effects.iter().position(|e| e == effect) {
            Some(pos) => {
                self.effects.remove(pos);
                info!(effect = effect.name(), "effect removed from chain");
                true
            }
            None => {
                info!(effect = effect.name(), "effect not in chain");
                false
            }
        }
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Apply every effect to `track` in chain order.
    ///
    /// Each effect runs regardless of the others; the acknowledgements come
    /// back in the order the effects ran.
    pub fn apply(&self, track: &Track) -> Vec<EffectAck> {
        let acks: Vec<EffectAck> = self.effects.iter().map(|e| e.apply(track)).collect();
        info!(id = track.id(), count = acks.len(), "all effects applied");
        acks
    }
}
