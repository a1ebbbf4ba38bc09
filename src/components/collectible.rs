//! Pickup component.
//!
//! Collectibles are spawned from `x` and `h` characters of the level file and
//! despawned by [`crate::systems::collision::collect_pickups`] once the player
//! touches them. Sprite identity is the [`CollectibleKind`] tag; the render
//! collaborator maps it to an image.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Spin amplitude of the pickup sprite, in degrees.
const SPIN_AMPLITUDE: f32 = 25.0;
/// Milliseconds per radian of the spin oscillation.
const SPIN_PERIOD_MS: f32 = 133.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectibleKind {
    Gem,
    Heart,
}

impl CollectibleKind {
    /// Score awarded when collected.
    pub fn points(self) -> u32 {
        match self {
            CollectibleKind::Gem => 3,
            CollectibleKind::Heart => 15,
        }
    }

    /// Drawing rotation in degrees at `elapsed_ms` of world time.
    /// Hearts swing in the opposite direction to gems.
    pub fn spin_angle(self, elapsed_ms: f32) -> f32 {
        let phase = elapsed_ms / SPIN_PERIOD_MS;
        match self {
            CollectibleKind::Gem => SPIN_AMPLITUDE * phase.sin(),
            CollectibleKind::Heart => SPIN_AMPLITUDE * (-phase).sin(),
        }
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collectible {
    pub kind: CollectibleKind,
}

impl Collectible {
    pub fn new(kind: CollectibleKind) -> Self {
        Self { kind }
    }

    pub fn points(&self) -> u32 {
        self.kind.points()
    }
}
