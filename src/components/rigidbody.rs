//! Kinematic body component.
//!
//! Only the vertical axis carries velocity: horizontal motion is a direct
//! per-frame pixel intent from input, while vertical motion is integrated
//! from gravity by [`crate::systems::movement::player_movement`].

use bevy_ecs::prelude::Component;

/// Vertical velocity in pixels per frame. Negative values move up.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RigidBody {
    pub vy: i32,
}

impl RigidBody {
    pub fn new() -> Self {
        Self { vy: 0 }
    }

    /// Stop all vertical motion.
    pub fn halt(&mut self) {
        self.vy = 0;
    }
}
