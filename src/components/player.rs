//! Player character state.
//!
//! Position and velocity live in [`MapPosition`](super::mapposition::MapPosition)
//! and [`RigidBody`](super::rigidbody::RigidBody); this component holds the
//! bookkeeping that the collision layer mutates.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Horizontal direction the player sprite faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    /// Sum of collected pickup points.
    pub score: u32,
    /// Remaining lives. Goes negative once the player dies with none left;
    /// acting on that is up to the caller.
    pub lives: i32,
    pub facing: Facing,
}

impl Player {
    pub fn new(lives: i32) -> Self {
        Self {
            score: 0,
            lives,
            facing: Facing::Left,
        }
    }

    /// Update facing from a horizontal intent. Zero keeps the last direction.
    pub fn face(&mut self, move_x: i32) {
        if move_x > 0 {
            self.facing = Facing::Right;
        } else if move_x < 0 {
            self.facing = Facing::Left;
        }
    }
}
