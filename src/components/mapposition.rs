use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// World-space position in whole pixels.
///
/// For the player this is the centre of the feet; for pickups and enemies it
/// is the centre of the tile they spawned in.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: i32,
    pub y: i32,
}

impl MapPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rectangular proximity test: both axis distances strictly below `distance`.
    pub fn touches(&self, other: &MapPosition, distance: i32) -> bool {
        (self.x - other.x).abs() < distance && (self.y - other.y).abs() < distance
    }
}
