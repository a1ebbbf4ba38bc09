//! World freeze resource.
//!
//! The presence of [`Freeze`] stalls the simulation: gameplay systems are
//! skipped while world time keeps running. It is inserted when the player
//! dies and removed by [`tick_freeze`](crate::systems::freeze::tick_freeze)
//! once `remaining` reaches zero.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Freeze {
    /// Seconds of world time left before gameplay resumes.
    pub remaining: f32,
}

impl Freeze {
    pub fn new(seconds: f32) -> Self {
        Self { remaining: seconds }
    }
}
