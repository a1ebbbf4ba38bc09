use bevy_ecs::prelude::Component;

/// Static enemy. Touching one kills the player; enemies are never removed.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Enemy;
