use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Milliseconds each walking frame stays on screen.
pub const WALK_FRAME_MS: u64 = 175;

/// Frame of the player sprite sheet to draw.
///
/// Derived every frame by
/// [`select_player_animation`](crate::systems::animation::select_player_animation);
/// nothing in the simulation reads it back.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationState {
    #[default]
    Standing,
    Walk1,
    Walk2,
    Jump,
}

impl AnimationState {
    /// Pick the frame for the given horizontal intent, vertical velocity and clock.
    pub fn select(move_x: i32, vy: i32, elapsed_ms: u64) -> Self {
        if vy < 0 {
            AnimationState::Jump
        } else if move_x == 0 {
            AnimationState::Standing
        } else if (elapsed_ms / WALK_FRAME_MS) % 2 == 0 {
            AnimationState::Walk1
        } else {
            AnimationState::Walk2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rising_always_shows_jump() {
        assert_eq!(AnimationState::select(0, -3, 0), AnimationState::Jump);
        assert_eq!(AnimationState::select(5, -1, 200), AnimationState::Jump);
    }

    #[test]
    fn test_walk_frames_alternate() {
        assert_eq!(AnimationState::select(5, 0, 0), AnimationState::Walk1);
        assert_eq!(AnimationState::select(-5, 0, 174), AnimationState::Walk1);
        assert_eq!(AnimationState::select(5, 0, 175), AnimationState::Walk2);
        assert_eq!(AnimationState::select(5, 4, 350), AnimationState::Walk1);
    }

    #[test]
    fn test_idle_and_falling_stands() {
        assert_eq!(AnimationState::select(0, 0, 999), AnimationState::Standing);
        assert_eq!(AnimationState::select(0, 7, 999), AnimationState::Standing);
    }
}
