//! Player animation selection.
//!
//! Runs before movement so that a jump started this frame already shows the
//! jump frame, and a landing shows it one last time.
use bevy_ecs::prelude::*;

use crate::components::animation::AnimationState;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub fn select_player_animation(
    mut query: Query<(&RigidBody, &mut AnimationState), With<Player>>,
    input: Res<InputState>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    let move_x = input.horizontal_intent(config.walk_speed);
    let elapsed_ms = time.elapsed_ms();
    for (rigidbody, mut state) in query.iter_mut() {
        let next = AnimationState::select(move_x, rigidbody.vy, elapsed_ms);
        if *state != next {
            *state = next;
        }
    }
}
