use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::tilegrid::TileGrid;

/// Start a jump on the frame the jump key goes down.
///
/// Only works when the pixel right under the feet is solid; ground contact is
/// checked here and nowhere else, so there is no double jump.
pub fn player_jump(
    mut query: Query<(&MapPosition, &mut RigidBody), With<Player>>,
    input: Res<InputState>,
    grid: Res<TileGrid>,
    config: Res<GameConfig>,
) {
    if !input.jump.just_pressed {
        return;
    }
    for (position, mut rigidbody) in query.iter_mut() {
        if grid.is_solid(position.x, position.y + 1) {
            rigidbody.vy = config.jump_velocity;
            debug!("Jump from ({}, {})", position.x, position.y);
        }
    }
}
