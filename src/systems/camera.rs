use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::tilegrid::TileGrid;

/// Point the camera at the player, clamped to the level.
pub fn camera_follow(
    mut camera: ResMut<Camera2DRes>,
    grid: Res<TileGrid>,
    players: Query<&MapPosition, With<Player>>,
) {
    let Ok(position) = players.single() else {
        return;
    };
    camera.follow(position, grid.width_px(), grid.height_px());
}
