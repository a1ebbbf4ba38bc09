//! Player kinematics.
//!
//! Motion is resolved one pixel at a time on each axis: every step is first
//! tested with [`would_fit`] against the tile grid and only committed if the
//! player's hitbox stays clear. A blocked step ends motion on that axis for
//! the rest of the frame. Step counts are the integer speed, so nothing can
//! tunnel through a tile, however fast it falls.
//!
//! # System Flow
//!
//! Each frame:
//!
//! 1. Horizontal intent (`±walk_speed`) from [`InputState`] sets the facing
//!    and is stepped out pixel by pixel.
//! 2. Gravity is added to the vertical velocity. There is no terminal
//!    velocity.
//! 3. The vertical velocity is stepped out pixel by pixel; the first blocked
//!    step zeroes it, which is how landing and head bumps stop the player.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::tilegrid::TileGrid;

/// Distance from the feet to the head probe.
pub const PROBE_HEIGHT: i32 = 45;

/// Could the player stand at `position + (dx, dy)` without being stuck?
///
/// Probes the feet and the head at the shifted horizontal position.
pub fn would_fit(grid: &TileGrid, position: &MapPosition, dx: i32, dy: i32) -> bool {
    let x = position.x + dx;
    let y = position.y + dy;
    !grid.is_solid(x, y) && !grid.is_solid(x, y - PROBE_HEIGHT)
}

/// Is the whole hitbox below the bottom row? Nothing down there can block.
fn below_grid(grid: &TileGrid, position: &MapPosition) -> bool {
    position.y - PROBE_HEIGHT >= grid.height_px()
}

/// Step `position` up to `distance` pixels along one axis, stopping at the
/// first blocked pixel. Returns `true` if the whole distance was covered.
///
/// Falling stops advancing once the player has dropped out of the grid, so
/// the position stays bounded however long the fall lasts.
fn step_axis(grid: &TileGrid, position: &mut MapPosition, distance: i32, horizontal: bool) -> bool {
    let unit = distance.signum();
    let (dx, dy) = if horizontal { (unit, 0) } else { (0, unit) };
    for _ in 0..distance.unsigned_abs() {
        if dy > 0 && below_grid(grid, position) {
            return true;
        }
        if !would_fit(grid, position, dx, dy) {
            return false;
        }
        position.x += dx;
        position.y += dy;
    }
    true
}

/// Advance the player one frame: walk, fall, collide.
pub fn player_movement(
    mut query: Query<(&mut MapPosition, &mut RigidBody, &mut Player)>,
    input: Res<InputState>,
    grid: Res<TileGrid>,
    config: Res<GameConfig>,
) {
    let move_x = input.horizontal_intent(config.walk_speed);

    for (mut position, mut rigidbody, mut player) in query.iter_mut() {
        player.face(move_x);

        let mut next = *position;
        step_axis(&grid, &mut next, move_x, true);

        rigidbody.vy = rigidbody.vy.saturating_add(config.gravity);
        if !step_axis(&grid, &mut next, rigidbody.vy, false) {
            rigidbody.halt();
        }

        if next != *position {
            *position = next;
        }
    }
}
