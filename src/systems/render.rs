//! Render snapshot.
//!
//! The simulation never draws. Once per frame the renderer asks for a
//! [`FrameSnapshot`]: everything it needs to draw the level, the entities and
//! the HUD, in world pixels, plus the camera offset to translate by. Sprite
//! identity is carried as plain kind tags ([`Tile`], [`CollectibleKind`],
//! [`AnimationState`]); loading and caching images is the renderer's job.
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::animation::AnimationState;
use crate::components::collectible::{Collectible, CollectibleKind};
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Facing, Player};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::freeze::Freeze;
use crate::resources::tilegrid::{Tile, TileGrid};
use crate::resources::worldtime::WorldTime;

/// A non-empty tile and the pixel position of its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub tile: Tile,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupView {
    pub kind: CollectibleKind,
    pub x: i32,
    pub y: i32,
    /// Drawing rotation in degrees.
    pub angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyView {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Centre of the feet.
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
    pub animation: AnimationState,
    pub score: u32,
    pub lives: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub camera_x: i32,
    pub camera_y: i32,
    pub tiles: Vec<TileView>,
    pub pickups: Vec<PickupView>,
    pub enemies: Vec<EnemyView>,
    pub player: Option<PlayerView>,
    /// The world is stalled after a death.
    pub frozen: bool,
}

/// Collect the render-facing state of `world`.
///
/// Pickups and enemies are sorted by position so consecutive snapshots list
/// them in a stable order.
pub fn render_snapshot(world: &mut World) -> FrameSnapshot {
    let camera = *world.resource::<Camera2DRes>();
    let elapsed_ms = world.resource::<WorldTime>().elapsed * 1000.0;
    let frozen = world.contains_resource::<Freeze>();

    let mut tiles = Vec::new();
    world
        .resource::<TileGrid>()
        .draw(|tile, x, y| tiles.push(TileView { tile, x, y }));

    let mut pickups: Vec<PickupView> = {
        let mut q = world.query::<(&MapPosition, &Collectible)>();
        q.iter(world)
            .map(|(p, c)| PickupView {
                kind: c.kind,
                x: p.x,
                y: p.y,
                angle: c.kind.spin_angle(elapsed_ms),
            })
            .collect()
    };
    pickups.sort_by_key(|p| (p.y, p.x));

    let mut enemies: Vec<EnemyView> = {
        let mut q = world.query_filtered::<&MapPosition, With<Enemy>>();
        q.iter(world).map(|p| EnemyView { x: p.x, y: p.y }).collect()
    };
    enemies.sort_by_key(|e| (e.y, e.x));

    let player = {
        let mut q = world.query::<(&MapPosition, &Player, &AnimationState)>();
        q.iter(world).next().map(|(p, player, animation)| PlayerView {
            x: p.x,
            y: p.y,
            facing: player.facing,
            animation: *animation,
            score: player.score,
            lives: player.lives,
        })
    };

    FrameSnapshot {
        camera_x: camera.offset_x,
        camera_y: camera.offset_y,
        tiles,
        pickups,
        enemies,
        player,
        frozen,
    }
}
