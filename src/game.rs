//! Level setup and the per-frame update.
//!
//! [`Game`] owns the ECS world and the update schedule. A frame driver (a
//! window loop, the headless runner, a test) calls [`Game::step`] once per
//! tick with that tick's held keys and reads [`Game::snapshot`] to draw.
//!
//! # Frame order
//!
//! 1. advance [`WorldTime`]
//! 2. fold the [`FrameInput`] into [`InputState`]
//! 3. count down the post-death [`Freeze`](crate::resources::freeze::Freeze)
//! 4. unless frozen: jump, animation, movement, pickups, enemy contact
//! 5. camera follow

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use log::info;

use crate::components::animation::AnimationState;
use crate::components::collectible::Collectible;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::events::death::player_death_observer;
use crate::events::pickup::pickup_log_observer;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::freeze::Freeze;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{FrameInput, InputState};
use crate::resources::tilegrid::{Level, TileGrid};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::select_player_animation;
use crate::systems::camera::camera_follow;
use crate::systems::collision::{collect_pickups, enemy_contact};
use crate::systems::freeze::{tick_freeze, world_is_running};
use crate::systems::input::apply_frame_input;
use crate::systems::jump::player_jump;
use crate::systems::movement::player_movement;
use crate::systems::render::{FrameSnapshot, render_snapshot};
use crate::systems::time::update_world_time;

/// Spawn the player at the configured spawn point.
pub fn spawn_player(world: &mut World, config: &GameConfig) -> Entity {
    world
        .spawn((
            Player::new(config.lives),
            config.spawn_point(),
            RigidBody::new(),
            AnimationState::default(),
        ))
        .id()
}

/// Insert the level grid and spawn its pickups, enemies and the player.
///
/// Returns the player entity.
pub fn spawn_level(world: &mut World, level: Level, config: &GameConfig) -> Entity {
    let Level {
        grid,
        pickups,
        enemies,
    } = level;

    for (kind, position) in pickups {
        world.spawn((Collectible::new(kind), position));
    }
    for position in enemies {
        world.spawn((Enemy, position));
    }
    world.insert_resource(grid);

    spawn_player(world, config)
}

/// The per-frame gameplay schedule.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.set_executor_kind(ExecutorKind::SingleThreaded);
    update.add_systems(
        (
            tick_freeze,
            (
                player_jump,
                select_player_animation,
                player_movement,
                collect_pickups,
                enemy_contact,
            )
                .chain()
                .run_if(world_is_running),
            camera_follow,
        )
            .chain(),
    );
    update
}

/// A running level.
pub struct Game {
    world: World,
    update: Schedule,
    player: Entity,
}

impl Game {
    pub fn new(level: Level, config: GameConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(InputState::default());

        let mut camera = Camera2DRes::new(config.viewport_width, config.viewport_height);
        let player = spawn_level(&mut world, level, &config);
        {
            let grid = world.resource::<TileGrid>();
            camera.follow(&config.spawn_point(), grid.width_px(), grid.height_px());
        }
        world.insert_resource(camera);

        info!(
            "Level ready: player at ({}, {}) with {} lives",
            config.spawn_x, config.spawn_y, config.lives
        );
        world.insert_resource(config);

        world.add_observer(player_death_observer);
        world.add_observer(pickup_log_observer);
        world.flush();

        Self {
            world,
            update: build_update_schedule(),
            player,
        }
    }

    /// Run one frame. `dt` is the real time since the last frame in seconds.
    pub fn step(&mut self, dt: f32, input: FrameInput) {
        update_world_time(&mut self.world, dt);
        apply_frame_input(&mut self.world, input);
        self.update.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Render-facing state after the last frame.
    pub fn snapshot(&mut self) -> FrameSnapshot {
        render_snapshot(&mut self.world)
    }

    pub fn player(&self) -> Option<&Player> {
        self.world.get::<Player>(self.player)
    }

    pub fn player_position(&self) -> Option<MapPosition> {
        self.world.get::<MapPosition>(self.player).copied()
    }

    pub fn is_frozen(&self) -> bool {
        self.world.contains_resource::<Freeze>()
    }
}
