//! Gameplay tick integration tests for movement, jumping, pickups, enemy
//! contact, the death freeze and the camera.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use tilehopper::components::animation::AnimationState;
use tilehopper::components::collectible::{Collectible, CollectibleKind};
use tilehopper::components::enemy::Enemy;
use tilehopper::components::mapposition::MapPosition;
use tilehopper::components::player::{Facing, Player};
use tilehopper::components::rigidbody::RigidBody;
use tilehopper::events::death::player_death_observer;
use tilehopper::events::pickup::PickupCollectedEvent;
use tilehopper::game::{Game, build_update_schedule, spawn_level};
use tilehopper::resources::camera2d::Camera2DRes;
use tilehopper::resources::freeze::Freeze;
use tilehopper::resources::gameconfig::GameConfig;
use tilehopper::resources::input::{FrameInput, InputState};
use tilehopper::resources::tilegrid::{Level, Tile};
use tilehopper::resources::worldtime::WorldTime;
use tilehopper::systems::camera::camera_follow;
use tilehopper::systems::collision::collect_pickups;
use tilehopper::systems::input::apply_frame_input;
use tilehopper::systems::jump::player_jump;
use tilehopper::systems::movement::player_movement;
use tilehopper::systems::time::update_world_time;

const DT: f32 = 1.0 / 60.0;

/// Six columns, a floor at row 11 (y 550..600): feet rest at y = 549.
const TALL: [&str; 12] = [
    "      ", "      ", "      ", "      ", "      ", "      ", "      ", "      ", "      ",
    "      ", "      ", "######",
];
const TALL_FLOOR_Y: i32 = 549;

/// Floor at row 2 (y 100..150) and a one-tile wall at column 3, row 1.
const WALLED: [&str; 3] = ["      ", "   #  ", "######"];

const FLAT: [&str; 3] = ["        ", "        ", "########"];

fn config_with_spawn(x: i32, y: i32) -> GameConfig {
    let mut config = GameConfig::new();
    config.spawn_x = x;
    config.spawn_y = y;
    config
}

fn make_world(rows: &[&str], config: GameConfig) -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(Camera2DRes::new(
        config.viewport_width,
        config.viewport_height,
    ));
    let level = Level::parse(rows.iter().copied()).expect("test level parses");
    let player = spawn_level(&mut world, level, &config);
    world.insert_resource(config);
    world.add_observer(player_death_observer);
    world.flush();
    (world, player)
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_movement);
    schedule.run(world);
}

fn tick_jump(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_jump);
    schedule.run(world);
}

fn tick_pickups(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collect_pickups);
    schedule.run(world);
}

fn tick_camera(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_follow);
    schedule.run(world);
}

fn tick_frame(world: &mut World, input: FrameInput) {
    update_world_time(world, DT);
    apply_frame_input(world, input);
    build_update_schedule().run(world);
}

fn position(world: &World, entity: Entity) -> MapPosition {
    *world.get::<MapPosition>(entity).unwrap()
}

fn velocity(world: &World, entity: Entity) -> i32 {
    world.get::<RigidBody>(entity).unwrap().vy
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn resting_player_stays_put_without_input() {
    let (mut world, player) = make_world(&TALL, config_with_spawn(125, TALL_FLOOR_Y));

    for _ in 0..30 {
        tick_frame(&mut world, FrameInput::default());
        assert_eq!(position(&world, player), MapPosition::new(125, TALL_FLOOR_Y));
        assert_eq!(velocity(&world, player), 0);
    }
}

#[test]
fn falling_player_lands_on_the_floor() {
    let (mut world, player) = make_world(&TALL, config_with_spawn(125, 100));

    for _ in 0..60 {
        tick_frame(&mut world, FrameInput::default());
    }

    assert_eq!(position(&world, player), MapPosition::new(125, TALL_FLOOR_Y));
    assert_eq!(velocity(&world, player), 0);
}

#[test]
fn fast_fall_does_not_tunnel_through_the_floor() {
    let (mut world, player) = make_world(&TALL, config_with_spawn(125, 300));
    world.get_mut::<RigidBody>(player).unwrap().vy = 400;

    tick_movement(&mut world);

    assert_eq!(position(&world, player), MapPosition::new(125, TALL_FLOOR_Y));
    assert_eq!(velocity(&world, player), 0);
}

/// Four columns with a hole in the floor at column 2; the grid is 150 px tall.
const PIT: [&str; 3] = ["    ", "    ", "## #"];

#[test]
fn falling_into_a_pit_settles_below_the_grid() {
    let (mut world, player) = make_world(&PIT, config_with_spawn(125, 49));

    for _ in 0..120 {
        tick_frame(&mut world, FrameInput::default());
    }

    assert_eq!(position(&world, player), MapPosition::new(125, 150 + 45));
    assert_eq!(velocity(&world, player), 120);
}

#[test]
fn long_fall_does_not_overflow() {
    let (mut world, player) = make_world(&PIT, config_with_spawn(125, 49));
    // State after 65,500 frames of unchecked free fall.
    let frames: i32 = 65_500;
    *world.get_mut::<MapPosition>(player).unwrap() =
        MapPosition::new(125, frames / 2 * (frames + 1));
    world.get_mut::<RigidBody>(player).unwrap().vy = frames;

    for _ in 0..60 {
        tick_frame(&mut world, FrameInput::default());
    }

    assert_eq!(position(&world, player).y, frames / 2 * (frames + 1));
    assert_eq!(velocity(&world, player), frames + 60);

    world.get_mut::<RigidBody>(player).unwrap().vy = i32::MAX;
    tick_frame(&mut world, FrameInput::default());
    assert_eq!(velocity(&world, player), i32::MAX);
}

#[test]
fn walking_right_stops_at_the_wall() {
    let (mut world, player) = make_world(&WALLED, config_with_spawn(120, 99));

    for _ in 0..10 {
        tick_frame(&mut world, FrameInput::right());
    }

    assert_eq!(position(&world, player), MapPosition::new(149, 99));
    assert_eq!(world.get::<Player>(player).unwrap().facing, Facing::Right);
}

#[test]
fn walking_left_stops_at_the_map_edge() {
    let (mut world, player) = make_world(&WALLED, config_with_spawn(12, 99));

    tick_frame(&mut world, FrameInput::left());
    assert_eq!(position(&world, player).x, 7);

    for _ in 0..5 {
        tick_frame(&mut world, FrameInput::left());
    }
    assert_eq!(position(&world, player), MapPosition::new(0, 99));
    assert_eq!(world.get::<Player>(player).unwrap().facing, Facing::Left);
}

#[test]
fn both_directions_held_cancel_out() {
    let (mut world, player) = make_world(&WALLED, config_with_spawn(60, 99));
    let both = FrameInput {
        left: true,
        right: true,
        jump: false,
    };

    tick_frame(&mut world, both);

    assert_eq!(position(&world, player), MapPosition::new(60, 99));
    assert_eq!(
        *world.get::<AnimationState>(player).unwrap(),
        AnimationState::Standing
    );
}

// =============================================================================
// Jumping
// =============================================================================

#[test]
fn jump_sets_velocity_and_arc_returns_to_rest_after_twenty_frames() {
    let (mut world, player) = make_world(&TALL, config_with_spawn(125, TALL_FLOOR_Y));

    apply_frame_input(&mut world, FrameInput::jump());
    tick_jump(&mut world);
    assert_eq!(velocity(&world, player), -20);

    apply_frame_input(&mut world, FrameInput::default());
    for frame in 1..=20 {
        tick_movement(&mut world);
        assert_eq!(velocity(&world, player), -20 + frame);
    }

    assert_eq!(velocity(&world, player), 0);
    // Rise is 19 + 18 + ... + 1 pixels.
    assert_eq!(position(&world, player).y, TALL_FLOOR_Y - 190);
}

#[test]
fn no_jump_in_mid_air() {
    let (mut world, player) = make_world(&TALL, config_with_spawn(125, 200));

    apply_frame_input(&mut world, FrameInput::jump());
    tick_jump(&mut world);

    assert_eq!(velocity(&world, player), 0);
}

#[test]
fn held_jump_key_fires_only_once() {
    let (mut world, player) = make_world(&TALL, config_with_spawn(125, TALL_FLOOR_Y));

    tick_frame(&mut world, FrameInput::jump());
    assert_eq!(position(&world, player).y, TALL_FLOOR_Y - 19);
    assert_eq!(
        *world.get::<AnimationState>(player).unwrap(),
        AnimationState::Jump
    );

    // The full arc takes 40 frames; keep holding well past the landing.
    for _ in 0..50 {
        tick_frame(&mut world, FrameInput::jump());
    }
    assert_eq!(position(&world, player).y, TALL_FLOOR_Y);
    assert_eq!(velocity(&world, player), 0);

    tick_frame(&mut world, FrameInput::default());
    tick_frame(&mut world, FrameInput::jump());
    assert_eq!(position(&world, player).y, TALL_FLOOR_Y - 19);
}

#[test]
fn head_bump_stops_the_rise() {
    // Ceiling at row 0, floor at row 3: the head probe may not enter y < 50.
    let rows = ["######", "      ", "      ", "######"];
    let (mut world, player) = make_world(&rows, config_with_spawn(125, 149));

    tick_frame(&mut world, FrameInput::jump());
    tick_frame(&mut world, FrameInput::default());
    tick_frame(&mut world, FrameInput::default());
    // 19 + 18 + 17 pixels up puts the head probe exactly at y = 50.
    assert_eq!(position(&world, player).y, 95);
    assert_eq!(velocity(&world, player), -17);

    tick_frame(&mut world, FrameInput::default());
    assert_eq!(position(&world, player).y, 95);
    assert_eq!(velocity(&world, player), 0);
}

// =============================================================================
// Pickups
// =============================================================================

#[test]
fn gem_within_reach_is_collected_once() {
    let (mut world, player) = make_world(&FLAT, config_with_spawn(25, 99));
    let gem = world
        .spawn((Collectible::new(CollectibleKind::Gem), MapPosition::new(275, 75)))
        .id();
    let far = world
        .spawn((Collectible::new(CollectibleKind::Heart), MapPosition::new(325, 75)))
        .id();
    *world.get_mut::<MapPosition>(player).unwrap() = MapPosition::new(275 - 49, 75 + 49);

    tick_pickups(&mut world);

    assert_eq!(world.get::<Player>(player).unwrap().score, 3);
    assert!(world.get_entity(gem).is_err());
    assert!(world.get_entity(far).is_ok());

    tick_pickups(&mut world);
    assert_eq!(world.get::<Player>(player).unwrap().score, 3);
}

#[test]
fn several_pickups_in_reach_are_all_collected() {
    let (mut world, player) = make_world(&FLAT, config_with_spawn(25, 99));
    world.spawn((Collectible::new(CollectibleKind::Gem), MapPosition::new(200, 80)));
    world.spawn((Collectible::new(CollectibleKind::Gem), MapPosition::new(240, 80)));
    world.spawn((Collectible::new(CollectibleKind::Heart), MapPosition::new(220, 120)));
    *world.get_mut::<MapPosition>(player).unwrap() = MapPosition::new(220, 99);

    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    world.add_observer(move |trigger: On<PickupCollectedEvent>| {
        seen_clone.lock().unwrap().push(trigger.event().kind);
    });
    world.flush();

    tick_pickups(&mut world);

    assert_eq!(world.get::<Player>(player).unwrap().score, 3 + 3 + 15);
    let mut remaining = world.query::<&Collectible>();
    assert_eq!(remaining.iter(&world).count(), 0);
    assert_eq!(seen.lock().unwrap().len(), 3);
}

#[test]
fn pickup_at_threshold_distance_stays() {
    let (mut world, player) = make_world(&FLAT, config_with_spawn(25, 99));
    let gem = world
        .spawn((Collectible::new(CollectibleKind::Gem), MapPosition::new(275, 75)))
        .id();
    *world.get_mut::<MapPosition>(player).unwrap() = MapPosition::new(225, 75);

    tick_pickups(&mut world);

    assert_eq!(world.get::<Player>(player).unwrap().score, 0);
    assert!(world.get_entity(gem).is_ok());
}

// =============================================================================
// Enemies and the death freeze
// =============================================================================

fn spawn_enemy_pair(world: &mut World) {
    world.spawn((Enemy, MapPosition::new(225, 75)));
    world.spawn((Enemy, MapPosition::new(275, 75)));
}

#[test]
fn touching_two_enemies_costs_exactly_one_life() {
    let (mut world, player) = make_world(&FLAT, config_with_spawn(25, 99));
    spawn_enemy_pair(&mut world);
    *world.get_mut::<MapPosition>(player).unwrap() = MapPosition::new(250, 99);
    world.get_mut::<RigidBody>(player).unwrap().vy = 0;

    tick_frame(&mut world, FrameInput::default());

    let p = world.get::<Player>(player).unwrap();
    assert_eq!(p.lives, 4);
    assert_eq!(position(&world, player), MapPosition::new(25, 99));
    assert_eq!(velocity(&world, player), 0);
    assert!(world.contains_resource::<Freeze>());
}

#[test]
fn frozen_world_ignores_input_then_resumes() {
    let mut config = config_with_spawn(25, 99);
    config.death_pause = 0.25;
    let (mut world, player) = make_world(&FLAT, config);
    spawn_enemy_pair(&mut world);
    *world.get_mut::<MapPosition>(player).unwrap() = MapPosition::new(250, 99);

    let step = |world: &mut World, input: FrameInput| {
        update_world_time(world, 0.1);
        apply_frame_input(world, input);
        build_update_schedule().run(world);
    };

    step(&mut world, FrameInput::default());
    assert_eq!(position(&world, player), MapPosition::new(25, 99));

    step(&mut world, FrameInput::right());
    assert_eq!(position(&world, player), MapPosition::new(25, 99));
    assert!(world.contains_resource::<Freeze>());

    for _ in 0..5 {
        step(&mut world, FrameInput::right());
    }
    assert!(!world.contains_resource::<Freeze>());
    assert!(position(&world, player).x > 25);
    assert_eq!(world.get::<Player>(player).unwrap().lives, 4);
}

#[test]
fn lives_can_go_negative() {
    let mut config = config_with_spawn(250, 99);
    config.lives = 1;
    config.death_pause = 0.0;
    let (mut world, player) = make_world(&FLAT, config);
    spawn_enemy_pair(&mut world);

    // Respawning on top of the enemies kills the player every frame.
    for _ in 0..3 {
        tick_frame(&mut world, FrameInput::default());
    }

    assert_eq!(world.get::<Player>(player).unwrap().lives, -2);
    assert!(!world.contains_resource::<Freeze>());
}

// =============================================================================
// Camera
// =============================================================================

#[test]
fn camera_clamps_to_level_bounds() {
    let rows = ["                    "; 10];
    let (mut world, player) = make_world(&rows, config_with_spawn(0, 0));

    tick_camera(&mut world);
    let cam = *world.resource::<Camera2DRes>();
    assert_eq!((cam.offset_x, cam.offset_y), (0, 0));

    *world.get_mut::<MapPosition>(player).unwrap() = MapPosition::new(990, 490);
    tick_camera(&mut world);
    let cam = *world.resource::<Camera2DRes>();
    assert_eq!(cam.offset_x, 1000 - 640);
    assert_eq!(cam.offset_y, 500 - 480);

    *world.get_mut::<MapPosition>(player).unwrap() = MapPosition::new(500, 250);
    tick_camera(&mut world);
    let cam = *world.resource::<Camera2DRes>();
    assert_eq!((cam.offset_x, cam.offset_y), (180, 10));
}

// =============================================================================
// Game driver and snapshot
// =============================================================================

const LEVEL: &str = concat!(
    "          \n",
    "   x      \n",
    " m   \"\"h  \n",
    "##########\n",
);

#[test]
fn game_snapshot_exposes_render_state() {
    let level = Level::parse_str(LEVEL).unwrap();
    let mut game = Game::new(level, config_with_spawn(425, 149));

    game.step(DT, FrameInput::default());
    let snapshot = game.snapshot();

    assert_eq!(snapshot.tiles.len(), 12);
    assert!(
        snapshot
            .tiles
            .iter()
            .any(|t| t.tile == Tile::Grass && t.x == 250 && t.y == 100)
    );
    assert_eq!(snapshot.pickups.len(), 2);
    assert_eq!(snapshot.pickups[0].kind, CollectibleKind::Gem);
    assert_eq!((snapshot.pickups[0].x, snapshot.pickups[0].y), (175, 75));
    assert_eq!(snapshot.enemies.len(), 1);
    assert_eq!((snapshot.enemies[0].x, snapshot.enemies[0].y), (75, 125));

    let player = snapshot.player.expect("player in snapshot");
    assert_eq!((player.x, player.y), (425, 149));
    assert_eq!(player.facing, Facing::Left);
    assert_eq!(player.animation, AnimationState::Standing);
    assert_eq!((player.score, player.lives), (0, 5));
    assert_eq!((snapshot.camera_x, snapshot.camera_y), (0, 0));
    assert!(!snapshot.frozen);
}

#[test]
fn game_collects_pickups_while_walking() {
    let level = Level::parse_str(LEVEL).unwrap();
    let mut game = Game::new(level, config_with_spawn(425, 149));

    // The heart at (375, 125) comes into reach on the first step left.
    for _ in 0..4 {
        game.step(DT, FrameInput::left());
    }

    assert_eq!(game.player().unwrap().score, 15);
    assert_eq!(game.snapshot().pickups.len(), 1);
    assert!(!game.is_frozen());
}

#[test]
fn game_runs_from_a_level_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("level.txt");
    std::fs::write(&path, LEVEL).unwrap();

    let level = Level::from_file(&path).unwrap();
    let mut game = Game::new(level, config_with_spawn(425, 100));
    for _ in 0..30 {
        game.step(DT, FrameInput::default());
    }

    assert_eq!(game.player_position(), Some(MapPosition::new(425, 149)));
}
