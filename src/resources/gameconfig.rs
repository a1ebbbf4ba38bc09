//! Game configuration resource.
//!
//! Holds the tunable gameplay constants, loaded from an INI configuration
//! file. Defaults reproduce the classic feel of the game, so a missing file
//! or missing keys are never fatal.
//!
//! # Configuration File Format
//!
//! ```ini
//! [level]
//! path = assets/levels/level01.txt
//!
//! [player]
//! spawn_x = 400
//! spawn_y = 100
//! lives = 5
//! walk_speed = 5
//! jump_velocity = -20
//! gravity = 1
//!
//! [collision]
//! touch_distance = 50
//!
//! [viewport]
//! width = 640
//! height = 480
//!
//! [timing]
//! updates_per_second = 60
//! death_pause = 2.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::mapposition::MapPosition;

/// Default safe values for startup
const DEFAULT_LEVEL_PATH: &str = "./assets/levels/level01.txt";
const DEFAULT_SPAWN_X: i32 = 400;
const DEFAULT_SPAWN_Y: i32 = 100;
const DEFAULT_LIVES: i32 = 5;
const DEFAULT_WALK_SPEED: i32 = 5;
const DEFAULT_JUMP_VELOCITY: i32 = -20;
const DEFAULT_GRAVITY: i32 = 1;
/// Half the sprite size: pickups and enemies touch the player closer than this.
const DEFAULT_TOUCH_DISTANCE: i32 = 50;
const DEFAULT_VIEWPORT_WIDTH: i32 = 640;
const DEFAULT_VIEWPORT_HEIGHT: i32 = 480;
const DEFAULT_UPDATES_PER_SECOND: u32 = 60;
const DEFAULT_DEATH_PAUSE: f32 = 2.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Level file loaded at startup.
    pub level_path: PathBuf,
    /// Where the player starts and respawns, in pixels.
    pub spawn_x: i32,
    pub spawn_y: i32,
    /// Lives at level start.
    pub lives: i32,
    /// Pixels walked per frame while a direction is held.
    pub walk_speed: i32,
    /// Vertical velocity set by a jump (negative is up).
    pub jump_velocity: i32,
    /// Added to the vertical velocity every frame.
    pub gravity: i32,
    /// Pickup/enemy proximity threshold on each axis.
    pub touch_distance: i32,
    pub viewport_width: i32,
    pub viewport_height: i32,
    /// Fixed simulation rate used by the frame driver.
    pub updates_per_second: u32,
    /// Seconds the world stays frozen after a death.
    pub death_pause: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            level_path: PathBuf::from(DEFAULT_LEVEL_PATH),
            spawn_x: DEFAULT_SPAWN_X,
            spawn_y: DEFAULT_SPAWN_Y,
            lives: DEFAULT_LIVES,
            walk_speed: DEFAULT_WALK_SPEED,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            gravity: DEFAULT_GRAVITY,
            touch_distance: DEFAULT_TOUCH_DISTANCE,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            updates_per_second: DEFAULT_UPDATES_PER_SECOND,
            death_pause: DEFAULT_DEATH_PAUSE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Spawn point as a position.
    pub fn spawn_point(&self) -> MapPosition {
        MapPosition::new(self.spawn_x, self.spawn_y)
    }

    /// Seconds per simulation frame.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.updates_per_second.max(1) as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let int = |section: &str, key: &str| -> Option<i32> {
            config
                .getint(section, key)
                .ok()
                .flatten()
                .and_then(|v| i32::try_from(v).ok())
        };

        // [level] section
        if let Some(path) = config.get("level", "path") {
            self.level_path = PathBuf::from(path);
        }

        // [player] section
        if let Some(x) = int("player", "spawn_x") {
            self.spawn_x = x;
        }
        if let Some(y) = int("player", "spawn_y") {
            self.spawn_y = y;
        }
        if let Some(lives) = int("player", "lives") {
            self.lives = lives;
        }
        if let Some(speed) = int("player", "walk_speed") {
            self.walk_speed = speed;
        }
        if let Some(vy) = int("player", "jump_velocity") {
            self.jump_velocity = vy;
        }
        if let Some(gravity) = int("player", "gravity") {
            self.gravity = gravity;
        }

        // [collision] section
        if let Some(distance) = int("collision", "touch_distance") {
            self.touch_distance = distance;
        }

        // [viewport] section
        if let Some(width) = int("viewport", "width") {
            self.viewport_width = width;
        }
        if let Some(height) = int("viewport", "height") {
            self.viewport_height = height;
        }

        // [timing] section
        if let Some(ups) = config
            .getuint("timing", "updates_per_second")
            .ok()
            .flatten()
            .and_then(|v| u32::try_from(v).ok())
        {
            self.updates_per_second = ups;
        }
        if let Some(pause) = config.getfloat("timing", "death_pause").ok().flatten() {
            self.death_pause = pause as f32;
        }

        info!(
            "Loaded config: level={}, spawn=({}, {}), lives={}, speed={}, jump={}, gravity={}, \
             touch={}, viewport={}x{}, ups={}, death_pause={}",
            self.level_path.display(),
            self.spawn_x,
            self.spawn_y,
            self.lives,
            self.walk_speed,
            self.jump_velocity,
            self.gravity,
            self.touch_distance,
            self.viewport_width,
            self.viewport_height,
            self.updates_per_second,
            self.death_pause
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set(
            "level",
            "path",
            Some(self.level_path.display().to_string()),
        );

        config.set("player", "spawn_x", Some(self.spawn_x.to_string()));
        config.set("player", "spawn_y", Some(self.spawn_y.to_string()));
        config.set("player", "lives", Some(self.lives.to_string()));
        config.set("player", "walk_speed", Some(self.walk_speed.to_string()));
        config.set(
            "player",
            "jump_velocity",
            Some(self.jump_velocity.to_string()),
        );
        config.set("player", "gravity", Some(self.gravity.to_string()));

        config.set(
            "collision",
            "touch_distance",
            Some(self.touch_distance.to_string()),
        );

        config.set("viewport", "width", Some(self.viewport_width.to_string()));
        config.set("viewport", "height", Some(self.viewport_height.to_string()));

        config.set(
            "timing",
            "updates_per_second",
            Some(self.updates_per_second.to_string()),
        );
        config.set("timing", "death_pause", Some(self.death_pause.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
