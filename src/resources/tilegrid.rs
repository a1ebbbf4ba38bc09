//! Tile grid resource and plain-text level loading.
//!
//! A level file has one line per tile row and one character per tile column:
//!
//! ```text
//! "   grass (solid)
//! #   earth (solid)
//! x   gem pickup, empty cell
//! h   heart pickup, empty cell
//! m   enemy, empty cell
//! *   anything else is empty space
//! ```
//!
//! [`Level::parse`] turns the text into a [`TileGrid`] plus the spawn points
//! of pickups and enemies. The grid is read-only once inserted into the world
//! and answers pixel solidity queries for the movement systems.

use std::fmt;
use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;
use log::info;
use serde::{Deserialize, Serialize};

use crate::components::collectible::CollectibleKind;
use crate::components::mapposition::MapPosition;

/// Edge length of a square tile in pixels.
pub const TILE_SIZE: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    Grass,
    Earth,
    #[default]
    Empty,
}

impl Tile {
    pub fn is_solid(self) -> bool {
        !matches!(self, Tile::Empty)
    }
}

/// Reasons a level can fail to load.
#[derive(Debug)]
pub enum LevelError {
    /// The level file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The level text has no lines.
    Empty,
    /// The first line is empty, so the level has no width.
    EmptyFirstLine,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io { path, source } => {
                write!(f, "failed to read level file {}: {}", path.display(), source)
            }
            LevelError::Empty => write!(f, "level has no rows"),
            LevelError::EmptyFirstLine => write!(f, "first level row is empty"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Row-major grid of tiles.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width_px(&self) -> i32 {
        self.width as i32 * TILE_SIZE
    }

    pub fn height_px(&self) -> i32 {
        self.height as i32 * TILE_SIZE
    }

    /// Tile at grid coordinates, or `None` outside the grid.
    pub fn tile_at(&self, col: usize, row: usize) -> Option<Tile> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.tiles[row * self.width + col])
    }

    /// Whether the pixel at (`x`, `y`) blocks movement.
    ///
    /// - Everything above the map (`y < 0`) is solid, so the player cannot
    ///   jump out of the top.
    /// - Columns left or right of the grid are solid, acting as side walls.
    /// - Rows below the grid are empty: a hole in the floor is a pit.
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        if y < 0 {
            return true;
        }
        let col = x.div_euclid(TILE_SIZE);
        if col < 0 || col as usize >= self.width {
            return true;
        }
        let row = (y / TILE_SIZE) as usize;
        self.tile_at(col as usize, row)
            .is_some_and(|tile| tile.is_solid())
    }

    /// Iterate every cell as `(col, row, tile)`, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (i % width, i / width, *tile))
    }

    /// Hand every non-empty tile and its top-left pixel origin to `draw`.
    ///
    /// No culling is done; the callback sees the whole map every time.
    pub fn draw(&self, mut draw: impl FnMut(Tile, i32, i32)) {
        for (col, row, tile) in self.tiles() {
            if tile != Tile::Empty {
                draw(tile, col as i32 * TILE_SIZE, row as i32 * TILE_SIZE);
            }
        }
    }
}

/// A parsed level: the static grid and where its entities start.
#[derive(Debug, Clone)]
pub struct Level {
    pub grid: TileGrid,
    /// Pickups with their spawn position (cell centre).
    pub pickups: Vec<(CollectibleKind, MapPosition)>,
    /// Enemy spawn positions (cell centre).
    pub enemies: Vec<MapPosition>,
}

impl Level {
    /// Build a level from text rows.
    ///
    /// Trailing line-ending characters are stripped from every row. The width
    /// is the character count of the first row; shorter rows are padded with
    /// empty tiles and extra characters on longer rows are ignored.
    pub fn parse<I, S>(lines: I) -> Result<Self, LevelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = lines
            .into_iter()
            .map(|line| line.as_ref().trim_end_matches(['\r', '\n']).chars().collect())
            .collect();

        let width = rows.first().ok_or(LevelError::Empty)?.len();
        if width == 0 {
            return Err(LevelError::EmptyFirstLine);
        }
        let height = rows.len();

        let mut tiles = Vec::with_capacity(width * height);
        let mut pickups = Vec::new();
        let mut enemies = Vec::new();

        for (row, chars) in rows.iter().enumerate() {
            for col in 0..width {
                let centre = MapPosition::new(
                    col as i32 * TILE_SIZE + TILE_SIZE / 2,
                    row as i32 * TILE_SIZE + TILE_SIZE / 2,
                );
                let tile = match chars.get(col).copied().unwrap_or(' ') {
                    '"' => Tile::Grass,
                    '#' => Tile::Earth,
                    'x' => {
                        pickups.push((CollectibleKind::Gem, centre));
                        Tile::Empty
                    }
                    'h' => {
                        pickups.push((CollectibleKind::Heart, centre));
                        Tile::Empty
                    }
                    'm' => {
                        enemies.push(centre);
                        Tile::Empty
                    }
                    _ => Tile::Empty,
                };
                tiles.push(tile);
            }
        }

        Ok(Level {
            grid: TileGrid {
                width,
                height,
                tiles,
            },
            pickups,
            enemies,
        })
    }

    /// Parse a whole level held in one string.
    pub fn parse_str(text: &str) -> Result<Self, LevelError> {
        Self::parse(text.lines())
    }

    /// Read and parse a level file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::parse_str(&text)?;
        info!(
            "Loaded level {}: {}x{} tiles, {} pickups, {} enemies",
            path.display(),
            level.grid.width(),
            level.grid.height(),
            level.pickups.len(),
            level.enemies.len()
        );
        Ok(level)
    }
}
