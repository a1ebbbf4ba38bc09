//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the level grid, input state,
//! timing, camera and configuration.
//!
//! Overview
//! - `camera2d` – scroll offset following the player, clamped to the level
//! - `freeze` – presence stalls gameplay after a death
//! - `gameconfig` – tunable constants loaded from an INI file
//! - `input` – per-frame state of the keys the game cares about
//! - `tilegrid` – the parsed level grid and its solidity queries
//! - `worldtime` – simulation time and delta
pub mod camera2d;
pub mod freeze;
pub mod gameconfig;
pub mod input;
pub mod tilegrid;
pub mod worldtime;
