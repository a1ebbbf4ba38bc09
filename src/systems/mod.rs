//! Simulation systems.
//!
//! This module groups all ECS systems that advance the simulation, plus the
//! world-level helpers the frame driver calls around the schedule.
//!
//! Submodules overview
//! - [`animation`] – select the player's sprite frame
//! - [`camera`] – recompute the scroll offset from the player position
//! - [`collision`] – pickup collection and enemy contact
//! - [`freeze`] – count down the post-death stall and gate gameplay on it
//! - [`input`] – fold a [`crate::resources::input::FrameInput`] into
//!   [`crate::resources::input::InputState`]
//! - [`jump`] – start a jump when grounded
//! - [`movement`] – per-pixel horizontal and vertical stepping against the tile grid
//! - [`render`] – build the read-only snapshot handed to the renderer
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod camera;
pub mod collision;
pub mod freeze;
pub mod input;
pub mod jump;
pub mod movement;
pub mod render;
pub mod time;
