//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the level: the player, its kinematic state and derived animation, the
//! pickups and the enemies.
//!
//! Submodules overview:
//! - [`animation`] – derived animation frame selector for the player sprite
//! - [`collectible`] – pickup kinds and their point values
//! - [`enemy`] – marker for static enemy collision volumes
//! - [`mapposition`] – integer pixel position and the proximity test
//! - [`player`] – score, lives and facing of the player character
//! - [`rigidbody`] – vertical velocity integrated by the movement system

pub mod animation;
pub mod collectible;
pub mod enemy;
pub mod mapposition;
pub mod player;
pub mod rigidbody;
