//! Tilehopper library.
//!
//! A tile-based side-scrolling platformer simulation built on `bevy_ecs`.
//! This module exposes the ECS components, resources, systems, and events
//! so that a renderer, the headless runner, and the integration tests can
//! drive the same simulation.

pub mod components;
pub mod events;
pub mod game;
pub mod replay;
pub mod resources;
pub mod systems;
