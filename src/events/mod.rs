//! Event types and observers used by the simulation.
//!
//! Submodules:
//! - [`death`] – enemy contact: lose a life, respawn, freeze the world
//! - [`pickup`] – notification that a collectible was picked up
pub mod death;
pub mod pickup;
