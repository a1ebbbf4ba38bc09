//! Input update.
//!
//! Window and keyboard polling live outside the simulation. The frame driver
//! hands over the held keys and [`apply_frame_input`] updates
//! [`InputState`], which the gameplay systems read.
use bevy_ecs::prelude::*;

use crate::resources::input::{FrameInput, InputState};

/// Write this frame's held keys into the `InputState` resource.
pub fn apply_frame_input(world: &mut World, frame: FrameInput) {
    let mut input = world.resource_mut::<InputState>();
    input.left.update(frame.left);
    input.right.update(frame.right);
    input.jump.update(frame.jump);
}
