//! Per-frame input resource.
//!
//! The input collaborator reports which keys are held each frame as a
//! [`FrameInput`]; [`apply_frame_input`](crate::systems::input::apply_frame_input)
//! folds it into [`InputState`], deriving press/release edges so that a held
//! jump key only fires once.
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Held keys reported for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl FrameInput {
    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::default()
        }
    }

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::default()
        }
    }

    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean key state with edge detection.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Advance one frame with the key's new held state.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Resource capturing the per-frame key state relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub jump: BoolState,
}

impl InputState {
    /// Horizontal pixel intent for this frame: `-speed` for left, `+speed`
    /// for right, and zero when both or neither are held.
    pub fn horizontal_intent(&self, speed: i32) -> i32 {
        let mut move_x = 0;
        if self.left.active {
            move_x -= speed;
        }
        if self.right.active {
            move_x += speed;
        }
        move_x
    }
}
