//! Scrolling camera resource.
//!
//! The camera is the top-left corner of the viewport in world pixels. It is
//! recomputed from scratch every frame by
//! [`camera_follow`](crate::systems::camera::camera_follow), so it never
//! drifts or lags behind the player.

use bevy_ecs::prelude::Resource;

use crate::components::mapposition::MapPosition;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera2DRes {
    pub offset_x: i32,
    pub offset_y: i32,
    pub viewport_width: i32,
    pub viewport_height: i32,
}

impl Camera2DRes {
    pub fn new(viewport_width: i32, viewport_height: i32) -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            viewport_width,
            viewport_height,
        }
    }

    /// Centre on `target`, keeping the viewport inside a level of the given
    /// pixel extent.
    pub fn follow(&mut self, target: &MapPosition, level_width: i32, level_height: i32) {
        self.offset_x = scroll_offset(target.x, self.viewport_width, level_width);
        self.offset_y = scroll_offset(target.y, self.viewport_height, level_height);
    }
}

/// Offset along one axis.
///
/// A level no larger than the viewport pins the offset to 0.
pub fn scroll_offset(target: i32, viewport: i32, extent: i32) -> i32 {
    let max = (extent - viewport).max(0);
    (target - viewport / 2).clamp(0, max)
}
