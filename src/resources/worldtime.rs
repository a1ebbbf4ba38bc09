use bevy_ecs::prelude::Resource;

/// Real time as seen by the simulation.
///
/// Movement is in fixed pixels per frame and ignores `delta`; time only
/// drives the animation clock and the freeze countdown.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Elapsed time in whole milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        (self.elapsed.max(0.0) * 1000.0) as u64
    }
}
