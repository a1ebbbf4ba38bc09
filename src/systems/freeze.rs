//! Post-death freeze.
//!
//! While a [`Freeze`] resource exists the gameplay systems are skipped via the
//! [`world_is_running`] run condition. [`tick_freeze`] always runs and
//! removes the resource once its time is up.
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::freeze::Freeze;
use crate::resources::worldtime::WorldTime;

/// Count the freeze down by the frame delta and lift it when it runs out.
pub fn tick_freeze(
    mut commands: Commands,
    freeze: Option<ResMut<Freeze>>,
    time: Res<WorldTime>,
) {
    let Some(mut freeze) = freeze else {
        return;
    };
    freeze.remaining -= time.delta;
    if freeze.remaining <= 0.0 {
        debug!("Freeze lifted");
        commands.remove_resource::<Freeze>();
    }
}

/// Run condition: true unless the world is frozen.
pub fn world_is_running(freeze: Option<Res<Freeze>>) -> bool {
    freeze.is_none()
}
