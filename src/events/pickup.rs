//! Pickup notifications.
//!
//! [`collect_pickups`](crate::systems::collision::collect_pickups) credits the
//! score and despawns the collectible itself; this event lets other code
//! (sound, effects, level-complete checks) react without touching that
//! system.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::collectible::CollectibleKind;

/// Fired once per collected pickup.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupCollectedEvent {
    pub kind: CollectibleKind,
    /// Points awarded for this pickup.
    pub points: u32,
    /// Player score after the pickup was credited.
    pub score: u32,
}

/// Log every pickup.
pub fn pickup_log_observer(trigger: On<PickupCollectedEvent>) {
    let event = trigger.event();
    info!(
        "Collected {:?} (+{}), score is now {}",
        event.kind, event.points, event.score
    );
}
