//! Player death event and observer.
//!
//! [`enemy_contact`](crate::systems::collision::enemy_contact) fires at most
//! one [`PlayerDiedEvent`] per frame. The observer takes a life, puts the
//! player back on the spawn point at rest, and inserts a [`Freeze`] so the
//! world stalls for the configured pause before play resumes.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::freeze::Freeze;
use crate::resources::gameconfig::GameConfig;

/// Event fired when the player touches an enemy.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDiedEvent {
    pub player: Entity,
}

pub fn player_death_observer(
    trigger: On<PlayerDiedEvent>,
    mut commands: Commands,
    mut players: Query<(&mut MapPosition, &mut RigidBody, &mut Player)>,
    config: Res<GameConfig>,
) {
    let entity = trigger.event().player;
    let Ok((mut position, mut rigidbody, mut player)) = players.get_mut(entity) else {
        warn!("PlayerDiedEvent for {:?}, which is not a player", entity);
        return;
    };

    player.lives -= 1;
    *position = config.spawn_point();
    rigidbody.halt();
    info!("Player died, {} lives left", player.lives);

    if config.death_pause > 0.0 {
        debug!("Freezing world for {}s", config.death_pause);
        commands.insert_resource(Freeze::new(config.death_pause));
    }
}
