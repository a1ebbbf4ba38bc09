//! Player interactions with pickups and enemies.
//!
//! Both checks use the same rectangular proximity test,
//! [`MapPosition::touches`], with the configured `touch_distance`.
//!
//! - [`collect_pickups`] checks every pickup each frame, so several can be
//!   collected at once. Each one is despawned, credited to the score and
//!   announced with a [`PickupCollectedEvent`].
//! - [`enemy_contact`] fires a single [`PlayerDiedEvent`] when any enemy is
//!   touching, no matter how many are.
use bevy_ecs::prelude::*;

use crate::components::collectible::Collectible;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::death::PlayerDiedEvent;
use crate::events::pickup::PickupCollectedEvent;
use crate::resources::gameconfig::GameConfig;

pub fn collect_pickups(
    mut commands: Commands,
    mut players: Query<(&MapPosition, &mut Player)>,
    pickups: Query<(Entity, &MapPosition, &Collectible), Without<Player>>,
    config: Res<GameConfig>,
) {
    for (player_position, mut player) in players.iter_mut() {
        for (entity, position, collectible) in pickups.iter() {
            if !position.touches(player_position, config.touch_distance) {
                continue;
            }
            let points = collectible.points();
            player.score += points;
            commands.entity(entity).despawn();
            commands.trigger(PickupCollectedEvent {
                kind: collectible.kind,
                points,
                score: player.score,
            });
        }
    }
}

pub fn enemy_contact(
    mut commands: Commands,
    players: Query<(Entity, &MapPosition), With<Player>>,
    enemies: Query<&MapPosition, (With<Enemy>, Without<Player>)>,
    config: Res<GameConfig>,
) {
    for (player, player_position) in players.iter() {
        let touching = enemies
            .iter()
            .any(|position| position.touches(player_position, config.touch_distance));
        if touching {
            commands.trigger(PlayerDiedEvent { player });
        }
    }
}
