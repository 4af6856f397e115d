//! Collision detection and resolution.
//!
//! Runs after every entity has moved.  Resolution order is fixed and follows
//! container order, so a seeded run is exactly reproducible.

use log::{debug, info};

use crate::consts::{SCORE_OBSTACLE_DESTROYED, SCORE_OBSTACLE_DODGED};
use crate::entities::{Entity, Explosion, GameEvent, GameStatus, Session};
use crate::geometry::Point;

/// Each bullet destroys at most the first obstacle it overlaps.
pub fn bullets_vs_obstacles(state: &mut Session) {
    let mut bi = 0;
    while bi < state.bullets.len() {
        let bullet = &state.bullets[bi];
        let hit = state.obstacles.iter().position(|o| bullet.hits(&o.rect));
        match hit {
            Some(oi) => {
                let obstacle = state.obstacles.remove(oi);
                state.bullets.remove(bi);
                state
                    .explosions
                    .push(Explosion::new(obstacle.rect.x, obstacle.rect.y));
                state.score += SCORE_OBSTACLE_DESTROYED;
                state.events.push(GameEvent::ObstacleDestroyed {
                    at: Point::new(obstacle.rect.x, obstacle.rect.y),
                });
                debug!("obstacle destroyed in lane {}", obstacle.lane.index());
            }
            None => bi += 1,
        }
    }
}

pub fn player_vs_ammo(state: &mut Session) {
    let player = state.player.rect;
    let before = state.ammo_pickups.len();
    state.ammo_pickups.retain(|a| !a.rect.overlaps(&player));
    for _ in state.ammo_pickups.len()..before {
        state.player.ammo += 1;
        state.events.push(GameEvent::AmmoCollected);
    }
}

pub fn player_vs_coins(state: &mut Session) {
    let player = state.player.rect;
    let before = state.coins.len();
    state.coins.retain(|c| !c.rect.overlaps(&player));
    for _ in state.coins.len()..before {
        state.player.pending_coins += 1;
        state.collected_coins += 1;
        state.events.push(GameEvent::CoinCollected);
    }
}

/// Any contact ends the run.  The obstacle stays where it is so the frozen
/// playfield still shows it.
pub fn player_vs_obstacles(state: &mut Session) {
    let player = state.player.rect;
    if state.obstacles.iter().any(|o| o.rect.overlaps(&player)) {
        state.status = GameStatus::GameOver;
        state.events.push(GameEvent::Crashed);
        info!("crashed with score {}", state.score);
    }
}

/// Drop everything that has fallen out of the playfield.  Obstacles that
/// reach the bottom untouched are worth a point each.
pub fn cull(state: &mut Session) {
    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.is_expired());
    for _ in state.obstacles.len()..before {
        state.score += SCORE_OBSTACLE_DODGED;
        state.events.push(GameEvent::ObstacleDodged);
    }
    state.ammo_pickups.retain(|a| !a.is_expired());
    state.coins.retain(|c| !c.is_expired());
}

/// Full resolution pass for one frame.
pub fn resolve(state: &mut Session) {
    bullets_vs_obstacles(state);
    player_vs_ammo(state);
    player_vs_coins(state);
    player_vs_obstacles(state);
    cull(state);
}
