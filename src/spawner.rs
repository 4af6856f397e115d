//! Lane-aware random spawning.
//!
//! Three independent draws per frame.  Obstacles refuse to stack in a lane
//! that still has one near the top; ammo avoids lanes whose obstacle overlaps
//! the ammo spawn band; coins go anywhere.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::consts::*;
use crate::entities::{AmmoPickup, Coin, Lane, Obstacle, Session};

fn random_lane(rng: &mut impl Rng) -> Lane {
    Lane::playable(rng.gen_range(FIRST_PLAYABLE_LANE..=LAST_PLAYABLE_LANE))
}

/// True if a new obstacle may enter `lane` without stacking on one that is
/// still within two obstacle-heights of the top.
pub fn obstacle_lane_clear(obstacles: &[Obstacle], lane: Lane) -> bool {
    !obstacles
        .iter()
        .any(|o| o.lane == lane && o.rect.y < OBSTACLE_HEIGHT * 2.0)
}

/// Playable lanes where an ammo pickup would not overlap an obstacle's
/// vertical extent at spawn time.
pub fn ammo_lanes(obstacles: &[Obstacle]) -> Vec<Lane> {
    let mut lanes: Vec<Lane> = (FIRST_PLAYABLE_LANE..=LAST_PLAYABLE_LANE)
        .map(Lane::playable)
        .collect();
    for o in obstacles {
        if o.rect.y < AMMO_HEIGHT && o.rect.y + OBSTACLE_HEIGHT > -AMMO_HEIGHT {
            lanes.retain(|&l| l != o.lane);
        }
    }
    lanes
}

pub fn spawn_obstacle(state: &mut Session, rng: &mut impl Rng) {
    if !rng.gen_ratio(1, OBSTACLE_SPAWN_ODDS) {
        return;
    }
    let lane = random_lane(rng);
    if !obstacle_lane_clear(&state.obstacles, lane) {
        debug!("obstacle suppressed in lane {}", lane.index());
        return;
    }
    let variant = rng.gen_range(0..OBSTACLE_VARIANTS);
    state
        .obstacles
        .push(Obstacle::new(lane, variant, state.obstacle_speed));
}

pub fn spawn_coin(state: &mut Session, rng: &mut impl Rng) {
    if !rng.gen_ratio(1, COIN_SPAWN_ODDS) {
        return;
    }
    let lane = random_lane(rng);
    state.coins.push(Coin::new(lane, state.obstacle_speed));
}

pub fn spawn_ammo(state: &mut Session, rng: &mut impl Rng) {
    if !rng.gen_ratio(1, AMMO_SPAWN_ODDS) {
        return;
    }
    if let Some(&lane) = ammo_lanes(&state.obstacles).choose(rng) {
        state
            .ammo_pickups
            .push(AmmoPickup::new(lane, state.obstacle_speed));
    }
}

/// Run all three spawners for one frame.
pub fn spawn(state: &mut Session, rng: &mut impl Rng) {
    spawn_obstacle(state, rng);
    spawn_coin(state, rng);
    spawn_ammo(state, rng);
}
