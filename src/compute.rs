//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `Session` (and, where needed, an RNG handle) and returns a brand-new
//! `Session`.  Side effects are limited to the injected RNG; anything the
//! front end must react to is queued on `Session::events`.

use std::time::Duration;

use log::debug;
use rand::Rng;

use crate::collision;
use crate::consts::*;
use crate::entities::{Bullet, Difficulty, Entity, GameEvent, GameStatus, Player, Session};
use crate::geometry::Point;
use crate::spawner;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh run for the given difficulty.
pub fn init_session(difficulty: Difficulty) -> Session {
    Session {
        player: Player::new(difficulty.starting_ammo()),
        obstacles: Vec::new(),
        bullets: Vec::new(),
        ammo_pickups: Vec::new(),
        coins: Vec::new(),
        explosions: Vec::new(),
        score: 0,
        collected_coins: 0,
        difficulty,
        obstacle_speed: difficulty.base_speed(),
        background_speed: difficulty.base_speed(),
        ramp_elapsed: Duration::ZERO,
        background_offset: 0.0,
        move_cooldown: 0,
        status: GameStatus::Playing,
        frame: 0,
        events: Vec::new(),
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

pub fn move_player_left(state: &Session) -> Session {
    Session {
        player: state.player.at_lane(state.player.lane.left()),
        ..state.clone()
    }
}

pub fn move_player_right(state: &Session) -> Session {
    Session {
        player: state.player.at_lane(state.player.lane.right()),
        ..state.clone()
    }
}

/// Apply held direction keys, throttled by the movement cooldown.  With both
/// held, left is applied and then right in the same frame.
pub fn steer(state: &Session, left: bool, right: bool) -> Session {
    let mut next = state.clone();
    if state.move_cooldown == 0 && (left || right) {
        if left {
            next = move_player_left(&next);
        }
        if right {
            next = move_player_right(&next);
        }
        next.move_cooldown = MOVE_COOLDOWN;
    }
    next.move_cooldown = next.move_cooldown.saturating_sub(1);
    next
}

/// Fire a twin-beam shot from the player's top-centre if any ammo is left.
pub fn player_shoot(state: &Session) -> Session {
    if state.status != GameStatus::Playing || state.player.ammo == 0 {
        return state.clone();
    }
    let origin = Point::new(state.player.rect.center_x(), state.player.rect.y);
    let mut next = state.clone();
    next.bullets.push(Bullet::new(origin));
    next.player.ammo -= 1;
    next.events.push(GameEvent::Shot);
    next
}

// ── Per-frame tick (RNG injected) ────────────────────────────────────────────

/// Speed up obstacles and backdrop once every `RAMP_INTERVAL` of play.
pub fn ramp(state: &mut Session, dt: Duration) {
    state.ramp_elapsed += dt;
    if state.ramp_elapsed >= RAMP_INTERVAL {
        state.obstacle_speed += RAMP_INCREMENT;
        state.background_speed += RAMP_INCREMENT;
        state.ramp_elapsed = Duration::ZERO;
        state.events.push(GameEvent::SpeedRamped { speed: state.obstacle_speed });
        debug!("speed ramped to {}", state.obstacle_speed);
    }
}

fn advance<E: Entity>(entities: &mut [E]) {
    for e in entities.iter_mut() {
        e.update();
    }
}

/// Move every entity one frame.  Falling things pick up the current session
/// speed first.  Finished explosions and bullets past the top are dropped
/// here, before any hit test sees them.
pub fn motion(state: &mut Session) {
    let speed = state.obstacle_speed;
    for o in &mut state.obstacles {
        o.speed = speed;
    }
    for a in &mut state.ammo_pickups {
        a.speed = speed;
    }
    for c in &mut state.coins {
        c.speed = speed;
    }

    advance(&mut state.bullets);
    state.bullets.retain(|b| !b.is_expired());
    advance(&mut state.obstacles);
    advance(&mut state.ammo_pickups);
    advance(&mut state.coins);
    advance(&mut state.explosions);
    state.explosions.retain(|e| !e.is_expired());

    state.background_offset = (state.background_offset + state.background_speed) % SCREEN_HEIGHT;
}

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
/// A finished run is returned unchanged.
pub fn tick(state: &Session, dt: Duration, rng: &mut impl Rng) -> Session {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let mut next = state.clone();
    next.frame += 1;

    ramp(&mut next, dt);
    spawner::spawn(&mut next, rng);
    motion(&mut next);
    collision::resolve(&mut next);

    next
}
