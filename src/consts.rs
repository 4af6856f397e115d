//! Game configuration constants.
//!
//! All coordinates are logical pixels on a fixed 600×800 playfield with the
//! origin at the top-left corner.

use std::time::Duration;

// ── Screen & lanes ───────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 600.0;
pub const SCREEN_HEIGHT: f32 = 800.0;

pub const LANE_COUNT: usize = 5;
/// Left edge of every lane slot. Only lanes 1..=3 are reachable.
pub const LANE_POSITIONS: [f32; LANE_COUNT] = [60.0, 180.0, 300.0, 420.0, 540.0];
pub const FIRST_PLAYABLE_LANE: usize = 1;
pub const LAST_PLAYABLE_LANE: usize = 3;
pub const HOME_LANE: usize = 2;

// ── Entity sizes ─────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 80.0;
/// Gap between the player's feet and the bottom of the screen.
pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;

pub const OBSTACLE_WIDTH: f32 = 50.0;
pub const OBSTACLE_HEIGHT: f32 = 50.0;
pub const OBSTACLE_VARIANTS: usize = 4;

pub const AMMO_WIDTH: f32 = 30.0;
pub const AMMO_HEIGHT: f32 = 30.0;

pub const COIN_WIDTH: f32 = 30.0;
pub const COIN_HEIGHT: f32 = 30.0;

pub const BEAM_WIDTH: f32 = 2.0;
pub const BEAM_HEIGHT: f32 = 20.0;
/// Horizontal distance of each beam from the player's centre line.
pub const BEAM_OFFSET: f32 = 15.0;
pub const BULLET_SPEED: f32 = 10.0;

pub const EXPLOSION_SIZE: f32 = 50.0;

// ── Animation ────────────────────────────────────────────────────────────────

pub const COIN_FRAMES: usize = 12;
pub const COIN_FRAME_DELAY: u32 = 5;
/// 7 columns × 2 rows on the sprite sheet.
pub const EXPLOSION_FRAMES: usize = 14;

// ── Spawning (1-in-N chance per frame) ───────────────────────────────────────

pub const OBSTACLE_SPAWN_ODDS: u32 = 50;
pub const COIN_SPAWN_ODDS: u32 = 200;
pub const AMMO_SPAWN_ODDS: u32 = 150;

// ── Scoring ──────────────────────────────────────────────────────────────────

pub const SCORE_OBSTACLE_DESTROYED: u64 = 5;
pub const SCORE_OBSTACLE_DODGED: u64 = 1;

// ── Pacing ───────────────────────────────────────────────────────────────────

/// Frames between lane changes while a direction key is held.
pub const MOVE_COOLDOWN: u32 = 10;

pub const RAMP_INTERVAL: Duration = Duration::from_secs(10);
pub const RAMP_INCREMENT: f32 = 0.25;

/// Horizontal drift of the menu backdrop per frame.
pub const MENU_SCROLL_SPEED: f32 = 0.15;

/// Frame budget while playing (60 Hz cap).
pub const FRAME: Duration = Duration::from_micros(16_667);
