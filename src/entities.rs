//! All game entity types: pure data plus per-frame motion.

use std::time::Duration;

use crate::animation::Animation;
use crate::consts::*;
use crate::geometry::{Point, Rect};
use crate::render::{Look, Sprite};

// ── Lanes ────────────────────────────────────────────────────────────────────

/// One of the five horizontal lane slots.  Construction clamps, so an
/// out-of-range lane cannot exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lane(usize);

impl Lane {
    pub const HOME: Lane = Lane(HOME_LANE);

    /// Any lane slot, clamped to `0..LANE_COUNT`.
    pub fn new(index: usize) -> Self {
        Lane(index.min(LANE_COUNT - 1))
    }

    /// A lane the player can stand in, clamped to `1..=3`.
    pub fn playable(index: usize) -> Self {
        Lane(index.clamp(FIRST_PLAYABLE_LANE, LAST_PLAYABLE_LANE))
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Left edge of the lane in logical pixels.
    pub fn x(self) -> f32 {
        LANE_POSITIONS[self.0]
    }

    pub fn left(self) -> Self {
        if self.0 > FIRST_PLAYABLE_LANE {
            Lane(self.0 - 1)
        } else {
            self
        }
    }

    pub fn right(self) -> Self {
        if self.0 < LAST_PLAYABLE_LANE {
            Lane(self.0 + 1)
        } else {
            self
        }
    }
}

// ── Difficulty ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Ammo the player starts a run with.
    pub fn starting_ammo(self) -> u32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 2,
            Difficulty::Hard => 1,
            Difficulty::Expert => 0,
        }
    }

    /// Initial obstacle (and background) speed in pixels per frame.
    pub fn base_speed(self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Medium => 4.0,
            Difficulty::Hard => 6.0,
            Difficulty::Expert => 8.0,
        }
    }

    /// The next level, wrapping from Expert back to Easy.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Expert,
            Difficulty::Expert => Difficulty::Easy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

// ── Entity capability ────────────────────────────────────────────────────────

/// Behaviour shared by everything that moves or animates during a run.
pub trait Entity {
    /// Advance one frame.
    fn update(&mut self);
    /// True once the entity has left the playfield or finished animating.
    fn is_expired(&self) -> bool;
    fn bounds(&self) -> Rect;
    fn sprite(&self, look: &Look) -> Sprite;
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub lane: Lane,
    pub rect: Rect,
    pub ammo: u32,
    /// Coins picked up but not yet transferred to the economy.
    pub pending_coins: u32,
}

impl Player {
    pub fn new(ammo: u32) -> Self {
        let lane = Lane::HOME;
        Self {
            lane,
            rect: Rect::new(
                lane.x(),
                SCREEN_HEIGHT - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            ammo,
            pending_coins: 0,
        }
    }

    pub fn at_lane(&self, lane: Lane) -> Self {
        Self {
            lane,
            rect: Rect { x: lane.x(), ..self.rect },
            ..self.clone()
        }
    }
}

// ── Falling things ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub lane: Lane,
    pub rect: Rect,
    /// Mirrors the session's obstacle speed; re-applied every frame.
    pub speed: f32,
    /// Which of the four obstacle looks to draw.
    pub variant: usize,
}

impl Obstacle {
    pub fn new(lane: Lane, variant: usize, speed: f32) -> Self {
        Self {
            lane,
            rect: Rect::new(lane.x(), -OBSTACLE_HEIGHT, OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            speed,
            variant: variant % OBSTACLE_VARIANTS,
        }
    }
}

impl Entity for Obstacle {
    fn update(&mut self) {
        self.rect.y += self.speed;
    }

    fn is_expired(&self) -> bool {
        self.rect.y > SCREEN_HEIGHT
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn sprite(&self, _look: &Look) -> Sprite {
        Sprite::Obstacle { variant: self.variant }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmmoPickup {
    pub lane: Lane,
    pub rect: Rect,
    pub speed: f32,
}

impl AmmoPickup {
    pub fn new(lane: Lane, speed: f32) -> Self {
        Self {
            lane,
            rect: Rect::new(lane.x(), -AMMO_HEIGHT, AMMO_WIDTH, AMMO_HEIGHT),
            speed,
        }
    }
}

impl Entity for AmmoPickup {
    fn update(&mut self) {
        self.rect.y += self.speed;
    }

    fn is_expired(&self) -> bool {
        self.rect.y > SCREEN_HEIGHT
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn sprite(&self, look: &Look) -> Sprite {
        Sprite::AmmoPickup { colour: look.ammo }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub lane: Lane,
    pub rect: Rect,
    pub speed: f32,
    pub animation: Animation,
}

impl Coin {
    pub fn new(lane: Lane, speed: f32) -> Self {
        Self {
            lane,
            rect: Rect::new(lane.x(), -COIN_HEIGHT, COIN_WIDTH, COIN_HEIGHT),
            speed,
            animation: Animation::looping(COIN_FRAMES, COIN_FRAME_DELAY),
        }
    }
}

impl Entity for Coin {
    fn update(&mut self) {
        self.rect.y += self.speed;
        self.animation.advance();
    }

    fn is_expired(&self) -> bool {
        self.rect.y > SCREEN_HEIGHT
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn sprite(&self, _look: &Look) -> Sprite {
        Sprite::Coin { frame: self.animation.frame() }
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

/// A twin-beam laser shot travelling straight up.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub left_beam: Rect,
    pub right_beam: Rect,
    pub speed: f32,
}

impl Bullet {
    /// Fire from `origin`, the shooter's top-centre.
    pub fn new(origin: Point) -> Self {
        Self {
            left_beam: Rect::new(origin.x - BEAM_OFFSET, origin.y, BEAM_WIDTH, BEAM_HEIGHT),
            right_beam: Rect::new(origin.x + BEAM_OFFSET, origin.y, BEAM_WIDTH, BEAM_HEIGHT),
            speed: BULLET_SPEED,
        }
    }

    pub fn hits(&self, target: &Rect) -> bool {
        self.left_beam.overlaps(target) || self.right_beam.overlaps(target)
    }
}

impl Entity for Bullet {
    fn update(&mut self) {
        self.left_beam.y -= self.speed;
        self.right_beam.y -= self.speed;
    }

    fn is_expired(&self) -> bool {
        self.left_beam.y < 0.0 && self.right_beam.y < 0.0
    }

    /// Span from the outer edge of the left beam to the outer edge of the right.
    fn bounds(&self) -> Rect {
        let top = self.left_beam.y.min(self.right_beam.y);
        let bottom = self.left_beam.bottom().max(self.right_beam.bottom());
        Rect::new(
            self.left_beam.x,
            top,
            self.right_beam.right() - self.left_beam.x,
            bottom - top,
        )
    }

    fn sprite(&self, look: &Look) -> Sprite {
        Sprite::TwinBeam { colour: look.ammo }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    pub rect: Rect,
    pub animation: Animation,
    pub active: bool,
}

impl Explosion {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, EXPLOSION_SIZE, EXPLOSION_SIZE),
            animation: Animation::once(EXPLOSION_FRAMES),
            active: true,
        }
    }
}

impl Entity for Explosion {
    fn update(&mut self) {
        self.animation.advance();
        if self.animation.is_finished() {
            self.active = false;
        }
    }

    fn is_expired(&self) -> bool {
        !self.active
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn sprite(&self, _look: &Look) -> Sprite {
        Sprite::Explosion { frame: self.animation.frame() }
    }
}

// ── Events ───────────────────────────────────────────────────────────────────

/// Something the front end should react to (sound, settlement, screen change).
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Shot,
    ObstacleDestroyed { at: Point },
    ObstacleDodged,
    AmmoCollected,
    CoinCollected,
    SpeedRamped { speed: f32 },
    Crashed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Session ──────────────────────────────────────────────────────────────────

/// Everything owned by one run, rebuilt on every Play / Retry.
#[derive(Clone, Debug)]
pub struct Session {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub bullets: Vec<Bullet>,
    pub ammo_pickups: Vec<AmmoPickup>,
    pub coins: Vec<Coin>,
    pub explosions: Vec<Explosion>,
    pub score: u64,
    /// Coins collected this run (HUD counter, never settled).
    pub collected_coins: u32,
    pub difficulty: Difficulty,
    pub obstacle_speed: f32,
    pub background_speed: f32,
    /// Play time since the last speed ramp.
    pub ramp_elapsed: Duration,
    /// Vertical scroll of the gameplay backdrop, `0..SCREEN_HEIGHT`.
    pub background_offset: f32,
    /// Frames left before the player may change lane again.
    pub move_cooldown: u32,
    pub status: GameStatus,
    pub frame: u64,
    /// Events raised since the front end last drained them.
    pub events: Vec<GameEvent>,
}
