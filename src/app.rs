//! Screen state machine.
//!
//! `App` is the application context: it outlives play sessions and owns the
//! economy, the high score, the chosen difficulty and the collaborators.  A
//! `Session` is the per-run context, rebuilt on every Play / Retry.
//!
//! Transitions (all by button click unless noted):
//!
//! | From              | Event               | To        |
//! |-------------------|---------------------|-----------|
//! | Home              | Play                | Playing   |
//! | Home              | Level               | Home (difficulty cycles) |
//! | Home              | Shop/Story/Controls | Store/Story/Controls |
//! | Home              | Quit                | (stop)    |
//! | Store/Story/Controls | Go Back          | Home      |
//! | Playing           | crash (simulation)  | GameOver  |
//! | GameOver          | Retry               | Playing   |
//! | GameOver          | Home                | Home      |

use std::io;
use std::mem;
use std::time::Duration;

use log::{error, info};
use rand::Rng;

use crate::audio::{AudioPlayer, Clip, Jukebox, Track};
use crate::compute::{init_session, player_shoot, steer, tick};
use crate::consts::{MENU_SCROLL_SPEED, SCREEN_WIDTH};
use crate::economy::Economy;
use crate::entities::{Difficulty, GameEvent, GameStatus, Session};
use crate::geometry::Point;
use crate::input::{InputEvent, Key, KeyAction, KeyTracker};
use crate::persistence::{PersistError, PersistenceStore};
use crate::render::{Look, Renderer};
use crate::ui::{self, GameOverButton, HomeButton};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Store,
    Story,
    Controls,
    Playing,
    GameOver,
}

impl Screen {
    /// The looping track that belongs to this screen.
    pub fn track(self) -> Track {
        match self {
            Screen::Home | Screen::Store | Screen::Story | Screen::Controls => Track::Home,
            Screen::Playing => Track::Gameplay,
            Screen::GameOver => Track::GameOver,
        }
    }
}

pub struct App<S: PersistenceStore, A: AudioPlayer> {
    screen: Screen,
    difficulty: Difficulty,
    economy: Economy,
    high_score: u64,
    session: Option<Session>,
    store: S,
    audio: Jukebox<A>,
    keys: KeyTracker,
    pointer: Point,
    /// Horizontal drift of the menu backdrop, `0..SCREEN_WIDTH`.
    menu_scroll: f32,
    running: bool,
}

impl<S: PersistenceStore, A: AudioPlayer> App<S, A> {
    /// Load persisted state and open on the home screen.  A malformed
    /// economy document is an error; a missing one is created.
    pub fn new(mut store: S, audio: A) -> Result<Self, PersistError> {
        let economy = store.load_economy()?;
        let high_score = store.load_high_score();
        let mut audio = Jukebox::new(audio);
        audio.switch_to(Track::Home);
        info!("ready: balance {}, high score {high_score}", economy.balance);

        Ok(Self {
            screen: Screen::Home,
            difficulty: Difficulty::default(),
            economy,
            high_score,
            session: None,
            store,
            audio,
            keys: KeyTracker::new(),
            pointer: Point::default(),
            menu_scroll: 0.0,
            running: true,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &Jukebox<A> {
        &self.audio
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn look(&self) -> Look {
        Look {
            skin: self.economy.skins.equipped_index(),
            ammo: self.economy.ammo_colours.equipped_index(),
        }
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                info!("quit requested");
                self.running = false;
            }
            InputEvent::PointerMoved(p) => self.pointer = p,
            InputEvent::Click(p) => {
                self.pointer = p;
                self.click(p);
            }
            InputEvent::Key { key, action } => {
                self.keys.record(key, action);
                if self.screen == Screen::Playing && key == Key::Space && action == KeyAction::Press {
                    if let Some(session) = self.session.as_mut() {
                        *session = player_shoot(session);
                    }
                }
            }
        }
    }

    fn click(&mut self, p: Point) {
        match self.screen {
            Screen::Home => match ui::home_hit(p) {
                Some(HomeButton::Play) => self.start_run(),
                Some(HomeButton::Level) => {
                    self.difficulty = self.difficulty.next();
                    info!("difficulty set to {}", self.difficulty.label());
                }
                Some(HomeButton::Shop) => self.go_to(Screen::Store),
                Some(HomeButton::Story) => self.go_to(Screen::Story),
                Some(HomeButton::Controls) => self.go_to(Screen::Controls),
                Some(HomeButton::Quit) => {
                    info!("quit from home");
                    self.running = false;
                }
                None => {}
            },
            Screen::Store => {
                if let Some((category, index)) = ui::shop_hit(&self.economy, p) {
                    self.economy.purchase_or_equip(category, index);
                    self.persist_economy();
                }
                if ui::GO_BACK.contains(p) {
                    self.go_to(Screen::Home);
                }
            }
            Screen::Story | Screen::Controls => {
                if ui::GO_BACK.contains(p) {
                    self.go_to(Screen::Home);
                }
            }
            Screen::Playing => {}
            Screen::GameOver => match ui::game_over_hit(p) {
                Some(GameOverButton::Retry) => {
                    self.finish_run();
                    self.start_run();
                }
                Some(GameOverButton::Home) => {
                    self.finish_run();
                    self.session = None;
                    self.go_to(Screen::Home);
                }
                None => {}
            },
        }
    }

    // ── Transitions ──────────────────────────────────────────────────────────

    fn go_to(&mut self, screen: Screen) {
        info!("screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        self.audio.switch_to(screen.track());
    }

    /// Fresh session: empty playfield, score 0, difficulty ammo and speed.
    fn start_run(&mut self) {
        self.session = Some(init_session(self.difficulty));
        self.keys.clear();
        self.go_to(Screen::Playing);
    }

    /// Run-end bookkeeping shared by Retry and Home.
    fn finish_run(&mut self) {
        self.settle_pending_coins();
        let score = self.session.as_ref().map_or(0, |s| s.score);
        // The cached best is authoritative; only this process writes the file.
        if score > self.high_score {
            info!("new high score {score} (was {})", self.high_score);
            self.high_score = score;
            if let Err(e) = self.store.save_high_score(score) {
                error!("failed to save high score: {e}");
            }
        }
    }

    /// Move the player's pending coins into the economy and persist.  The
    /// pending counter is zeroed in the same step, so calling this again
    /// transfers nothing.
    fn settle_pending_coins(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let amount = mem::take(&mut session.player.pending_coins);
        if amount == 0 {
            return;
        }
        self.economy.settle_pending_coins(amount);
        info!("settled {amount} coins, balance {}", self.economy.balance);
        self.persist_economy();
    }

    fn persist_economy(&mut self) {
        if let Err(e) = self.store.save_economy(&self.economy) {
            error!("failed to save economy: {e}");
        }
    }

    // ── Frame ────────────────────────────────────────────────────────────────

    /// Advance the active screen by one frame of `dt` wall-clock time.
    pub fn update(&mut self, dt: Duration, rng: &mut impl Rng) {
        match self.screen {
            Screen::Home | Screen::Store | Screen::Story | Screen::Controls => {
                self.menu_scroll = (self.menu_scroll + MENU_SCROLL_SPEED) % SCREEN_WIDTH;
            }
            Screen::Playing => self.update_playing(dt, rng),
            Screen::GameOver => {}
        }
        self.keys.begin_frame();
    }

    fn update_playing(&mut self, dt: Duration, rng: &mut impl Rng) {
        let left = self.keys.is_held(Key::Left);
        let right = self.keys.is_held(Key::Right);
        let Some(session) = self.session.as_mut() else {
            return;
        };

        *session = steer(session, left, right);
        *session = tick(session, dt, rng);
        let events = mem::take(&mut session.events);
        let crashed = session.status == GameStatus::GameOver;

        for event in events {
            match event {
                GameEvent::Shot => self.audio.play_once(Clip::Laser),
                GameEvent::ObstacleDestroyed { .. } => self.audio.play_once(Clip::Explosion),
                GameEvent::AmmoCollected => self.audio.play_once(Clip::Ammo),
                GameEvent::CoinCollected => self.audio.play_once(Clip::Coin),
                GameEvent::ObstacleDodged | GameEvent::SpeedRamped { .. } | GameEvent::Crashed => {}
            }
        }
        self.settle_pending_coins();

        if crashed {
            self.audio.stop();
            self.go_to(Screen::GameOver);
        }
    }

    pub fn render<R: Renderer>(&self, r: &mut R) -> io::Result<()> {
        r.clear()?;
        let look = self.look();
        match (self.screen, self.session.as_ref()) {
            (Screen::Home, _) => ui::draw_home(
                r,
                self.menu_scroll,
                self.high_score,
                self.difficulty,
                self.pointer,
            )?,
            (Screen::Store, _) => ui::draw_store(r, self.menu_scroll, &self.economy, self.pointer)?,
            (Screen::Story, _) => ui::draw_story(r, self.menu_scroll, self.pointer)?,
            (Screen::Controls, _) => ui::draw_controls(r, self.menu_scroll, &look, self.pointer)?,
            (Screen::Playing, Some(session)) => ui::draw_playfield(r, session, &look)?,
            (Screen::GameOver, Some(session)) => {
                ui::draw_game_over(r, session, &look, self.pointer)?
            }
            (Screen::Playing | Screen::GameOver, None) => {}
        }
        r.present()
    }
}
