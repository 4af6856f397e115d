//! Sound collaborator.
//!
//! The game only says which looping track belongs to the current screen and
//! which one-shot clip to fire; playback is fire-and-forget.

use log::debug;

/// Background music, one per screen context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// Home, store, story and controls.
    Home,
    Gameplay,
    GameOver,
}

impl Track {
    pub fn asset(self) -> &'static str {
        match self {
            Track::Home => "sounds/Home_page_background.mp3",
            Track::Gameplay => "sounds/Gameplay_page_background.mp3",
            Track::GameOver => "sounds/Gameover_page_background.mp3",
        }
    }
}

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    Laser,
    Explosion,
    Coin,
    Ammo,
}

impl Clip {
    pub fn asset(self) -> &'static str {
        match self {
            Clip::Laser => "sounds/Laser_shoot_sound.wav",
            Clip::Explosion => "sounds/Explosion_sound.wav",
            Clip::Coin => "sounds/Coin_pickup_sound.wav",
            Clip::Ammo => "sounds/Ammo_pickup_sound.flac",
        }
    }
}

pub trait AudioPlayer {
    fn play_looping(&mut self, track: Track);
    fn stop(&mut self);
    fn play_once(&mut self, clip: Clip);
}

/// Keeps at most one looping track active and skips restarting the track
/// that is already playing.
#[derive(Debug)]
pub struct Jukebox<A: AudioPlayer> {
    player: A,
    current: Option<Track>,
}

impl<A: AudioPlayer> Jukebox<A> {
    pub fn new(player: A) -> Self {
        Self {
            player,
            current: None,
        }
    }

    pub fn current(&self) -> Option<Track> {
        self.current
    }

    /// Switch the looping track, stopping whatever was playing.
    pub fn switch_to(&mut self, track: Track) {
        if self.current == Some(track) {
            return;
        }
        if self.current.is_some() {
            self.player.stop();
        }
        self.player.play_looping(track);
        self.current = Some(track);
    }

    pub fn stop(&mut self) {
        if self.current.take().is_some() {
            self.player.stop();
        }
    }

    pub fn play_once(&mut self, clip: Clip) {
        self.player.play_once(clip);
    }

    pub fn player(&self) -> &A {
        &self.player
    }
}

/// Backend without an output device: every command goes to the log.
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioPlayer for LogAudio {
    fn play_looping(&mut self, track: Track) {
        debug!("audio: loop {}", track.asset());
    }

    fn stop(&mut self) {
        debug!("audio: stop");
    }

    fn play_once(&mut self, clip: Clip) {
        debug!("audio: play {}", clip.asset());
    }
}
