//! Raccoon Madness, a lane-based arcade runner.
//!
//! Core modules:
//! - `entities` / `animation` / `geometry`: pure data
//! - `spawner` / `collision` / `compute`: per-frame game logic
//! - `economy` / `persistence`: shop catalog, coin balance, high score
//! - `app`: the screen state machine driving one frame at a time
//! - `render` / `ui` / `display`: drawing (trait, layout, terminal backend)
//! - `audio`: looping tracks and one-shot clips

pub mod animation;
pub mod app;
pub mod audio;
pub mod collision;
pub mod compute;
pub mod config;
pub mod consts;
pub mod display;
pub mod economy;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod render;
pub mod spawner;
pub mod ui;

pub use app::{App, Screen};
pub use config::Config;
pub use economy::{Category, Economy, PurchaseOutcome};
pub use entities::{Difficulty, Session};
pub use persistence::{FileStore, PersistError, PersistenceStore};
