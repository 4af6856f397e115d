//! Where the game keeps its files.

use std::env;
use std::path::PathBuf;

use crate::persistence::FileStore;

pub const DATA_DIR_VAR: &str = "RACCOON_MADNESS_DIR";
pub const ECONOMY_FILE: &str = "game_data.json";
pub const HIGH_SCORE_FILE: &str = "highest_score.txt";
pub const LOG_FILE: &str = "raccoon_madness.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub economy_path: PathBuf,
    pub high_score_path: PathBuf,
    pub log_path: PathBuf,
}

impl Config {
    /// All files live directly under `data_dir`.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            economy_path: data_dir.join(ECONOMY_FILE),
            high_score_path: data_dir.join(HIGH_SCORE_FILE),
            log_path: data_dir.join(LOG_FILE),
            data_dir,
        }
    }

    /// `$RACCOON_MADNESS_DIR`, else `$HOME/.raccoon_madness`, else the
    /// working directory.
    pub fn from_env() -> Self {
        Self::resolve(env::var_os(DATA_DIR_VAR), env::var_os("HOME"))
    }

    pub fn resolve(explicit: Option<impl Into<PathBuf>>, home: Option<impl Into<PathBuf>>) -> Self {
        let dir = match (explicit, home) {
            (Some(dir), _) => dir.into(),
            (None, Some(home)) => home.into().join(".raccoon_madness"),
            (None, None) => PathBuf::from("."),
        };
        Self::in_dir(dir)
    }

    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.economy_path, &self.high_score_path)
    }
}
