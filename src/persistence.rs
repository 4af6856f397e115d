//! Economy document and high-score persistence.
//!
//! The economy is a pretty-printed JSON document; the high score is a bare
//! integer in a text file.  A missing economy document is materialised from
//! the default catalog, a missing or unreadable high score reads as 0.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::economy::{Catalog, CatalogError, Category, CosmeticItem, Economy};

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed economy document {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),
}

/// On-disk shape of the economy document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyDocument {
    pub skins: Vec<CosmeticItem>,
    pub ammo_colours: Vec<CosmeticItem>,
    pub player_coins: u32,
}

impl From<&Economy> for EconomyDocument {
    fn from(economy: &Economy) -> Self {
        Self {
            skins: economy.skins.items().to_vec(),
            ammo_colours: economy.ammo_colours.items().to_vec(),
            player_coins: economy.balance,
        }
    }
}

impl TryFrom<EconomyDocument> for Economy {
    type Error = CatalogError;

    fn try_from(doc: EconomyDocument) -> Result<Self, Self::Error> {
        Ok(Economy::new(
            Catalog::new(Category::Skin, doc.skins)?,
            Catalog::new(Category::AmmoColour, doc.ammo_colours)?,
            doc.player_coins,
        ))
    }
}

pub trait PersistenceStore {
    /// Load the shop state, creating the default catalog on first run.
    fn load_economy(&mut self) -> Result<Economy, PersistError>;

    /// Write the full catalog and balance snapshot.
    fn save_economy(&mut self, economy: &Economy) -> Result<(), PersistError>;

    /// Stored high score, or 0 if there is none or it cannot be read.
    fn load_high_score(&mut self) -> u64;

    fn save_high_score(&mut self, score: u64) -> Result<(), PersistError>;
}

// ── File-backed store ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FileStore {
    economy_path: PathBuf,
    high_score_path: PathBuf,
}

impl FileStore {
    pub fn new(economy_path: impl Into<PathBuf>, high_score_path: impl Into<PathBuf>) -> Self {
        Self {
            economy_path: economy_path.into(),
            high_score_path: high_score_path.into(),
        }
    }

    pub fn economy_path(&self) -> &Path {
        &self.economy_path
    }

    pub fn high_score_path(&self) -> &Path {
        &self.high_score_path
    }

    fn write(path: &Path, contents: &str) -> Result<(), PersistError> {
        let io_err = |source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, contents).map_err(io_err)
    }
}

impl PersistenceStore for FileStore {
    fn load_economy(&mut self) -> Result<Economy, PersistError> {
        let json = match fs::read_to_string(&self.economy_path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "no economy document at {}, creating defaults",
                    self.economy_path.display()
                );
                let economy = Economy::default();
                self.save_economy(&economy)?;
                return Ok(economy);
            }
            Err(source) => {
                return Err(PersistError::Io {
                    path: self.economy_path.clone(),
                    source,
                })
            }
        };

        let doc: EconomyDocument =
            serde_json::from_str(&json).map_err(|source| PersistError::Malformed {
                path: self.economy_path.clone(),
                source,
            })?;
        let economy = Economy::try_from(doc)?;
        info!("loaded economy, balance {}", economy.balance);
        Ok(economy)
    }

    fn save_economy(&mut self, economy: &Economy) -> Result<(), PersistError> {
        let doc = EconomyDocument::from(economy);
        let json = serde_json::to_string_pretty(&doc).map_err(|source| {
            PersistError::Malformed {
                path: self.economy_path.clone(),
                source,
            }
        })?;
        Self::write(&self.economy_path, &json)
    }

    fn load_high_score(&mut self) -> u64 {
        match fs::read_to_string(&self.high_score_path) {
            Ok(text) => text.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "high score file {} is not a number, using 0",
                    self.high_score_path.display()
                );
                0
            }),
            Err(_) => 0,
        }
    }

    fn save_high_score(&mut self, score: u64) -> Result<(), PersistError> {
        Self::write(&self.high_score_path, &score.to_string())
    }
}

// ── In-memory store ──────────────────────────────────────────────────────────

/// Keeps everything in memory.  Counts writes so callers can check that each
/// mutation was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub economy: Option<Economy>,
    pub high_score: Option<u64>,
    pub economy_saves: usize,
    pub high_score_saves: usize,
}

impl PersistenceStore for MemoryStore {
    fn load_economy(&mut self) -> Result<Economy, PersistError> {
        if let Some(economy) = &self.economy {
            return Ok(economy.clone());
        }
        let economy = Economy::default();
        self.save_economy(&economy)?;
        Ok(economy)
    }

    fn save_economy(&mut self, economy: &Economy) -> Result<(), PersistError> {
        self.economy = Some(economy.clone());
        self.economy_saves += 1;
        Ok(())
    }

    fn load_high_score(&mut self) -> u64 {
        self.high_score.unwrap_or(0)
    }

    fn save_high_score(&mut self, score: u64) -> Result<(), PersistError> {
        self.high_score = Some(score);
        self.high_score_saves += 1;
        Ok(())
    }
}
