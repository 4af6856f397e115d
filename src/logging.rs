//! File logging.  The terminal is in raw mode and owned by the renderer, so
//! records go to a file next to the save data instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Level filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Route `log` records to `path`.  Returns an error if the file cannot be
/// opened or a logger is already installed; the game runs without logs then.
pub fn init(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}
