//! Loads and saves the tracker state as a single JSON document.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::core::constants::SAVE_FILE_NAME;
use crate::core::state::TrackerState;

/// File-backed store under `~/.daily-tracker/`. The whole state is
/// written as one pretty-printed document on every save, so a command's
/// effects persist together.
pub struct TrackerStore {
    data_dir: PathBuf,
}

impl TrackerStore {
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;

        Self::with_data_dir(home_dir.join(".daily-tracker"))
    }

    /// Store rooted at an explicit directory instead of the home
    /// directory default.
    pub fn with_data_dir(data_dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn save_path(&self) -> PathBuf {
        self.data_dir.join(SAVE_FILE_NAME)
    }

    /// Writes the state to disk, replacing any previous save.
    pub fn save(&self, state: &TrackerState) -> io::Result<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.save_path(), json)?;
        Ok(())
    }

    /// Reads the saved state back.
    pub fn load(&self) -> io::Result<TrackerState> {
        let json = fs::read_to_string(self.save_path())?;
        let state = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(state)
    }

    /// Loads the saved state, or seeds a fresh profile when no save
    /// exists yet. A corrupted save surfaces as an error rather than
    /// being overwritten.
    pub fn load_or_seed(&self) -> io::Result<TrackerState> {
        if self.save_path().exists() {
            self.load()
        } else {
            Ok(TrackerState::new())
        }
    }
}
