//! The tracker's single owned state document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::TaskCatalog;
use super::constants::SAVE_FILE_VERSION;
use super::ledger::CompletionLedger;
use super::progress::UserProgress;

/// Everything the tracker persists: profile identity, progression, the
/// task catalog, and the completion history. Commands mutate this value
/// in place and the store writes it back as one document, so a command's
/// effects land on disk together or not at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    pub version: u32,
    pub profile_id: String,
    pub progress: UserProgress,
    pub daily_tasks: TaskCatalog,
    pub completion_history: CompletionLedger,
}

impl TrackerState {
    /// A fresh profile: level 1, no EXP, Bronze, the default catalog,
    /// an empty ledger, season 1.
    pub fn new() -> Self {
        TrackerState {
            version: SAVE_FILE_VERSION,
            profile_id: Uuid::new_v4().to_string(),
            progress: UserProgress::new(),
            daily_tasks: TaskCatalog::default_tasks(),
            completion_history: CompletionLedger::new(),
        }
    }
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new()
    }
}
