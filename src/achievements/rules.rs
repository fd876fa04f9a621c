//! Unlock rules evaluated after each completion.

use super::data::ALL_ACHIEVEMENTS;
use super::types::{AchievementId, ProgressSnapshot};
use crate::core::progress::UserProgress;
use crate::core::rank::Rank;

/// Whether the snapshot satisfies an achievement's predicate.
///
/// Predicates match exactly, not at-or-above: a snapshot that jumps past
/// a milestone (say level 9 to 11 in one grant) does not unlock it.
pub fn satisfied(id: AchievementId, snapshot: &ProgressSnapshot) -> bool {
    match id {
        AchievementId::FirstTask => snapshot.total_completions == 1,
        AchievementId::TenTasks => snapshot.total_completions == 10,
        AchievementId::HundredTasks => snapshot.total_completions == 100,
        AchievementId::WeekStreak => snapshot.current_streak == 7,
        AchievementId::LevelTen => snapshot.level == 10,
        AchievementId::RankGold => snapshot.rank == Rank::Gold,
    }
}

/// Checks the rules in priority order and unlocks the first satisfied
/// achievement not already held. At most one achievement unlocks per
/// call; later candidates stay locked until a later completion
/// re-satisfies them.
pub fn evaluate(progress: &mut UserProgress, snapshot: &ProgressSnapshot) -> Option<AchievementId> {
    for def in ALL_ACHIEVEMENTS {
        if !progress.is_unlocked(def.id) && satisfied(def.id, snapshot) {
            progress.unlock(def.id);
            return Some(def.id);
        }
    }
    None
}
