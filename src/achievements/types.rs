//! Achievement identifiers and definitions.

use serde::{Deserialize, Serialize};

use crate::core::rank::Rank;

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstTask,
    TenTasks,
    HundredTasks,
    WeekStreak,
    LevelTen,
    RankGold,
}

impl AchievementId {
    /// Stable string id, as persisted in save files.
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::FirstTask => "first_task",
            AchievementId::TenTasks => "ten_tasks",
            AchievementId::HundredTasks => "hundred_tasks",
            AchievementId::WeekStreak => "week_streak",
            AchievementId::LevelTen => "level_ten",
            AchievementId::RankGold => "rank_gold",
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// The progression snapshot achievements are judged against, taken after
/// a completion has been fully applied.
#[derive(Debug, Clone, Copy)]
pub struct ProgressSnapshot {
    pub total_completions: u64,
    pub current_streak: u32,
    pub level: u32,
    pub rank: Rank,
}
