//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};

/// All achievement definitions, in unlock priority order.
///
/// The order is load-bearing: after each completion the rules are checked
/// top to bottom and only the first satisfied, not-yet-held achievement
/// unlocks.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstTask,
        name: "First Step",
        description: "Complete your first task",
        icon: "👣",
    },
    AchievementDef {
        id: AchievementId::TenTasks,
        name: "Growing Stronger",
        description: "Complete 10 tasks",
        icon: "💪",
    },
    AchievementDef {
        id: AchievementId::HundredTasks,
        name: "Unstoppable",
        description: "Complete 100 tasks",
        icon: "⚡",
    },
    AchievementDef {
        id: AchievementId::WeekStreak,
        name: "On Fire",
        description: "Achieve 7-day streak",
        icon: "🔥",
    },
    AchievementDef {
        id: AchievementId::LevelTen,
        name: "Rising Star",
        description: "Reach Level 10",
        icon: "⭐",
    },
    AchievementDef {
        id: AchievementId::RankGold,
        name: "Golden Champion",
        description: "Reach Gold rank",
        icon: "👑",
    },
];

/// Looks up the definition for an id.
pub fn achievement_def(id: AchievementId) -> &'static AchievementDef {
    ALL_ACHIEVEMENTS
        .iter()
        .find(|def| def.id == id)
        .unwrap_or(&ALL_ACHIEVEMENTS[0])
}
