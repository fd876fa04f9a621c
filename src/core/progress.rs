//! User progression: experience, levels, and rank points.

use serde::{Deserialize, Serialize};

use super::constants::{BASE_EXP_PER_LEVEL, EXP_STEP_PER_LEVEL, RANK_POINTS_PER_LEVEL_UP};
use super::rank::Rank;
use crate::achievements::AchievementId;

/// EXP required to advance from the given level to the next.
pub fn exp_needed_for_level(level: u32) -> u64 {
    BASE_EXP_PER_LEVEL + level.saturating_sub(1) as u64 * EXP_STEP_PER_LEVEL
}

/// A profile's progression state, persisted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    pub level: u32,
    pub experience: u64,
    pub exp_needed: u64,
    pub rank: Rank,
    pub rank_points: u32,
    /// Unlocked achievement ids in unlock order.
    pub achievements: Vec<AchievementId>,
    /// Unix timestamp of the most recent level-up.
    pub last_level_up: Option<i64>,
    pub current_season: u32,
}

impl UserProgress {
    /// Fresh progression: level 1, no EXP, Bronze, season 1.
    pub fn new() -> Self {
        UserProgress {
            level: 1,
            experience: 0,
            exp_needed: exp_needed_for_level(1),
            rank: Rank::Bronze,
            rank_points: 0,
            achievements: Vec::new(),
            last_level_up: None,
            current_season: 1,
        }
    }

    /// Adds EXP and processes level-ups.
    ///
    /// A single grant can cross several levels; leftover EXP carries into
    /// the new level. Each level-up grants bonus rank points and stamps
    /// `last_level_up`. Returns whether at least one level-up occurred.
    pub fn add_experience(&mut self, amount: u64, now: i64) -> bool {
        self.experience += amount;

        let mut leveled_up = false;
        while self.experience >= self.exp_needed {
            self.experience -= self.exp_needed;
            self.level += 1;
            self.grant_rank_points(RANK_POINTS_PER_LEVEL_UP);
            self.exp_needed = exp_needed_for_level(self.level);
            self.last_level_up = Some(now);
            leveled_up = true;
        }

        leveled_up
    }

    /// Adds rank points and refreshes the cached rank, so the rank is
    /// never stale relative to the points.
    pub fn grant_rank_points(&mut self, points: u32) {
        self.rank_points += points;
        self.rank = Rank::for_points(self.rank_points);
    }

    /// Whether an achievement is already held.
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.achievements.contains(&id)
    }

    /// Unlocks an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.achievements.push(id);
        true
    }
}

impl Default for UserProgress {
    fn default() -> Self {
        Self::new()
    }
}
