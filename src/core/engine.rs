//! Progression commands and the events they emit.
//!
//! Commands mutate a [`TrackerState`] in place and report what happened
//! as [`ProgressionEvent`] values, so the presentation layer can render
//! outcomes without the engine knowing about output formats. A command
//! that returns an error has not touched the state.

use chrono::NaiveDate;

use super::catalog::{Category, Difficulty, Task};
use super::constants::{RANK_POINTS_PER_COMPLETION, STREAK_LOOKBACK_DAYS};
use super::ledger::day_key;
use super::progress::UserProgress;
use super::rank::Rank;
use super::seasons::season_by_id;
use super::state::TrackerState;
use super::streak::completion_streak;
use crate::achievements::{self, AchievementId, ProgressSnapshot};
use crate::error::{Error, Result};

/// A single observable outcome of a progression command.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressionEvent {
    /// EXP granted for a completed task.
    ExpAwarded { task_id: u32, amount: u64 },

    /// The completion pushed the profile over one or more level
    /// boundaries.
    LevelUp { old_level: u32, new_level: u32 },

    /// Accumulated rank points crossed a tier threshold.
    RankUp { old_rank: Rank, new_rank: Rank },

    /// An achievement unlocked. At most one per completion.
    AchievementUnlocked(AchievementId),
}

/// Completes a task for the given day.
///
/// Records the ledger entry, grants the task's EXP (leveling as needed,
/// with bonus rank points per level-up), grants the flat completion rank
/// points, and evaluates achievements against the resulting snapshot.
/// Completing the same task twice on one day is rejected with
/// [`Error::AlreadyCompleted`].
pub fn complete_task(
    state: &mut TrackerState,
    task_id: u32,
    today: NaiveDate,
    now: i64,
) -> Result<Vec<ProgressionEvent>> {
    let task = state
        .daily_tasks
        .get(task_id)
        .ok_or(Error::NotFound(task_id))?;
    let exp_amount = task.exp_reward();

    let day = day_key(today);
    if state.completion_history.contains(&day, task_id) {
        return Err(Error::AlreadyCompleted { task_id, day });
    }

    let old_level = state.progress.level;
    let old_rank = state.progress.rank;

    state.completion_history.record(&day, task_id);
    state.progress.add_experience(exp_amount, now);
    state.progress.grant_rank_points(RANK_POINTS_PER_COMPLETION);

    let mut events = vec![ProgressionEvent::ExpAwarded {
        task_id,
        amount: exp_amount,
    }];
    if state.progress.level > old_level {
        events.push(ProgressionEvent::LevelUp {
            old_level,
            new_level: state.progress.level,
        });
    }
    if state.progress.rank > old_rank {
        events.push(ProgressionEvent::RankUp {
            old_rank,
            new_rank: state.progress.rank,
        });
    }

    let snapshot = ProgressSnapshot {
        total_completions: state.completion_history.total_completions(),
        current_streak: completion_streak(&state.completion_history, today, STREAK_LOOKBACK_DAYS),
        level: state.progress.level,
        rank: state.progress.rank,
    };
    if let Some(id) = achievements::evaluate(&mut state.progress, &snapshot) {
        events.push(ProgressionEvent::AchievementUnlocked(id));
    }

    Ok(events)
}

/// Removes the first occurrence of a completion for the given day.
///
/// Returns whether an entry was removed; an unknown id or an empty day is
/// a silent no-op. Earned EXP, rank points, and achievements stay; undo
/// edits the ledger only. The day key survives even when its list
/// empties, and such a day is a streak gap.
pub fn undo_task(state: &mut TrackerState, task_id: u32, day: NaiveDate) -> bool {
    state.completion_history.remove(&day_key(day), task_id)
}

/// Adds a task to the catalog. The new task takes the next id above the
/// current maximum.
pub fn add_task(
    state: &mut TrackerState,
    name: &str,
    difficulty: Difficulty,
    base_exp: u64,
    category: Category,
) -> Result<Task> {
    state.daily_tasks.add(name, difficulty, base_exp, category)
}

/// Removes a task from the catalog, returning it. Ledger history
/// referencing the id is kept.
pub fn delete_task(state: &mut TrackerState, task_id: u32) -> Result<Task> {
    state.daily_tasks.remove(task_id)
}

/// Resets the whole profile to the seed state: level 1, no EXP, Bronze,
/// the default catalog, an empty ledger, season 1. The profile id
/// survives. Applying this twice equals applying it once.
pub fn reset_progress(state: &mut TrackerState) {
    let profile_id = state.profile_id.clone();
    *state = TrackerState::new();
    state.profile_id = profile_id;
}

/// Starts a season: progression and history reset, the catalog survives.
///
/// Level, EXP, rank, rank points, achievements, and the ledger are
/// cleared; `last_level_up` is kept as a historical marker. An id not in
/// the season calendar is rejected.
pub fn start_season(state: &mut TrackerState, season_id: u32) -> Result<()> {
    if season_by_id(season_id).is_none() {
        return Err(Error::InvalidInput(format!("unknown season {}", season_id)));
    }

    let last_level_up = state.progress.last_level_up;
    state.progress = UserProgress::new();
    state.progress.last_level_up = last_level_up;
    state.progress.current_season = season_id;
    state.completion_history.clear();
    Ok(())
}
