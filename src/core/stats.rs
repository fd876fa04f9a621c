//! Read-only statistics over the tracker state.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use super::catalog::Category;
use super::constants::STREAK_LOOKBACK_DAYS;
use super::ledger::day_key;
use super::rank::Rank;
use super::state::TrackerState;
use super::streak::completion_streak;

/// Aggregates for display. Historic ledger entries whose task ids no
/// longer resolve in the catalog are skipped, never an error.
#[derive(Debug, Clone)]
pub struct TrackerStats {
    pub total_completions: u64,
    pub active_days: usize,
    pub average_per_active_day: f64,
    pub current_streak: u32,
    /// Lifetime completion counts per task id, most completed first.
    pub per_task: Vec<(u32, u64)>,
    /// Lifetime completion counts per category, most completed first.
    pub per_category: Vec<(Category, u64)>,
    /// Task ids completed on the reference day.
    pub today_completed: Vec<u32>,
    /// Share of the catalog completed on the reference day, 0.0 to 1.0.
    pub completion_rate_today: f64,
    pub exp_earned_today: u64,
    /// The next rank and the points still missing, or None at the top.
    pub points_to_next_rank: Option<(Rank, u32)>,
}

impl TrackerStats {
    /// Collects statistics with `today` as the reference day.
    pub fn collect(state: &TrackerState, today: NaiveDate) -> TrackerStats {
        let ledger = &state.completion_history;

        let total_completions = ledger.total_completions();
        let active_days = ledger.active_days();
        let average_per_active_day = if active_days == 0 {
            0.0
        } else {
            total_completions as f64 / active_days as f64
        };

        let mut task_counts: BTreeMap<u32, u64> = BTreeMap::new();
        for (_, ids) in ledger.iter() {
            for id in ids {
                if state.daily_tasks.get(*id).is_some() {
                    *task_counts.entry(*id).or_insert(0) += 1;
                }
            }
        }
        let mut per_task: Vec<(u32, u64)> = task_counts.into_iter().collect();
        per_task.sort_by(|a, b| b.1.cmp(&a.1));

        let mut per_category: Vec<(Category, u64)> = Vec::new();
        for category in Category::ALL {
            let count: u64 = per_task
                .iter()
                .filter(|(id, _)| {
                    state.daily_tasks.get(*id).map(|task| task.category) == Some(category)
                })
                .map(|(_, count)| count)
                .sum();
            if count > 0 {
                per_category.push((category, count));
            }
        }
        per_category.sort_by(|a, b| b.1.cmp(&a.1));

        let today_completed: Vec<u32> = ledger.completed_on(&day_key(today)).to_vec();
        let completion_rate_today = if state.daily_tasks.is_empty() {
            0.0
        } else {
            today_completed.len() as f64 / state.daily_tasks.len() as f64
        };
        // Historic saves may carry duplicate ids on one day; EXP counts
        // each task once.
        let mut unique_today = today_completed.clone();
        unique_today.sort_unstable();
        unique_today.dedup();
        let exp_earned_today: u64 = unique_today
            .iter()
            .filter_map(|id| state.daily_tasks.get(*id))
            .map(|task| task.exp_reward())
            .sum();

        let points_to_next_rank = Rank::next_tier(state.progress.rank_points)
            .map(|tier| (tier.rank, tier.min_points - state.progress.rank_points));

        TrackerStats {
            total_completions,
            active_days,
            average_per_active_day,
            current_streak: completion_streak(ledger, today, STREAK_LOOKBACK_DAYS),
            per_task,
            per_category,
            today_completed,
            completion_rate_today,
            exp_earned_today,
            points_to_next_rank,
        }
    }
}

/// Completion counts for the last `days` days ending at `today`, oldest
/// first.
pub fn daily_activity(
    state: &TrackerState,
    today: NaiveDate,
    days: u32,
) -> Vec<(NaiveDate, usize)> {
    let mut series = Vec::new();
    for offset in (0..days).rev() {
        if let Some(day) = today.checked_sub_days(Days::new(offset as u64)) {
            let count = state.completion_history.completed_on(&day_key(day)).len();
            series.push((day, count));
        }
    }
    series
}
