//! Integration test: achievement unlocks through the engine
//!
//! Tests each achievement end to end plus the rules shaping them:
//! thresholds match exactly (crossing one in a single jump stays
//! locked), collisions resolve in priority order with at most one
//! unlock per completion, and unlocks never repeat even after an undo.

use chrono::{Days, NaiveDate};

use daily_tracker::achievements::AchievementId;
use daily_tracker::core::catalog::{Category, Difficulty};
use daily_tracker::core::engine::{add_task, complete_task, undo_task, ProgressionEvent};
use daily_tracker::core::ledger::day_key;
use daily_tracker::core::rank::Rank;
use daily_tracker::TrackerState;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Record one completion per day for `days` consecutive days ending the
/// day before `today`.
fn seed_streak_before(state: &mut TrackerState, today: NaiveDate, days: u64) {
    for offset in 1..=days {
        let day = today.checked_sub_days(Days::new(offset)).unwrap();
        state.completion_history.record(&day_key(day), 1);
    }
}

fn unlocked_events(events: &[ProgressionEvent]) -> Vec<AchievementId> {
    events
        .iter()
        .filter_map(|e| match e {
            ProgressionEvent::AchievementUnlocked(id) => Some(*id),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Completion-count achievements
// =============================================================================

#[test]
fn test_first_task_unlocks_on_the_first_completion_only() {
    let mut state = TrackerState::new();

    let events = complete_task(&mut state, 1, date("2025-03-10"), 100).unwrap();
    assert_eq!(unlocked_events(&events), vec![AchievementId::FirstTask]);

    // Second completion: total is 2, the streak is 2, nothing sits on a
    // threshold.
    let events = complete_task(&mut state, 2, date("2025-03-11"), 200).unwrap();
    assert!(unlocked_events(&events).is_empty());
    assert_eq!(state.progress.achievements, vec![AchievementId::FirstTask]);
}

#[test]
fn test_ten_tasks_unlocks_at_exactly_ten() {
    let mut state = TrackerState::new();
    // Nine completions on one far-past day. The count jumps straight
    // over the first-task threshold, which therefore never unlocks.
    for task_id in 1..=9 {
        state.completion_history.record("2025-05-01", task_id);
    }

    let events = complete_task(&mut state, 1, date("2025-06-10"), 100).unwrap();

    assert_eq!(unlocked_events(&events), vec![AchievementId::TenTasks]);
    assert!(state.progress.is_unlocked(AchievementId::TenTasks));
    assert!(
        !state.progress.is_unlocked(AchievementId::FirstTask),
        "a threshold passed in a jump stays locked"
    );
}

#[test]
fn test_hundred_tasks_unlocks_at_exactly_one_hundred() {
    let mut state = TrackerState::new();
    for n in 0..99 {
        state.completion_history.record("2025-01-01", n % 10 + 1);
    }

    let events = complete_task(&mut state, 1, date("2025-06-10"), 100).unwrap();

    assert_eq!(unlocked_events(&events), vec![AchievementId::HundredTasks]);
    assert!(!state.progress.is_unlocked(AchievementId::TenTasks));
    assert!(!state.progress.is_unlocked(AchievementId::FirstTask));
}

// =============================================================================
// Streak achievement
// =============================================================================

#[test]
fn test_week_streak_unlocks_on_the_seventh_consecutive_day() {
    let mut state = TrackerState::new();
    let today = date("2025-06-10");
    seed_streak_before(&mut state, today, 6);

    let events = complete_task(&mut state, 1, today, 100).unwrap();

    assert_eq!(unlocked_events(&events), vec![AchievementId::WeekStreak]);
}

#[test]
fn test_colliding_achievements_unlock_one_per_completion_in_order() {
    let mut state = TrackerState::new();
    let today = date("2025-06-10");
    // Six consecutive days before today, padded to nine completions so
    // today's first completion reaches total 10 and streak 7 at once.
    seed_streak_before(&mut state, today, 6);
    state.completion_history.record("2025-06-04", 2);
    state.completion_history.record("2025-06-04", 3);
    state.completion_history.record("2025-06-04", 4);

    let events = complete_task(&mut state, 1, today, 100).unwrap();
    assert_eq!(unlocked_events(&events), vec![AchievementId::TenTasks]);
    assert!(
        !state.progress.is_unlocked(AchievementId::WeekStreak),
        "the lower-priority unlock waits for the next completion"
    );

    // The streak still reads 7 and the next completion picks it up.
    let events = complete_task(&mut state, 2, today, 200).unwrap();
    assert_eq!(unlocked_events(&events), vec![AchievementId::WeekStreak]);
    assert_eq!(
        state.progress.achievements,
        vec![AchievementId::TenTasks, AchievementId::WeekStreak]
    );
}

// =============================================================================
// Level achievement
// =============================================================================

#[test]
fn test_level_ten_unlocks_when_the_level_lands_exactly_on_ten() {
    let mut state = TrackerState::new();
    // Legendary at the base-EXP ceiling: 200 * 5.0 = 1000 per day.
    add_task(&mut state, "Epic Quest", Difficulty::Legendary, 200, Category::Productivity)
        .unwrap();

    complete_task(&mut state, 11, date("2025-06-01"), 100).unwrap();
    assert_eq!(state.progress.level, 6);

    complete_task(&mut state, 11, date("2025-06-02"), 200).unwrap();
    assert_eq!(state.progress.level, 8);

    let events = complete_task(&mut state, 11, date("2025-06-03"), 300).unwrap();
    assert_eq!(state.progress.level, 10);
    assert_eq!(unlocked_events(&events), vec![AchievementId::LevelTen]);
}

#[test]
fn test_level_jump_past_ten_misses_the_level_achievement() {
    let mut state = TrackerState::new();
    state.progress.level = 9;
    state.progress.experience = 499;
    state.progress.exp_needed = 500;
    add_task(&mut state, "Epic Quest", Difficulty::Legendary, 200, Category::Productivity)
        .unwrap();

    // 499 + 1000 covers level 9 (500) and level 10 (550), landing on 11.
    let events = complete_task(&mut state, 11, date("2025-06-01"), 100).unwrap();

    assert!(events.contains(&ProgressionEvent::LevelUp {
        old_level: 9,
        new_level: 11
    }));
    assert_eq!(state.progress.level, 11);
    assert_eq!(state.progress.experience, 449);
    assert_eq!(state.progress.exp_needed, 600);
    assert!(!state.progress.is_unlocked(AchievementId::LevelTen));
    // The first completion achievement still applies.
    assert_eq!(state.progress.achievements, vec![AchievementId::FirstTask]);
}

// =============================================================================
// Rank achievement
// =============================================================================

#[test]
fn test_rank_gold_unlocks_when_the_rank_reaches_gold() {
    let mut state = TrackerState::new();
    complete_task(&mut state, 1, date("2025-06-01"), 100).unwrap();
    state.progress.grant_rank_points(240);
    assert_eq!(state.progress.rank, Rank::Silver);

    // The flat completion points tip 245 over the Gold threshold at 250.
    let events = complete_task(&mut state, 2, date("2025-06-02"), 200).unwrap();

    assert_eq!(
        events,
        vec![
            ProgressionEvent::ExpAwarded {
                task_id: 2,
                amount: 20
            },
            ProgressionEvent::RankUp {
                old_rank: Rank::Silver,
                new_rank: Rank::Gold
            },
            ProgressionEvent::AchievementUnlocked(AchievementId::RankGold),
        ]
    );
    assert_eq!(state.progress.rank, Rank::Gold);
}

#[test]
fn test_rank_past_gold_misses_the_rank_achievement() {
    let mut state = TrackerState::new();
    state.progress.grant_rank_points(500);
    assert_eq!(state.progress.rank, Rank::Platinum);

    let events = complete_task(&mut state, 1, date("2025-06-01"), 100).unwrap();

    assert_eq!(unlocked_events(&events), vec![AchievementId::FirstTask]);
    assert!(!state.progress.is_unlocked(AchievementId::RankGold));
}

// =============================================================================
// Unlocks never repeat
// =============================================================================

#[test]
fn test_redoing_an_undone_completion_does_not_unlock_again() {
    let mut state = TrackerState::new();
    let today = date("2025-06-01");

    complete_task(&mut state, 1, today, 100).unwrap();
    assert!(undo_task(&mut state, 1, today));

    // The ledger entry is gone, so the same task completes again; the
    // total is back at exactly 1 but the achievement is already held.
    let events = complete_task(&mut state, 1, today, 200).unwrap();

    assert!(unlocked_events(&events).is_empty());
    assert_eq!(state.progress.achievements, vec![AchievementId::FirstTask]);
}
