//! Consecutive-day completion streaks.

use chrono::{Days, NaiveDate};

use super::ledger::{day_key, CompletionLedger};

/// Counts consecutive days with at least one completion, walking backward
/// from `reference`.
///
/// The reference day itself counts when non-empty, so a streak of 0 means
/// nothing was completed that day. A day that is absent, or present with
/// an empty list, ends the walk. `lookback_days` bounds how far back the
/// walk can go; callers normally pass
/// [`STREAK_LOOKBACK_DAYS`](super::constants::STREAK_LOOKBACK_DAYS).
pub fn completion_streak(
    ledger: &CompletionLedger,
    reference: NaiveDate,
    lookback_days: u32,
) -> u32 {
    let mut streak = 0;
    for offset in 0..lookback_days {
        let day = match reference.checked_sub_days(Days::new(offset as u64)) {
            Some(day) => day,
            None => break,
        };
        if ledger.has_completions(&day_key(day)) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}
